// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable presenter doubles, scripted clocks, and shimmer metrics for
//! veil demos and tests.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use veil_core::backend::Presenter;
use veil_core::color::Rgba;
use veil_core::shield::{GradientFill, OverlayChanges, ShieldShape, ShieldStore, ViewRef};
use veil_core::time::{Span, Timestamp};

/// The mirrored state of one mounted shield, as a platform backend would
/// hold it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeShield {
    /// The host view the shield covers.
    pub origin: ViewRef,
    /// The shield's frame.
    pub frame: kurbo::Rect,
    /// Current background color.
    pub color: Rgba,
    /// Current gradient fill, if any.
    pub gradient: Option<GradientFill>,
    /// Current outline shape.
    pub shape: ShieldShape,
}

/// An in-memory native-tree mirror.
///
/// Applies [`OverlayChanges`] the way a platform presenter would: detach
/// removes the mirrored view, attach creates it from the store's current
/// state, and property changes restyle it — skipping slots that are not
/// mounted, per the backend contract.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    slots: Vec<Option<NativeShield>>,
    attach_count: u64,
    detach_count: u64,
}

impl RecordingPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mirrored shield at `idx`, if mounted.
    #[must_use]
    pub fn shield(&self, idx: u32) -> Option<&NativeShield> {
        self.slots.get(idx as usize).and_then(|slot| slot.as_ref())
    }

    /// Returns the number of currently mounted shields.
    #[must_use]
    pub fn mounted(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total attach operations applied.
    #[must_use]
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }

    /// Total detach operations applied.
    #[must_use]
    pub fn detach_count(&self) -> u64 {
        self.detach_count
    }

    fn take(&mut self, idx: u32) -> Option<NativeShield> {
        self.slots.get_mut(idx as usize)?.take()
    }

    fn put(&mut self, idx: u32, shield: NativeShield) {
        let slot = idx as usize;
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(shield);
    }
}

impl Presenter for RecordingPresenter {
    fn apply(&mut self, store: &ShieldStore, changes: &OverlayChanges) {
        // 1. Removals
        for &idx in &changes.detached {
            if self.take(idx).is_some() {
                self.detach_count += 1;
            }
        }

        // 2. Additions
        for &idx in &changes.attached {
            self.put(
                idx,
                NativeShield {
                    origin: store.origin_at(idx),
                    frame: store.frame_at(idx),
                    color: store.color_at(idx),
                    gradient: store.gradient_at(idx),
                    shape: store.shape_at(idx),
                },
            );
            self.attach_count += 1;
        }

        // 3. Colors
        for &idx in &changes.colors {
            if let Some(shield) = self.slots.get_mut(idx as usize).and_then(Option::as_mut) {
                shield.color = store.color_at(idx);
            }
        }

        // 4. Gradients
        for &idx in &changes.gradients {
            if let Some(shield) = self.slots.get_mut(idx as usize).and_then(Option::as_mut) {
                shield.gradient = store.gradient_at(idx);
            }
        }

        // 5. Shapes
        for &idx in &changes.shapes {
            if let Some(shield) = self.slots.get_mut(idx as usize).and_then(Option::as_mut) {
                shield.shape = store.shape_at(idx);
            }
        }
    }
}

/// A deterministic clock stepping a fixed interval per frame.
#[derive(Clone, Copy, Debug)]
pub struct StepClock {
    now: Timestamp,
    interval: Span,
}

impl StepClock {
    /// Creates a clock starting at `start`, advancing by `interval` per
    /// frame.
    #[must_use]
    pub const fn new(start: Timestamp, interval: Span) -> Self {
        Self {
            now: start,
            interval,
        }
    }

    /// The current time.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }

    /// Advances one frame and returns the new time.
    pub fn advance(&mut self) -> Timestamp {
        self.now = self.now + self.interval;
        self.now
    }
}

/// Rolling oscillation metrics with fixed-size period history.
///
/// Feed each completed back-and-forth step via
/// [`observe_step`](Self::observe_step); the tracker keeps the last `N`
/// inter-step periods for cadence checks and HUD sparklines.
#[derive(Debug)]
pub struct ShimmerTracker<const N: usize> {
    periods_ms: [f64; N],
    cursor: usize,
    last_step: Option<Timestamp>,
    total_steps: u64,
}

impl<const N: usize> Default for ShimmerTracker<N> {
    fn default() -> Self {
        Self::new(600.0)
    }
}

impl<const N: usize> ShimmerTracker<N> {
    /// Creates a tracker with `seed_period_ms` prefilled in the ring buffer.
    #[must_use]
    pub const fn new(seed_period_ms: f64) -> Self {
        Self {
            periods_ms: [seed_period_ms; N],
            cursor: 0,
            last_step: None,
            total_steps: 0,
        }
    }

    /// Observes one oscillation step at the given time.
    pub fn observe_step(&mut self, at: Timestamp) {
        self.total_steps = self.total_steps.saturating_add(1);
        if let Some(last) = self.last_step {
            let period_ms = at.saturating_since(last).nanos() as f64 / 1e6;
            self.periods_ms[self.cursor % N] = period_ms;
            self.cursor = (self.cursor + 1) % N;
        }
        self.last_step = Some(at);
    }

    /// Total steps observed.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Mean of the ring-buffer periods in milliseconds.
    #[must_use]
    pub fn mean_period_ms(&self) -> f64 {
        let sum: f64 = self.periods_ms.iter().sum();
        sum / N as f64
    }

    /// Returns ring-buffer periods oldest→newest.
    #[must_use]
    pub fn periods_ms(&self) -> [f64; N] {
        let mut out = [0.0; N];
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            out[i] = self.periods_ms[idx];
            i += 1;
        }
        out
    }

    /// Returns an ASCII sparkline over [`periods_ms`](Self::periods_ms).
    #[must_use]
    pub fn sparkline_ascii(&self, min_ms: f64, max_ms: f64) -> String {
        const LEVELS: &[u8] = b" .:-=+*#%@";
        let mut out = String::with_capacity(N);
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            let v = self.periods_ms[idx].clamp(min_ms, max_ms);
            let t = (v - min_ms) / (max_ms - min_ms);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "index is clamped to ASCII level count"
            )]
            let level = (t * (LEVELS.len() as f64 - 1.0) + 0.5) as usize;
            out.push(LEVELS[level] as char);
            i += 1;
        }
        out
    }
}
