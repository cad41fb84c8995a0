// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the overlay loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that a
//! host's loading flow calls at each stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! The events cover the overlay's externally visible lifecycle: shields
//! registered, per-frame ticks and the change sets they produce,
//! back-and-forth oscillation steps, and removal.

use crate::shield::OverlayChanges;
use crate::time::Timestamp;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a batch of views is registered for covering.
#[derive(Clone, Copy, Debug)]
pub struct RegisterEvent {
    /// Number of shields created by the batch.
    pub shields: u32,
    /// Host time of the registration.
    pub timestamp: Timestamp,
}

/// Emitted when the overlay's shields are removed.
#[derive(Clone, Copy, Debug)]
pub struct RemoveEvent {
    /// Number of shields detached.
    pub shields: u32,
    /// Host time of the removal.
    pub timestamp: Timestamp,
}

/// Emitted when a host frame tick reaches the overlay.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Monotonically increasing tick counter, kept by the host.
    pub tick_index: u64,
    /// Host time delivered to [`Overlay::tick`](crate::overlay::Overlay::tick).
    pub now: Timestamp,
}

/// Emitted after a tick, summarizing the change set it produced.
#[derive(Clone, Copy, Debug)]
pub struct ChangesEvent {
    /// Tick counter this summary belongs to.
    pub tick_index: u64,
    /// Shields attached this tick.
    pub attached: u32,
    /// Shields detached this tick.
    pub detached: u32,
    /// Background-color changes this tick.
    pub colors: u32,
    /// Gradient changes this tick.
    pub gradients: u32,
    /// Shape changes this tick.
    pub shapes: u32,
}

impl ChangesEvent {
    /// Summarizes an [`OverlayChanges`] for the given tick.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "change lists are bounded by the u32 slot space"
    )]
    pub fn new(tick_index: u64, changes: &OverlayChanges) -> Self {
        Self {
            tick_index,
            attached: changes.attached.len() as u32,
            detached: changes.detached.len() as u32,
            colors: changes.colors.len() as u32,
            gradients: changes.gradients.len() as u32,
            shapes: changes.shapes.len() as u32,
        }
    }
}

/// Emitted when a back-and-forth oscillation arms a new leg.
#[derive(Clone, Copy, Debug)]
pub struct StepEvent {
    /// Total steps taken by the strategy, including this one.
    pub step: u64,
    /// Index of the stop pair the new leg animates toward.
    pub target: usize,
    /// Host time the leg was armed.
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the overlay loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a batch of views is registered.
    fn on_register(&mut self, e: &RegisterEvent) {
        _ = e;
    }

    /// Called when a host frame tick reaches the overlay.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called with the change-set summary a tick produced.
    fn on_changes(&mut self, e: &ChangesEvent) {
        _ = e;
    }

    /// Called when a back-and-forth oscillation arms a new leg.
    fn on_step(&mut self, e: &StepEvent) {
        _ = e;
    }

    /// Called when the overlay's shields are removed.
    fn on_remove(&mut self, e: &RemoveEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RegisterEvent`].
    #[inline]
    pub fn register(&mut self, e: &RegisterEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_register(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ChangesEvent`].
    #[inline]
    pub fn changes(&mut self, e: &ChangesEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_changes(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StepEvent`].
    #[inline]
    pub fn step(&mut self, e: &StepEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_step(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RemoveEvent`].
    #[inline]
    pub fn remove(&mut self, e: &RemoveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_remove(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
