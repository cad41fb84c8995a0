// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays shield storage with allocation, lifecycle, and property
//! management.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::color::Rgba;
use crate::dirty;
use crate::timing::Animation;

use super::id::{ShieldId, ViewRef};
use super::shape::ShieldShape;

/// A two-stop linear gradient drawn across a shield's frame.
///
/// `start` and `end` are in unit coordinates relative to the frame, matching
/// the convention of platform gradient layers: `(0, 0)` is the top-left
/// corner, `(1, 1)` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientFill {
    /// The rendered gradient stops, start color first.
    pub stops: [Rgba; 2],
    /// Unit-coordinate start point of the gradient axis.
    pub start: Point,
    /// Unit-coordinate end point of the gradient axis.
    pub end: Point,
    /// Opacity of the gradient as a whole, `0.0..=1.0`.
    pub opacity: f32,
}

impl GradientFill {
    /// Creates a gradient running diagonally from the top-left to the
    /// bottom-right corner.
    #[must_use]
    pub fn diagonal(stops: [Rgba; 2], opacity: f32) -> Self {
        Self {
            stops,
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            opacity,
        }
    }
}

/// Struct-of-arrays storage for all shields.
///
/// Shields are addressed by [`ShieldId`] handles. Internally, each shield
/// occupies a slot in parallel arrays. Destroyed shields are recycled via a
/// free list, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct ShieldStore {
    // -- Shield properties (set by callers) --
    pub(crate) origin: Vec<ViewRef>,
    pub(crate) frame: Vec<Rect>,
    pub(crate) color: Vec<Rgba>,
    pub(crate) gradient: Vec<Option<GradientFill>>,
    pub(crate) shape: Vec<ShieldShape>,
    pub(crate) attached: Vec<bool>,
    pub(crate) animation: Vec<Option<Animation>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_attached: Vec<u32>,
    pub(crate) pending_detached: Vec<u32>,
}

impl Default for ShieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShieldStore {
    /// Creates an empty shield store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Vec::new(),
            frame: Vec::new(),
            color: Vec::new(),
            gradient: Vec::new(),
            shape: Vec::new(),
            attached: Vec::new(),
            animation: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_attached: Vec::new(),
            pending_detached: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new shield covering `origin` and returns its handle.
    ///
    /// The shield starts detached, light gray, rectangular, with no gradient
    /// and no animation. `frame` should be the origin view's bounds at the
    /// time of the call; it is never updated afterwards.
    pub fn create_shield(&mut self, origin: ViewRef, frame: Rect) -> ShieldId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.origin[idx as usize] = origin;
            self.frame[idx as usize] = frame;
            self.color[idx as usize] = Rgba::LIGHT_GRAY;
            self.gradient[idx as usize] = None;
            self.shape[idx as usize] = ShieldShape::Rect;
            self.attached[idx as usize] = false;
            self.animation[idx as usize] = None;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.origin.push(origin);
            self.frame.push(frame);
            self.color.push(Rgba::LIGHT_GRAY);
            self.gradient.push(None);
            self.shape.push(ShieldShape::Rect);
            self.attached.push(false);
            self.animation.push(None);
            self.generation.push(0);
            idx
        };

        ShieldId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a shield, freeing its slot for reuse.
    ///
    /// A still-attached shield is detached first so the presenter gets a
    /// detach event on the next evaluate.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_shield(&mut self, id: ShieldId) {
        self.validate(id);
        let idx = id.idx;

        // Remove dirty tracking state.
        self.dirty.remove_key(idx);

        if self.attached[idx as usize] {
            self.attached[idx as usize] = false;
            self.pending_detached.push(idx);
            self.dirty.mark(idx, dirty::LIFECYCLE);
        }
        self.animation[idx as usize] = None;

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }

    /// Returns whether the given handle refers to a live shield.
    #[must_use]
    pub fn is_alive(&self, id: ShieldId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns handles for all live shields, in slot order.
    #[must_use]
    pub fn ids(&self) -> Vec<ShieldId> {
        let mut ids = Vec::new();
        for idx in 0..self.len {
            if !self.free_list.contains(&idx) {
                ids.push(ShieldId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        ids
    }

    // -- Lifecycle API --

    /// Mounts the shield in the host tree as the topmost child of its origin
    /// view.
    ///
    /// Attaching an already-attached shield is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn attach(&mut self, id: ShieldId) {
        self.validate(id);
        if self.attached[id.idx as usize] {
            return;
        }
        self.attached[id.idx as usize] = true;
        self.pending_attached.push(id.idx);
        self.dirty.mark(id.idx, dirty::LIFECYCLE);
    }

    /// Unmounts the shield from the host tree.
    ///
    /// The shield itself stays alive — any animation driving it keeps
    /// sampling, invisibly, until the store is dropped or the shield is
    /// destroyed. Detaching a detached shield is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn detach(&mut self, id: ShieldId) {
        self.validate(id);
        if !self.attached[id.idx as usize] {
            return;
        }
        self.attached[id.idx as usize] = false;
        self.pending_detached.push(id.idx);
        self.dirty.mark(id.idx, dirty::LIFECYCLE);
    }

    /// Returns whether the shield is currently attached.
    #[must_use]
    pub fn is_attached(&self, id: ShieldId) -> bool {
        self.validate(id);
        self.attached[id.idx as usize]
    }

    /// Returns the number of currently attached shields.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.iter().filter(|&&a| a).count()
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the origin view reference of a shield.
    #[must_use]
    pub fn origin(&self, id: ShieldId) -> ViewRef {
        self.validate(id);
        self.origin[id.idx as usize]
    }

    /// Returns the frame of a shield.
    #[must_use]
    pub fn frame(&self, id: ShieldId) -> Rect {
        self.validate(id);
        self.frame[id.idx as usize]
    }

    /// Returns the background color of a shield.
    #[must_use]
    pub fn color(&self, id: ShieldId) -> Rgba {
        self.validate(id);
        self.color[id.idx as usize]
    }

    /// Returns the gradient fill of a shield, if any.
    #[must_use]
    pub fn gradient(&self, id: ShieldId) -> Option<GradientFill> {
        self.validate(id);
        self.gradient[id.idx as usize]
    }

    /// Returns the outline shape of a shield.
    #[must_use]
    pub fn shape(&self, id: ShieldId) -> ShieldShape {
        self.validate(id);
        self.shape[id.idx as usize]
    }

    /// Returns the scheduled animation of a shield, if any.
    #[must_use]
    pub fn animation(&self, id: ShieldId) -> Option<Animation> {
        self.validate(id);
        self.animation[id.idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the background color of a shield.
    pub fn set_color(&mut self, id: ShieldId, color: Rgba) {
        self.validate(id);
        self.color[id.idx as usize] = color;
        self.dirty.mark(id.idx, dirty::COLOR);
    }

    /// Installs or removes the gradient fill of a shield.
    pub fn set_gradient(&mut self, id: ShieldId, gradient: Option<GradientFill>) {
        self.validate(id);
        self.gradient[id.idx as usize] = gradient;
        self.dirty.mark(id.idx, dirty::GRADIENT);
    }

    /// Rewrites the rendered stops of an installed gradient fill.
    ///
    /// A no-op when the shield has no gradient fill.
    pub fn set_gradient_stops(&mut self, id: ShieldId, stops: [Rgba; 2]) {
        self.validate(id);
        if let Some(fill) = self.gradient[id.idx as usize].as_mut() {
            fill.stops = stops;
            self.dirty.mark(id.idx, dirty::GRADIENT);
        }
    }

    /// Sets the outline shape of a shield.
    pub fn set_shape(&mut self, id: ShieldId, shape: ShieldShape) {
        self.validate(id);
        self.shape[id.idx as usize] = shape;
        self.dirty.mark(id.idx, dirty::SHAPE);
    }

    /// Replaces the scheduled animation of a shield.
    ///
    /// Scheduling is not itself a presented property, so no dirty channel is
    /// marked; the animation's effects surface through the color and
    /// gradient setters as it is sampled.
    pub fn set_animation(&mut self, id: ShieldId, animation: Option<Animation>) {
        self.validate(id);
        self.animation[id.idx as usize] = animation;
    }

    // -- Raw-index accessors for backends --
    //
    // These accept raw slot indices (as found in `OverlayChanges`) rather
    // than `ShieldId` handles, skipping generation validation. Only use with
    // indices that came from `OverlayChanges`.

    /// Returns the origin view reference at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn origin_at(&self, idx: u32) -> ViewRef {
        self.check_slot(idx);
        self.origin[idx as usize]
    }

    /// Returns the frame at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn frame_at(&self, idx: u32) -> Rect {
        self.check_slot(idx);
        self.frame[idx as usize]
    }

    /// Returns the background color at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn color_at(&self, idx: u32) -> Rgba {
        self.check_slot(idx);
        self.color[idx as usize]
    }

    /// Returns the gradient fill at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn gradient_at(&self, idx: u32) -> Option<GradientFill> {
        self.check_slot(idx);
        self.gradient[idx as usize]
    }

    /// Returns the outline shape at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn shape_at(&self, idx: u32) -> ShieldShape {
        self.check_slot(idx);
        self.shape[idx as usize]
    }

    /// Returns whether the shield at raw slot `idx` is attached.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn attached_at(&self, idx: u32) -> bool {
        self.check_slot(idx);
        self.attached[idx as usize]
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: ShieldId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale ShieldId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Panics if the raw slot index is out of range.
    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }
}
