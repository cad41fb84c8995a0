// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change evaluation.
//!
//! Evaluation follows a drain pattern: each dirty channel is drained into
//! the matching list of [`OverlayChanges`], and the lifecycle pending lists
//! are moved out wholesale. There is nothing to recompute — shields are a
//! flat set with no inherited properties — so evaluation is pure change
//! collection.
//!
//! [`OverlayChanges`] uses raw slot indices (`u32`) rather than [`ShieldId`]
//! handles so that backends can index directly into the store's SoA arrays
//! via the `*_at()` accessors (e.g.
//! [`color_at`](super::ShieldStore::color_at)) without paying for generation
//! checks on every access. A slot listed in one tick's changes may already
//! be recycled by the time a later tick runs; presenters therefore keep
//! their own slot-indexed mirrors and skip indices they do not hold.
//!
//! [`ShieldId`]: super::ShieldId

use alloc::vec::Vec;

use super::store::ShieldStore;
use crate::dirty;

/// The set of changes produced by a single [`ShieldStore::evaluate`] call.
///
/// Each field contains the raw slot indices of shields that changed in the
/// corresponding category. Backends use these to apply incremental updates.
#[derive(Clone, Debug, Default)]
pub struct OverlayChanges {
    /// Shields attached to their origin views since the last evaluate.
    pub attached: Vec<u32>,
    /// Shields detached from their origin views since the last evaluate.
    pub detached: Vec<u32>,
    /// Shields whose background color changed.
    pub colors: Vec<u32>,
    /// Shields whose gradient fill was installed, removed, or re-stopped.
    pub gradients: Vec<u32>,
    /// Shields whose outline shape changed.
    pub shapes: Vec<u32>,
}

impl OverlayChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.attached.clear();
        self.detached.clear();
        self.colors.clear();
        self.gradients.clear();
        self.shapes.clear();
    }

    /// Returns whether every change list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
            && self.detached.is_empty()
            && self.colors.is_empty()
            && self.gradients.is_empty()
            && self.shapes.is_empty()
    }
}

impl ShieldStore {
    /// Evaluates the store, returning the set of changes since the last
    /// evaluate.
    pub fn evaluate(&mut self) -> OverlayChanges {
        let mut changes = OverlayChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut OverlayChanges) {
        changes.clear();

        changes.colors = self
            .dirty
            .drain(dirty::COLOR)
            .deterministic()
            .run()
            .collect();

        changes.gradients = self
            .dirty
            .drain(dirty::GRADIENT)
            .deterministic()
            .run()
            .collect();

        changes.shapes = self
            .dirty
            .drain(dirty::SHAPE)
            .deterministic()
            .run()
            .collect();

        // Drain LIFECYCLE (just consume; the pending lists carry the data).
        let _: Vec<u32> = self
            .dirty
            .drain(dirty::LIFECYCLE)
            .deterministic()
            .run()
            .collect();

        core::mem::swap(&mut self.pending_attached, &mut changes.attached);
        core::mem::swap(&mut self.pending_detached, &mut changes.detached);
    }
}
