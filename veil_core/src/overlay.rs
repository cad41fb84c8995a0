// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay manager.
//!
//! [`Overlay`] owns a [`ShieldStore`] and one [`Animator`], chosen at
//! construction. The host's loading flow is three calls:
//!
//! 1. [`register`](Overlay::register) the views to cover when loading
//!    begins — one shield per view, sized to the view's bounds, animated
//!    immediately.
//! 2. [`tick`](Overlay::tick) once per host frame with the current time;
//!    apply the returned [`OverlayChanges`] with a
//!    [`Presenter`](crate::backend::Presenter).
//! 3. [`remove`](Overlay::remove) when the real content arrives.
//!
//! Removal only detaches: nothing cancels the animations, they just stop
//! being visible. The whole apparatus is dropped with the overlay.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::animator::Animator;
use crate::color::Rgba;
use crate::shield::{OverlayChanges, ShieldId, ShieldShape, ShieldStore, ViewRef};
use crate::time::Timestamp;

/// A host view to cover: its reference, bounds, and the shield shape that
/// matches its silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// The host view to cover.
    pub view: ViewRef,
    /// The view's bounds at registration time.
    pub bounds: Rect,
    /// The shield outline; defaults to the full rectangle.
    pub shape: ShieldShape,
}

impl Target {
    /// Creates a rectangular target.
    #[must_use]
    pub fn new(view: ViewRef, bounds: Rect) -> Self {
        Self {
            view,
            bounds,
            shape: ShieldShape::Rect,
        }
    }

    /// Sets the shield shape.
    #[must_use]
    pub fn with_shape(mut self, shape: ShieldShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Base appearance of freshly created shields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShieldStyle {
    /// Background color of each shield.
    pub color: Rgba,
}

impl Default for ShieldStyle {
    fn default() -> Self {
        Self {
            color: Rgba::LIGHT_GRAY,
        }
    }
}

/// Covers registered host views with animated shields until removed.
#[derive(Debug, Default)]
pub struct Overlay {
    shields: ShieldStore,
    animator: Animator,
    style: ShieldStyle,
}

impl Overlay {
    /// Creates an overlay with the default gradient strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an overlay with an explicit strategy.
    ///
    /// The strategy is fixed for the overlay's lifetime.
    #[must_use]
    pub fn with_animator(animator: Animator) -> Self {
        Self {
            shields: ShieldStore::new(),
            animator,
            style: ShieldStyle::default(),
        }
    }

    /// Sets the base appearance for shields created by subsequent
    /// registrations.
    pub fn set_style(&mut self, style: ShieldStyle) {
        self.style = style;
    }

    /// Covers each target with a fresh shield and starts its animation.
    ///
    /// Shields are created and attached first, then animated in a second
    /// pass, so a batch always starts shimmering from a consistent state.
    /// An empty iterator is a no-op. Nothing deduplicates: registering the
    /// same view twice double-covers it.
    pub fn register<I>(&mut self, targets: I, now: Timestamp)
    where
        I: IntoIterator<Item = Target>,
    {
        let mut created: Vec<ShieldId> = Vec::new();
        for target in targets {
            let shield = self.shields.create_shield(target.view, target.bounds);
            self.shields.set_color(shield, self.style.color);
            self.shields.set_shape(shield, target.shape);
            self.shields.attach(shield);
            created.push(shield);
        }
        for shield in created {
            self.animator.add_animation(&mut self.shields, shield, now);
        }
    }

    /// Detaches every shield.
    ///
    /// Animations are not cancelled — detached shields keep being sampled,
    /// invisibly, which is harmless and matches the no-explicit-cancel
    /// contract. Calling this with nothing attached (including calling it
    /// twice) is a no-op.
    pub fn remove(&mut self) {
        for shield in self.shields.ids() {
            self.shields.detach(shield);
        }
    }

    /// Advances animations to `now` and returns the changes to present.
    pub fn tick(&mut self, now: Timestamp) -> OverlayChanges {
        self.animator.tick(&mut self.shields, now);
        self.shields.evaluate()
    }

    /// Like [`tick`](Self::tick), but reuses a caller-provided buffer.
    pub fn tick_into(&mut self, now: Timestamp, changes: &mut OverlayChanges) {
        self.animator.tick(&mut self.shields, now);
        self.shields.evaluate_into(changes);
    }

    /// The shield store, for presenters and diagnostics.
    #[must_use]
    pub fn shields(&self) -> &ShieldStore {
        &self.shields
    }

    /// The active strategy.
    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}

#[cfg(test)]
mod tests {
    use crate::animator::{BackAndForthAnimator, GradientConfig};
    use crate::backend::Presenter;
    use crate::time::Span;

    use super::*;

    fn targets() -> [Target; 2] {
        [
            Target::new(ViewRef(1), Rect::new(16.0, 16.0, 112.0, 112.0))
                .with_shape(ShieldShape::Circle),
            Target::new(ViewRef(2), Rect::new(16.0, 130.0, 216.0, 150.0)),
        ]
    }

    #[test]
    fn register_creates_one_attached_shield_per_target() {
        let mut overlay = Overlay::new();
        overlay.register(targets(), Timestamp(0));

        let changes = overlay.tick(Timestamp(0));
        assert_eq!(changes.attached.len(), 2);
        assert_eq!(overlay.shields().attached_count(), 2);

        for (idx, target) in changes.attached.iter().zip(targets()) {
            assert_eq!(overlay.shields().frame_at(*idx), target.bounds);
            assert_eq!(overlay.shields().origin_at(*idx), target.view);
            assert_eq!(overlay.shields().shape_at(*idx), target.shape);
        }
    }

    #[test]
    fn register_empty_is_a_noop() {
        let mut overlay = Overlay::new();
        overlay.register([], Timestamp(0));
        let changes = overlay.tick(Timestamp(0));
        assert!(changes.is_empty());
    }

    #[test]
    fn duplicate_registration_double_covers() {
        let mut overlay = Overlay::new();
        let t = Target::new(ViewRef(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        overlay.register([t, t], Timestamp(0));
        assert_eq!(overlay.shields().attached_count(), 2);
    }

    #[test]
    fn remove_detaches_everything_exactly_once() {
        let mut overlay = Overlay::new();
        overlay.register(targets(), Timestamp(0));
        let _ = overlay.tick(Timestamp(0));

        overlay.remove();
        let changes = overlay.tick(Timestamp(1));
        assert_eq!(changes.detached.len(), 2);
        assert_eq!(overlay.shields().attached_count(), 0);

        // Second remove: nothing left to detach.
        overlay.remove();
        let changes = overlay.tick(Timestamp(2));
        assert!(changes.detached.is_empty());
    }

    #[test]
    fn remove_before_register_is_a_noop() {
        let mut overlay = Overlay::new();
        overlay.remove();
        let changes = overlay.tick(Timestamp(0));
        assert!(changes.is_empty());
    }

    #[test]
    fn style_color_is_applied_to_new_shields() {
        let mut overlay = Overlay::new();
        overlay.set_style(ShieldStyle { color: Rgba::BLUE });
        overlay.register([Target::new(ViewRef(1), Rect::new(0.0, 0.0, 10.0, 10.0))], Timestamp(0));

        let changes = overlay.tick(Timestamp(0));
        assert_eq!(overlay.shields().color_at(changes.attached[0]), Rgba::BLUE);
    }

    #[test]
    fn animations_keep_running_after_remove() {
        let config = GradientConfig::new(Span::from_millis(100), Rgba::RED, Rgba::BLUE);
        let mut overlay =
            Overlay::with_animator(Animator::BackAndForth(BackAndForthAnimator::new(config)));
        overlay.register(
            [Target::new(ViewRef(1), Rect::new(0.0, 0.0, 10.0, 10.0))],
            Timestamp(0),
        );
        let _ = overlay.tick(Timestamp(0));

        overlay.remove();
        let _ = overlay.tick(Timestamp(1));

        // Ticking across a leg boundary still steps the machine; the effect
        // is just invisible.
        let changes = overlay.tick(Timestamp(0) + Span::from_millis(100));
        assert!(changes.gradients.len() == 1, "detached shield still sampled");
        let Animator::BackAndForth(b) = overlay.animator() else {
            panic!("strategy is fixed at construction");
        };
        assert_eq!(b.steps(), 2);
    }

    /// A minimal presenter double: mirrors attach/detach into a set of
    /// native slots the way a platform backend would.
    #[derive(Default)]
    struct CountingPresenter {
        mounted: Vec<u32>,
    }

    impl Presenter for CountingPresenter {
        fn apply(&mut self, _store: &ShieldStore, changes: &OverlayChanges) {
            for &idx in &changes.detached {
                self.mounted.retain(|&m| m != idx);
            }
            for &idx in &changes.attached {
                self.mounted.push(idx);
            }
        }
    }

    #[test]
    fn register_then_remove_round_trips_through_a_presenter() {
        let mut overlay = Overlay::new();
        let mut presenter = CountingPresenter::default();

        overlay.register(targets(), Timestamp(0));
        let changes = overlay.tick(Timestamp(0));
        presenter.apply(overlay.shields(), &changes);
        assert_eq!(presenter.mounted.len(), 2);

        overlay.remove();
        let changes = overlay.tick(Timestamp(1));
        presenter.apply(overlay.shields(), &changes);
        assert!(presenter.mounted.is_empty());
    }
}
