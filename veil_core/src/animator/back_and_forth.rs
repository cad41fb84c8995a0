// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Back-and-forth gradient oscillation driven by completion re-arming.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::color::Rgba;
use crate::shield::{GradientFill, ShieldId, ShieldStore, ViewRef};
use crate::time::Timestamp;
use crate::timing::{Animation, Easing, Fill, Progress, Repeat, Track};

use super::config::GradientConfig;
use super::lerp_stops;

/// Opacity of the oscillating gradient fill, so the shield's base color
/// shows through.
const FILL_OPACITY: f32 = 0.4;

/// Oscillates a diagonal gradient between `[from, to]` and `[to, from]`
/// without infinite repeat: each leg is a [`Repeat::Once`] animation, and
/// its completion re-arms the next leg in the opposite direction.
///
/// This is an explicit two-state machine. `current` indexes the stop pair
/// the in-flight leg is animating toward; completing a leg first writes the
/// target pair as the rendered stops (so static state matches what was just
/// animated to — the reason infinite repeat cannot be used here), then
/// toggles and re-arms. The oscillation never stops on its own; it goes
/// invisible when the shields it drives are detached and dies with the
/// store.
///
/// All member shields share one index and one in-flight leg, so a whole
/// batch shimmers in lockstep. Each entry point advances the machine by
/// exactly one step, so registering several shields in one batch toggles
/// the starting direction once per shield — matching the behavior this
/// strategy was distilled from. A shield joining mid-leg simply adopts the
/// shared leg. Members that have been destroyed are skipped at sampling
/// time; members that are merely detached keep being sampled, invisibly.
#[derive(Clone, Debug)]
pub struct BackAndForthAnimator {
    config: GradientConfig,
    /// The two stop pairs the oscillation moves between.
    pairs: [[Rgba; 2]; 2],
    /// Index of the pair the in-flight leg animates toward.
    current: usize,
    /// The in-flight leg, if the machine has started.
    leg: Option<Animation>,
    /// Shields driven by the shared oscillation.
    members: Vec<ShieldId>,
    /// Total steps taken since construction.
    steps: u64,
}

impl BackAndForthAnimator {
    /// Creates the strategy with the given configuration.
    #[must_use]
    pub fn new(config: GradientConfig) -> Self {
        Self {
            config,
            pairs: [[config.from, config.to], [config.to, config.from]],
            current: 0,
            leg: None,
            members: Vec::new(),
            steps: 0,
        }
    }

    /// Installs the oscillating fill on `shield`, joins it to the shared
    /// machine, and steps once.
    pub fn add_animation(&mut self, store: &mut ShieldStore, shield: ShieldId, now: Timestamp) {
        self.install_fill(store, shield);
        self.members.push(shield);
        self.step(now);
    }

    /// Builds a fresh, unattached shield carrying the oscillating fill, for
    /// the caller to place, and steps once.
    ///
    /// The alternate entry point to [`add_animation`](Self::add_animation):
    /// instead of decorating an existing shield, the caller gets a new one
    /// sized to `frame` and attaches it (via
    /// [`ShieldStore::attach`]) wherever it likes.
    pub fn animated_shield(
        &mut self,
        store: &mut ShieldStore,
        origin: ViewRef,
        frame: Rect,
        now: Timestamp,
    ) -> ShieldId {
        let shield = store.create_shield(origin, frame);
        self.install_fill(store, shield);
        self.members.push(shield);
        self.step(now);
        shield
    }

    /// Samples the in-flight leg onto every live member and, when the leg
    /// has run its duration, performs the completion transition: sync the
    /// rendered stops to the leg's target, then re-arm in the opposite
    /// direction.
    pub(crate) fn tick(&mut self, store: &mut ShieldStore, now: Timestamp) {
        let Some(leg) = self.leg else {
            return;
        };

        if let Track::GradientStops { from, to } = leg.track {
            let stops = lerp_stops(from, to, leg.progress(now).phase());
            for &shield in &self.members {
                if store.is_alive(shield) {
                    store.set_gradient_stops(shield, stops);
                }
            }
        }

        if leg.is_complete(now) {
            // The animation-did-stop transition: make the static stops match
            // the value just animated to, then immediately start the next leg.
            let target = self.pairs[self.current];
            for &shield in &self.members {
                if store.is_alive(shield) {
                    store.set_gradient_stops(shield, target);
                }
            }
            self.step(now);
        }
    }

    /// Index of the stop pair the in-flight leg animates toward.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total steps taken since construction.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The shields joined to the shared oscillation.
    #[must_use]
    pub fn members(&self) -> &[ShieldId] {
        &self.members
    }

    fn install_fill(&self, store: &mut ShieldStore, shield: ShieldId) {
        store.set_gradient(
            shield,
            Some(GradientFill::diagonal(self.pairs[self.current], FILL_OPACITY)),
        );
    }

    /// Toggles the direction and replaces the in-flight leg.
    fn step(&mut self, now: Timestamp) {
        self.current = 1 - self.current;
        self.leg = Some(Animation {
            track: Track::GradientStops {
                from: self.pairs[1 - self.current],
                to: self.pairs[self.current],
            },
            start: now,
            duration: self.config.duration,
            easing: Easing::Linear,
            repeat: Repeat::Once,
            fill: Fill::Hold,
        });
        self.steps += 1;
    }

    /// Sampled phase of the in-flight leg, for diagnostics.
    #[must_use]
    pub fn leg_progress(&self, now: Timestamp) -> Option<Progress> {
        self.leg.map(|leg| leg.progress(now))
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgba;
    use crate::time::Span;

    use super::*;

    fn red_blue(duration_ms: u64) -> BackAndForthAnimator {
        BackAndForthAnimator::new(GradientConfig::new(
            Span::from_millis(duration_ms),
            Rgba::RED,
            Rgba::BLUE,
        ))
    }

    fn stops(store: &ShieldStore, id: ShieldId) -> [Rgba; 2] {
        store.gradient(id).unwrap().stops
    }

    #[test]
    fn starts_at_index_zero_and_first_step_targets_pair_one() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut animator = red_blue(100);
        assert_eq!(animator.current_index(), 0);
        assert_eq!(animator.steps(), 0);

        animator.add_animation(&mut store, id, Timestamp(0));
        assert_eq!(animator.current_index(), 1, "first step toggles to 1");
        assert_eq!(animator.steps(), 1);

        // Fill was installed before the step, so it renders pair 0.
        let fill = store.gradient(id).unwrap();
        assert_eq!(fill.stops, [Rgba::RED, Rgba::BLUE]);
        assert!((fill.opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn completion_syncs_stops_and_re_arms() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut animator = red_blue(100);
        animator.add_animation(&mut store, id, Timestamp(0));

        // First leg completes: rendered stops = pairs[1] = [blue, red].
        animator.tick(&mut store, Timestamp(0) + Span::from_millis(100));
        assert_eq!(stops(&store, id), [Rgba::BLUE, Rgba::RED]);
        assert_eq!(animator.current_index(), 0, "completion re-armed toward 0");
        assert_eq!(animator.steps(), 2);

        // Second leg completes: rendered stops = pairs[0] = [red, blue].
        animator.tick(&mut store, Timestamp(0) + Span::from_millis(200));
        assert_eq!(stops(&store, id), [Rgba::RED, Rgba::BLUE]);
        assert_eq!(animator.current_index(), 1);
        assert_eq!(animator.steps(), 3);
    }

    #[test]
    fn oscillation_never_starves() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut animator = red_blue(100);
        animator.add_animation(&mut store, id, Timestamp(0));

        // Every completion arms a successor leg.
        let mut now = Timestamp(0);
        for k in 1..=20 {
            now = now + Span::from_millis(100);
            animator.tick(&mut store, now);
            assert_eq!(animator.steps(), k + 1, "completion {k} armed a new leg");
            assert!(animator.leg_progress(now).is_some());
        }
    }

    #[test]
    fn mid_leg_sampling_interpolates_toward_the_target() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut animator = red_blue(100);
        animator.add_animation(&mut store, id, Timestamp(0));

        animator.tick(&mut store, Timestamp(0) + Span::from_millis(50));
        let [first, second] = stops(&store, id);
        // Halfway from [red, blue] toward [blue, red].
        assert!((first.r - 0.5).abs() < 1e-6 && (first.b - 0.5).abs() < 1e-6);
        assert!((second.r - 0.5).abs() < 1e-6 && (second.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn members_oscillate_in_lockstep() {
        let mut store = ShieldStore::new();
        let a = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = store.create_shield(ViewRef(2), Rect::new(0.0, 0.0, 80.0, 20.0));

        let mut animator = red_blue(100);
        animator.add_animation(&mut store, a, Timestamp(0));
        animator.add_animation(&mut store, b, Timestamp(0));
        // Two registrations, two steps: the machine is two toggles in.
        assert_eq!(animator.steps(), 2);
        assert_eq!(animator.current_index(), 0);

        animator.tick(&mut store, Timestamp(0) + Span::from_millis(100));
        assert_eq!(stops(&store, a), stops(&store, b), "shared leg, same stops");
    }

    #[test]
    fn destroyed_member_is_skipped_without_error() {
        let mut store = ShieldStore::new();
        let a = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = store.create_shield(ViewRef(2), Rect::new(0.0, 0.0, 50.0, 50.0));

        let mut animator = red_blue(100);
        animator.add_animation(&mut store, a, Timestamp(0));
        animator.add_animation(&mut store, b, Timestamp(0));

        store.destroy_shield(a);

        // The late completion still lands on the survivor.
        animator.tick(&mut store, Timestamp(0) + Span::from_millis(100));
        assert_eq!(stops(&store, b), [Rgba::RED, Rgba::BLUE]);
        assert_eq!(animator.steps(), 3);
    }

    #[test]
    fn animated_shield_builds_an_unattached_shield_and_steps_once() {
        let mut store = ShieldStore::new();
        let mut animator = red_blue(100);

        let frame = Rect::new(4.0, 4.0, 68.0, 68.0);
        let id = animator.animated_shield(&mut store, ViewRef(9), frame, Timestamp(0));

        assert!(!store.is_attached(id));
        assert_eq!(store.frame(id), frame);
        assert!(store.gradient(id).is_some());
        assert_eq!(animator.steps(), 1, "alternate entry steps exactly once");
        assert_eq!(animator.members(), &[id]);
    }

    #[test]
    fn tick_before_any_registration_is_a_noop() {
        let mut store = ShieldStore::new();
        let mut animator = red_blue(100);
        animator.tick(&mut store, Timestamp(1_000_000));
        assert_eq!(animator.steps(), 0);
    }
}
