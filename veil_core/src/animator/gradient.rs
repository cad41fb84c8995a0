// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient shimmer driven by native-style infinite repeat.

use crate::shield::{GradientFill, ShieldId, ShieldStore};
use crate::time::Timestamp;
use crate::timing::{Animation, Easing, Fill, Repeat, Track};

use super::config::GradientConfig;

/// Sweeps a diagonal two-stop gradient from `[from, to]` toward `[to, from]`
/// on an indefinite cycle.
///
/// One animation is scheduled per shield; the cycle is the timing model's
/// [`Repeat::Forever`], never a manual re-trigger. Each period snaps back to
/// the initial stop order, which reads as a continuous shimmer sliding
/// across the shield.
#[derive(Clone, Copy, Debug, Default)]
pub struct GradientAnimator {
    config: GradientConfig,
}

impl GradientAnimator {
    /// Creates the strategy with the given configuration.
    #[must_use]
    pub const fn new(config: GradientConfig) -> Self {
        Self { config }
    }

    /// Installs the gradient fill on `shield` and schedules its sweep.
    pub fn add_animation(&self, store: &mut ShieldStore, shield: ShieldId, now: Timestamp) {
        let from = self.config.from;
        let to = self.config.to;

        store.set_gradient(shield, Some(GradientFill::diagonal([from, to], 1.0)));
        store.set_animation(
            shield,
            Some(Animation {
                track: Track::GradientStops {
                    from: [from, to],
                    to: [to, from],
                },
                start: now,
                duration: self.config.duration,
                easing: Easing::Linear,
                repeat: Repeat::Forever,
                fill: Fill::Hold,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use crate::color::Rgba;
    use crate::shield::ViewRef;
    use crate::time::Span;

    use super::*;

    #[test]
    fn add_animation_installs_fill_and_schedules_once() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 100.0, 20.0));

        let animator = GradientAnimator::default();
        animator.add_animation(&mut store, id, Timestamp(0));

        let fill = store.gradient(id).unwrap();
        assert_eq!(fill.stops, [Rgba::GRAY, Rgba::LIGHT_GRAY]);
        assert!((fill.opacity - 1.0).abs() < 1e-6);

        let anim = store.animation(id).unwrap();
        assert_eq!(anim.repeat, Repeat::Forever);
        assert_eq!(anim.easing, Easing::Linear);
        assert_eq!(anim.duration, Span::from_millis(600));
        match anim.track {
            Track::GradientStops { from, to } => {
                assert_eq!(from, [Rgba::GRAY, Rgba::LIGHT_GRAY]);
                assert_eq!(to, [Rgba::LIGHT_GRAY, Rgba::GRAY]);
            }
            Track::BackgroundColor { .. } => panic!("gradient strategy animates stops"),
        }
    }

    #[test]
    fn re_adding_replaces_the_scheduled_animation() {
        let mut store = ShieldStore::new();
        let id = store.create_shield(ViewRef(1), Rect::new(0.0, 0.0, 100.0, 20.0));

        let animator = GradientAnimator::default();
        animator.add_animation(&mut store, id, Timestamp(0));
        animator.add_animation(&mut store, id, Timestamp(500));

        // Still a single slot, restarted at the later time.
        assert_eq!(store.animation(id).unwrap().start, Timestamp(500));
    }
}
