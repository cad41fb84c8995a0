// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer animation strategies.
//!
//! An [`Animator`] decides how shields move while they cover content. The
//! set is closed — a tagged enum rather than trait objects — so dispatch is
//! static and each variant's state machine stays explicit:
//!
//! - [`Animator::Gradient`] — diagonal gradient sweep on an indefinite
//!   cycle ([`Repeat::Forever`](crate::timing::Repeat::Forever)); the
//!   default.
//! - [`Animator::Blink`] — eased background-color pulse, also cycled by the
//!   timing model.
//! - [`Animator::BackAndForth`] — gradient oscillation with *no* native
//!   repeat: each leg is a one-shot animation whose completion re-arms the
//!   next, and every shield driven by the instance shares one leg.
//!
//! Strategies schedule work in two places. Per-shield animations live in
//! the store's animation slots and are sampled generically each tick;
//! BackAndForth keeps its shared leg in the strategy itself and handles its
//! own completions.

mod back_and_forth;
mod blink;
mod config;
mod gradient;

pub use back_and_forth::BackAndForthAnimator;
pub use blink::BlinkAnimator;
pub use config::{BlinkConfig, GradientConfig};
pub use gradient::GradientAnimator;

use crate::color::Rgba;
use crate::shield::{ShieldId, ShieldStore};
use crate::time::Timestamp;
use crate::timing::Track;

/// A layer animation strategy, fixed per overlay at construction.
#[derive(Clone, Debug)]
pub enum Animator {
    /// Gradient sweep, cycled by the timing model.
    Gradient(GradientAnimator),
    /// Background-color pulse, cycled by the timing model.
    Blink(BlinkAnimator),
    /// Completion-driven gradient oscillation.
    BackAndForth(BackAndForthAnimator),
}

impl Default for Animator {
    fn default() -> Self {
        Self::Gradient(GradientAnimator::default())
    }
}

impl Animator {
    /// Starts the strategy's animation on `shield`.
    pub fn add_animation(&mut self, store: &mut ShieldStore, shield: ShieldId, now: Timestamp) {
        match self {
            Self::Gradient(g) => g.add_animation(store, shield, now),
            Self::Blink(b) => b.add_animation(store, shield, now),
            Self::BackAndForth(b) => b.add_animation(store, shield, now),
        }
    }

    /// Advances all animation state to `now`, writing sampled values through
    /// the store's setters.
    pub fn tick(&mut self, store: &mut ShieldStore, now: Timestamp) {
        sample_scheduled(store, now);
        if let Self::BackAndForth(b) = self {
            b.tick(store, now);
        }
    }
}

/// Samples every per-shield scheduled animation at `now`.
fn sample_scheduled(store: &mut ShieldStore, now: Timestamp) {
    for shield in store.ids() {
        let Some(animation) = store.animation(shield) else {
            continue;
        };
        let phase = animation.progress(now).phase();
        match animation.track {
            Track::GradientStops { from, to } => {
                store.set_gradient_stops(shield, lerp_stops(from, to, phase));
            }
            Track::BackgroundColor { from, to } => {
                store.set_color(shield, from.lerp(to, phase));
            }
        }
    }
}

/// Interpolates a pair of gradient stops component-wise.
pub(crate) fn lerp_stops(from: [Rgba; 2], to: [Rgba; 2], t: f32) -> [Rgba; 2] {
    [from[0].lerp(to[0], t), from[1].lerp(to[1], t)]
}
