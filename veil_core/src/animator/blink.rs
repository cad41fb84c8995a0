// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background-color blink driven by native-style infinite repeat.

use crate::shield::{ShieldId, ShieldStore};
use crate::time::Timestamp;
use crate::timing::{Animation, Easing, Fill, Repeat, Track};

use super::config::BlinkConfig;

/// Pulses a shield's background color toward the blink color, eased in and
/// out, on an indefinite cycle.
///
/// No extra fill is installed: the animation attaches directly to the
/// shield's background. One animation is scheduled per shield; looping is
/// [`Repeat::Forever`]. Each period snaps back to the base color, which
/// with the ease-in-out curve reads as a soft pulse.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlinkAnimator {
    config: BlinkConfig,
}

impl BlinkAnimator {
    /// Creates the strategy with the given configuration.
    #[must_use]
    pub const fn new(config: BlinkConfig) -> Self {
        Self { config }
    }

    /// Schedules the blink on `shield`, from its current background color.
    pub fn add_animation(&self, store: &mut ShieldStore, shield: ShieldId, now: Timestamp) {
        let base = store.color(shield);
        store.set_animation(
            shield,
            Some(Animation {
                track: Track::BackgroundColor {
                    from: base,
                    to: self.config.color,
                },
                start: now,
                duration: self.config.duration,
                easing: Easing::EaseInOut,
                repeat: Repeat::Forever,
                fill: Fill::Revert,
            }),
        );
    }
}
