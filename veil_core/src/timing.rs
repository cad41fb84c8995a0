// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation scheduling and sampling.
//!
//! This module defines the types that flow between the overlay's tick loop
//! and the animation strategies:
//!
//! - [`Track`] — which shield property a scheduled animation drives, with
//!   its endpoint values
//! - [`Animation`] — a scheduled change: track + start time + duration +
//!   easing + repeat + fill behavior
//! - [`Progress`] — the sampled state of an animation at a point in time
//!
//! The model deliberately mirrors platform layer animations (duration,
//! easing, infinite repeat, fill/hold-on-completion) but is sampled rather
//! than callback-driven: each host tick evaluates every scheduled animation
//! at the current [`Timestamp`] and writes the interpolated values through
//! the store's setters. Completion of a [`Repeat::Once`] animation is
//! *detected* during a tick — the strategy that scheduled it reacts then,
//! on the same thread, strictly after the sample. That detection point is
//! the library's rendition of the platform's animation-did-stop callback.

use crate::color::Rgba;
use crate::time::{Span, Timestamp};

/// Timing curve applied to an animation's linear phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Slow start and end (smoothstep).
    EaseInOut,
}

impl Easing {
    /// Applies the curve to a phase in `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// How an animation loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Cycle indefinitely, snapping back to the start of each period.
    Forever,
    /// Run a single period, then report completion.
    Once,
}

/// What a completed [`Repeat::Once`] animation leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Hold the end value after completion.
    Hold,
    /// Snap back to the start value after completion.
    Revert,
}

/// The shield property an animation drives, with its endpoint values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Track {
    /// Animates a gradient fill's rendered stops.
    GradientStops {
        /// Stops at phase 0.
        from: [Rgba; 2],
        /// Stops at phase 1.
        to: [Rgba; 2],
    },
    /// Animates the background color.
    BackgroundColor {
        /// Color at phase 0.
        from: Rgba,
        /// Color at phase 1.
        to: Rgba,
    },
}

/// The sampled state of an animation at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    /// The animation is running; the eased phase is in `0.0..=1.0`.
    Active(f32),
    /// A [`Repeat::Once`] animation has finished; the carried phase is the
    /// fill-resolved resting value (1.0 for [`Fill::Hold`], 0.0 for
    /// [`Fill::Revert`]).
    Done(f32),
}

impl Progress {
    /// Returns the phase to sample the track at.
    #[inline]
    #[must_use]
    pub const fn phase(self) -> f32 {
        match self {
            Self::Active(t) | Self::Done(t) => t,
        }
    }
}

/// A scheduled property-change animation on one shield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// The property driven and its endpoints.
    pub track: Track,
    /// When the animation was scheduled.
    pub start: Timestamp,
    /// Length of one period.
    pub duration: Span,
    /// Timing curve within a period.
    pub easing: Easing,
    /// Looping behavior.
    pub repeat: Repeat,
    /// Resting behavior after a [`Repeat::Once`] period ends.
    pub fill: Fill,
}

impl Animation {
    /// Samples the animation at `now`.
    ///
    /// Before `start`, the phase is 0 (the from-value shows, matching a
    /// backwards fill). A zero-length duration completes immediately for
    /// [`Repeat::Once`] and rests at the end value for [`Repeat::Forever`];
    /// durations are never validated at construction.
    #[must_use]
    pub fn progress(&self, now: Timestamp) -> Progress {
        let elapsed = now.saturating_since(self.start).nanos();
        let duration = self.duration.nanos();

        if duration == 0 {
            return match self.repeat {
                Repeat::Once => Progress::Done(self.fill_phase()),
                Repeat::Forever => Progress::Active(1.0),
            };
        }

        match self.repeat {
            Repeat::Once => {
                if elapsed >= duration {
                    Progress::Done(self.fill_phase())
                } else {
                    Progress::Active(self.easing.apply(elapsed as f32 / duration as f32))
                }
            }
            Repeat::Forever => {
                let phase = (elapsed % duration) as f32 / duration as f32;
                Progress::Active(self.easing.apply(phase))
            }
        }
    }

    /// Returns whether a [`Repeat::Once`] animation has run its period.
    ///
    /// Always false for [`Repeat::Forever`].
    #[must_use]
    pub fn is_complete(&self, now: Timestamp) -> bool {
        matches!(self.progress(now), Progress::Done(_))
    }

    const fn fill_phase(&self) -> f32 {
        match self.fill {
            Fill::Hold => 1.0,
            Fill::Revert => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn once(duration_ms: u64, fill: Fill) -> Animation {
        Animation {
            track: Track::BackgroundColor {
                from: Rgba::GRAY,
                to: Rgba::LIGHT_GRAY,
            },
            start: Timestamp(1_000_000_000),
            duration: Span::from_millis(duration_ms),
            easing: Easing::Linear,
            repeat: Repeat::Once,
            fill,
        }
    }

    fn forever(duration_ms: u64, easing: Easing) -> Animation {
        Animation {
            easing,
            repeat: Repeat::Forever,
            ..once(duration_ms, Fill::Hold)
        }
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_slow_at_the_edges() {
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
        assert!(Easing::EaseInOut.apply(0.9) > 0.9);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn once_runs_then_holds() {
        let anim = once(100, Fill::Hold);
        let mid = anim.start + Span::from_millis(50);
        assert_eq!(anim.progress(mid), Progress::Active(0.5));
        assert!(!anim.is_complete(mid));

        let end = anim.start + Span::from_millis(100);
        assert_eq!(anim.progress(end), Progress::Done(1.0));
        assert!(anim.is_complete(end));

        // Holds well past the end.
        let late = anim.start + Span::from_millis(500);
        assert_eq!(anim.progress(late), Progress::Done(1.0));
    }

    #[test]
    fn once_with_revert_snaps_back() {
        let anim = once(100, Fill::Revert);
        let late = anim.start + Span::from_millis(150);
        assert_eq!(anim.progress(late), Progress::Done(0.0));
    }

    #[test]
    fn forever_wraps_and_never_completes() {
        let anim = forever(100, Easing::Linear);
        let in_third_period = anim.start + Span::from_millis(250);
        assert_eq!(anim.progress(in_third_period), Progress::Active(0.5));
        assert!(!anim.is_complete(in_third_period));

        // Period boundary snaps back to phase 0.
        let boundary = anim.start + Span::from_millis(200);
        assert_eq!(anim.progress(boundary), Progress::Active(0.0));
    }

    #[test]
    fn before_start_shows_from_value() {
        let anim = once(100, Fill::Hold);
        let before = Timestamp(anim.start.nanos() - 50);
        assert_eq!(anim.progress(before), Progress::Active(0.0));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let anim = once(0, Fill::Hold);
        assert_eq!(anim.progress(anim.start), Progress::Done(1.0));
        assert!(anim.is_complete(anim.start));

        let cyclic = forever(0, Easing::Linear);
        assert_eq!(cyclic.progress(cyclic.start), Progress::Active(1.0));
        assert!(!cyclic.is_complete(cyclic.start));
    }

    #[test]
    fn progress_phase_unwraps_both_variants() {
        assert_eq!(Progress::Active(0.25).phase(), 0.25);
        assert_eq!(Progress::Done(1.0).phase(), 1.0);
    }
}
