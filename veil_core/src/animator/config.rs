// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy configurations.

use crate::color::Rgba;
use crate::time::Span;

/// Configuration shared by the gradient-based strategies.
///
/// Durations are never validated; a zero span makes each period complete
/// immediately (see [`Animation::progress`](crate::timing::Animation::progress)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientConfig {
    /// Length of one color sweep.
    pub duration: Span,
    /// First gradient stop.
    pub from: Rgba,
    /// Second gradient stop.
    pub to: Rgba,
}

impl GradientConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(duration: Span, from: Rgba, to: Rgba) -> Self {
        Self { duration, from, to }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            duration: Span::from_millis(600),
            from: Rgba::GRAY,
            to: Rgba::LIGHT_GRAY,
        }
    }
}

/// Configuration for the blink strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkConfig {
    /// Length of one blink cycle.
    pub duration: Span,
    /// The color blinked toward from the shield's base color.
    pub color: Rgba,
}

impl BlinkConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(duration: Span, color: Rgba) -> Self {
        Self { duration, color }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            duration: Span::from_millis(600),
            color: Rgba::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_shimmer() {
        let g = GradientConfig::default();
        assert_eq!(g.duration, Span::from_millis(600));
        assert_eq!(g.from, Rgba::GRAY);
        assert_eq!(g.to, Rgba::LIGHT_GRAY);

        let b = BlinkConfig::default();
        assert_eq!(b.duration, Span::from_millis(600));
        assert_eq!(b.color, Rgba::GRAY);
    }
}
