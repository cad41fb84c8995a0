// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color values for shield fills.
//!
//! [`Rgba`] is a straight-alpha color with `f32` channels in `0.0..=1.0`.
//! Presenters convert to whatever their platform wants (CSS strings, packed
//! integers); the core only needs construction and interpolation.

use core::fmt;

/// A straight-alpha RGBA color with `f32` channels.
#[derive(Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, `0.0..=1.0`.
    pub r: f32,
    /// Green channel, `0.0..=1.0`.
    pub g: f32,
    /// Blue channel, `0.0..=1.0`.
    pub b: f32,
    /// Alpha channel, `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    /// Mid gray, the default shimmer "from" color.
    pub const GRAY: Self = Self::opaque(0.5, 0.5, 0.5);

    /// Light gray, the default shield background and shimmer "to" color.
    pub const LIGHT_GRAY: Self = Self::opaque(0.667, 0.667, 0.667);

    /// Opaque red.
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);

    /// Creates a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline]
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Linearly interpolates from `self` toward `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}
