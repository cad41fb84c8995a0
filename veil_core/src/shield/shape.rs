// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shield outline shapes.

/// The outline a presenter should give a shield.
///
/// Shapes let a shield match the silhouette of the view it covers — a
/// circular avatar wants a circular placeholder, not a gray square. The
/// shape is interpreted relative to the shield's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ShieldShape {
    /// The full frame rectangle.
    #[default]
    Rect,
    /// The frame rectangle with the given corner radius.
    Rounded(f64),
    /// An ellipse inscribed in the frame (a circle for square frames).
    Circle,
}
