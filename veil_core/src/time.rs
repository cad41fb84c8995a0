// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time in nanoseconds.
//!
//! [`Timestamp`] is a point on the host's monotonic clock; [`Span`] is the
//! distance between two such points. The host converts whatever its platform
//! clock reports (display-link timestamps, `performance.now()`, a scripted
//! test clock) into nanoseconds before handing it to the overlay, so the
//! core never deals in platform tick units.
//!
//! Animation durations are most naturally written in seconds
//! ([`Span::from_secs_f64`]); all arithmetic is saturating or checked so a
//! misbehaving host clock cannot panic the overlay.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time on the host's monotonic clock, in nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> u64 {
        self.0
    }

    /// Returns the span between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_since(self, earlier: Self) -> Span {
        Span(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a span.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, span: Span) -> Option<Self> {
        match self.0.checked_add(span.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    /// Checked subtraction of a span.
    #[inline]
    #[must_use]
    pub const fn checked_sub(self, span: Span) -> Option<Self> {
        match self.0.checked_sub(span.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

impl Add<Span> for Timestamp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Span) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub<Span> for Timestamp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Span) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub for Timestamp {
    type Output = Span;

    #[inline]
    fn sub(self, rhs: Self) -> Span {
        Span(self.0 - rhs.0)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// A length of time in nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span(pub u64);

impl Span {
    /// A zero-length span.
    pub const ZERO: Self = Self(0);

    /// Creates a span from a millisecond count.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1_000_000)
    }

    /// Creates a span from a float second count.
    ///
    /// Non-positive and non-finite inputs produce [`Span::ZERO`]; the
    /// animation sampler treats a zero span as "completes immediately".
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "negative and non-finite inputs are filtered; u64 nanoseconds cover ~584 years"
    )]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            // Round to the nearest nanosecond; inputs are positive here.
            Self((secs * 1e9 + 0.5) as u64)
        } else {
            Self::ZERO
        }
    }

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> u64 {
        self.0
    }

    /// Returns this span as float seconds.
    #[inline]
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1e9
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Span {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Span {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_round_trip() {
        let s = Span::from_secs_f64(0.6);
        assert_eq!(s.nanos(), 600_000_000);
        assert!((s.as_secs_f64() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn non_positive_seconds_clamp_to_zero() {
        assert_eq!(Span::from_secs_f64(0.0), Span::ZERO);
        assert_eq!(Span::from_secs_f64(-1.5), Span::ZERO);
        assert_eq!(Span::from_secs_f64(f64::NAN), Span::ZERO);
        assert_eq!(Span::from_secs_f64(f64::INFINITY), Span::ZERO);
    }

    #[test]
    fn from_millis_matches_seconds() {
        assert_eq!(Span::from_millis(600), Span::from_secs_f64(0.6));
    }

    #[test]
    fn span_arithmetic() {
        let a = Span(100);
        let b = Span(30);
        assert_eq!((a + b).nanos(), 130);
        assert_eq!((a - b).nanos(), 70);
        assert_eq!(a.saturating_sub(Span(200)), Span::ZERO);
        assert_eq!(Span(u64::MAX).saturating_add(a), Span(u64::MAX));
    }

    #[test]
    fn timestamp_span_ops() {
        let t = Timestamp(1000);
        let s = Span(200);
        assert_eq!((t + s).nanos(), 1200);
        assert_eq!((t - s).nanos(), 800);
        assert_eq!(t.saturating_since(Timestamp(1500)), Span::ZERO);
        assert_eq!(t.saturating_since(Timestamp(400)), Span(600));
    }

    #[test]
    fn checked_ops_detect_overflow() {
        assert_eq!(Timestamp(u64::MAX).checked_add(Span(1)), None);
        assert_eq!(Timestamp(0).checked_sub(Span(1)), None);
        assert_eq!(Timestamp(10).checked_add(Span(5)), Some(Timestamp(15)));
        assert_eq!(Timestamp(10).checked_sub(Span(5)), Some(Timestamp(5)));
    }
}
