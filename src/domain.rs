//! A [Support] represents the set of points where a distribution can have
//! non-zero density.
//!
//! Univariate distributions have a closed interval `[lo, hi]` as support
//! (Gaussian-like distributions are cut at
//! [SUPPORT_STANDARD_DEVIATIONS](crate::configuration::SUPPORT_STANDARD_DEVIATIONS)).
//! Multivariate distributions are not bounded in any direction and use
//! [Support::Unbounded].
//!

/// The region where a distribution lives.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Support {
    /// The values contained in the closed interval.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Interval(f64, f64),
    /// No bounds at all (every direction is allowed).
    #[default]
    Unbounded,
}

impl Support {
    /// Creates a new [Support::Interval] with the given bounds. The bounds are
    /// sorted, so `Support::new_interval(3.0, 1.0)` is the interval `[1.0, 3.0]`.
    #[must_use]
    pub fn new_interval(a: f64, b: f64) -> Self {
        if b < a {
            return Support::Interval(b, a);
        }
        return Support::Interval(a, b);
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            Support::Interval(min, max) => (*min <= x) && (x <= *max),
            Support::Unbounded => !x.is_nan(),
        }
    }

    /// Returns the upper and lower bounds of the support.
    ///
    /// Take into account that the values can also include positive and negative infinity
    /// (only for [Support::Unbounded]). It is guaranteed that return.0 <= return.1.
    /// If the bounds are finite, the values themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match self {
            Support::Interval(min, max) => (*min, *max),
            Support::Unbounded => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    /// Returns `true` if both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        return matches!(self, Support::Interval(_, _));
    }

    /// The smallest support that contains both `self` and `other`.
    ///
    /// Note that the result is always an interval (or unbounded), so any gap
    /// between 2 disjoint intervals is also included.
    #[must_use]
    pub fn join(&self, other: &Support) -> Support {
        match (self, other) {
            (Support::Interval(a_min, a_max), Support::Interval(b_min, b_max)) => {
                Support::Interval(a_min.min(*b_min), a_max.max(*b_max))
            }
            _ => Support::Unbounded,
        }
    }
}
