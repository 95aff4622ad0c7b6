//! Absolute-epsilon float comparison.
//!
//! The reference implementation's fuzzy-equal comparator
//! (`fabs(a - b) / EPSILON <= fmin(fabs(a), fabs(b))`) is degenerate at
//! `a == b == 0` (division makes the right-hand side `0`, so it only
//! "passes" when `a == b` exactly). We use the plain absolute form for both
//! comparators, as the redesign notes direct for `is_symmetric_traceless`.

/// Absolute epsilon used throughout tensor and streamline comparisons.
pub const EPSILON: f32 = 1e-5;

/// `true` if `a` is within [`EPSILON`] of zero.
#[inline]
pub fn fuzzy_null(a: f32) -> bool {
    a.abs() < EPSILON
}

/// `true` if `a` and `b` are within [`EPSILON`] of each other.
#[inline]
pub fn fuzzy_eq(a: f32, b: f32) -> bool {
    fuzzy_null(a - b)
}
