//! Process-wide numeric tolerances.
//!
//! Two thresholds are used throughout the kernel. [`EPSILON`] guards algebraic
//! near-zero tests (determinants, denominators, collinearity). [`WEAK_EPSILON`]
//! absorbs accumulated floating error when deciding whether two points coincide.

/// Tight tolerance for algebraic near-zero comparisons.
pub const EPSILON: f64 = 1.0e-6;

/// Loose tolerance for point and shape coincidence ("weak equality").
pub const WEAK_EPSILON: f64 = 1.0e-4;

/// Parallelogram area below which three points are treated as collinear when
/// solving for a circumcenter.
pub const CIRCUMCENTER_EPSILON: f64 = 1.0e-10;

pub(crate) fn is_zero(value: f64) -> bool {
  value.abs() < EPSILON
}

pub(crate) fn weakly_equal(a: f64, b: f64) -> bool {
  (a - b).abs() < WEAK_EPSILON
}
