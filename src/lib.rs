// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Epsilon-tolerant 2D geometry kernel.
//!
//! Angles are measured in degrees and normalized into `(-180, 180]`. Queries that
//! may not have a geometric answer (parallel lines, disjoint shapes, empty
//! projections) return `Option` or an empty [`Solutions`] list. An [`Error`] is
//! only produced for degenerate input, such as a line through coincident points
//! or a hull of fewer than three distinct points.
use thiserror::Error;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
pub mod tolerance;
mod transformation;
mod utils;

#[cfg(test)]
pub mod testing;

pub use intersection::{Intersects, Solutions};
pub use orientation::Orientation;
pub use transformation::Matrix2D;
pub use utils::solve_quadratic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// Both the x and y coefficients of a line are zero.
  #[error("degenerate line: a and b coefficients are both zero")]
  DegenerateLine,
  #[error("points have the same coordinates")]
  CoincidentPoints,
  /// The leading coefficient of a quadratic equation is zero.
  #[error("not a quadratic equation: leading coefficient is zero")]
  NotQuadratic,
  #[error("insufficient vertices")]
  InsufficientVertices,
}
