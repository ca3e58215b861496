use arrayvec::ArrayVec;

use crate::data::Vector;

/// Up to two intersection points, in the order they were found.
pub type Solutions = ArrayVec<Vector, 2>;

/// Intersection between two shapes.
///
/// Implemented once per pair of shape types, so the shape of the answer is known
/// statically: a single optional point for linear primitives, a [`Solutions`]
/// list for curved or closed shapes.
///
/// ```rust
/// # use rgeom2d::data::{Circle, Line, Vector};
/// # use rgeom2d::Intersects;
/// let circle = Circle::new(Vector::new(0.0, 0.0), 2.0);
/// let line = Line::from_points(Vector::new(-5.0, 0.0), Vector::new(5.0, 0.0)).unwrap();
/// assert_eq!(circle.intersect(&line).len(), 2);
/// ```
pub trait Intersects<T = Self> {
  type Output;
  fn intersect(self, other: T) -> Self::Output;
}

// Collapse two weakly equal points into one.
pub(crate) fn dedup_weakly(sols: &mut Solutions) {
  if sols.len() == 2 && sols[0].equals_weakly(&sols[1]) {
    sols.pop();
  }
}

// Keep the solutions accepted by `keep`, preserving their order.
pub(crate) fn filter_solutions<F>(sols: Solutions, keep: F) -> Solutions
where
  F: Fn(&Vector) -> bool,
{
  sols.into_iter().filter(|p| keep(p)).collect()
}
