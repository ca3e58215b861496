use std::cmp::Ordering;

use crate::algorithms::convex_hull::{angle_sort_predicate, distinct_points, lowest_point_index};
use crate::data::Vector;
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Returns the same vertices in the same order as gift wrapping.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Points closer than
/// [`WEAK_EPSILON`](crate::tolerance::WEAK_EPSILON) on both axes count as one.
///
/// The hull starts at the point with the smallest x (then smallest y)
/// coordinate and runs counter-clockwise.
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Examples
///
/// ```rust
/// # use rgeom2d::algorithms::convex_hull;
/// # use rgeom2d::data::Vector;
/// # use rgeom2d::Error;
/// let empty_set: Vec<Vector> = vec![];
/// assert_eq!(
///   convex_hull(&empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use rgeom2d::algorithms::convex_hull;
/// # use rgeom2d::data::Vector;
/// let square = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (1.0, 1.0), (0.0, 2.0)];
/// let pts: Vec<Vector> = square.iter().map(|&(x, y)| Vector::new(x, y)).collect();
/// assert_eq!(
///   convex_hull(&pts).unwrap(),
///   vec![
///     Vector::new(0.0, 0.0),
///     Vector::new(2.0, 0.0),
///     Vector::new(2.0, 2.0),
///     Vector::new(0.0, 2.0),
///   ]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(points: &[Vector]) -> Result<Vec<Vector>, Error> {
  let mut pts = distinct_points(points);
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let lowest = lowest_point_index(&pts)?;
  pts.swap(0, lowest);
  let origin = pts[0];

  // Every other point lies in the half-plane to the right of the origin, so
  // sweeping by angle from straight down to straight up is a total order.
  pts[1..].sort_unstable_by(|a, b| {
    if angle_sort_predicate(&origin, a, b) {
      Ordering::Less
    } else if angle_sort_predicate(&origin, b, a) {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  });

  let mut write_idx = 1;
  let mut read_idx = 2;
  // Drop points that are co-linear with our origin, keeping the farthest.
  while read_idx < pts.len()
    && Orientation::new(&origin, &pts[write_idx], &pts[read_idx]).is_colinear()
    && (pts[write_idx] - origin).inner_product(&(pts[read_idx] - origin)) > 0.0
  {
    pts.swap(read_idx, write_idx);
    read_idx += 1;
  }
  // Filter out points until all consecutive points are oriented counter-clockwise.
  while read_idx < pts.len() {
    let p1 = &pts[read_idx];
    let p2 = &pts[write_idx];
    let p3 = &pts[write_idx - 1];
    match Orientation::new(p3, p2, p1) {
      Orientation::CounterClockWise => {
        pts.swap(read_idx, write_idx + 1);
        read_idx += 1;
        write_idx += 1;
      }
      Orientation::ClockWise | Orientation::CoLinear if write_idx > 1 => {
        write_idx -= 1;
      }
      // Only reachable through rounding: the first hull edge is replaced.
      Orientation::ClockWise | Orientation::CoLinear => {
        pts.swap(read_idx, write_idx);
        read_idx += 1;
      }
    }
  }
  pts.truncate(write_idx + 1);
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  Ok(pts)
}
