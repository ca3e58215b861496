use crate::algorithms::convex_hull::{distinct_points, lowest_point_index};
use crate::data::Vector;
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Terminates after at most one step per distinct point.
//    No points are outside the resulting convex polygon.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Points closer than
/// [`WEAK_EPSILON`](crate::tolerance::WEAK_EPSILON) on both axes count as one.
///
/// The hull starts at the point with the smallest x (then smallest y)
/// coordinate and runs counter-clockwise. Points on a hull edge are not
/// vertices.
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Time complexity
/// $O(n h)$ as h is the size of the points on convex hull
///
/// # Examples
///
/// ```rust
/// # use rgeom2d::algorithms::gift_wrapping;
/// # use rgeom2d::data::Vector;
/// # use rgeom2d::Error;
/// let dups = vec![Vector::new(0.0, 0.0)].repeat(3);
/// assert_eq!(
///   gift_wrapping::convex_hull(&dups).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(points: &[Vector]) -> Result<Vec<Vector>, Error> {
  let pts = distinct_points(points);
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientVertices);
  }
  let lowest = lowest_point_index(&pts)?;

  let mut hull: Vec<Vector> = Vec::with_capacity(n);
  let mut used = vec![false; n];
  let mut p = lowest;
  // Direction of the last hull edge. Every point lies right of the start.
  let mut heading = Vector::new(0.0, -1.0);

  for _ in 0..n {
    hull.push(pts[p]);
    // The starting point stays available so the walk can close.
    let candidates = (0..n).filter(|&i| i != p && !used[i]);
    let mut q = match candidates.clone().next() {
      Some(q) => q,
      None => break,
    };

    for i in candidates {
      let (to_q, to_i) = (pts[q] - pts[p], pts[i] - pts[p]);
      let better = match Orientation::new(&pts[p], &pts[q], &pts[i]) {
        Orientation::ClockWise => true,
        Orientation::CounterClockWise => false,
        // On ties take the farther point, so the hull has no collinear
        // vertices. The walk always closes at the start.
        Orientation::CoLinear if to_q.inner_product(&to_i) > 0.0 => {
          q != lowest && (i == lowest || to_i.r2() > to_q.r2())
        }
        Orientation::CoLinear => left_turn(&heading, &to_i) < left_turn(&heading, &to_q),
      };
      if better {
        q = i;
      }
    }

    if q == lowest {
      break;
    }
    used[q] = true;
    heading = pts[q] - pts[p];
    p = q;
  }

  if hull.len() < 3 {
    return Err(Error::InsufficientVertices);
  }

  Ok(hull)
}

// Counter-clockwise turn from `heading` to `to`, in degrees within [-90, 270).
fn left_turn(heading: &Vector, to: &Vector) -> f64 {
  let turn = (to.th() - heading.th()).degrees();
  if turn < -90.0 {
    turn + 360.0
  } else {
    turn
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::tests::{diamond, diamond_with_interior};
  use crate::data::Polygon;
  use crate::testing::*;

  use approx::assert_abs_diff_eq;
  use claims::assert_ok;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pts(coords: &[(f64, f64)]) -> Vec<Vector> {
    coords.iter().map(|&(x, y)| Vector::new(x, y)).collect()
  }

  #[test]
  fn diamond_order() {
    assert_eq!(convex_hull(&diamond_with_interior()), Ok(diamond()));
  }

  #[test]
  fn convex_hull_colinear() {
    let points = pts(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (4., 0.), (1., 1.)]);
    assert_eq!(convex_hull(&points), Ok(pts(&[(0., 0.), (4., 0.), (1., 1.)])));
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let points = pts(&[(0., 0.), (1., 0.), (0., 9.), (0., 8.), (0., 7.), (0., 6.)]);
    assert_eq!(convex_hull(&points), Ok(pts(&[(0., 0.), (1., 0.), (0., 9.)])));
  }

  #[test]
  fn convex_hull_dups() {
    let points = pts(&[
      (0., 0.),
      (1., 0.),
      (0., 0.),
      (1., 0.),
      (2., 2.),
      (2., 2.),
      (5., 1.),
      (5., 1.),
    ]);
    let hull = convex_hull(&points).unwrap();
    assert_eq!(hull.len(), 4);
    assert_ok!(Polygon::new(hull).validate());
  }

  #[test]
  fn convex_hull_insufficient_dups() {
    let points = pts(&[(0., 0.), (0., 0.), (2., 2.), (2., 2.), (0., 0.), (2., 2.)]);
    assert_eq!(convex_hull(&points).err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn convex_hull_all_colinear() {
    let points = pts(&[(0., 0.), (1., 1.), (2., 2.), (3., 3.)]);
    assert_eq!(convex_hull(&points).err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn start_between_opposite_points() {
    // Both neighbours of the start are nearly straight above and below it.
    let points = pts(&[(0., 0.), (1e-8, -10.), (1., 0.), (0., 1.)]);
    assert_eq!(convex_hull(&points), Ok(points.clone()));
  }

  #[test]
  fn left_turns() {
    let down = Vector::new(0.0, -1.0);
    assert_abs_diff_eq!(left_turn(&down, &Vector::new(0.0, -2.0)), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(left_turn(&down, &Vector::new(1.0, 0.0)), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(left_turn(&down, &Vector::new(0.0, 1.0)), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(left_turn(&down, &Vector::new(-1.0, -1.0)), -45.0, epsilon = 1e-9);
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vectors(0..60))] pts: Vec<Vector>) {
    if let Ok(hull) = convex_hull(&pts) {
      let poly = Polygon::new(hull.clone());
      // Prop #1: Results are counter-clockwise polygons.
      prop_assert!(poly.validate().is_ok());
      prop_assert!(poly.is_counter_clockwise());
      // Prop #2: No points from the input set are outside the polygon.
      for edge in poly.iter_boundary_edges() {
        for pt in pts.iter() {
          prop_assert!(!Orientation::new(&edge.origin(), &edge.terminal(), pt).is_cw());
        }
      }
      // Prop #3: All vertices are in the input set.
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt))
      }
    }
  }
}
