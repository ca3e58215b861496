use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::data::{Polygon, Segment, Triangle, Vector};
use crate::tolerance::{EPSILON, WEAK_EPSILON};
use crate::Error;

pub mod gift_wrapping;
pub mod graham_scan;

/// Hull construction algorithm used by [`ConvexHull::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodType {
  #[default]
  WrappingMethod,
  GrahamScan,
}

/// Point set together with its most recently computed convex hull.
///
/// ```rust
/// # use rgeom2d::algorithms::{ConvexHull, MethodType};
/// # use rgeom2d::data::Vector;
/// let mut hull = ConvexHull::new(vec![
///   Vector::new(0.0, 0.0),
///   Vector::new(4.0, 0.0),
///   Vector::new(4.0, 4.0),
///   Vector::new(0.0, 4.0),
///   Vector::new(2.0, 2.0),
/// ]);
/// hull.compute(MethodType::GrahamScan);
/// assert_eq!(hull.vertices().len(), 4);
/// assert_eq!(hull.edges().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvexHull {
  input_points: Vec<Vector>,
  vertices: Vec<Vector>,
  edges: Vec<Segment>,
}

impl ConvexHull {
  pub fn new(points: Vec<Vector>) -> ConvexHull {
    ConvexHull {
      input_points: points,
      ..ConvexHull::default()
    }
  }

  pub fn add_point(&mut self, point: Vector) {
    self.input_points.push(point);
  }

  pub fn add_points<I: IntoIterator<Item = Vector>>(&mut self, points: I) {
    self.input_points.extend(points);
  }

  /// Forget the input points and the computed hull.
  pub fn clear(&mut self) {
    self.input_points.clear();
    self.clear_results();
  }

  pub fn clear_results(&mut self) {
    self.vertices.clear();
    self.edges.clear();
  }

  pub fn input_points(&self) -> &[Vector] {
    &self.input_points
  }

  /// Hull vertices in counter-clockwise order, starting at the input point with
  /// the smallest x (then smallest y) coordinate. Empty until
  /// [`ConvexHull::compute`] has succeeded.
  pub fn vertices(&self) -> &[Vector] {
    &self.vertices
  }

  /// Hull edges between consecutive vertices, including the closing edge.
  pub fn edges(&self) -> &[Segment] {
    &self.edges
  }

  /// Recompute the hull of the current input points. If fewer than three
  /// distinct points are available the results are left empty.
  pub fn compute(&mut self, method: MethodType) {
    self.clear_results();
    let result = match method {
      MethodType::WrappingMethod => gift_wrapping::convex_hull(&self.input_points),
      MethodType::GrahamScan => graham_scan::convex_hull(&self.input_points),
    };
    match result {
      Ok(vertices) => {
        trace!(
          ?method,
          input = self.input_points.len(),
          hull = vertices.len(),
          "computed convex hull"
        );
        self.edges = Polygon::new(vertices.clone()).iter_boundary_edges().collect();
        self.vertices = vertices;
      }
      Err(err) => debug!(?method, input = self.input_points.len(), %err, "no convex hull"),
    }
  }

  /// The hull as a polygon. Without a computed hull this is the default polygon.
  pub fn to_polygon(&self) -> Polygon {
    let polygon = Polygon::new(self.vertices.clone());
    if !self.vertices.is_empty() {
      claims::debug_assert_ok!(polygon.validate());
    }
    polygon
  }
}

/// Whether `lhs` comes before `rhs` when sweeping counter-clockwise around
/// `base`.
///
/// Nearly collinear points on the same side of `base` are ordered by distance,
/// nearer first. Nearly collinear points on opposite sides are ordered by the
/// angle of their direction from `base`, which lies in (-180, 180].
pub fn angle_sort_predicate(base: &Vector, lhs: &Vector, rhs: &Vector) -> bool {
  let area = Triangle::double_signed_area(base, lhs, rhs);
  if area.abs() >= EPSILON {
    return area > 0.0;
  }
  let (to_lhs, to_rhs) = (*lhs - *base, *rhs - *base);
  if to_lhs.inner_product(&to_rhs) > 0.0 {
    to_lhs.r2() < to_rhs.r2()
  } else {
    to_lhs.th().degrees() < to_rhs.th().degrees()
  }
}

/// Whether the walk `p0 -> p1 -> p2` turns clockwise. A nearly straight walk
/// counts as clockwise when `p1` is farther from `p0` than `p2`.
pub fn is_clockwise(p0: &Vector, p1: &Vector, p2: &Vector) -> bool {
  let area = Triangle::double_signed_area(p0, p1, p2);
  area < 0.0 || (area < EPSILON && p0.dist2(p1) > p0.dist2(p2))
}

// Copy of `points` without weakly equal duplicates, sorted by x then y.
// O(n log n) unless many points share nearly the same x coordinate.
pub(crate) fn distinct_points(points: &[Vector]) -> Vec<Vector> {
  let mut sorted = points.to_vec();
  sorted.sort_unstable_by_key(|p| (OrderedFloat(p.x()), OrderedFloat(p.y())));
  let mut distinct: Vec<Vector> = Vec::with_capacity(sorted.len());
  for pt in sorted {
    let duplicate = distinct
      .iter()
      .rev()
      .take_while(|q| pt.x() - q.x() < WEAK_EPSILON)
      .any(|q| q.equals_weakly(&pt));
    if !duplicate {
      distinct.push(pt);
    }
  }
  distinct
}

// Index of the point with the smallest x coordinate, ties broken by smallest y.
// O(n)
pub(crate) fn lowest_point_index(pts: &[Vector]) -> Result<usize, Error> {
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, p)| (OrderedFloat(p.x()), OrderedFloat(p.y())))
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientVertices)
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  use claims::{assert_err, assert_ok};

  pub fn diamond() -> Vec<Vector> {
    [
      (-9.0, 0.0),
      (-7.0, -7.0),
      (0.0, -9.0),
      (7.0, -7.0),
      (9.0, 0.0),
      (7.0, 7.0),
      (0.0, 9.0),
      (-7.0, 7.0),
    ]
    .iter()
    .map(|&(x, y)| Vector::new(x, y))
    .collect()
  }

  pub fn diamond_with_interior() -> Vec<Vector> {
    let mut pts = vec![
      Vector::new(0.0, 0.0),
      Vector::new(3.0, -2.0),
      Vector::new(-4.0, 5.0),
      Vector::new(6.0, 6.0),
      Vector::new(-6.0, -5.0),
    ];
    // Shuffle the hull points in between the interior ones.
    let mut hull = diamond();
    hull.rotate_left(3);
    pts.extend(hull);
    pts
  }

  #[test]
  fn angle_predicate() {
    let lhs = Vector::new(20.0, 10.0);
    let rhs = Vector::new(-10.0, 20.0);
    assert!(angle_sort_predicate(&Vector::new(0.0, 0.0), &lhs, &rhs));
    assert!(!angle_sort_predicate(&Vector::new(20.0, 20.0), &lhs, &rhs));
    // Same direction: nearer first.
    let base = Vector::new(0.0, 0.0);
    assert!(angle_sort_predicate(&base, &Vector::new(1.0, 1.0), &Vector::new(2.0, 2.0)));
    assert!(!angle_sort_predicate(&base, &Vector::new(2.0, 2.0), &Vector::new(1.0, 1.0)));
    // Opposite directions: the one pointing down sweeps first, however far.
    let below = Vector::new(1e-8, -10.0);
    let above = Vector::new(0.0, 1.0);
    assert!(angle_sort_predicate(&base, &below, &above));
    assert!(!angle_sort_predicate(&base, &above, &below));
  }

  #[test]
  fn clockwise_turns() {
    let a = Vector::new(0.0, 0.0);
    let b = Vector::new(20.0, 10.0);
    let c = Vector::new(-10.0, 20.0);
    assert!(!is_clockwise(&a, &b, &c));
    assert!(is_clockwise(&b, &c, &Vector::new(20.0, 20.0)));
    assert!(is_clockwise(&a, &Vector::new(2.0, 0.0), &Vector::new(1.0, 0.0)));
    assert!(!is_clockwise(&a, &Vector::new(1.0, 0.0), &Vector::new(2.0, 0.0)));
  }

  #[test]
  fn distinct_drops_weak_duplicates() {
    let pts = vec![
      Vector::new(1.0, 1.0),
      Vector::new(0.0, 0.0),
      Vector::new(1.0 + 1e-6, 1.0),
      Vector::new(0.5, 7.0),
      Vector::new(1.0, 1.0 - 1e-6),
    ];
    assert_eq!(
      distinct_points(&pts),
      vec![Vector::new(0.0, 0.0), Vector::new(0.5, 7.0), Vector::new(1.0, 1.0)]
    );
  }

  #[test]
  fn lowest_point() {
    let pts = vec![
      Vector::new(0.0, 3.0),
      Vector::new(0.0, -1.0),
      Vector::new(2.0, -5.0),
    ];
    assert_eq!(lowest_point_index(&pts), Ok(1));
    assert_err!(lowest_point_index(&[]));
  }

  #[test]
  fn compute_with_both_methods() {
    for method in [MethodType::WrappingMethod, MethodType::GrahamScan] {
      let mut hull = ConvexHull::new(diamond_with_interior());
      hull.compute(method);
      assert_eq!(hull.vertices(), diamond().as_slice());
      assert_eq!(hull.edges().len(), 8);
      assert_eq!(hull.edges()[7], Segment::new(Vector::new(-7.0, 7.0), Vector::new(-9.0, 0.0)));
      assert_ok!(hull.to_polygon().validate());
      assert!(hull.to_polygon().is_counter_clockwise());
    }
  }

  #[test]
  fn compute_failure_clears_results() {
    let mut hull = ConvexHull::new(diamond());
    hull.compute(MethodType::default());
    assert_eq!(hull.vertices().len(), 8);

    hull.clear();
    hull.add_point(Vector::new(1.0, 1.0));
    hull.add_points([Vector::new(1.0, 1.0), Vector::new(2.0, 2.0)]);
    hull.compute(MethodType::GrahamScan);
    assert!(hull.vertices().is_empty());
    assert!(hull.edges().is_empty());
    assert_eq!(hull.input_points().len(), 3);
    assert_eq!(hull.to_polygon(), Polygon::default());
  }

  #[test]
  fn clear_results_keeps_input() {
    let mut hull = ConvexHull::new(diamond());
    hull.compute(MethodType::WrappingMethod);
    hull.clear_results();
    assert!(hull.vertices().is_empty());
    assert_eq!(hull.input_points().len(), 8);
  }
}
