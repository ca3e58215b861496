use std::fmt;

use super::{AngleDeg, Line, PointLocation, Ray, Segment, Vector};
use crate::intersection::filter_solutions;
use crate::tolerance::CIRCUMCENTER_EPSILON;
use crate::utils::Rounded;
use crate::{Intersects, Orientation, Solutions};

/// Triangle with vertices `a`, `b` and `c`, in either winding order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle([Vector; 3]);

impl Triangle {
  pub fn new(a: Vector, b: Vector, c: Vector) -> Triangle {
    Triangle([a, b, c])
  }

  pub fn a(&self) -> Vector {
    self.0[0]
  }

  pub fn b(&self) -> Vector {
    self.0[1]
  }

  pub fn c(&self) -> Vector {
    self.0[2]
  }

  pub fn vertices(&self) -> &[Vector; 3] {
    &self.0
  }

  /// Non-degenerate: the vertices are not collinear.
  pub fn is_valid(&self) -> bool {
    !self.orientation().is_colinear()
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = &self.0;
    Orientation::new(a, b, c)
  }

  /// Twice the signed area of the triangle `a b c`: positive when the vertices
  /// turn counter-clockwise, negative when clockwise, zero when collinear.
  ///
  /// The sign is exact; it is computed with adaptive-precision arithmetic.
  ///
  /// ```rust
  /// # use rgeom2d::data::{Triangle, Vector};
  /// let a = Vector::new(0.0, 0.0);
  /// let b = Vector::new(4.0, 0.0);
  /// let c = Vector::new(0.0, 3.0);
  /// assert_eq!(Triangle::double_signed_area(&a, &b, &c), 12.0);
  /// assert_eq!(Triangle::double_signed_area(&a, &c, &b), -12.0);
  /// ```
  pub fn double_signed_area(a: &Vector, b: &Vector, c: &Vector) -> f64 {
    geometry_predicates::predicates::orient2d(a.0, b.0, c.0)
  }

  pub fn signed_area(&self) -> f64 {
    let [a, b, c] = &self.0;
    Triangle::double_signed_area(a, b, c) * 0.5
  }

  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// Check if the vertices turn counter-clockwise.
  pub fn ccw(&self) -> bool {
    let [a, b, c] = &self.0;
    Triangle::double_signed_area(a, b, c) > 0.0
  }

  /// Boundary-inclusive containment test, independent of winding order.
  pub fn contains(&self, point: &Vector) -> bool {
    let [r1, r2, r3] = self.0.map(|v| v - *point);
    let o1 = r1.outer_product(&r2);
    let o2 = r2.outer_product(&r3);
    let o3 = r3.outer_product(&r1);
    (o1 >= 0.0 && o2 >= 0.0 && o3 >= 0.0) || (o1 <= 0.0 && o2 <= 0.0 && o3 <= 0.0)
  }

  // O(1)
  pub fn locate(&self, pt: &Vector) -> PointLocation {
    let [a, b, c] = &self.0;
    let sides = [
      Orientation::new(a, b, pt),
      Orientation::new(b, c, pt),
      Orientation::new(c, a, pt),
    ];
    let cw = sides.iter().any(|o| o.is_cw());
    let ccw = sides.iter().any(|o| o.is_ccw());
    if cw && ccw {
      PointLocation::Outside
    } else if sides.iter().any(|o| o.is_colinear()) {
      if self.edges().iter().any(|edge| edge.on_segment_weakly(pt)) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      }
    } else {
      PointLocation::Inside
    }
  }

  pub fn edges(&self) -> [Segment; 3] {
    let [a, b, c] = self.0;
    [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
  }

  pub fn centroid(&self) -> Vector {
    self.0.iter().copied().sum::<Vector>() / 3.0
  }

  /// Intersection of the angle bisectors at `a` and `b`.
  pub fn incenter(&self) -> Option<Vector> {
    let [a, b, c] = self.0;
    let bisect_a = Line::from_origin_and_angle(a, AngleDeg::bisect(&(b - a).th(), &(c - a).th()));
    let bisect_b = Line::from_origin_and_angle(b, AngleDeg::bisect(&(a - b).th(), &(c - b).th()));
    bisect_a.intersection(&bisect_b)
  }

  /// Center of the circle through all three vertices. `None` for collinear
  /// vertices.
  pub fn circumcenter(&self) -> Option<Vector> {
    let [a, b, c] = self.0;
    let ab = Line::try_perpendicular_bisector(a, b).ok();
    let bc = Line::try_perpendicular_bisector(b, c).ok();
    let ca = Line::try_perpendicular_bisector(c, a).ok();
    let meet = |l1: Option<Line>, l2: Option<Line>| l1?.intersection(&l2?);

    meet(ab, bc)
      .or_else(|| meet(ab, ca))
      .or_else(|| meet(bc, ca))
      .or_else(|| {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.outer_product(&ac);
        if cross.abs() < CIRCUMCENTER_EPSILON {
          return None;
        }
        let inv = 0.5 / cross;
        let (ab2, ac2) = (ab.r2(), ac.r2());
        Some(Vector::new(
          a.x() + inv * (ab2 * ac.y() - ac2 * ab.y()),
          a.y() + inv * (ab.x() * ac2 - ac.x() * ab2),
        ))
      })
  }

  /// Intersection of the altitudes from `a` and `b`.
  pub fn orthocenter(&self) -> Option<Vector> {
    let [a, b, c] = self.0;
    let altitude_a = Line::from_points(b, c).ok()?.perpendicular(&a);
    let altitude_b = Line::from_points(c, a).ok()?.perpendicular(&b);
    altitude_a.intersection(&altitude_b)
  }

  /// Crossings of the edges `ab`, `bc` and `ca` with `line`. A line through a
  /// vertex reports that vertex once.
  pub fn intersection_with_line(&self, line: &Line) -> Solutions {
    let mut sols = Solutions::new();
    for edge in &self.edges() {
      if sols.is_full() {
        break;
      }
      if let Some(p) = edge.intersection_with_line(line) {
        if !sols.iter().any(|s| s.equals_weakly(&p)) {
          sols.push(p);
        }
      }
    }
    sols
  }

  pub fn intersection_with_ray(&self, ray: &Ray) -> Solutions {
    let sols = self.intersection_with_line(&ray.line());
    filter_solutions(sols, |p| ray.in_right_dir(p, 1.0))
  }

  pub fn intersection_with_segment(&self, segment: &Segment) -> Solutions {
    match segment.line() {
      Ok(line) => {
        let sols = self.intersection_with_line(&line);
        filter_solutions(sols, |p| segment.contains(p))
      }
      Err(_) => Solutions::new(),
    }
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Triangle {
  type Output = Solutions;
  fn intersect(self, line: &'a Line) -> Solutions {
    self.intersection_with_line(line)
  }
}

impl<'a, 'b> Intersects<&'a Ray> for &'b Triangle {
  type Output = Solutions;
  fn intersect(self, ray: &'a Ray) -> Solutions {
    self.intersection_with_ray(ray)
  }
}

impl<'a, 'b> Intersects<&'a Segment> for &'b Triangle {
  type Output = Solutions;
  fn intersect(self, segment: &'a Segment) -> Solutions {
    self.intersection_with_segment(segment)
  }
}

impl fmt::Display for Triangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [a, b, c] = self.0;
    write!(
      f,
      "(tri {} {} {} {} {} {})",
      Rounded(a.x()),
      Rounded(a.y()),
      Rounded(b.x()),
      Rounded(b.y()),
      Rounded(c.x()),
      Rounded(c.y())
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::any_vector;

  use approx::assert_abs_diff_eq;
  use claims::{assert_none, assert_some};
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn right() -> Triangle {
    Triangle::new(Vector::new(0.0, 0.0), Vector::new(4.0, 0.0), Vector::new(0.0, 3.0))
  }

  #[test]
  fn areas() {
    let tri = right();
    assert_eq!(tri.signed_area(), 6.0);
    assert_eq!(tri.area(), 6.0);
    assert!(tri.ccw());
    let cw = Triangle::new(tri.a(), tri.c(), tri.b());
    assert_eq!(cw.signed_area(), -6.0);
    assert_eq!(cw.area(), 6.0);
    assert!(!cw.ccw());
    assert!(tri.is_valid());
    let flat = Triangle::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0), Vector::new(2.0, 2.0));
    assert!(!flat.is_valid());
  }

  #[test]
  fn contains_either_winding() {
    let tri = right();
    let cw = Triangle::new(tri.a(), tri.c(), tri.b());
    for t in &[tri, cw] {
      assert!(t.contains(&Vector::new(1.0, 1.0)));
      assert!(t.contains(&Vector::new(2.0, 0.0)));
      assert!(!t.contains(&Vector::new(3.0, 3.0)));
    }
  }

  #[test]
  fn locate() {
    let tri = right();
    assert_eq!(tri.locate(&Vector::new(1.0, 1.0)), PointLocation::Inside);
    assert_eq!(tri.locate(&Vector::new(2.0, 0.0)), PointLocation::OnBoundary);
    assert_eq!(tri.locate(&Vector::new(0.0, 0.0)), PointLocation::OnBoundary);
    assert_eq!(tri.locate(&Vector::new(5.0, 0.0)), PointLocation::Outside);
    assert_eq!(tri.locate(&Vector::new(3.0, 3.0)), PointLocation::Outside);
  }

  #[test]
  fn centers() {
    let tri = right();
    let centroid = tri.centroid();
    assert_abs_diff_eq!(centroid.x(), 4.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(centroid.y(), 1.0, epsilon = 1e-12);

    let circumcenter = assert_some!(tri.circumcenter());
    assert!(circumcenter.equals_weakly(&Vector::new(2.0, 1.5)));

    // Right angle at a.
    let orthocenter = assert_some!(tri.orthocenter());
    assert!(orthocenter.equals_weakly(&Vector::new(0.0, 0.0)));

    // Inradius of the 3-4-5 triangle is 1.
    let incenter = assert_some!(tri.incenter());
    assert!(incenter.equals_weakly(&Vector::new(1.0, 1.0)), "{}", incenter);
  }

  #[test]
  fn collinear_centers() {
    let flat = Triangle::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0), Vector::new(2.0, 0.0));
    assert_none!(flat.circumcenter());
    assert_none!(flat.orthocenter());
  }

  #[test]
  fn line_crossings() {
    let tri = right();
    let line = Line::from_points(Vector::new(-1.0, 1.0), Vector::new(1.0, 1.0)).unwrap();
    let sols = tri.intersect(&line);
    assert_eq!(sols.len(), 2);
    assert!(sols[0].equals_weakly(&Vector::new(8.0 / 3.0, 1.0)));
    assert!(sols[1].equals_weakly(&Vector::new(0.0, 1.0)));

    // Through vertex b and the opposite edge.
    let through = Line::from_points(Vector::new(4.0, 0.0), Vector::new(0.0, 1.0)).unwrap();
    let sols = tri.intersect(&through);
    assert_eq!(sols.len(), 2);
    assert!(sols[0].equals_weakly(&Vector::new(4.0, 0.0)));
    assert!(sols[1].equals_weakly(&Vector::new(0.0, 1.0)));

    let miss = Line::from_points(Vector::new(-1.0, 5.0), Vector::new(1.0, 5.0)).unwrap();
    assert!(tri.intersect(&miss).is_empty());
  }

  #[test]
  fn ray_and_segment_crossings() {
    let tri = right();
    let ray = Ray::from_points(Vector::new(1.0, 1.0), Vector::new(2.0, 1.0));
    let sols = tri.intersect(&ray);
    assert_eq!(sols.len(), 1);
    assert!(sols[0].equals_weakly(&Vector::new(8.0 / 3.0, 1.0)));

    let seg = Segment::new(Vector::new(-1.0, 1.0), Vector::new(1.0, 1.0));
    let sols = tri.intersect(&seg);
    assert_eq!(sols.len(), 1);
    assert!(sols[0].equals_weakly(&Vector::new(0.0, 1.0)));
  }

  #[test]
  fn display() {
    assert_eq!(right().to_string(), "(tri 0.0 0.0 4.0 0.0 0.0 3.0)");
  }

  #[proptest]
  fn double_signed_area_flips_with_order(
    #[strategy(any_vector())] a: Vector,
    #[strategy(any_vector())] b: Vector,
    #[strategy(any_vector())] c: Vector,
  ) {
    let sign = |area: f64| area.partial_cmp(&0.0);
    let abc = Triangle::double_signed_area(&a, &b, &c);
    let acb = Triangle::double_signed_area(&a, &c, &b);
    prop_assert_eq!(sign(abc), sign(-acb));
    prop_assert_eq!(sign(Triangle::double_signed_area(&b, &c, &a)), sign(abc));
  }

  #[proptest]
  fn circumcenter_is_equidistant(
    #[strategy(any_vector())] a: Vector,
    #[strategy(any_vector())] b: Vector,
    #[strategy(any_vector())] c: Vector,
  ) {
    let tri = Triangle::new(a, b, c);
    prop_assume!(tri.area() > 1000.0);
    let center = tri.circumcenter().unwrap();
    let (da, db, dc) = (center.dist(&a), center.dist(&b), center.dist(&c));
    prop_assert!((da - db).abs() < 1e-6 * da.max(1.0));
    prop_assert!((da - dc).abs() < 1e-6 * da.max(1.0));
  }

  #[proptest]
  fn centroid_is_inside(
    #[strategy(any_vector())] a: Vector,
    #[strategy(any_vector())] b: Vector,
    #[strategy(any_vector())] c: Vector,
  ) {
    let tri = Triangle::new(a, b, c);
    prop_assume!(tri.is_valid());
    prop_assert!(tri.contains(&tri.centroid()));
  }
}
