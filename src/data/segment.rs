use std::fmt;

use crate::data::{AngleDeg, Line, Triangle, Vector};
use crate::tolerance::EPSILON;
use crate::utils::Rounded;
use crate::{Error, Intersects};

/// Line segment from `origin` to `terminal`.
///
/// A segment whose endpoints coincide is degenerate (see [`Segment::is_valid`]);
/// queries still answer for it, treating it as a single point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
  origin: Vector,
  terminal: Vector,
}

impl Segment {
  pub fn new(origin: Vector, terminal: Vector) -> Segment {
    Segment { origin, terminal }
  }

  /// Segment of the given `length` leaving `origin` in direction `dir`.
  pub fn from_polar(origin: Vector, length: f64, dir: AngleDeg) -> Segment {
    Segment {
      origin,
      terminal: origin + Vector::polar(length, dir),
    }
  }

  pub fn origin(&self) -> Vector {
    self.origin
  }

  pub fn terminal(&self) -> Vector {
    self.terminal
  }

  /// # Errors
  /// [`Error::DegenerateLine`] if the endpoints are identical.
  pub fn line(&self) -> Result<Line, Error> {
    Line::from_points(self.origin, self.terminal)
  }

  pub fn is_valid(&self) -> bool {
    !self.origin.equals_weakly(&self.terminal)
  }

  pub fn length(&self) -> f64 {
    self.origin.dist(&self.terminal)
  }

  pub fn direction(&self) -> AngleDeg {
    (self.terminal - self.origin).th()
  }

  /// Exchange the endpoints in place.
  pub fn swap(&mut self) {
    std::mem::swap(&mut self.origin, &mut self.terminal);
  }

  #[must_use]
  pub fn reversed(&self) -> Segment {
    let mut seg = *self;
    seg.swap();
    seg
  }

  pub fn perpendicular_bisector(&self) -> Line {
    Line::perpendicular_bisector(self.origin, self.terminal)
  }

  /// Fast bounding-box test. Points off the supporting line may pass.
  pub fn contains(&self, point: &Vector) -> bool {
    (point.x() - self.origin.x()) * (point.x() - self.terminal.x()) <= EPSILON
      && (point.y() - self.origin.y()) * (point.y() - self.terminal.y()) <= EPSILON
  }

  pub fn equals_weakly(&self, other: &Segment) -> bool {
    self.origin.equals_weakly(&other.origin) && self.terminal.equals_weakly(&other.terminal)
  }

  /// Foot of the perpendicular from `point`, if it falls on the segment. A
  /// degenerate segment projects everything onto its origin.
  pub fn projection(&self, point: &Vector) -> Option<Vector> {
    let mut dir = self.terminal - self.origin;
    let len = dir.r();
    if len < EPSILON {
      return Some(self.origin);
    }
    dir /= len;
    let along = dir.inner_product(&(*point - self.origin));
    if -EPSILON < along && along < len + EPSILON {
      Some(self.origin + dir * along)
    } else {
      None
    }
  }

  pub fn intersection_with_line(&self, line: &Line) -> Option<Vector> {
    self
      .line()
      .ok()?
      .intersection(line)
      .filter(|p| self.contains(p))
  }

  /// Crossing point of two segments. Collinear overlaps have no single answer
  /// and yield `None`. With `allow_end_point == false`, touching at an endpoint
  /// does not count.
  pub fn intersection_with_segment(&self, other: &Segment, allow_end_point: bool) -> Option<Vector> {
    let sol = self.line().ok()?.intersection(&other.line().ok()?)?;
    if !self.contains(&sol) || !other.contains(&sol) {
      return None;
    }
    if !allow_end_point && !self.exist_intersection_except_endpoint(other) {
      return None;
    }
    Some(sol)
  }

  /// Check if the segments share at least one point, endpoints included.
  pub fn exist_intersection(&self, other: &Segment) -> bool {
    let a0 = Triangle::double_signed_area(&self.origin, &self.terminal, &other.origin);
    let a1 = Triangle::double_signed_area(&self.origin, &self.terminal, &other.terminal);
    let b0 = Triangle::double_signed_area(&other.origin, &other.terminal, &self.origin);
    let b1 = Triangle::double_signed_area(&other.origin, &other.terminal, &self.terminal);

    if a0 * a1 < 0.0 && b0 * b1 < 0.0 {
      return true;
    }

    if self.origin == self.terminal {
      if other.origin == other.terminal {
        return self.origin == other.origin;
      }
      return b0 == 0.0 && other.check_intersects_on_line(&self.origin);
    }
    if other.origin == other.terminal {
      return a0 == 0.0 && self.check_intersects_on_line(&other.origin);
    }

    (a0 == 0.0 && self.check_intersects_on_line(&other.origin))
      || (a1 == 0.0 && self.check_intersects_on_line(&other.terminal))
      || (b0 == 0.0 && other.check_intersects_on_line(&self.origin))
      || (b1 == 0.0 && other.check_intersects_on_line(&self.terminal))
  }

  /// Check if the endpoints lie on different sides of `line` (or on it).
  pub fn exist_intersection_with_line(&self, line: &Line) -> bool {
    let side = |p: &Vector| line.a() * p.x() + line.b() * p.y() + line.c();
    side(&self.origin) * side(&self.terminal) <= 0.0
  }

  /// For a point known to be on the supporting line, check whether it falls
  /// within the segment's extent.
  pub fn check_intersects_on_line(&self, point: &Vector) -> bool {
    let (o, t) = (self.origin, self.terminal);
    if o.x() == t.x() {
      (o.y() <= point.y() && point.y() <= t.y()) || (t.y() <= point.y() && point.y() <= o.y())
    } else {
      (o.x() <= point.x() && point.x() <= t.x()) || (t.x() <= point.x() && point.x() <= o.x())
    }
  }

  /// Proper crossing: each segment strictly straddles the other's supporting line.
  pub fn exist_intersection_except_endpoint(&self, other: &Segment) -> bool {
    Triangle::double_signed_area(&self.origin, &self.terminal, &other.origin)
      * Triangle::double_signed_area(&self.origin, &self.terminal, &other.terminal)
      < 0.0
      && Triangle::double_signed_area(&other.origin, &other.terminal, &self.origin)
        * Triangle::double_signed_area(&other.origin, &other.terminal, &self.terminal)
        < 0.0
  }

  /// Point of the segment closest to `point`.
  pub fn nearest_point(&self, point: &Vector) -> Vector {
    let vec = self.terminal - self.origin;
    let len2 = vec.r2();
    if len2 == 0.0 {
      return self.origin;
    }
    let prod = vec.inner_product(&(*point - self.origin));
    if prod <= 0.0 {
      self.origin
    } else if prod >= len2 {
      self.terminal
    } else {
      self.origin + vec * (prod / len2)
    }
  }

  pub fn dist(&self, point: &Vector) -> f64 {
    let len = self.length();
    if len == 0.0 {
      return self.origin.dist(point);
    }
    let prod = (self.terminal - self.origin).inner_product(&(*point - self.origin));
    if 0.0 <= prod && prod <= len * len {
      // Inside the slab: distance to the supporting line.
      (Triangle::double_signed_area(&self.origin, &self.terminal, point) / len).abs()
    } else {
      self.origin.dist2(point).min(self.terminal.dist2(point)).sqrt()
    }
  }

  pub fn dist_to_segment(&self, other: &Segment) -> f64 {
    if self.exist_intersection(other) {
      return 0.0;
    }
    self
      .dist(&other.origin)
      .min(self.dist(&other.terminal))
      .min(other.dist(&self.origin))
      .min(other.dist(&self.terminal))
  }

  pub fn farthest_dist(&self, point: &Vector) -> f64 {
    self.origin.dist2(point).max(self.terminal.dist2(point)).sqrt()
  }

  /// Exact test: zero signed area and within the extent.
  pub fn on_segment(&self, point: &Vector) -> bool {
    Triangle::double_signed_area(&self.origin, &self.terminal, point) == 0.0
      && self.check_intersects_on_line(point)
  }

  pub fn on_segment_weakly(&self, point: &Vector) -> bool {
    self
      .projection(point)
      .map_or(false, |proj| point.equals_weakly(&proj))
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Segment {
  type Output = Option<Vector>;
  fn intersect(self, line: &'a Line) -> Option<Vector> {
    self.intersection_with_line(line)
  }
}

impl<'a, 'b> Intersects<&'a Segment> for &'b Segment {
  type Output = Option<Vector>;
  fn intersect(self, other: &'a Segment) -> Option<Vector> {
    self.intersection_with_segment(other, true)
  }
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "(line {} {} {} {})",
      Rounded(self.origin.x()),
      Rounded(self.origin.y()),
      Rounded(self.terminal.x()),
      Rounded(self.terminal.y())
    )
  }
}
