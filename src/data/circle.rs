use std::f64::consts::PI;
use std::fmt;

use crate::data::{Line, Ray, Segment, Triangle, Vector};
use crate::intersection::{dedup_weakly, filter_solutions};
use crate::tolerance::{is_zero, CIRCUMCENTER_EPSILON, EPSILON};
use crate::utils::{solve_quadratic, Rounded};
use crate::{Intersects, Solutions};

/// Circle with a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
  center: Vector,
  radius: f64,
}

impl Circle {
  /// Negative radii are clamped to zero.
  pub fn new(center: Vector, radius: f64) -> Circle {
    Circle {
      center,
      radius: radius.max(0.0),
    }
  }

  /// Circle through three points. `None` when the points are collinear.
  ///
  /// ```rust
  /// # use rgeom2d::data::{Circle, Vector};
  /// let circle = Circle::circum_circle(
  ///   &Vector::new(0.0, 0.0),
  ///   &Vector::new(1.0, 0.0),
  ///   &Vector::new(0.0, 1.0),
  /// ).unwrap();
  /// assert_eq!(circle.center(), Vector::new(0.5, 0.5));
  /// ```
  pub fn circum_circle(p0: &Vector, p1: &Vector, p2: &Vector) -> Option<Circle> {
    let center = Triangle::new(*p0, *p1, *p2).circumcenter()?;
    Some(Circle::new(center, center.dist(p0)))
  }

  /// Check whether `point` lies strictly inside the circle through `p0`, `p1`
  /// and `p2`. Collinear triples contain nothing.
  pub fn circum_circle_contains(point: &Vector, p0: &Vector, p1: &Vector, p2: &Vector) -> bool {
    let d1 = *p1 - *p0;
    let d2 = *p2 - *p0;
    let avg1 = d1.x() * (p0.x() + p1.x()) + d1.y() * (p0.y() + p1.y());
    let avg2 = d2.x() * (p0.x() + p2.x()) + d2.y() * (p0.y() + p2.y());
    let area = 2.0 * (d1.x() * (p2.y() - p1.y()) - d1.y() * (p2.x() - p1.x()));
    if area.abs() < CIRCUMCENTER_EPSILON {
      return false;
    }
    let center = Vector::new(
      (d2.y() * avg1 - d1.y() * avg2) / area,
      (d1.x() * avg2 - d2.x() * avg1) / area,
    );
    center.dist2(point) < center.dist2(p0) - EPSILON * EPSILON
  }

  pub fn center(&self) -> Vector {
    self.center
  }

  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn area(&self) -> f64 {
    PI * self.radius * self.radius
  }

  /// Strict containment: points on the circumference are outside.
  pub fn contains(&self, point: &Vector) -> bool {
    self.center.dist2(point) < self.radius * self.radius
  }

  pub fn intersection_with_line(&self, line: &Line) -> Solutions {
    let (cx, cy, r) = (self.center.x(), self.center.y(), self.radius);
    let mut sols = Solutions::new();

    if is_zero(line.a()) {
      if is_zero(line.b()) {
        return sols;
      }
      // Horizontal line: y is fixed, solve for x.
      let y = -line.c() / line.b();
      let roots = solve_quadratic(1.0, -2.0 * cx, cx * cx + (y - cy) * (y - cy) - r * r);
      for x in roots.into_iter().flatten() {
        sols.push(Vector::new(x, y));
      }
    } else {
      let b_a = line.b() / line.a();
      let c_a = line.c() / line.a();
      let roots = solve_quadratic(
        1.0 + b_a * b_a,
        2.0 * (-cy + (c_a + cx) * b_a),
        (c_a + cx) * (c_a + cx) + cy * cy - r * r,
      );
      for y in roots.into_iter().flatten() {
        if let Some(x) = line.get_x(y) {
          sols.push(Vector::new(x, y));
        }
      }
    }

    dedup_weakly(&mut sols);
    sols
  }

  pub fn intersection_with_ray(&self, ray: &Ray) -> Solutions {
    filter_solutions(self.intersection_with_line(&ray.line()), |p| {
      ray.in_right_dir(p, 1.0)
    })
  }

  pub fn intersection_with_segment(&self, segment: &Segment) -> Solutions {
    match segment.line() {
      Ok(line) => filter_solutions(self.intersection_with_line(&line), |p| segment.contains(p)),
      Err(_) => Solutions::new(),
    }
  }

  pub fn intersection_with_circle(&self, other: &Circle) -> Solutions {
    let rel = other.center - self.center;
    let dist = rel.r();
    if dist < (self.radius - other.radius).abs() || self.radius + other.radius < dist {
      return Solutions::new();
    }
    // Subtracting the two circle equations leaves their radical line.
    let radical = Line::from_coefficients(
      -2.0 * rel.x(),
      -2.0 * rel.y(),
      other.center.r2() - other.radius * other.radius - self.center.r2()
        + self.radius * self.radius,
    );
    match radical {
      Ok(line) => self.intersection_with_line(&line),
      // Concentric circles.
      Err(_) => Solutions::new(),
    }
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Circle {
  type Output = Solutions;
  fn intersect(self, line: &'a Line) -> Solutions {
    self.intersection_with_line(line)
  }
}

impl<'a, 'b> Intersects<&'a Ray> for &'b Circle {
  type Output = Solutions;
  fn intersect(self, ray: &'a Ray) -> Solutions {
    self.intersection_with_ray(ray)
  }
}

impl<'a, 'b> Intersects<&'a Segment> for &'b Circle {
  type Output = Solutions;
  fn intersect(self, segment: &'a Segment) -> Solutions {
    self.intersection_with_segment(segment)
  }
}

impl<'a, 'b> Intersects<&'a Circle> for &'b Circle {
  type Output = Solutions;
  fn intersect(self, other: &'a Circle) -> Solutions {
    self.intersection_with_circle(other)
  }
}

impl fmt::Display for Circle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "(circle {} {} {})",
      Rounded(self.center.x()),
      Rounded(self.center.y()),
      Rounded(self.radius)
    )
  }
}
