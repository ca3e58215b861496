use tracing::warn;

use crate::data::{AngleDeg, Vector};
use crate::tolerance::EPSILON;
use crate::{Error, Intersects};

/// Infinite line `a*x + b*y + c = 0`.
///
/// `(a, b)` is never `(0, 0)`. Coefficients are not normalized, so two equal lines
/// may be stored with proportional coefficients.
#[derive(Debug, Clone, Copy)]
pub struct Line {
  a: f64,
  b: f64,
  c: f64,
}

impl Line {
  /// Line with the given coefficients.
  ///
  /// # Errors
  /// [`Error::DegenerateLine`] if `a` and `b` are both zero.
  pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Line, Error> {
    if a == 0.0 && b == 0.0 {
      return Err(Error::DegenerateLine);
    }
    Ok(Line { a, b, c })
  }

  /// Line through two points, directed from `p1` to `p2`.
  ///
  /// # Errors
  /// [`Error::DegenerateLine`] if the points are identical.
  ///
  /// ```rust
  /// # use rgeom2d::data::{Line, Vector};
  /// # use rgeom2d::Error;
  /// let p = Vector::new(1.0, 1.0);
  /// assert_eq!(Line::from_points(p, p).err(), Some(Error::DegenerateLine));
  /// ```
  pub fn from_points(p1: Vector, p2: Vector) -> Result<Line, Error> {
    let Line { a, b, c } = Line::through(p1, p2);
    Line::from_coefficients(a, b, c)
  }

  /// Line through `origin` pointing in direction `dir`.
  pub fn from_origin_and_angle(origin: Vector, dir: AngleDeg) -> Line {
    let a = -dir.sin();
    let b = dir.cos();
    Line {
      a,
      b,
      c: -a * origin.x() - b * origin.y(),
    }
  }

  /// The line `x = x`.
  pub fn vertical(x: f64) -> Line {
    Line {
      a: 1.0,
      b: 0.0,
      c: -x,
    }
  }

  /// The line `y = y`.
  pub fn horizontal(y: f64) -> Line {
    Line {
      a: 0.0,
      b: 1.0,
      c: -y,
    }
  }

  // Callers guarantee p1 != p2.
  fn through(p1: Vector, p2: Vector) -> Line {
    let a = -(p2.y() - p1.y());
    let b = p2.x() - p1.x();
    Line {
      a,
      b,
      c: -a * p1.x() - b * p1.y(),
    }
  }

  pub fn a(&self) -> f64 {
    self.a
  }

  pub fn b(&self) -> f64 {
    self.b
  }

  pub fn c(&self) -> f64 {
    self.c
  }

  /// X coordinate at height `y`. `None` for (near) horizontal lines.
  pub fn get_x(&self, y: f64) -> Option<f64> {
    if self.a.abs() < EPSILON {
      return None;
    }
    Some(-(self.b * y + self.c) / self.a)
  }

  /// Y coordinate at `x`. `None` for (near) vertical lines.
  pub fn get_y(&self, x: f64) -> Option<f64> {
    if self.b.abs() < EPSILON {
      return None;
    }
    Some(-(self.a * x + self.c) / self.b)
  }

  pub fn dist(&self, point: &Vector) -> f64 {
    (self.a * point.x() + self.b * point.y() + self.c).abs() / self.a.hypot(self.b)
  }

  pub fn dist2(&self, point: &Vector) -> f64 {
    let d = self.a * point.x() + self.b * point.y() + self.c;
    (d * d) / (self.a * self.a + self.b * self.b)
  }

  pub fn is_parallel(&self, other: &Line) -> bool {
    (self.a * other.b - other.a * self.b).abs() < EPSILON
  }

  /// Crossing point of two lines, `None` when they are parallel or coincident.
  pub fn intersection(&self, other: &Line) -> Option<Vector> {
    let det = self.a * other.b - self.b * other.a;
    if det.abs() < EPSILON {
      return None;
    }
    Some(Vector::new(
      (self.b * other.c - other.b * self.c) / det,
      (other.a * self.c - self.a * other.c) / det,
    ))
  }

  /// Line through `point` perpendicular to this one.
  pub fn perpendicular(&self, point: &Vector) -> Line {
    Line {
      a: self.b,
      b: -self.a,
      c: self.a * point.y() - self.b * point.x(),
    }
  }

  /// Foot of the perpendicular dropped from `point`.
  pub fn projection(&self, point: &Vector) -> Option<Vector> {
    self.intersection(&self.perpendicular(point))
  }

  /// Line through `origin` bisecting the arc from `left` to `right`.
  pub fn angle_bisector(origin: Vector, left: &AngleDeg, right: &AngleDeg) -> Line {
    Line::from_origin_and_angle(origin, AngleDeg::bisect(left, right))
  }

  /// Perpendicular bisector of the segment `p1 p2`.
  ///
  /// Coincident points have no bisector. That case is logged and answered with
  /// the line through `p1` and `(p1.x + 1, p2.y)`; use
  /// [`try_perpendicular_bisector`](Line::try_perpendicular_bisector) to reject it.
  pub fn perpendicular_bisector(p1: Vector, p2: Vector) -> Line {
    match Line::try_perpendicular_bisector(p1, p2) {
      Ok(line) => line,
      Err(_) => {
        warn!(?p1, ?p2, "perpendicular bisector of coincident points");
        Line::through(p1, Vector::new(p1.x() + 1.0, p2.y()))
      }
    }
  }

  /// # Errors
  /// [`Error::CoincidentPoints`] if the points coincide within [`EPSILON`].
  pub fn try_perpendicular_bisector(p1: Vector, p2: Vector) -> Result<Line, Error> {
    if (p2.x() - p1.x()).abs() < EPSILON && (p2.y() - p1.y()).abs() < EPSILON {
      return Err(Error::CoincidentPoints);
    }
    let c = (p2.x() * p2.x() - p1.x() * p1.x() + p2.y() * p2.y() - p1.y() * p1.y()) * -0.5;
    Ok(Line {
      a: p2.x() - p1.x(),
      b: p2.y() - p1.y(),
      c,
    })
  }
}

impl PartialEq for Line {
  fn eq(&self, other: &Line) -> bool {
    (self.a * other.b - other.a * self.b).abs() < EPSILON && (self.c - other.c).abs() < EPSILON
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Line {
  type Output = Option<Vector>;
  fn intersect(self, other: &'a Line) -> Option<Vector> {
    self.intersection(other)
  }
}
