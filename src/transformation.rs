use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::data::{AngleDeg, Polygon, Vector};
use crate::tolerance::EPSILON;
use crate::utils::Rounded;

/// Affine transform of the plane.
///
/// A vector `(x, y)` is mapped to
/// `(m11 * x + m12 * y + dx, m21 * x + m22 * y + dy)`. The product `a * b`
/// applies `b` first.
///
/// ```rust
/// # use rgeom2d::data::{AngleDeg, Vector};
/// # use rgeom2d::Matrix2D;
/// let mut m = Matrix2D::make_scaling(2.0, 2.0);
/// m.translate(1.0, 0.0);
/// assert_eq!(m * Vector::new(1.0, 1.0), Vector::new(3.0, 2.0));
///
/// let quarter = Matrix2D::make_rotation(AngleDeg::new(90.0));
/// assert!((quarter * Vector::new(1.0, 0.0)).equals_weakly(&Vector::new(0.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
  m11: f64,
  m12: f64,
  m21: f64,
  m22: f64,
  dx: f64,
  dy: f64,
}

impl Default for Matrix2D {
  fn default() -> Matrix2D {
    Matrix2D::identity()
  }
}

impl Matrix2D {
  pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Matrix2D {
    Matrix2D {
      m11,
      m12,
      m21,
      m22,
      dx,
      dy,
    }
  }

  pub fn identity() -> Matrix2D {
    Matrix2D::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
  }

  pub fn make_translation(dx: f64, dy: f64) -> Matrix2D {
    Matrix2D::new(1.0, 0.0, 0.0, 1.0, dx, dy)
  }

  pub fn make_scaling(sx: f64, sy: f64) -> Matrix2D {
    Matrix2D::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
  }

  /// Counter-clockwise rotation around the origin.
  pub fn make_rotation(angle: AngleDeg) -> Matrix2D {
    let (sin, cos) = (angle.sin(), angle.cos());
    Matrix2D::new(cos, -sin, sin, cos, 0.0, 0.0)
  }

  pub fn m11(&self) -> f64 {
    self.m11
  }

  pub fn m12(&self) -> f64 {
    self.m12
  }

  pub fn m21(&self) -> f64 {
    self.m21
  }

  pub fn m22(&self) -> f64 {
    self.m22
  }

  pub fn dx(&self) -> f64 {
    self.dx
  }

  pub fn dy(&self) -> f64 {
    self.dy
  }

  pub fn reset(&mut self) {
    *self = Matrix2D::identity();
  }

  /// Determinant of the linear part.
  pub fn det(&self) -> f64 {
    self.m11 * self.m22 - self.m12 * self.m21
  }

  pub fn invertible(&self) -> bool {
    self.det().abs() > EPSILON
  }

  /// `None` unless [`Matrix2D::invertible`].
  pub fn inverted(&self) -> Option<Matrix2D> {
    if !self.invertible() {
      return None;
    }
    let dinv = 1.0 / self.det();
    Some(Matrix2D::new(
      self.m22 * dinv,
      -self.m12 * dinv,
      -self.m21 * dinv,
      self.m11 * dinv,
      (self.m12 * self.dy - self.dx * self.m22) * dinv,
      (self.dx * self.m21 - self.m11 * self.dy) * dinv,
    ))
  }

  /// Same as `*self = Matrix2D::make_translation(dx, dy) * *self`.
  pub fn translate(&mut self, dx: f64, dy: f64) {
    self.dx += dx;
    self.dy += dy;
  }

  /// Same as `*self = Matrix2D::make_scaling(sx, sy) * *self`.
  pub fn scale(&mut self, sx: f64, sy: f64) {
    self.m11 *= sx;
    self.m12 *= sx;
    self.dx *= sx;
    self.m21 *= sy;
    self.m22 *= sy;
    self.dy *= sy;
  }

  /// Same as `*self = Matrix2D::make_rotation(angle) * *self`.
  pub fn rotate(&mut self, angle: AngleDeg) {
    let (sin, cos) = (angle.sin(), angle.cos());
    *self = Matrix2D::new(
      self.m11 * cos - self.m21 * sin,
      self.m12 * cos - self.m22 * sin,
      self.m11 * sin + self.m21 * cos,
      self.m12 * sin + self.m22 * cos,
      self.dx * cos - self.dy * sin,
      self.dx * sin + self.dy * cos,
    );
  }

  pub fn transform(&self, v: &Vector) -> Vector {
    Vector::new(
      self.m11 * v.x() + self.m12 * v.y() + self.dx,
      self.m21 * v.x() + self.m22 * v.y() + self.dy,
    )
  }
}

impl Mul for Matrix2D {
  type Output = Matrix2D;
  fn mul(self, other: Matrix2D) -> Matrix2D {
    Matrix2D::new(
      self.m11 * other.m11 + self.m12 * other.m21,
      self.m11 * other.m12 + self.m12 * other.m22,
      self.m21 * other.m11 + self.m22 * other.m21,
      self.m21 * other.m12 + self.m22 * other.m22,
      self.m11 * other.dx + self.m12 * other.dy + self.dx,
      self.m21 * other.dx + self.m22 * other.dy + self.dy,
    )
  }
}

impl MulAssign for Matrix2D {
  fn mul_assign(&mut self, other: Matrix2D) {
    *self = *self * other;
  }
}

impl Mul<Vector> for Matrix2D {
  type Output = Vector;
  fn mul(self, other: Vector) -> Vector {
    self.transform(&other)
  }
}

impl Mul<&Vector> for &Matrix2D {
  type Output = Vector;
  fn mul(self, other: &Vector) -> Vector {
    self.transform(other)
  }
}

impl Mul<&Polygon> for &Matrix2D {
  type Output = Polygon;
  fn mul(self, other: &Polygon) -> Polygon {
    other.vertices().iter().map(|v| self * v).collect()
  }
}

impl fmt::Display for Matrix2D {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[{}, {}, {}, {}, {}, {}]",
      Rounded(self.m11),
      Rounded(self.m12),
      Rounded(self.m21),
      Rounded(self.m22),
      Rounded(self.dx),
      Rounded(self.dy)
    )
  }
}
