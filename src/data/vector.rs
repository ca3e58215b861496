use array_init::array_init;
use num_traits::identities::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::iter::Sum;
use std::ops::Index;

use crate::data::AngleDeg;
use crate::tolerance::{weakly_equal, EPSILON};

/// A 2D point or displacement.
///
/// In-place operations (`+=`, [`scale`](Vector::scale), [`rotate`](Vector::rotate),
/// [`set_length`](Vector::set_length), ...) are the canonical implementations. The
/// copy-returning forms (`+`, `*`, [`rotated`](Vector::rotated),
/// [`with_length`](Vector::with_length), ...) copy `self` and apply the in-place
/// operation to the copy.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector(array_init(|_| rng.gen()))
  }
}

impl Vector {
  pub const fn new(x: f64, y: f64) -> Vector {
    Vector([x, y])
  }

  /// Build a vector from its magnitude and direction.
  pub fn polar(radius: f64, dir: AngleDeg) -> Vector {
    Vector([radius * dir.cos(), radius * dir.sin()])
  }

  pub fn x(&self) -> f64 {
    self.0[0]
  }

  pub fn y(&self) -> f64 {
    self.0[1]
  }

  pub fn set_x(&mut self, x: f64) {
    self.0[0] = x;
  }

  pub fn set_y(&mut self, y: f64) {
    self.0[1] = y;
  }

  pub fn set_polar(&mut self, radius: f64, dir: AngleDeg) {
    *self = Vector::polar(radius, dir);
  }

  /// Squared magnitude.
  pub fn r2(&self) -> f64 {
    self.0.iter().map(|v| v * v).sum()
  }

  /// Magnitude.
  pub fn r(&self) -> f64 {
    self.r2().sqrt()
  }

  /// Direction from the origin. The zero vector points along angle 0.
  pub fn th(&self) -> AngleDeg {
    AngleDeg::new(AngleDeg::atan2_deg(self.y(), self.x()))
  }

  pub fn dist2(&self, other: &Vector) -> f64 {
    (*other - *self).r2()
  }

  pub fn dist(&self, other: &Vector) -> f64 {
    self.dist2(other).sqrt()
  }

  /// Component-wise absolute value.
  #[must_use]
  pub fn abs(&self) -> Vector {
    Vector(array_init(|i| self.0[i].abs()))
  }

  pub fn rotate(&mut self, angle: AngleDeg) {
    let (sin, cos) = (angle.sin(), angle.cos());
    let [x, y] = self.0;
    self.0 = [x * cos - y * sin, x * sin + y * cos];
  }

  #[must_use]
  pub fn rotated(&self, angle: AngleDeg) -> Vector {
    let mut vec = *self;
    vec.rotate(angle);
    vec
  }

  /// Point in the direction `dir` while keeping the magnitude.
  pub fn set_dir(&mut self, dir: AngleDeg) {
    let radius = self.r();
    self.set_polar(radius, dir);
  }

  /// Scale to the given magnitude. Vectors shorter than [`EPSILON`] are left
  /// untouched.
  pub fn set_length(&mut self, length: f64) {
    let mag = self.r();
    if mag > EPSILON {
      self.scale(length / mag);
    }
  }

  #[must_use]
  pub fn with_length(&self, length: f64) -> Vector {
    let mut vec = *self;
    vec.set_length(length);
    vec
  }

  pub fn normalize(&mut self) {
    self.set_length(1.0);
  }

  #[must_use]
  pub fn normalized(&self) -> Vector {
    self.with_length(1.0)
  }

  pub fn reverse(&mut self) {
    self.0 = array_init(|i| -self.0[i]);
  }

  #[must_use]
  pub fn reversed(&self) -> Vector {
    let mut vec = *self;
    vec.reverse();
    vec
  }

  /// Dot product.
  pub fn inner_product(&self, other: &Vector) -> f64 {
    self.x() * other.x() + self.y() * other.y()
  }

  /// Z component of the cross product. Positive when `other` lies
  /// counter-clockwise of `self`.
  pub fn outer_product(&self, other: &Vector) -> f64 {
    self.x() * other.y() - self.y() * other.x()
  }

  /// Per-axis comparison with [`WEAK_EPSILON`](crate::tolerance::WEAK_EPSILON).
  pub fn equals_weakly(&self, other: &Vector) -> bool {
    weakly_equal(self.x(), other.x()) && weakly_equal(self.y(), other.y())
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<[f64; 2]> for Vector {
  fn from(array: [f64; 2]) -> Vector {
    Vector(array)
  }
}

impl From<(f64, f64)> for Vector {
  fn from((x, y): (f64, f64)) -> Vector {
    Vector([x, y])
  }
}

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0; 2])
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl Sum for Vector {
  fn sum<I>(iter: I) -> Vector
  where
    I: Iterator<Item = Vector>,
  {
    let mut acc = Zero::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl fmt::Display for Vector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x(), self.y())
  }
}
