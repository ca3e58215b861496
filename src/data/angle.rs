use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::tolerance::EPSILON;

pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

/// Planar direction in degrees, always normalized into `(-180, 180]`.
///
/// Positive angles turn counter-clockwise from the x axis (atan2 convention).
/// `a.is_left_of(b)` holds when `b` is reached from `a` by turning less than
/// half a circle in the positive direction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AngleDeg(f64);

/// Fold a raw degree value into `(-180, 180]`.
pub fn normalize_angle(degrees: f64) -> f64 {
  let mut dir = degrees;
  if dir.abs() > 360.0 {
    dir %= 360.0;
  }
  if dir <= -180.0 {
    dir += 360.0;
  }
  if dir > 180.0 {
    dir -= 360.0;
  }
  dir
}

// The arc from `from` to `to` is shorter than half a circle in the positive direction.
fn is_positive_short_arc(diff: f64) -> bool {
  (0.0 < diff && diff < 180.0) || diff < -180.0
}

fn is_positive_short_arc_or_zero(diff: f64) -> bool {
  (0.0 <= diff && diff < 180.0) || diff < -180.0
}

impl AngleDeg {
  pub fn new(degrees: f64) -> AngleDeg {
    AngleDeg(normalize_angle(degrees))
  }

  pub fn from_radians(radians: f64) -> AngleDeg {
    AngleDeg::new(radians * RAD2DEG)
  }

  pub fn degrees(&self) -> f64 {
    self.0
  }

  pub fn radians(&self) -> f64 {
    self.0 * DEG2RAD
  }

  pub fn set_degrees(&mut self, degrees: f64) {
    self.0 = normalize_angle(degrees);
  }

  pub fn abs(&self) -> f64 {
    self.0.abs()
  }

  /// Turn around by half a circle, in place.
  pub fn reverse(&mut self) {
    let reversed = if self.0 >= 0.0 {
      -(180.0 - self.0)
    } else {
      180.0 + self.0
    };
    self.set_degrees(reversed);
  }

  #[must_use]
  pub fn reversed(&self) -> AngleDeg {
    let mut angle = *self;
    angle.reverse();
    angle
  }

  pub fn is_left_of(&self, other: &AngleDeg) -> bool {
    is_positive_short_arc(other.0 - self.0)
  }

  pub fn is_right_of(&self, other: &AngleDeg) -> bool {
    is_positive_short_arc(self.0 - other.0)
  }

  pub fn is_left_equal_of(&self, other: &AngleDeg) -> bool {
    is_positive_short_arc_or_zero(other.0 - self.0)
  }

  pub fn is_right_equal_of(&self, other: &AngleDeg) -> bool {
    is_positive_short_arc_or_zero(self.0 - other.0)
  }

  /// Check if this angle lies on the arc swept counter-clockwise from `left` to `right`,
  /// both ends included.
  pub fn is_within(&self, left: &AngleDeg, right: &AngleDeg) -> bool {
    if left.is_left_equal_of(right) {
      left.is_left_equal_of(self) && self.is_left_equal_of(right)
    } else {
      // The arc is larger than half a circle.
      self.is_left_equal_of(right) || left.is_left_equal_of(self)
    }
  }

  /// Angle halfway along the arc going from `left` to `right`.
  pub fn bisect(left: &AngleDeg, right: &AngleDeg) -> AngleDeg {
    let mut result = *left;
    let rel = *right - *left;
    result += rel.0 * 0.5;
    if left.is_left_of(right) {
      result
    } else {
      // The arc is larger than half a circle.
      result + 180.0
    }
  }

  pub fn sin(&self) -> f64 {
    self.radians().sin()
  }

  pub fn cos(&self) -> f64 {
    self.radians().cos()
  }

  pub fn tan(&self) -> f64 {
    self.radians().tan()
  }

  pub fn sin_deg(degrees: f64) -> f64 {
    (degrees * DEG2RAD).sin()
  }

  pub fn cos_deg(degrees: f64) -> f64 {
    (degrees * DEG2RAD).cos()
  }

  pub fn tan_deg(degrees: f64) -> f64 {
    (degrees * DEG2RAD).tan()
  }

  /// `acos` in degrees. Inputs outside `[-1, 1]` are clamped.
  pub fn acos_deg(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos() * RAD2DEG
  }

  /// `asin` in degrees. Inputs outside `[-1, 1]` are clamped.
  pub fn asin_deg(sine: f64) -> f64 {
    sine.clamp(-1.0, 1.0).asin() * RAD2DEG
  }

  pub fn atan_deg(value: f64) -> f64 {
    value.atan() * RAD2DEG
  }

  /// `atan2` in degrees; zero for a vanishing input vector.
  pub fn atan2_deg(y: f64, x: f64) -> f64 {
    if x.abs() < EPSILON && y.abs() < EPSILON {
      0.0
    } else {
      y.atan2(x) * RAD2DEG
    }
  }
}

impl From<f64> for AngleDeg {
  fn from(degrees: f64) -> AngleDeg {
    AngleDeg::new(degrees)
  }
}

impl From<AngleDeg> for f64 {
  fn from(angle: AngleDeg) -> f64 {
    angle.0
  }
}

impl Distribution<AngleDeg> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AngleDeg {
    AngleDeg::new(rng.gen_range(-180.0..180.0))
  }
}

impl fmt::Display for AngleDeg {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arithmetic

impl AddAssign for AngleDeg {
  fn add_assign(&mut self, other: AngleDeg) {
    self.set_degrees(self.0 + other.0);
  }
}

impl AddAssign<f64> for AngleDeg {
  fn add_assign(&mut self, other: f64) {
    self.set_degrees(self.0 + other);
  }
}

impl SubAssign for AngleDeg {
  fn sub_assign(&mut self, other: AngleDeg) {
    self.set_degrees(self.0 - other.0);
  }
}

impl SubAssign<f64> for AngleDeg {
  fn sub_assign(&mut self, other: f64) {
    self.set_degrees(self.0 - other);
  }
}

impl MulAssign<f64> for AngleDeg {
  fn mul_assign(&mut self, scalar: f64) {
    self.set_degrees(self.0 * scalar);
  }
}

impl DivAssign<f64> for AngleDeg {
  fn div_assign(&mut self, scalar: f64) {
    if scalar.abs() < EPSILON {
      return;
    }
    self.set_degrees(self.0 / scalar);
  }
}

macro_rules! derive_binary_op {
  ( $trait:ident, $method:ident, $assign:ident, $rhs:ty ) => {
    impl $trait<$rhs> for AngleDeg {
      type Output = AngleDeg;
      fn $method(mut self, other: $rhs) -> AngleDeg {
        self.$assign(other);
        self
      }
    }
  };
}

derive_binary_op!(Add, add, add_assign, AngleDeg);
derive_binary_op!(Add, add, add_assign, f64);
derive_binary_op!(Sub, sub, sub_assign, AngleDeg);
derive_binary_op!(Sub, sub, sub_assign, f64);
derive_binary_op!(Mul, mul, mul_assign, f64);
derive_binary_op!(Div, div, div_assign, f64);

impl Neg for AngleDeg {
  type Output = AngleDeg;
  fn neg(self) -> AngleDeg {
    AngleDeg::new(-self.0)
  }
}
