use array_init::array_init;
use std::ops::{Mul, MulAssign};

use super::Vector;

impl Vector {
  /// Multiply both coordinates by `factor`, in place.
  pub fn scale(&mut self, factor: f64) {
    self.0 = array_init(|i| self.0[i] * factor);
  }
}

impl MulAssign<f64> for Vector {
  fn mul_assign(&mut self, factor: f64) {
    self.scale(factor);
  }
}

impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(mut self, factor: f64) -> Self::Output {
    self.scale(factor);
    self
  }
}

impl Mul<Vector> for f64 {
  type Output = Vector;

  fn mul(self, vec: Vector) -> Self::Output {
    vec * self
  }
}
