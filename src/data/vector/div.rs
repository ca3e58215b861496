use array_init::array_init;
use std::ops::{Div, DivAssign};

use super::Vector;
use crate::tolerance::EPSILON;

// Division by a near-zero scalar leaves the vector unchanged.
impl DivAssign<f64> for Vector {
  fn div_assign(&mut self, divisor: f64) {
    if divisor.abs() < EPSILON {
      return;
    }
    self.0 = array_init(|i| self.0[i] / divisor);
  }
}

impl Div<f64> for Vector {
  type Output = Vector;

  fn div(mut self, divisor: f64) -> Self::Output {
    self /= divisor;
    self
  }
}
