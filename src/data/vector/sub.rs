use array_init::array_init;
use std::ops::{Neg, Sub, SubAssign};

use super::Vector;

impl SubAssign for Vector {
  fn sub_assign(&mut self, other: Vector) {
    self.0 = array_init(|i| self.0[i] - other.0[i]);
  }
}

impl<'a> SubAssign<&'a Vector> for Vector {
  fn sub_assign(&mut self, other: &'a Vector) {
    *self -= *other;
  }
}

impl Sub for Vector {
  type Output = Vector;

  fn sub(mut self, other: Vector) -> Self::Output {
    self -= other;
    self
  }
}

impl<'a, 'b> Sub<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn sub(self, other: &'a Vector) -> Self::Output {
    *self - *other
  }
}

impl Neg for Vector {
  type Output = Vector;

  fn neg(self) -> Vector {
    self.reversed()
  }
}
