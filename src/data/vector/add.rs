use array_init::array_init;
use std::ops::{Add, AddAssign};

use super::Vector;

impl AddAssign for Vector {
  fn add_assign(&mut self, other: Vector) {
    self.0 = array_init(|i| self.0[i] + other.0[i]);
  }
}

impl<'a> AddAssign<&'a Vector> for Vector {
  fn add_assign(&mut self, other: &'a Vector) {
    *self += *other;
  }
}

impl Add for Vector {
  type Output = Vector;

  fn add(mut self, other: Vector) -> Self::Output {
    self += other;
    self
  }
}

impl<'a, 'b> Add<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn add(self, other: &'a Vector) -> Self::Output {
    *self + *other
  }
}
