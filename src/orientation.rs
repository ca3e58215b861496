use crate::data::{Triangle, Vector};
use crate::tolerance::EPSILON;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Turns whose doubled signed area is smaller than [`EPSILON`] in magnitude
  /// are reported as [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rgeom2d::data::Vector;
  /// # use rgeom2d::Orientation;
  /// let p1 = Vector::new(0.0, 0.0);
  /// let p2 = Vector::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(-1.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Vector::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new(p1: &Vector, p2: &Vector, p3: &Vector) -> Orientation {
    Orientation::from_area(Triangle::double_signed_area(p1, p2, p3))
  }

  /// Classify a doubled signed area.
  pub fn from_area(area: f64) -> Orientation {
    if area.abs() < EPSILON {
      CoLinear
    } else if area > 0.0 {
      CounterClockWise
    } else {
      ClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
