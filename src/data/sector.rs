use std::f64::consts::PI;

use crate::data::{AngleDeg, Vector};

/// Ring slice around `center` between two radii, swept counter-clockwise from
/// `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
  center: Vector,
  min_r: f64,
  max_r: f64,
  start: AngleDeg,
  end: AngleDeg,
}

impl Sector {
  /// The inner radius is clamped to be non-negative and the outer radius to be
  /// at least the inner one.
  pub fn new(center: Vector, min_r: f64, max_r: f64, start: AngleDeg, end: AngleDeg) -> Sector {
    let min_r = min_r.max(0.0);
    Sector {
      center,
      min_r,
      max_r: max_r.max(min_r),
      start,
      end,
    }
  }

  pub fn center(&self) -> Vector {
    self.center
  }

  pub fn radius_min(&self) -> f64 {
    self.min_r
  }

  pub fn radius_max(&self) -> f64 {
    self.max_r
  }

  pub fn angle_start(&self) -> AngleDeg {
    self.start
  }

  pub fn angle_end(&self) -> AngleDeg {
    self.end
  }

  // Swept angle in degrees, in [0, 360).
  fn span(&self) -> f64 {
    let span = (self.end - self.start).degrees();
    if span < 0.0 {
      span + 360.0
    } else {
      span
    }
  }

  pub fn area(&self) -> f64 {
    (self.max_r * self.max_r - self.min_r * self.min_r) * PI * self.span() / 360.0
  }

  pub fn contains(&self, point: &Vector) -> bool {
    let rel = *point - self.center;
    let dist2 = rel.r2();
    self.min_r * self.min_r <= dist2
      && dist2 <= self.max_r * self.max_r
      && rel.th().is_within(&self.start, &self.end)
  }

  /// Length of the inner arc.
  pub fn circumference_min(&self) -> f64 {
    2.0 * self.min_r * PI * self.span() / 360.0
  }

  /// Length of the outer arc.
  pub fn circumference_max(&self) -> f64 {
    2.0 * self.max_r * PI * self.span() / 360.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn radii_are_clamped() {
    let sector = Sector::new(Vector::default(), -1.0, -2.0, AngleDeg::new(0.0), AngleDeg::new(90.0));
    assert_eq!(sector.radius_min(), 0.0);
    assert_eq!(sector.radius_max(), 0.0);
    let sector = Sector::new(Vector::default(), 3.0, 1.0, AngleDeg::new(0.0), AngleDeg::new(90.0));
    assert_eq!(sector.radius_max(), 3.0);
  }

  #[test]
  fn quarter_ring() {
    let sector = Sector::new(Vector::default(), 1.0, 2.0, AngleDeg::new(0.0), AngleDeg::new(90.0));
    assert_abs_diff_eq!(sector.area(), 3.0 * PI / 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sector.circumference_min(), PI / 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sector.circumference_max(), PI, epsilon = 1e-12);
    assert!(sector.contains(&Vector::new(1.0, 1.0)));
    assert!(!sector.contains(&Vector::new(0.5, 0.5)));
    assert!(!sector.contains(&Vector::new(2.0, 2.0)));
    assert!(!sector.contains(&Vector::new(-1.0, 1.0)));
  }

  #[test]
  fn wrapping_span() {
    // From 90 counter-clockwise to 0 covers three quadrants.
    let sector = Sector::new(Vector::default(), 0.0, 1.0, AngleDeg::new(90.0), AngleDeg::new(0.0));
    assert_abs_diff_eq!(sector.area(), 0.75 * PI, epsilon = 1e-12);
    assert!(sector.contains(&Vector::new(-0.5, -0.5)));
    assert!(!sector.contains(&Vector::new(0.5, 0.5)));
  }
}
