use crate::data::{AngleDeg, Line, Vector};
use crate::Intersects;

/// Half-line starting at `origin` and pointing along `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
  origin: Vector,
  dir: AngleDeg,
}

impl Ray {
  /// Angular tolerance, in degrees, used to decide whether a point on the
  /// supporting line lies in front of the origin.
  pub const DEFAULT_DIR_THRESHOLD: f64 = 10.0;

  pub fn new(origin: Vector, dir: AngleDeg) -> Ray {
    Ray { origin, dir }
  }

  /// Ray from `origin` through `target`.
  pub fn from_points(origin: Vector, target: Vector) -> Ray {
    Ray {
      origin,
      dir: (target - origin).th(),
    }
  }

  pub fn origin(&self) -> Vector {
    self.origin
  }

  pub fn dir(&self) -> AngleDeg {
    self.dir
  }

  /// Supporting line.
  pub fn line(&self) -> Line {
    Line::from_origin_and_angle(self.origin, self.dir)
  }

  /// Check whether the direction from the origin to `point` differs from the
  /// ray's direction by less than `threshold` degrees.
  pub fn in_right_dir(&self, point: &Vector, threshold: f64) -> bool {
    ((*point - self.origin).th() - self.dir).abs() < threshold
  }

  pub fn intersection_with_line(&self, line: &Line) -> Option<Vector> {
    self
      .line()
      .intersection(line)
      .filter(|p| self.in_right_dir(p, Ray::DEFAULT_DIR_THRESHOLD))
  }

  pub fn intersection_with_ray(&self, other: &Ray) -> Option<Vector> {
    self.line().intersection(&other.line()).filter(|p| {
      self.in_right_dir(p, Ray::DEFAULT_DIR_THRESHOLD)
        && other.in_right_dir(p, Ray::DEFAULT_DIR_THRESHOLD)
    })
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Ray {
  type Output = Option<Vector>;
  fn intersect(self, line: &'a Line) -> Option<Vector> {
    self.intersection_with_line(line)
  }
}

impl<'a, 'b> Intersects<&'a Ray> for &'b Ray {
  type Output = Option<Vector>;
  fn intersect(self, other: &'a Ray) -> Option<Vector> {
    self.intersection_with_ray(other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;
  use claims::{assert_none, assert_ok, assert_some};

  #[test]
  fn direction_from_points() {
    let ray = Ray::from_points(Vector::new(1.0, 1.0), Vector::new(1.0, 5.0));
    assert_abs_diff_eq!(ray.dir().degrees(), 90.0, epsilon = 1e-9);
    assert!(ray.in_right_dir(&Vector::new(1.0, 2.0), 1.0));
    assert!(!ray.in_right_dir(&Vector::new(1.0, 0.0), 1.0));
  }

  #[test]
  fn hits_line_in_front() {
    let ray = Ray::new(Vector::default(), AngleDeg::new(0.0));
    let ahead = assert_ok!(Line::from_points(Vector::new(5.0, -1.0), Vector::new(5.0, 1.0)));
    let behind = assert_ok!(Line::from_points(Vector::new(-5.0, -1.0), Vector::new(-5.0, 1.0)));
    let p = assert_some!(ray.intersect(&ahead));
    assert!(p.equals_weakly(&Vector::new(5.0, 0.0)));
    assert_none!(ray.intersect(&behind));
  }

  #[test]
  fn ray_ray() {
    let r1 = Ray::new(Vector::new(0.0, 0.0), AngleDeg::new(45.0));
    let r2 = Ray::new(Vector::new(2.0, 0.0), AngleDeg::new(135.0));
    let p = assert_some!(r1.intersect(&r2));
    assert!(p.equals_weakly(&Vector::new(1.0, 1.0)));
    let r3 = Ray::new(Vector::new(2.0, 0.0), AngleDeg::new(-45.0));
    assert_none!(r1.intersect(&r3));
  }

  #[test]
  fn parallel_rays() {
    let r1 = Ray::new(Vector::new(0.0, 0.0), AngleDeg::new(0.0));
    let r2 = Ray::new(Vector::new(0.0, 1.0), AngleDeg::new(0.0));
    assert_none!(r1.intersect(&r2));
  }
}
