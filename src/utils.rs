use arrayvec::ArrayVec;
use std::fmt;

use crate::tolerance::EPSILON;
use crate::Error;

/// Real roots of `a*x^2 + b*x + c = 0`.
///
/// A discriminant within [`EPSILON`] of zero yields the single tangent root.
/// Two roots are returned as `(-b + sqrt(d)) / 2a` followed by `(-b - sqrt(d)) / 2a`.
///
/// # Errors
/// [`Error::NotQuadratic`] if `a` is zero.
///
/// ```rust
/// # use rgeom2d::solve_quadratic;
/// let roots = solve_quadratic(1.0, 0.0, -4.0).unwrap();
/// assert_eq!(roots.as_slice(), &[2.0, -2.0]);
/// assert!(solve_quadratic(1.0, 0.0, 4.0).unwrap().is_empty());
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<ArrayVec<f64, 2>, Error> {
  if a == 0.0 {
    return Err(Error::NotQuadratic);
  }
  let mut roots = ArrayVec::new();
  let discriminant = b * b - 4.0 * a * c;
  if discriminant.abs() < EPSILON {
    roots.push(-b / (2.0 * a));
  } else if discriminant > 0.0 {
    let sqrt = discriminant.sqrt();
    roots.push((-b + sqrt) / (2.0 * a));
    roots.push((-b - sqrt) / (2.0 * a));
  }
  Ok(roots)
}

// Shape renderings print coordinates rounded to three decimals in shortest
// round-trip form ("1.0", "-0.5", "3.142").
pub(crate) struct Rounded(pub f64);

impl fmt::Display for Rounded {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rounded = (self.0 * 1000.0).round() / 1000.0;
    // Avoid "-0.0" for tiny negative values.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    write!(f, "{:?}", rounded)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  #[test]
  fn quadratic_roots() {
    assert_err_eq!(solve_quadratic(0.0, 1.0, 1.0), Error::NotQuadratic);
    let single = assert_ok!(solve_quadratic(1.0, -2.0, 1.0));
    assert_eq!(single.as_slice(), &[1.0]);
    let none = assert_ok!(solve_quadratic(1.0, 0.0, 1.0));
    assert!(none.is_empty());
    let two = assert_ok!(solve_quadratic(2.0, -6.0, 4.0));
    assert_eq!(two.as_slice(), &[2.0, 1.0]);
  }

  #[test]
  fn rounding() {
    assert_eq!(Rounded(1.0).to_string(), "1.0");
    assert_eq!(Rounded(2.0 / 3.0).to_string(), "0.667");
    assert_eq!(Rounded(-1.23456).to_string(), "-1.235");
    assert_eq!(Rounded(-0.0001).to_string(), "0.0");
    assert_eq!(Rounded(1.0e7).to_string(), "10000000.0");
  }
}
