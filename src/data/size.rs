use crate::tolerance::EPSILON;

/// Extent of an axis-aligned box: `length` along x, `width` along y.
/// Both are stored as absolute values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Size {
  length: f64,
  width: f64,
}

impl Size {
  pub fn new(length: f64, width: f64) -> Size {
    Size {
      length: length.abs(),
      width: width.abs(),
    }
  }

  pub fn length(&self) -> f64 {
    self.length
  }

  pub fn width(&self) -> f64 {
    self.width
  }

  pub fn set_length(&mut self, length: f64) {
    self.length = length.abs();
  }

  pub fn set_width(&mut self, width: f64) {
    self.width = width.abs();
  }

  pub fn diagonal(&self) -> f64 {
    self.length.hypot(self.width)
  }

  /// Both sides are strictly positive.
  pub fn is_valid(&self) -> bool {
    self.length > 0.0 && self.width > 0.0
  }
}

impl PartialEq for Size {
  fn eq(&self, other: &Size) -> bool {
    (self.length - other.length).abs() < EPSILON && (self.width - other.width).abs() < EPSILON
  }
}
