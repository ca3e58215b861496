use std::fmt;

use crate::data::{Line, Ray, Segment, Size, Vector};
use crate::intersection::filter_solutions;
use crate::utils::Rounded;
use crate::{Intersects, Solutions};

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// "Top" is the smaller y coordinate: the rectangle spans `[left, left + length]`
/// along x and `[top, top + width]` along y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  top_left: Vector,
  size: Size,
}

impl Rect {
  pub fn new(left: f64, top: f64, length: f64, width: f64) -> Rect {
    Rect {
      top_left: Vector::new(left, top),
      size: Size::new(length, width),
    }
  }

  pub fn from_top_left(top_left: Vector, size: Size) -> Rect {
    Rect { top_left, size }
  }

  /// Rectangle spanned by two opposite corners, in any order.
  pub fn from_corners(top_left: Vector, bottom_right: Vector) -> Rect {
    let left = top_left.x().min(bottom_right.x());
    let top = top_left.y().min(bottom_right.y());
    Rect::new(
      left,
      top,
      (bottom_right.x() - top_left.x()).abs(),
      (bottom_right.y() - top_left.y()).abs(),
    )
  }

  pub fn from_center(center: Vector, length: f64, width: f64) -> Rect {
    let size = Size::new(length, width);
    Rect::new(
      center.x() - size.length() * 0.5,
      center.y() - size.width() * 0.5,
      size.length(),
      size.width(),
    )
  }

  pub fn left(&self) -> f64 {
    self.top_left.x()
  }

  pub fn right(&self) -> f64 {
    self.left() + self.size.length()
  }

  pub fn top(&self) -> f64 {
    self.top_left.y()
  }

  pub fn bottom(&self) -> f64 {
    self.top() + self.size.width()
  }

  pub fn min_x(&self) -> f64 {
    self.left()
  }

  pub fn max_x(&self) -> f64 {
    self.right()
  }

  pub fn min_y(&self) -> f64 {
    self.top()
  }

  pub fn max_y(&self) -> f64 {
    self.bottom()
  }

  pub fn size(&self) -> Size {
    self.size
  }

  pub fn center(&self) -> Vector {
    Vector::new(
      (self.left() + self.right()) * 0.5,
      (self.top() + self.bottom()) * 0.5,
    )
  }

  pub fn top_left(&self) -> Vector {
    self.top_left
  }

  pub fn top_right(&self) -> Vector {
    Vector::new(self.right(), self.top())
  }

  pub fn bottom_left(&self) -> Vector {
    Vector::new(self.left(), self.bottom())
  }

  pub fn bottom_right(&self) -> Vector {
    Vector::new(self.right(), self.bottom())
  }

  pub fn left_edge(&self) -> Line {
    Line::vertical(self.left())
  }

  pub fn right_edge(&self) -> Line {
    Line::vertical(self.right())
  }

  pub fn top_edge(&self) -> Line {
    Line::horizontal(self.top())
  }

  pub fn bottom_edge(&self) -> Line {
    Line::horizontal(self.bottom())
  }

  /// Translate so that the center lands on `point`.
  pub fn move_center(&mut self, point: Vector) {
    self.top_left = Vector::new(
      point.x() - self.size.length() * 0.5,
      point.y() - self.size.width() * 0.5,
    );
  }

  /// Translate so that the top-left corner lands on `point`.
  pub fn move_top_left(&mut self, point: Vector) {
    self.top_left = point;
  }

  /// Move the top-left corner to `point` while keeping the bottom-right corner
  /// fixed. The corners are swapped as needed to keep the size non-negative.
  pub fn set_top_left(&mut self, point: Vector) {
    *self = Rect::from_corners(point, self.bottom_right());
  }

  pub fn set_size(&mut self, size: Size) {
    self.size = size;
  }

  pub fn set_length(&mut self, length: f64) {
    self.size.set_length(length);
  }

  pub fn set_width(&mut self, width: f64) {
    self.size.set_width(width);
  }

  pub fn is_valid(&self) -> bool {
    self.size.is_valid()
  }

  pub fn area(&self) -> f64 {
    self.size.length() * self.size.width()
  }

  /// Boundary-inclusive containment.
  pub fn contains(&self, point: &Vector) -> bool {
    self.left() <= point.x()
      && point.x() <= self.right()
      && self.top() <= point.y()
      && point.y() <= self.bottom()
  }

  /// Containment with every side pushed outwards by `threshold`.
  pub fn contains_almost(&self, point: &Vector, threshold: f64) -> bool {
    self.left() - threshold <= point.x()
      && point.x() <= self.right() + threshold
      && self.top() - threshold <= point.y()
      && point.y() <= self.bottom() + threshold
  }

  /// Crossings of `line` with the left, right, top and bottom sides. A line
  /// through a corner reports that corner once.
  pub fn intersection_with_line(&self, line: &Line) -> Solutions {
    let in_y = |p: &Vector| self.top() <= p.y() && p.y() <= self.bottom();
    let in_x = |p: &Vector| self.left() <= p.x() && p.x() <= self.right();
    let candidates = [
      self.left_edge().intersection(line).filter(in_y),
      self.right_edge().intersection(line).filter(in_y),
      self.top_edge().intersection(line).filter(in_x),
      self.bottom_edge().intersection(line).filter(in_x),
    ];

    let mut sols = Solutions::new();
    for p in candidates.iter().flatten() {
      if sols.is_full() {
        break;
      }
      if !sols.iter().any(|s| s.equals_weakly(p)) {
        sols.push(*p);
      }
    }
    sols
  }

  pub fn intersection_with_ray(&self, ray: &Ray) -> Solutions {
    filter_solutions(self.intersection_with_line(&ray.line()), |p| {
      ray.in_right_dir(p, 1.0)
    })
  }

  pub fn intersection_with_segment(&self, segment: &Segment) -> Solutions {
    match segment.line() {
      Ok(line) => filter_solutions(self.intersection_with_line(&line), |p| segment.contains(p)),
      Err(_) => Solutions::new(),
    }
  }

  /// Overlap of the two rectangles. `None` when they do not overlap with a
  /// positive area.
  pub fn intersected(&self, other: &Rect) -> Option<Rect> {
    let left = self.left().max(other.left());
    let top = self.top().max(other.top());
    let right = self.right().min(other.right());
    let bottom = self.bottom().min(other.bottom());
    if right - left <= 0.0 || bottom - top <= 0.0 {
      return None;
    }
    Some(Rect::new(left, top, right - left, bottom - top))
  }

  /// Smallest rectangle covering both.
  #[must_use]
  pub fn united(&self, other: &Rect) -> Rect {
    let left = self.left().min(other.left());
    let top = self.top().min(other.top());
    let right = self.right().max(other.right());
    let bottom = self.bottom().max(other.bottom());
    Rect::new(left, top, right - left, bottom - top)
  }
}

impl<'a, 'b> Intersects<&'a Line> for &'b Rect {
  type Output = Solutions;
  fn intersect(self, line: &'a Line) -> Solutions {
    self.intersection_with_line(line)
  }
}

impl<'a, 'b> Intersects<&'a Ray> for &'b Rect {
  type Output = Solutions;
  fn intersect(self, ray: &'a Ray) -> Solutions {
    self.intersection_with_ray(ray)
  }
}

impl<'a, 'b> Intersects<&'a Segment> for &'b Rect {
  type Output = Solutions;
  fn intersect(self, segment: &'a Segment) -> Solutions {
    self.intersection_with_segment(segment)
  }
}

impl fmt::Display for Rect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "(rect {} {} {} {})",
      Rounded(self.left()),
      Rounded(self.top()),
      Rounded(self.right()),
      Rounded(self.bottom())
    )
  }
}
