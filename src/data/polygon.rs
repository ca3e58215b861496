use std::iter::FromIterator;

use crate::data::{Rect, Segment, Vector};
use crate::Error;

mod clip;
pub use clip::HalfPlane;

mod iter;
pub use iter::*;

/// Closed polygon given by its vertices in order. Winding order and
/// simplicity are not enforced.
///
/// A polygon is never empty: constructing or clearing one without vertices
/// leaves the single vertex `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  vertices: Vec<Vector>,
}

impl Default for Polygon {
  fn default() -> Polygon {
    Polygon {
      vertices: vec![Vector::default()],
    }
  }
}

impl Polygon {
  pub fn new(vertices: Vec<Vector>) -> Polygon {
    if vertices.is_empty() {
      Polygon::default()
    } else {
      Polygon { vertices }
    }
  }

  /// Check that the polygon has at least three vertices.
  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  pub fn vertices(&self) -> &[Vector] {
    &self.vertices
  }

  pub fn add_vertex(&mut self, point: Vector) {
    self.vertices.push(point);
  }

  /// Reset to the default single-vertex polygon.
  pub fn clear(&mut self) {
    *self = Polygon::default();
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      vertices: &self.vertices,
      position: 0,
    }
  }

  pub fn bounding_box(&self) -> Rect {
    let mut iter = self.vertices.iter();
    let first = match iter.next() {
      Some(first) => *first,
      None => return Rect::default(),
    };
    let (min, max) = iter.fold((first, first), |(min, max), p| {
      (
        Vector::new(min.x().min(p.x()), min.y().min(p.y())),
        Vector::new(max.x().max(p.x()), max.y().max(p.y())),
      )
    });
    Rect::from_corners(min, max)
  }

  pub fn bounding_box_center(&self) -> Vector {
    self.bounding_box().center()
  }

  /// Ray-casting point-in-polygon test.
  ///
  /// With `allow_boundary`, points on the outline count as inside; without it,
  /// they count as outside.
  ///
  /// ```rust
  /// # use rgeom2d::data::{Polygon, Vector};
  /// let square = Polygon::new(vec![
  ///   Vector::new(0.0, 0.0),
  ///   Vector::new(4.0, 0.0),
  ///   Vector::new(4.0, 4.0),
  ///   Vector::new(0.0, 4.0),
  /// ]);
  /// assert!(square.contains(&Vector::new(2.0, 2.0), false));
  /// assert!(square.contains(&Vector::new(4.0, 4.0), true));
  /// assert!(!square.contains(&Vector::new(4.0, 4.0), false));
  /// ```
  pub fn contains(&self, point: &Vector, allow_boundary: bool) -> bool {
    match self.vertices.as_slice() {
      [] => return false,
      [single] => return allow_boundary && single == point,
      _ => {}
    }

    let bbox = self.bounding_box();
    if !bbox.contains(point) {
      return false;
    }

    // Horizontal segment from `point` heading right, long enough to leave the
    // polygon.
    let reach = (bbox.right() - bbox.left() + bbox.bottom() - bbox.top()
      + (self.vertices[0] - *point).r())
      * 3.0;
    let ray = Segment::new(*point, Vector::new(point.x() + reach, point.y()));

    let mut inside = false;
    for edge in self.iter_boundary_edges() {
      if edge.on_segment(point) {
        return allow_boundary;
      }
      if !ray.exist_intersection(&edge) {
        continue;
      }
      let (p0, p1) = (edge.origin(), edge.terminal());
      // A vertex on the ray is counted once, by the edge going upwards.
      if (p0.y() == point.y() || p1.y() == point.y())
        && (p0.y() == p1.y() || p0.y() < point.y() || p1.y() < point.y())
      {
        continue;
      }
      inside = !inside;
    }
    inside
  }

  /// Distance from `point` to the polygon. A `filled` polygon is at distance
  /// zero from the points it contains; otherwise only the outline counts.
  pub fn dist(&self, point: &Vector, filled: bool) -> f64 {
    if let [single] = self.vertices.as_slice() {
      return single.dist(point);
    }
    if filled && self.contains(point, true) {
      return 0.0;
    }
    let open = self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]));
    let closing = match self.vertices.as_slice() {
      [first, .., last] if self.vertices.len() >= 3 => Some(Segment::new(*last, *first)),
      _ => None,
    };
    open
      .chain(closing)
      .map(|edge| edge.dist(point))
      .fold(f64::INFINITY, f64::min)
  }

  /// Shoelace sum: positive for counter-clockwise, negative for clockwise
  /// vertices, zero for fewer than three.
  pub fn double_signed_area(&self) -> f64 {
    if self.vertices.len() < 3 {
      return 0.0;
    }
    self
      .iter_boundary_edges()
      .map(|edge| edge.origin().outer_product(&edge.terminal()))
      .sum()
  }

  pub fn signed_area(&self) -> f64 {
    self.double_signed_area() * 0.5
  }

  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// Area-weighted center. `None` when the polygon encloses no area.
  pub fn centroid(&self) -> Option<Vector> {
    let area2 = self.double_signed_area();
    if area2 == 0.0 {
      return None;
    }
    let xs: Vector = self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.origin();
        let q = edge.terminal();
        (p + q) * p.outer_product(&q)
      })
      .sum();
    Some(xs / (3.0 * area2))
  }

  pub fn is_counter_clockwise(&self) -> bool {
    self.double_signed_area() > 0.0
  }

  pub fn is_clockwise(&self) -> bool {
    self.double_signed_area() < 0.0
  }

  /// Part of the polygon inside `rect`.
  ///
  /// The polygon is clipped in turn against `x <= right`, `y <= bottom`,
  /// `x >= left` and `y >= top`. A polygon that leaves and re-enters the
  /// rectangle comes back as a single outline joined along the rectangle's
  /// sides.
  #[must_use]
  pub fn get_rectangle_clipped_polygon(&self, rect: &Rect) -> Polygon {
    let regions = [
      HalfPlane::XLessEqual(rect.right()),
      HalfPlane::YLessEqual(rect.bottom()),
      HalfPlane::XMoreEqual(rect.left()),
      HalfPlane::YMoreEqual(rect.top()),
    ];
    let clipped = regions
      .iter()
      .fold(self.vertices.clone(), |points, region| {
        clip::clip_half_plane(*region, &points)
      });
    Polygon::new(clipped)
  }
}

impl FromIterator<Vector> for Polygon {
  fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Polygon {
    Polygon::new(iter.into_iter().collect())
  }
}
