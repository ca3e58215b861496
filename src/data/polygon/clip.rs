// Sutherland-Hodgman clipping against axis-aligned half-planes.
use tracing::debug;

use crate::data::{Line, Vector};

/// Closed half-plane bounded by a vertical or horizontal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HalfPlane {
  XLessEqual(f64),
  XMoreEqual(f64),
  YLessEqual(f64),
  YMoreEqual(f64),
}

impl HalfPlane {
  pub fn contains(&self, point: &Vector) -> bool {
    match *self {
      HalfPlane::XLessEqual(x) => point.x() <= x,
      HalfPlane::XMoreEqual(x) => point.x() >= x,
      HalfPlane::YLessEqual(y) => point.y() <= y,
      HalfPlane::YMoreEqual(y) => point.y() >= y,
    }
  }

  pub fn boundary(&self) -> Line {
    match *self {
      HalfPlane::XLessEqual(x) | HalfPlane::XMoreEqual(x) => Line::vertical(x),
      HalfPlane::YLessEqual(y) | HalfPlane::YMoreEqual(y) => Line::horizontal(y),
    }
  }
}

// Keep the part of the closed polyline `points` that lies inside `region`.
//
// If an edge that crosses the boundary cannot be cut (it is parallel to the
// boundary or degenerate), the points emitted so far are returned.
pub(crate) fn clip_half_plane(region: HalfPlane, points: &[Vector]) -> Vec<Vector> {
  let boundary = region.boundary();
  let inside: Vec<bool> = points.iter().map(|p| region.contains(p)).collect();
  let mut out = Vec::with_capacity(points.len() + 2);

  for i in 0..points.len() {
    let j = (i + 1) % points.len();
    let (p0, p1) = (points[i], points[j]);
    if inside[i] && inside[j] {
      out.push(p1);
    } else if inside[i] != inside[j] {
      let cut = Line::from_points(p0, p1)
        .ok()
        .and_then(|edge| boundary.intersection(&edge));
      match cut {
        Some(cut) => out.push(cut),
        None => {
          debug!(?region, ?p0, ?p1, "edge cannot be cut by the clipping boundary");
          return out;
        }
      }
      if inside[j] {
        out.push(p1);
      }
    }
  }
  out
}
