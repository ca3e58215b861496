mod angle;
mod circle;
mod line;
pub mod polygon;
mod ray;
mod rect;
mod sector;
mod segment;
mod size;
mod triangle;
mod vector;

pub use angle::*;
pub use circle::*;
pub use line::*;
pub use ray::*;
pub use rect::*;
pub use sector::*;
pub use segment::*;
pub use size::*;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, HalfPlane, Polygon};
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

/// A bounded area of the plane.
///
/// ```rust
/// # use rgeom2d::data::{Circle, Rect, Region, Vector};
/// let regions: Vec<Box<dyn Region>> = vec![
///   Box::new(Circle::new(Vector::new(0.0, 0.0), 1.0)),
///   Box::new(Rect::new(0.0, 0.0, 2.0, 2.0)),
/// ];
/// let hits = regions.iter().filter(|r| r.contains(&Vector::new(0.5, 0.5))).count();
/// assert_eq!(hits, 2);
/// ```
pub trait Region {
  fn area(&self) -> f64;
  fn contains(&self, point: &Vector) -> bool;
}

macro_rules! impl_region {
  ( $ty:ty ) => {
    impl Region for $ty {
      fn area(&self) -> f64 {
        <$ty>::area(self)
      }
      fn contains(&self, point: &Vector) -> bool {
        <$ty>::contains(self, point)
      }
    }
  };
}

impl_region!(Circle);
impl_region!(Rect);
impl_region!(Sector);
impl_region!(Triangle);

/// Points on the outline count as contained.
impl Region for Polygon {
  fn area(&self) -> f64 {
    Polygon::area(self)
  }
  fn contains(&self, point: &Vector) -> bool {
    Polygon::contains(self, point, true)
  }
}
