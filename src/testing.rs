// Strategies for:
//  * vectors, either anywhere in a bounded box, on integer coordinates or
//    just off integer coordinates
//  * angles
// A Strategy is a way to generate a shrinkable value.
use crate::data::{AngleDeg, Vector};

use core::ops::Range;
use proptest::prelude::*;

const COORD_RANGE: Range<f64> = -1000.0..1000.0;

pub fn any_vector() -> impl Strategy<Value = Vector> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Vector::new(x, y))
}

// Integer coordinates keep orientation tests exact.
pub fn any_lattice_vector() -> impl Strategy<Value = Vector> {
  (-100i32..100, -100i32..100).prop_map(|(x, y)| Vector::new(f64::from(x), f64::from(y)))
}

pub fn any_angle() -> impl Strategy<Value = AngleDeg> {
  (-180.0..180.0f64).prop_map(AngleDeg::new)
}

pub fn vectors(len: Range<usize>) -> impl Strategy<Value = Vec<Vector>> {
  proptest::collection::vec(any_lattice_vector(), len)
}

// Lattice points nudged by far less than EPSILON, so points that were
// collinear stay collinear within the orientation band but no longer share
// exact coordinates.
pub fn jittered_vectors(len: Range<usize>) -> impl Strategy<Value = Vec<Vector>> {
  let jitter = -1e-10..1e-10f64;
  let point = (any_lattice_vector(), jitter.clone(), jitter)
    .prop_map(|(v, dx, dy)| Vector::new(v.x() + dx, v.y() + dy));
  proptest::collection::vec(point, len)
}
