use crate::data::{Segment, Vector};

/// Boundary edges of a polygon, each going from a vertex to its successor. The
/// last edge closes the loop back to the first vertex.
#[derive(Clone)]
pub struct EdgeIter<'a> {
  pub(crate) vertices: &'a [Vector],
  pub(crate) position: usize,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = Segment;
  fn next(&mut self) -> Option<Segment> {
    let src = *self.vertices.get(self.position)?;
    let dst = self.vertices[(self.position + 1) % self.vertices.len()];
    self.position += 1;
    Some(Segment::new(src, dst))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {
  fn len(&self) -> usize {
    self.vertices.len().saturating_sub(self.position)
  }
}
