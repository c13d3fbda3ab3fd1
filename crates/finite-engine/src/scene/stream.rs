use std::ops::Range;

use super::DrawError;

/// Append-only CPU vertex stream with a fixed capacity.
///
/// Mirrors one GPU vertex buffer. Writes only ever land past the cursor, and
/// the cursor returns to zero only in [`VertexStream::reset`], which starts a
/// new buffer generation.
#[derive(Debug)]
pub struct VertexStream<V> {
    name: &'static str,
    vertices: Vec<V>,
    capacity: usize,
}

impl<V: Copy> VertexStream<V> {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Vertices written this generation.
    #[inline]
    pub fn len(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }

    /// Fails without writing when `count` more vertices would not fit.
    pub fn check_room(&self, count: usize) -> Result<(), DrawError> {
        let requested = self.vertices.len() + count;
        if requested > self.capacity {
            return Err(DrawError::CapacityExceeded {
                stream: self.name,
                requested,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends `vertices` and returns the range they occupy.
    pub fn push(&mut self, vertices: &[V]) -> Result<Range<u32>, DrawError> {
        self.check_room(vertices.len())?;
        let start = self.len();
        self.vertices.extend_from_slice(vertices);
        Ok(start..self.len())
    }

    #[inline]
    pub fn reset(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_consecutive_ranges() {
        let mut s = VertexStream::<u8>::new("test", 16);
        assert_eq!(s.push(&[1, 2, 3]).unwrap(), 0..3);
        assert_eq!(s.push(&[4, 5]).unwrap(), 3..5);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn overflow_is_rejected_and_writes_nothing() {
        let mut s = VertexStream::<u8>::new("test", 6);
        s.push(&[0; 6]).unwrap();
        let err = s.push(&[0; 1]).unwrap_err();
        assert_eq!(
            err,
            DrawError::CapacityExceeded { stream: "test", requested: 7, capacity: 6 }
        );
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn reset_starts_a_new_generation() {
        let mut s = VertexStream::<u8>::new("test", 4);
        s.push(&[0; 4]).unwrap();
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.push(&[9; 4]).unwrap(), 0..4);
    }
}
