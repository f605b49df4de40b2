//! Memory-based streams for testing and replay
//!
//! Feeds a recorded slice of samples (coordinates, raw fixes, accuracy
//! readings) through the same adapters the live sensors use.

use super::{Stream, StreamError};

/// Slice-backed stream
///
/// ```rust
/// use qibla_core::stream::{MemoryStream, Stream};
///
/// let readings = [3.0, 7.5, -1.0];
/// let mut stream = MemoryStream::new(&readings);
/// while let Ok(reading) = stream.poll_next() {
///     // classify reading
///     # let _ = reading;
/// }
/// ```
pub struct MemoryStream<'a, T> {
    /// Samples to replay
    items: &'a [T],
    /// Current position
    position: usize,
}

impl<'a, T> MemoryStream<'a, T> {
    /// Create new memory stream from slice
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Reset to beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if stream is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }
}

impl<'a, T: Copy> Stream for MemoryStream<'a, T> {
    type Item = T;
    type Error = StreamError<()>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        let item = self
            .items
            .get(self.position)
            .copied()
            .ok_or(nb::Error::Other(StreamError::EndOfStream))?;

        self.position += 1;
        Ok(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
