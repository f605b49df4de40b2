//! Core traits
//!
//! Kept deliberately small: a finiteness check for raw sensor scalars, and
//! the pull-based stream boundary that sensor collaborators implement.

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is numerically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Pull-based source of sensor samples
///
/// Location fixes and heading-accuracy readings arrive from platform
/// callbacks. The engine itself stays push-agnostic: whatever delivers the
/// samples (a channel, an observable, an interrupt handler) implements this
/// trait, and the adapters in [`crate::stream`] turn samples into results.
///
/// Streams use the `nb` two-level error model:
/// - `nb::Error::WouldBlock` - no sample available yet, try again later
/// - `nb::Error::Other(E)` - the stream failed or ended
///
/// ```rust
/// use qibla_core::traits::Stream;
/// use qibla_core::stream::StreamError;
///
/// fn drain<S: Stream<Error = StreamError<()>>>(stream: &mut S) -> usize {
///     let mut count = 0;
///     loop {
///         match stream.poll_next() {
///             Ok(_) => count += 1,
///             Err(nb::Error::WouldBlock) => return count,
///             Err(nb::Error::Other(_)) => return count,
///         }
///     }
/// }
/// ```
pub trait Stream {
    /// Type of items produced by the stream
    type Item;

    /// Type of errors that can occur
    type Error;

    /// Attempt to pull the next item from the stream
    ///
    /// Must not block. After `EndOfStream` every further call returns
    /// `EndOfStream` again.
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;

    /// Returns bounds on remaining items, like `Iterator::size_hint()`
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(5.0f32.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }
}
