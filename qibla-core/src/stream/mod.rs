//! Sensor sample streams
//!
//! Location fixes and heading-accuracy readings arrive continuously from the
//! platform. This module wraps the pure calculations in pull-based streams
//! so the same code serves a replay test, a polling loop on a
//! microcontroller, or a channel fed by platform callbacks.
//!
//! ## Module Organization
//!
//! - Core error type (this file)
//! - `memory` - slice-backed streams for testing and replay
//! - `adapters` - turn coordinate/accuracy streams into result streams

use core::fmt;

use crate::errors::QiblaError;

#[cfg(feature = "stream-memory")]
pub mod memory;

#[cfg(feature = "stream-adapters")]
pub mod adapters;

#[cfg(feature = "stream-memory")]
pub use memory::MemoryStream;

#[cfg(feature = "stream-adapters")]
pub use adapters::{AccuracyStream, BearingStream, RawFixStream};

pub use crate::traits::Stream;

/// Errors that can occur during stream processing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level error from the sample source
    Transport(E),
    /// A sample failed validation and was not turned into a result
    Rejected(QiblaError),
    /// End of stream reached
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Rejected(e) => write!(f, "Rejected sample: {}", e),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

impl<E> From<QiblaError> for StreamError<E> {
    fn from(error: QiblaError) -> Self {
        Self::Rejected(error)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn stream_error_display() {
        let err: StreamError<&str> = StreamError::Transport("gps unplugged");
        assert_eq!(format!("{}", err), "Transport error: gps unplugged");

        let err: StreamError<&str> = StreamError::EndOfStream;
        assert_eq!(format!("{}", err), "End of stream");

        let err: StreamError<&str> = QiblaError::InvalidValue.into();
        assert_eq!(format!("{}", err), "Rejected sample: Invalid value: not a finite number");
    }
}
