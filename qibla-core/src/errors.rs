//! Error types for Qibla calculations
//!
//! ## Design
//!
//! The engine is a set of pure functions, so the error taxonomy is narrow:
//!
//! 1. **Small Size**: every variant is `Copy` and carries only scalars and
//!    `&'static str` reasons. No heap allocation on the error path.
//!
//! 2. **Boundary Detection**: invalid coordinates are caught when a
//!    [`Coordinate`](crate::Coordinate) is built. The bearing calculator and
//!    declination corrector never see invalid data internally.
//!
//! 3. **Never Swallowed**: an invalid coordinate propagates as a typed failure.
//!    It is never clamped and never turned into a NaN bearing.
//!
//! ## Error Categories
//!
//! - `InvalidCoordinate`: latitude/longitude out of range or non-finite
//! - `InvalidValue`: a non-finite scalar (e.g. declination) given to a typed API
//!
//! The accuracy classifier has no error path at all.
//!
//! ```rust
//! use qibla_core::{calculate_bearing, QiblaError};
//!
//! match calculate_bearing(95.0, 10.0) {
//!     Ok(result) => {
//!         // rotate the needle
//!         # let _ = result;
//!     }
//!     Err(QiblaError::InvalidCoordinate { .. }) => {
//!         // "location unavailable / cannot compute Qibla direction"
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for Qibla operations
pub type QiblaResult<T> = Result<T, QiblaError>;

/// Qibla engine errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QiblaError {
    /// Latitude/longitude outside valid range, or not a finite number
    #[error("Invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        /// Latitude as supplied by the caller, in degrees
        latitude: f64,
        /// Longitude as supplied by the caller, in degrees
        longitude: f64,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// Scalar input makes no numerical sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,
}

impl QiblaError {
    /// Stable machine-readable code, for UI mapping and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            Self::InvalidValue => "INVALID_VALUE",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QiblaError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCoordinate { latitude, longitude, reason } =>
                defmt::write!(fmt, "Invalid coordinate ({}, {}): {}", latitude, longitude, reason),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
