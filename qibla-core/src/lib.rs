//! Qibla direction engine
//!
//! Computes the direction and distance from an observer to the Kaaba and
//! classifies compass heading accuracy for the UI layer.
//! Designed to run anywhere the app runs, phones and microcontrollers alike.
//!
//! Key constraints:
//! - Pure functions only, no shared mutable state
//! - No heap allocation
//! - Invalid coordinates surface as typed errors, never as NaN bearings
//!
//! ```no_run
//! use qibla_core::{calculate_bearing, apply_declination, classify_accuracy, CompassAccuracyTier};
//!
//! // Observer in New York
//! let qibla = calculate_bearing(40.7128, -74.0060)?;
//! println!("Qibla: {:.1}° ({}), {:.0} km", qibla.initial_bearing_degrees,
//!     qibla.compass_point(), qibla.distance_kilometers);
//!
//! // Compass reads magnetic north, declination 13° W
//! let needle = apply_declination(qibla.initial_bearing_degrees, -13.0);
//!
//! if classify_accuracy(22.0) == CompassAccuracyTier::Low {
//!     // prompt the user to calibrate
//! }
//! # let _ = needle;
//! # Ok::<(), qibla_core::QiblaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod accuracy;
pub mod bearing;
pub mod compass;
pub mod constants;
pub mod coordinate;
pub mod declination;
pub mod errors;
pub mod stream;
pub mod traits;

// Public API
pub use accuracy::{
    classify_accuracy, CompassAccuracyClassifier, CompassAccuracyTier, HeadingAccuracySample,
};
pub use bearing::{calculate_bearing, BearingCalculator, BearingResult};
pub use compass::CompassPoint;
pub use coordinate::{Coordinate, KAABA};
pub use declination::{apply_declination, DeclinationAdjustedBearing, DeclinationCorrector};
pub use errors::{QiblaError, QiblaResult};

/// Crate version, for display in about screens and logs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
