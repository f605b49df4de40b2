//! Magnetic declination correction
//!
//! A phone compass points at magnetic north, but the great-circle bearing is
//! measured from true north. The difference is the local declination:
//! positive when magnetic north lies east of true north.
//!
//! Where the declination value comes from (a geomagnetic model, a regional
//! table) is not this module's concern; it only applies the arithmetic and
//! keeps the inputs alongside the result for traceability.
//!
//! ```rust
//! use qibla_core::{calculate_bearing, DeclinationCorrector};
//!
//! let qibla = calculate_bearing(51.5074, -0.1278)?;
//! let adjusted = DeclinationCorrector::new().apply_declination(&qibla, 1.2)?;
//! assert!(adjusted.magnetic_bearing_degrees() < 360.0);
//! # Ok::<(), qibla_core::QiblaError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bearing::{normalize_degrees, BearingResult},
    errors::{QiblaError, QiblaResult},
    traits::Validatable,
};

/// A bearing result together with the declination applied to it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclinationAdjustedBearing {
    bearing: BearingResult,
    magnetic_declination_degrees: f64,
}

impl DeclinationAdjustedBearing {
    /// The untouched true-north result
    pub fn bearing(&self) -> &BearingResult {
        &self.bearing
    }

    /// Declination that was applied, degrees, positive east
    pub fn magnetic_declination_degrees(&self) -> f64 {
        self.magnetic_declination_degrees
    }

    /// Bearing relative to magnetic north, in [0, 360)
    pub fn magnetic_bearing_degrees(&self) -> f64 {
        apply_declination(self.bearing.initial_bearing_degrees, self.magnetic_declination_degrees)
    }
}

/// Applies a signed declination offset to true-north bearings
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclinationCorrector;

impl DeclinationCorrector {
    /// Create a corrector
    pub fn new() -> Self {
        Self
    }

    /// Wrap `bearing` with a declination, rejecting non-finite offsets
    pub fn apply_declination(
        &self,
        bearing: &BearingResult,
        declination_degrees: f64,
    ) -> QiblaResult<DeclinationAdjustedBearing> {
        if !declination_degrees.is_valid() || !bearing.initial_bearing_degrees.is_valid() {
            log_warn!("rejected declination {} for bearing {}", declination_degrees, bearing.initial_bearing_degrees);
            return Err(QiblaError::InvalidValue);
        }

        Ok(DeclinationAdjustedBearing {
            bearing: *bearing,
            magnetic_declination_degrees: declination_degrees,
        })
    }
}

/// Magnetic bearing for a true bearing and a signed declination.
///
/// The result always lies in [0, 360), including when the sum goes
/// negative (`5° + -10°` gives `355°`). Zero declination returns `bearing`
/// unchanged for any bearing already in range.
pub fn apply_declination(bearing_degrees: f64, declination_degrees: f64) -> f64 {
    normalize_degrees(bearing_degrees + declination_degrees)
}
