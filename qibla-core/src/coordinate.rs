//! Validated geographic coordinates
//!
//! A [`Coordinate`] can only be built from finite, in-range values, so every
//! calculation downstream works on data that is known to be valid.
//!
//! - Latitude must lie in [-90, 90] degrees (poles included)
//! - Longitude must lie in [-180, 180] degrees (both antimeridian forms accepted)
//! - NaN and infinities are rejected, never clamped

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bearing,
    constants::geodesy::{
        EARTH_MEAN_RADIUS_KM, KAABA_LATITUDE_DEG, KAABA_LONGITUDE_DEG, LATITUDE_MAX_DEG,
        LATITUDE_MIN_DEG, LONGITUDE_MAX_DEG, LONGITUDE_MIN_DEG,
    },
    errors::{QiblaError, QiblaResult},
    traits::Validatable,
};

/// The Kaaba in Mecca, target of every Qibla calculation.
///
/// A compile-time constant, shared by value. No lazy init, no lifecycle.
pub const KAABA: Coordinate = Coordinate {
    latitude: KAABA_LATITUDE_DEG,
    longitude: KAABA_LONGITUDE_DEG,
};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> QiblaResult<Self> {
        let reason = if !latitude.is_valid() || !longitude.is_valid() {
            Some("latitude and longitude must be finite")
        } else if !(LATITUDE_MIN_DEG..=LATITUDE_MAX_DEG).contains(&latitude) {
            Some("latitude outside [-90, 90]")
        } else if !(LONGITUDE_MIN_DEG..=LONGITUDE_MAX_DEG).contains(&longitude) {
            Some("longitude outside [-180, 180]")
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log_warn!("rejected coordinate ({}, {}): {}", latitude, longitude, reason);
                Err(QiblaError::InvalidCoordinate { latitude, longitude, reason })
            }
            None => Ok(Self { latitude, longitude }),
        }
    }

    /// Latitude in degrees, positive north
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Initial great-circle bearing from here to `other`.
    /// Returns degrees in [0, 360), clockwise from true north.
    pub fn initial_bearing_to(&self, other: &Coordinate) -> f64 {
        bearing::initial_bearing_degrees(self, other)
    }

    /// Haversine distance to `other` on the mean-radius sphere, in kilometers.
    pub fn distance_to_km(&self, other: &Coordinate) -> f64 {
        bearing::haversine_distance_km(self, other, EARTH_MEAN_RADIUS_KM)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = QiblaError;

    fn try_from((latitude, longitude): (f64, f64)) -> QiblaResult<Self> {
        Self::new(latitude, longitude)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Coordinate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "({}, {})", self.latitude, self.longitude)
    }
}

/// Unchecked wire form; deserialization goes through [`Coordinate::new`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = QiblaError;

    fn try_from(raw: RawCoordinate) -> QiblaResult<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let nyc = Coordinate::new(40.7128, -74.0060).unwrap();
        assert_eq!(nyc.latitude(), 40.7128);
        assert_eq!(nyc.longitude(), -74.0060);

        // Poles and antimeridian are inclusive
        assert!(Coordinate::new(90.0, 0.0).is_ok());
        assert!(Coordinate::new(-90.0, 0.0).is_ok());
        assert!(Coordinate::new(0.0, 180.0).is_ok());
        assert!(Coordinate::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn latitude_out_of_range() {
        let result = Coordinate::new(95.0, 10.0);
        assert!(matches!(
            result,
            Err(QiblaError::InvalidCoordinate { latitude, .. }) if latitude == 95.0
        ));
        assert!(Coordinate::new(-90.0001, 10.0).is_err());
    }

    #[test]
    fn longitude_out_of_range() {
        assert!(matches!(
            Coordinate::new(10.0, 180.5),
            Err(QiblaError::InvalidCoordinate { reason: "longitude outside [-180, 180]", .. })
        ));
        assert!(Coordinate::new(10.0, -181.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn kaaba_constant() {
        assert_eq!(KAABA.latitude(), 21.4225);
        assert_eq!(KAABA.longitude(), 39.8262);
        assert_eq!(Coordinate::new(21.4225, 39.8262).unwrap(), KAABA);
    }

    #[test]
    fn tuple_conversion() {
        let c = Coordinate::try_from((51.5074, -0.1278)).unwrap();
        assert_eq!(c.latitude(), 51.5074);
        assert!(Coordinate::try_from((0.0, 200.0)).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_format() {
        let c = Coordinate::new(48.057440, -123.119625).unwrap();
        assert_eq!(format!("{}", c), "(48.057440°, -123.119625°)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"latitude": 21.4225, "longitude": 39.8262}"#).unwrap();
        assert_eq!(ok, KAABA);

        let bad: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 95.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }
}
