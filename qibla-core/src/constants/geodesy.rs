//! Geodetic Constants
//!
//! The target of every Qibla calculation and the spherical Earth model the
//! great-circle formulas run on.

use core::f64::consts::PI;

// ===== TARGET LOCATION =====

/// Latitude of the Kaaba, Masjid al-Haram, Mecca (degrees north).
///
/// Source: published survey coordinate, 21°25'21"N
pub const KAABA_LATITUDE_DEG: f64 = 21.4225;

/// Longitude of the Kaaba, Masjid al-Haram, Mecca (degrees east).
///
/// Source: published survey coordinate, 39°49'34"E
pub const KAABA_LONGITUDE_DEG: f64 = 39.8262;

// ===== EARTH MODEL =====

/// Mean radius of the Earth in kilometers.
///
/// IUGG mean radius R1 = (2a + b) / 3. Spherical distances stay within
/// ~0.5% of WGS-84 geodesic values.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

// ===== COORDINATE LIMITS =====

/// Southernmost valid latitude (South Pole).
pub const LATITUDE_MIN_DEG: f64 = -90.0;

/// Northernmost valid latitude (North Pole).
pub const LATITUDE_MAX_DEG: f64 = 90.0;

/// Westernmost valid longitude (antimeridian).
pub const LONGITUDE_MIN_DEG: f64 = -180.0;

/// Easternmost valid longitude (antimeridian).
pub const LONGITUDE_MAX_DEG: f64 = 180.0;

// ===== ANGLES =====

/// Degrees in a full turn. Bearings are normalized into [0, FULL_TURN_DEG).
pub const FULL_TURN_DEG: f64 = 360.0;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;
