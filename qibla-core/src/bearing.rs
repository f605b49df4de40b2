//! Great-circle bearing and distance to the Kaaba
//!
//! ## Algorithm
//!
//! Initial bearing on a sphere (forward azimuth):
//!
//! ```text
//! Δλ = λ₂ − λ₁
//! y  = sin Δλ · cos φ₂
//! x  = cos φ₁ · sin φ₂ − sin φ₁ · cos φ₂ · cos Δλ
//! θ  = atan2(y, x)            normalized into [0°, 360°)
//! ```
//!
//! Distance with the haversine formula on the mean-radius sphere:
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! Both formulas go through `atan2`, never a cotangent, so observers at the
//! poles and on either side of the antimeridian need no special handling.
//! All trigonometry uses `libm` so results are bit-identical on every target.
//!
//! ## Degenerate Input
//!
//! An observer standing on the target has no defined bearing. `atan2(0, 0)`
//! is pinned to 0° and the distance is 0 km.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    compass::CompassPoint,
    constants::geodesy::{DEG_TO_RAD, EARTH_MEAN_RADIUS_KM, FULL_TURN_DEG, RAD_TO_DEG},
    coordinate::{Coordinate, KAABA},
    errors::QiblaResult,
    traits::Validatable,
};

/// Bearing and distance from an observer to the target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BearingResult {
    /// Initial great-circle bearing, degrees clockwise from true north, in [0, 360)
    pub initial_bearing_degrees: f64,
    /// Surface distance along the great circle, kilometers, never negative
    pub distance_kilometers: f64,
    /// Observer coordinate the result was computed from
    pub source_coordinate: Coordinate,
}

impl BearingResult {
    /// 16-point compass name of the bearing (e.g. `ENE`)
    pub fn compass_point(&self) -> CompassPoint {
        CompassPoint::from_bearing_16(self.initial_bearing_degrees)
    }
}

/// Great-circle calculator towards a fixed target
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingCalculator {
    /// Destination of every calculation
    target: Coordinate,

    /// Sphere radius used for distances
    radius_km: f64,
}

impl Default for BearingCalculator {
    fn default() -> Self {
        Self {
            target: KAABA,
            radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl BearingCalculator {
    /// Calculator towards an arbitrary target on the mean-radius sphere
    pub fn new_with_target(target: Coordinate) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Calculator towards the Kaaba on a sphere of the given radius.
    ///
    /// Non-finite or non-positive radii fall back to the mean Earth radius.
    pub fn new_with_radius(radius_km: f64) -> Self {
        let radius_km = if radius_km.is_valid() && radius_km > 0.0 {
            radius_km
        } else {
            EARTH_MEAN_RADIUS_KM
        };

        Self {
            radius_km,
            ..Self::default()
        }
    }

    /// Target coordinate
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Sphere radius in kilometers
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Bearing and distance from a validated observer to the target
    pub fn calculate_bearing(&self, observer: &Coordinate) -> BearingResult {
        let initial_bearing_degrees = initial_bearing_degrees(observer, &self.target);
        let distance_kilometers = haversine_distance_km(observer, &self.target, self.radius_km);

        log_trace!(
            "bearing from {} = {:.4}°, {:.3} km",
            observer, initial_bearing_degrees, distance_kilometers
        );

        BearingResult {
            initial_bearing_degrees,
            distance_kilometers,
            source_coordinate: *observer,
        }
    }

    /// Validate raw latitude/longitude, then calculate
    pub fn calculate_bearing_from(&self, latitude: f64, longitude: f64) -> QiblaResult<BearingResult> {
        let observer = Coordinate::new(latitude, longitude)?;
        Ok(self.calculate_bearing(&observer))
    }
}

/// Qibla bearing and distance for a raw observer position.
///
/// Fails with `InvalidCoordinate` when either component is out of range or
/// not finite.
pub fn calculate_bearing(observer_latitude: f64, observer_longitude: f64) -> QiblaResult<BearingResult> {
    BearingCalculator::default().calculate_bearing_from(observer_latitude, observer_longitude)
}

/// Normalize any finite angle into [0, 360).
///
/// Negative zero comes back as positive zero.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let remainder = degrees % FULL_TURN_DEG;
    let wrapped = if remainder < 0.0 {
        remainder + FULL_TURN_DEG
    } else {
        remainder
    };

    // -1e-20 + 360.0 rounds to exactly 360.0
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped + 0.0
    }
}

pub(crate) fn initial_bearing_degrees(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat_from = from.latitude() * DEG_TO_RAD;
    let lat_to = to.latitude() * DEG_TO_RAD;
    let delta_lon = (to.longitude() - from.longitude()) * DEG_TO_RAD;

    let y = libm::sin(delta_lon) * libm::cos(lat_to);
    let x = libm::cos(lat_from) * libm::sin(lat_to)
        - libm::sin(lat_from) * libm::cos(lat_to) * libm::cos(delta_lon);

    if y == 0.0 && x == 0.0 {
        return 0.0;
    }

    normalize_degrees(libm::atan2(y, x) * RAD_TO_DEG)
}

pub(crate) fn haversine_distance_km(from: &Coordinate, to: &Coordinate, radius_km: f64) -> f64 {
    let lat_from = from.latitude() * DEG_TO_RAD;
    let lat_to = to.latitude() * DEG_TO_RAD;
    let delta_lat = (to.latitude() - from.latitude()) * DEG_TO_RAD;
    let delta_lon = (to.longitude() - from.longitude()) * DEG_TO_RAD;

    let sin_half_lat = libm::sin(delta_lat / 2.0);
    let sin_half_lon = libm::sin(delta_lon / 2.0);

    let a = sin_half_lat * sin_half_lat
        + libm::cos(lat_from) * libm::cos(lat_to) * sin_half_lon * sin_half_lon;

    // rounding can push `a` past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    radius_km * c
}
