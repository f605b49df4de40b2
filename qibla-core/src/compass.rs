//! Compass rose naming for bearings
//!
//! Turns a numeric bearing into the 16-, 8- or 4-point direction the UI
//! prints next to the needle ("Qibla is ENE").

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bearing::normalize_degrees;

/// A point of the 16-point compass rose
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompassPoint {
    /// North
    N,
    /// North-northeast
    NNE,
    /// Northeast
    NE,
    /// East-northeast
    ENE,
    /// East
    E,
    /// East-southeast
    ESE,
    /// Southeast
    SE,
    /// South-southeast
    SSE,
    /// South
    S,
    /// South-southwest
    SSW,
    /// Southwest
    SW,
    /// West-southwest
    WSW,
    /// West
    W,
    /// West-northwest
    WNW,
    /// Northwest
    NW,
    /// North-northwest
    NNW,
}

/// Rose order, clockwise from north
const ROSE_16: [CompassPoint; 16] = [
    CompassPoint::N,
    CompassPoint::NNE,
    CompassPoint::NE,
    CompassPoint::ENE,
    CompassPoint::E,
    CompassPoint::ESE,
    CompassPoint::SE,
    CompassPoint::SSE,
    CompassPoint::S,
    CompassPoint::SSW,
    CompassPoint::SW,
    CompassPoint::WSW,
    CompassPoint::W,
    CompassPoint::WNW,
    CompassPoint::NW,
    CompassPoint::NNW,
];

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl CompassPoint {
    /// Lower-case English name
    pub fn name(&self) -> &'static str {
        match self {
            CompassPoint::N => "north",
            CompassPoint::NNE => "north-northeast",
            CompassPoint::NE => "northeast",
            CompassPoint::ENE => "east-northeast",
            CompassPoint::E => "east",
            CompassPoint::ESE => "east-southeast",
            CompassPoint::SE => "southeast",
            CompassPoint::SSE => "south-southeast",
            CompassPoint::S => "south",
            CompassPoint::SSW => "south-southwest",
            CompassPoint::SW => "southwest",
            CompassPoint::WSW => "west-southwest",
            CompassPoint::W => "west",
            CompassPoint::WNW => "west-northwest",
            CompassPoint::NW => "northwest",
            CompassPoint::NNW => "north-northwest",
        }
    }

    /// Upper-case abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }

    /// Centre bearing of this point, degrees
    pub fn center_degrees(&self) -> f64 {
        let index = ROSE_16.iter().position(|p| p == self).unwrap_or(0);
        index as f64 * 22.5
    }

    /// Nearest of the 16 points; each covers 22.5° centred on its bearing
    pub fn from_bearing_16(bearing: f64) -> Self {
        Self::nearest(bearing, 16)
    }

    /// Nearest of N, NE, E, SE, S, SW, W, NW
    pub fn from_bearing_8(bearing: f64) -> Self {
        Self::nearest(bearing, 8)
    }

    /// Nearest cardinal point
    pub fn from_bearing_4(bearing: f64) -> Self {
        Self::nearest(bearing, 4)
    }

    fn nearest(bearing: f64, points: usize) -> Self {
        if !bearing.is_finite() {
            return CompassPoint::N;
        }

        let sector = 360.0 / points as f64;
        let normalized = normalize_degrees(bearing + sector / 2.0);
        let index = (normalized / sector) as usize % points;

        ROSE_16[index * (16 / points)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", CompassPoint::N), "N");
        assert_eq!(format!("{}", CompassPoint::NNE), "NNE");
        assert_eq!(format!("{}", CompassPoint::SE), "SE");
    }

    #[test]
    fn names() {
        assert_eq!(CompassPoint::N.name(), "north");
        assert_eq!(CompassPoint::SSE.name(), "south-southeast");
        assert_eq!(CompassPoint::SSW.abbreviation(), "SSW");
    }

    #[test]
    fn sixteen_point() {
        assert_eq!(CompassPoint::from_bearing_16(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing_16(11.24), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing_16(11.25), CompassPoint::NNE);
        assert_eq!(CompassPoint::from_bearing_16(22.5), CompassPoint::NNE);
        assert_eq!(CompassPoint::from_bearing_16(58.48), CompassPoint::ENE);
        assert_eq!(CompassPoint::from_bearing_16(118.99), CompassPoint::ESE);
        assert_eq!(CompassPoint::from_bearing_16(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_bearing_16(270.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_bearing_16(359.0), CompassPoint::N);
    }

    #[test]
    fn eight_and_four_point() {
        assert_eq!(CompassPoint::from_bearing_8(45.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_bearing_8(135.0), CompassPoint::SE);
        assert_eq!(CompassPoint::from_bearing_8(337.5), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing_4(44.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing_4(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_bearing_4(225.0), CompassPoint::W);
    }

    #[test]
    fn out_of_range_bearings_wrap() {
        assert_eq!(CompassPoint::from_bearing_16(370.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing_16(-90.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_bearing_16(f64::NAN), CompassPoint::N);
    }

    #[test]
    fn centres() {
        assert_eq!(CompassPoint::N.center_degrees(), 0.0);
        assert_eq!(CompassPoint::ENE.center_degrees(), 67.5);
        assert_eq!(CompassPoint::NNW.center_degrees(), 337.5);
        for point in ROSE_16 {
            assert_eq!(CompassPoint::from_bearing_16(point.center_degrees()), point);
        }
    }
}
