//! Compass heading-accuracy classification
//!
//! The motion layer reports heading accuracy as degrees of uncertainty.
//! Platform convention uses a negative number for "accuracy unavailable".
//! The UI does not show raw degrees; it shows one of four tiers and prompts
//! for calibration when the tier is poor.
//!
//! ## Policy
//!
//! ```text
//! accuracy < 0          → Unknown   (sensor says: no estimate)
//! 0  ≤ accuracy < 5     → High
//! 5  ≤ accuracy < 15    → Medium
//! 15 ≤ accuracy         → Low
//! ```
//!
//! Exact boundary values go to the worse tier. The cut points are fixed
//! policy (see [`crate::constants::accuracy`]).
//!
//! ## Statelessness
//!
//! Classification keeps no history. Each sample maps to a tier on its own,
//! so a reading oscillating around 15° flips between Medium and Low on every
//! sample. Any debouncing belongs to the caller.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::accuracy::{
    ACCURACY_UNAVAILABLE_BELOW_DEG, HIGH_ACCURACY_BELOW_DEG, MEDIUM_ACCURACY_BELOW_DEG,
};

/// One raw heading-accuracy reading from the compass sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeadingAccuracySample {
    /// Degrees of uncertainty; negative means unavailable
    pub accuracy_degrees: f64,
}

impl HeadingAccuracySample {
    /// Wrap a raw reading
    pub fn new(accuracy_degrees: f64) -> Self {
        Self { accuracy_degrees }
    }

    /// Whether the sensor produced an estimate at all
    pub fn is_available(&self) -> bool {
        self.accuracy_degrees >= ACCURACY_UNAVAILABLE_BELOW_DEG
    }
}

impl From<f64> for HeadingAccuracySample {
    fn from(accuracy_degrees: f64) -> Self {
        Self::new(accuracy_degrees)
    }
}

/// User-facing accuracy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompassAccuracyTier {
    /// Sensor reported no estimate
    Unknown,
    /// Uncertainty of 15° or more
    Low,
    /// Uncertainty in [5°, 15°)
    Medium,
    /// Uncertainty under 5°
    High,
}

impl CompassAccuracyTier {
    /// Whether the UI should prompt for a calibration gesture
    pub fn needs_calibration(&self) -> bool {
        matches!(self, Self::Unknown | Self::Low)
    }

    /// Whether the needle can be trusted for prayer
    pub fn is_reliable(&self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }

    /// Short label for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CompassAccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompassAccuracyTier {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

/// Maps heading-accuracy samples onto tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassAccuracyClassifier {
    /// Readings below this are High
    high_below_degrees: f64,

    /// Readings below this (and not High) are Medium
    medium_below_degrees: f64,
}

impl Default for CompassAccuracyClassifier {
    fn default() -> Self {
        Self {
            high_below_degrees: HIGH_ACCURACY_BELOW_DEG,
            medium_below_degrees: MEDIUM_ACCURACY_BELOW_DEG,
        }
    }
}

impl CompassAccuracyClassifier {
    /// Classifier with custom cut points.
    ///
    /// Inverted bounds are swapped. Non-finite or negative bounds fall back
    /// to the defaults.
    pub fn new_with_thresholds(high_below_degrees: f64, medium_below_degrees: f64) -> Self {
        let usable = |t: f64| t.is_finite() && t >= 0.0;
        let high = if usable(high_below_degrees) { high_below_degrees } else { HIGH_ACCURACY_BELOW_DEG };
        let medium = if usable(medium_below_degrees) { medium_below_degrees } else { MEDIUM_ACCURACY_BELOW_DEG };

        let (high, medium) = if high > medium { (medium, high) } else { (high, medium) };

        Self {
            high_below_degrees: high,
            medium_below_degrees: medium,
        }
    }

    /// Upper (exclusive) bound of the High tier
    pub fn high_below_degrees(&self) -> f64 {
        self.high_below_degrees
    }

    /// Upper (exclusive) bound of the Medium tier
    pub fn medium_below_degrees(&self) -> f64 {
        self.medium_below_degrees
    }

    /// Tier for one sample. Total: every input yields a tier.
    pub fn classify(&self, sample: HeadingAccuracySample) -> CompassAccuracyTier {
        let accuracy = sample.accuracy_degrees;

        if !sample.is_available() {
            log_debug!("heading accuracy unavailable ({})", accuracy);
            CompassAccuracyTier::Unknown
        } else if accuracy < self.high_below_degrees {
            CompassAccuracyTier::High
        } else if accuracy < self.medium_below_degrees {
            CompassAccuracyTier::Medium
        } else {
            CompassAccuracyTier::Low
        }
    }
}

/// Tier for a raw accuracy reading using the default cut points
pub fn classify_accuracy(accuracy_degrees: f64) -> CompassAccuracyTier {
    CompassAccuracyClassifier::default().classify(HeadingAccuracySample::new(accuracy_degrees))
}
