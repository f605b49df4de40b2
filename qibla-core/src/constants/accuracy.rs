//! Compass Heading-Accuracy Thresholds
//!
//! The sensor layer reports heading accuracy as degrees of uncertainty,
//! with negative values meaning "unavailable". These cut points turn that
//! number into the tier the UI shows.
//!
//! Both values are empirical policy carried over from the shipping app, not
//! derived from sensor physics. Boundaries are exclusive on the upper side:
//! a reading of exactly 5.0° is Medium, exactly 15.0° is Low.

/// Readings in [0, this) degrees are High accuracy.
///
/// Below 5° the needle is steady enough to pray by without a second look.
pub const HIGH_ACCURACY_BELOW_DEG: f64 = 5.0;

/// Readings in [HIGH_ACCURACY_BELOW_DEG, this) degrees are Medium accuracy.
///
/// At 15° and above the UI prompts for a figure-eight calibration.
pub const MEDIUM_ACCURACY_BELOW_DEG: f64 = 15.0;

/// Readings below this are the platform's "accuracy unavailable" marker.
pub const ACCURACY_UNAVAILABLE_BELOW_DEG: f64 = 0.0;
