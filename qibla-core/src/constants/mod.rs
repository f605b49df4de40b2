//! Constants for Qibla Core
//!
//! Centralized numeric values used throughout the engine. Every value is
//! defined once here with its unit in the name and its source documented.
//!
//! ## Organization
//!
//! - **Geodesy**: the Kaaba coordinate, Earth radius, valid coordinate ranges
//! - **Accuracy**: heading-accuracy cut points for compass tiers
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Accuracy thresholds are behavioural policy; changing them changes
//!    which tier the UI shows at the boundaries
//! 3. Use descriptive names that include units

/// Geodetic constants: target location, Earth model, coordinate limits.
pub mod geodesy;

/// Heading-accuracy thresholds for compass tier classification.
pub mod accuracy;

// Re-export commonly used constants for convenience
pub use geodesy::{
    KAABA_LATITUDE_DEG, KAABA_LONGITUDE_DEG, EARTH_MEAN_RADIUS_KM,
    LATITUDE_MIN_DEG, LATITUDE_MAX_DEG, LONGITUDE_MIN_DEG, LONGITUDE_MAX_DEG,
};

pub use accuracy::{HIGH_ACCURACY_BELOW_DEG, MEDIUM_ACCURACY_BELOW_DEG};
