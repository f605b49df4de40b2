//! Property-based tests for the quantified invariants
//!
//! - Bearings always land in [0, 360), distances are never negative
//! - Repeated calculation is bit-identical
//! - Declination output is always normalized; zero declination is a no-op
//! - Accuracy classification is total and monotone

mod common;

use proptest::prelude::*;
use qibla_core::{
    apply_declination, calculate_bearing, classify_accuracy, CompassAccuracyTier, Coordinate,
};

use common::assert_bearing_in_range;

fn latitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -90.0..=90.0f64,
        Just(90.0),
        Just(-90.0),
        Just(0.0),
    ]
}

fn longitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -180.0..=180.0f64,
        Just(180.0),
        Just(-180.0),
    ]
}

fn tier_rank(tier: CompassAccuracyTier) -> u8 {
    match tier {
        CompassAccuracyTier::Unknown => 0,
        CompassAccuracyTier::High => 1,
        CompassAccuracyTier::Medium => 2,
        CompassAccuracyTier::Low => 3,
    }
}

proptest! {
    #[test]
    fn bearing_always_in_range(lat in latitude(), lon in longitude()) {
        let result = calculate_bearing(lat, lon).unwrap();
        assert_bearing_in_range(result.initial_bearing_degrees);
        prop_assert!(result.distance_kilometers >= 0.0);
        prop_assert!(result.distance_kilometers.is_finite());
    }

    #[test]
    fn distance_bounded_by_half_circumference(lat in latitude(), lon in longitude()) {
        let result = calculate_bearing(lat, lon).unwrap();
        prop_assert!(result.distance_kilometers <= core::f64::consts::PI * 6371.0 + 1e-6);
    }

    #[test]
    fn calculation_is_deterministic(lat in latitude(), lon in longitude()) {
        let a = calculate_bearing(lat, lon).unwrap();
        let b = calculate_bearing(lat, lon).unwrap();
        prop_assert_eq!(a.initial_bearing_degrees.to_bits(), b.initial_bearing_degrees.to_bits());
        prop_assert_eq!(a.distance_kilometers.to_bits(), b.distance_kilometers.to_bits());
    }

    #[test]
    fn out_of_range_latitude_rejected(lat in prop_oneof![90.000001..1e6f64, -1e6..-90.000001f64], lon in longitude()) {
        prop_assert!(calculate_bearing(lat, lon).is_err());
        prop_assert!(Coordinate::new(lat, lon).is_err());
    }

    #[test]
    fn declination_output_normalized(bearing in 0.0..360.0f64, declination in -1e6..1e6f64) {
        let magnetic = apply_declination(bearing, declination);
        prop_assert!((0.0..360.0).contains(&magnetic), "{} + {} gave {}", bearing, declination, magnetic);
    }

    #[test]
    fn zero_declination_is_noop(bearing in 0.0..360.0f64) {
        prop_assert_eq!(apply_declination(bearing, 0.0), bearing);
    }

    #[test]
    fn classification_is_total(accuracy in proptest::num::f64::POSITIVE | proptest::num::f64::NEGATIVE | proptest::num::f64::NORMAL | proptest::num::f64::ZERO | proptest::num::f64::SUBNORMAL) {
        let tier = classify_accuracy(accuracy);
        if accuracy < 0.0 {
            prop_assert_eq!(tier, CompassAccuracyTier::Unknown);
        } else {
            prop_assert_ne!(tier, CompassAccuracyTier::Unknown);
        }
    }

    #[test]
    fn classification_is_monotone(a in 0.0..1000.0f64, b in 0.0..1000.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_rank(classify_accuracy(low)) <= tier_rank(classify_accuracy(high)));
    }
}
