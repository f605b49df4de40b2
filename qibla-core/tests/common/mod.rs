//! Shared fixtures for integration tests
//!
//! Reference observers with expected Qibla bearing and distance on the
//! 6371 km sphere, plus tolerance helpers.

#![allow(dead_code)]

pub mod scenarios;

/// Assert two floats agree within `tolerance`, with a readable message
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}

/// Assert a bearing lies in [0, 360)
#[track_caller]
pub fn assert_bearing_in_range(bearing: f64) {
    assert!(
        (0.0..360.0).contains(&bearing),
        "bearing {} outside [0, 360)",
        bearing
    );
}
