//! Qibla direction for a handful of observers
//!
//! Run with: cargo run --example 01_qibla_direction

use qibla_core::{calculate_bearing, QiblaError};

fn main() -> Result<(), QiblaError> {
    println!("=== Qibla Direction ===\n");

    let observers = [
        ("New York", 40.7128, -74.0060),
        ("London", 51.5074, -0.1278),
        ("Jakarta", -6.2088, 106.8456),
        ("Sydney", -33.8688, 151.2093),
        ("North Pole", 90.0, 0.0),
        ("Masjid al-Haram", 21.4225, 39.8262),
    ];

    for (name, latitude, longitude) in observers {
        let qibla = calculate_bearing(latitude, longitude)?;
        println!(
            "{:<16} {}  →  {:>6.2}° {:<3} ({})  {:>8.1} km",
            name,
            qibla.source_coordinate,
            qibla.initial_bearing_degrees,
            qibla.compass_point(),
            qibla.compass_point().name(),
            qibla.distance_kilometers,
        );
    }

    // Bad GPS fix - surfaced as a typed error, never a bogus bearing
    println!("\n--- Invalid fix ---");
    match calculate_bearing(95.0, 10.0) {
        Ok(qibla) => println!("unexpected bearing {:.2}°", qibla.initial_bearing_degrees),
        Err(e) => println!("✗ {} [{}]", e, e.code()),
    }

    Ok(())
}
