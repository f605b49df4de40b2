//! True vs magnetic Qibla bearing
//!
//! A phone compass points at magnetic north. This shows how the declination
//! at a location shifts the bearing the needle has to show.
//!
//! Run with: cargo run --example 02_declination

use qibla_core::{calculate_bearing, apply_declination, DeclinationCorrector, QiblaError};

fn main() -> Result<(), QiblaError> {
    println!("=== Magnetic Declination ===\n");

    // Approximate 2025 declinations, degrees (positive = east)
    let observers = [
        ("New York", 40.7128, -74.0060, -12.9),
        ("London", 51.5074, -0.1278, 1.2),
        ("Jakarta", -6.2088, 106.8456, 0.7),
        ("Anchorage", 61.2181, -149.9003, 14.6),
    ];

    let corrector = DeclinationCorrector::new();

    for (name, latitude, longitude, declination) in observers {
        let qibla = calculate_bearing(latitude, longitude)?;
        let adjusted = corrector.apply_declination(&qibla, declination)?;

        println!(
            "{:<10} true {:>6.2}°  declination {:>+5.1}°  magnetic {:>6.2}°",
            name,
            qibla.initial_bearing_degrees,
            adjusted.magnetic_declination_degrees(),
            adjusted.magnetic_bearing_degrees(),
        );
    }

    println!("\n--- Wrap-around ---");
    println!("  5° with -10° declination → {:.1}°", apply_declination(5.0, -10.0));
    println!("355° with +10° declination → {:.1}°", apply_declination(355.0, 10.0));

    Ok(())
}
