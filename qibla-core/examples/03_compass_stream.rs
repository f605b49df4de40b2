//! Streaming GPS fixes and compass accuracy through the engine
//!
//! Replays recorded sensor data the way a live app would receive it and
//! shows when the UI would prompt for calibration.
//!
//! Run with: cargo run --example 03_compass_stream --features stream-memory,stream-adapters

use qibla_core::stream::{AccuracyStream, BearingStream, MemoryStream, RawFixStream, Stream, StreamError};

fn main() {
    println!("=== Compass Stream ===\n");

    // A walk through Kuala Lumpur with one corrupt fix in the middle
    let fixes = [
        (3.1390, 101.6869),
        (3.1395, 101.6872),
        (93.0, 101.6875),
        (3.1401, 101.6878),
    ];

    let mut bearings = match BearingStream::new(RawFixStream::new(MemoryStream::new(&fixes)))
        .with_declination(-0.3)
    {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("bad declination: {}", e);
            return;
        }
    };

    loop {
        match bearings.poll_next() {
            Ok(qibla) => println!(
                "fix {}  magnetic Qibla {:.2}°",
                qibla.bearing().source_coordinate,
                qibla.magnetic_bearing_degrees()
            ),
            Err(nb::Error::Other(StreamError::Rejected(e))) => println!("skipped fix: {}", e),
            Err(nb::Error::Other(StreamError::EndOfStream)) => break,
            Err(nb::Error::Other(e)) => {
                eprintln!("stream failed: {:?}", e);
                break;
            }
            Err(nb::Error::WouldBlock) => continue,
        }
    }

    println!("\n--- Heading accuracy ---");
    let readings = [-1.0, 35.0, 18.0, 9.0, 4.0, 2.5];
    let mut tiers = AccuracyStream::new(MemoryStream::new(&readings));

    for reading in readings {
        if let Ok(tier) = tiers.poll_next() {
            let prompt = if tier.needs_calibration() { "  ← calibrate" } else { "" };
            println!("±{:>5.1}°  {:<7}{}", reading, tier, prompt);
        }
    }
}
