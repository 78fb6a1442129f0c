//! Error Handling Example
//!
//! This example demonstrates the two ways a series can fail and how to
//! recover from each.
//!
//! ## Error Categories
//!
//! 1. **EmptySeries** - a statistic was requested before any readings exist
//! 2. **OutOfRange** - a reading below absolute zero was supplied
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_error_handling
//! ```

use tempseries_core::{SeriesError, TemperatureSeries};

fn main() {
    println!("TempSeries Error Handling Example");
    println!("=================================\n");

    let mut series = TemperatureSeries::new();

    // Querying before any data arrives
    match series.average() {
        Ok(mean) => println!("Mean: {:.2}°C", mean),
        Err(SeriesError::EmptySeries) => println!("No readings yet - waiting for data"),
        Err(e) => println!("Unexpected error: {}", e),
    }

    // A batch containing a sensor glitch is rejected as a whole
    let glitched = [21.0, 21.4, -999.0, 21.8];
    match series.add_temps(&glitched) {
        Ok(len) => println!("Stored batch, len {}", len),
        Err(SeriesError::OutOfRange { value, min }) => {
            println!("Rejected batch: {}°C is below {}°C", value, min);
            println!("Series still holds {} readings", series.len());

            // Recovery: drop the impossible readings and retry
            let cleaned: Vec<f64> = glitched.iter().copied().filter(|&v| v >= min).collect();
            match series.add_temps(&cleaned) {
                Ok(len) => println!("Stored cleaned batch, len {}", len),
                Err(e) => println!("Retry failed: {}", e),
            }
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    // Construction enforces the same bound
    let test_cases: [(&[f64], &str); 3] = [
        (&[-273.0, 0.0, 100.0], "Exactly absolute zero"),
        (&[-273.5], "Just below absolute zero"),
        (&[f64::NAN], "Not a number"),
    ];

    println!("\nConstruction checks:");
    for (values, description) in &test_cases {
        match TemperatureSeries::from_values(values) {
            Ok(s) => println!("  {:<26} ✓ {} readings", description, s.len()),
            Err(e) => println!("  {:<26} ✗ {}", description, e),
        }
    }

    if let Ok(stats) = series.summary_statistics() {
        println!("\nFinal summary: {}", stats);
    }
}
