//! Basic Statistics Example
//!
//! This example demonstrates the simplest use of TempSeries: recording a day
//! of temperature readings and summarizing them.
//!
//! ## What You'll Learn
//!
//! - Creating a series from initial readings
//! - Appending batches and watching capacity grow
//! - Querying individual statistics and a summary snapshot
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_statistics
//! ```

use tempseries_core::{SeriesResult, TemperatureSeries};

fn main() -> SeriesResult<()> {
    println!("TempSeries Basic Statistics Example");
    println!("===================================\n");

    // Overnight readings from an outdoor sensor
    let mut series = TemperatureSeries::from_values(&[4.5, 3.8, 3.1, 2.9, 3.4])?;
    println!(
        "Initial series: {} readings, capacity {}",
        series.len(),
        series.capacity()
    );

    // Morning and afternoon batches
    let batches: [&[f64]; 3] = [
        &[5.2, 7.8, 10.1],
        &[12.6, 14.9, 16.0, 16.4],
        &[15.1, 12.3, 9.0, 6.7, 5.5],
    ];

    println!("\nAppending batches:");
    for batch in &batches {
        let len = series.add_temps(batch)?;
        println!("  +{:2} readings -> len {:2}, capacity {:2}", batch.len(), len, series.capacity());
    }

    println!("\nStatistics:");
    println!("  Mean:       {:6.2}°C", series.average()?);
    println!("  Deviation:  {:6.2}°C", series.deviation()?);
    println!("  Min:        {:6.2}°C", series.min()?);
    println!("  Max:        {:6.2}°C", series.max()?);
    println!("  Near 0°C:   {:6.2}°C", series.closest_to_zero()?);
    println!("  Near 10°C:  {:6.2}°C", series.closest_to_value(10.0)?);

    println!("\nReadings below 5°C:  {:?}", series.less_than(5.0)?);
    println!("Readings above 15°C: {:?}", series.greater_than(15.0)?);

    let snapshot = series.summary_statistics()?;
    println!("\nSummary snapshot: {}", snapshot);

    Ok(())
}
