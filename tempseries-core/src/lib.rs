//! Core engine for TempSeries
//!
//! Stores temperature readings and computes descriptive statistics over them.
//! Readings are checked against absolute zero on the way in, so queries can
//! trust every stored value.
//!
//! Key properties:
//! - `no_std` + `alloc` capable
//! - Amortized O(1) appends via a doubling backing buffer
//! - Every statistic is recomputed from stored readings on each call
//!
//! ```no_run
//! use tempseries_core::TemperatureSeries;
//!
//! let mut series = TemperatureSeries::from_values(&[21.5, 22.0, 20.5])?;
//! series.add_temps(&[23.0, 19.5])?;
//!
//! let stats = series.summary_statistics()?;
//! println!("{}", stats);
//! # Ok::<(), tempseries_core::SeriesError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod series;
pub mod summary;
pub mod validation;

// Public API
pub use errors::{SeriesError, SeriesResult};
pub use series::TemperatureSeries;
pub use summary::SummaryStatistics;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
