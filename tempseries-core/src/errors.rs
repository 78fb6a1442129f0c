//! Error Types for Temperature Series Operations
//!
//! ## Design Philosophy
//!
//! The error surface is deliberately tiny. A series can only fail in two ways:
//!
//! 1. **Empty series**: a statistic was requested before any reading exists.
//!    The caller recovers by adding data first; nothing is retried internally.
//!
//! 2. **Out of range**: a supplied reading is below absolute zero. The
//!    operation that reports it has left the series untouched, because every
//!    batch is validated before any value is stored.
//!
//! Errors are `Copy` and carry no heap data, so they can be returned from hot
//! paths and stored freely.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use tempseries_core::{SeriesError, TemperatureSeries};
//!
//! fn report(series: &TemperatureSeries) {
//!     match series.average() {
//!         Ok(mean) => {
//!             // publish_mean(mean);
//!             let _ = mean;
//!         }
//!         Err(SeriesError::EmptySeries) => {
//!             // Nothing recorded yet - wait for the next batch
//!         }
//!         Err(other) => {
//!             // log_error(other);
//!             let _ = other;
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Series errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A query was made against a series with no live values
    #[error("Temperature series is empty")]
    EmptySeries,

    /// Reading below the physical lower bound
    #[error("Value {value} is below the physical minimum {min}")]
    OutOfRange {
        /// The rejected reading
        value: f64,
        /// Lowest acceptable reading
        min: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SeriesError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptySeries =>
                defmt::write!(fmt, "Temperature series is empty"),
            Self::OutOfRange { value, min } =>
                defmt::write!(fmt, "Value {} below minimum {}", value, min),
        }
    }
}
