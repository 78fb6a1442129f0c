//! Reading Validation Utilities
//!
//! ## Overview
//!
//! Shared checks used by `TemperatureSeries` at its two boundaries:
//!
//! - **Insertion** (construction and append): every reading must be at or
//!   above absolute zero.
//! - **Query**: statistics are undefined over zero readings.
//!
//! All checks are pure functions with no allocation.
//!
//! ## Batch Validation
//!
//! Batches are validated in full before anything is stored. A batch with a
//! single bad reading is rejected as a whole:
//!
//! ```rust
//! use tempseries_core::validation::validate_all;
//!
//! assert!(validate_all(&[21.5, 22.0, -273.0]).is_ok());
//! assert!(validate_all(&[21.5, -300.0, 22.0]).is_err());
//! ```
//!
//! ## NaN Handling
//!
//! The rule is "value must be >= -273.0". NaN compares false against
//! everything, so it fails that rule and is reported as out of range.

use crate::{
    constants::ABSOLUTE_ZERO_CELSIUS,
    errors::{SeriesError, SeriesResult},
};

/// Reject a reading below absolute zero
pub fn validate_min(value: f64) -> SeriesResult<()> {
    if value >= ABSOLUTE_ZERO_CELSIUS {
        Ok(())
    } else {
        Err(SeriesError::OutOfRange {
            value,
            min: ABSOLUTE_ZERO_CELSIUS,
        })
    }
}

/// Validate every reading in a batch, stopping at the first bad one
pub fn validate_all(values: &[f64]) -> SeriesResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if let Err(err) = validate_min(value) {
            log_warn!(
                "Rejected reading {} at index {} (minimum {})",
                value, index, ABSOLUTE_ZERO_CELSIUS
            );
            return Err(err);
        }
    }
    Ok(())
}

/// Guard used by every query
pub fn check_non_empty(len: usize) -> SeriesResult<()> {
    if len == 0 {
        Err(SeriesError::EmptySeries)
    } else {
        Ok(())
    }
}
