//! Summary statistics snapshot
//!
//! A `SummaryStatistics` is computed once from a series and never changes.
//! Appending to the series afterwards does not update an existing snapshot.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean, population deviation and extrema of a series at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryStatistics {
    mean: f64,
    deviation: f64,
    min: f64,
    max: f64,
}

impl SummaryStatistics {
    /// Build a snapshot from already computed values
    pub const fn new(mean: f64, deviation: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            deviation,
            min,
            max,
        }
    }

    /// Arithmetic mean (°C)
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation (°C)
    pub const fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Lowest reading (°C)
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Highest reading (°C)
    pub const fn max(&self) -> f64 {
        self.max
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={:.2} deviation={:.2} min={:.2} max={:.2}",
            self.mean, self.deviation, self.min, self.max
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SummaryStatistics {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "mean={} deviation={} min={} max={}",
            self.mean, self.deviation, self.min, self.max
        )
    }
}
