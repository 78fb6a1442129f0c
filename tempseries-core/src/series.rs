//! Temperature series container and its statistics
//!
//! `TemperatureSeries` stores readings in insertion order and computes every
//! statistic from the stored values on each call. Nothing is cached and no
//! running estimate is kept.
//!
//! Readings enter only through [`TemperatureSeries::from_values`] and
//! [`TemperatureSeries::add_temps`]. Both validate the whole input against
//! absolute zero before storing anything.

use alloc::vec::Vec;

use crate::{
    buffer::GrowableBuffer,
    constants::FREEZING_POINT_CELSIUS,
    errors::{SeriesError, SeriesResult},
    summary::SummaryStatistics,
    validation::{check_non_empty, validate_all},
};

/// Growable series of Celsius readings
#[derive(Debug, Clone, Default)]
pub struct TemperatureSeries {
    readings: GrowableBuffer,
}

impl TemperatureSeries {
    /// Create an empty series with no allocated capacity
    pub const fn new() -> Self {
        Self {
            readings: GrowableBuffer::new(),
        }
    }

    /// Create an empty series with `capacity` pre-allocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: GrowableBuffer::with_capacity(capacity),
        }
    }

    /// Create a series from initial readings
    ///
    /// Fails with [`SeriesError::OutOfRange`] if any reading is below
    /// absolute zero. An empty slice gives the same result as [`new`](Self::new).
    pub fn from_values(values: &[f64]) -> SeriesResult<Self> {
        if values.is_empty() {
            return Ok(Self::new());
        }

        validate_all(values)?;

        Ok(Self {
            readings: GrowableBuffer::from_slice(values),
        })
    }

    /// Number of live readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Allocated slots, always at least `len()`
    pub fn capacity(&self) -> usize {
        self.readings.capacity()
    }

    /// Live readings in insertion order
    pub fn values(&self) -> &[f64] {
        self.readings.as_slice()
    }

    /// Iterate over live readings in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.readings.iter()
    }

    /// Arithmetic mean of the live readings
    pub fn average(&self) -> SeriesResult<f64> {
        check_non_empty(self.len())?;

        let sum: f64 = self.iter().sum();
        Ok(sum / self.len() as f64)
    }

    /// Population standard deviation (divides by N)
    pub fn deviation(&self) -> SeriesResult<f64> {
        let mean = self.average()?;

        let squared: f64 = self
            .iter()
            .map(|&value| {
                let delta = value - mean;
                delta * delta
            })
            .sum();

        Ok(libm::sqrt(squared / self.len() as f64))
    }

    /// Lowest live reading
    pub fn min(&self) -> SeriesResult<f64> {
        check_non_empty(self.len())?;
        Ok(self.fold_first(f64::min))
    }

    /// Highest live reading
    pub fn max(&self) -> SeriesResult<f64> {
        check_non_empty(self.len())?;
        Ok(self.fold_first(f64::max))
    }

    /// Reading nearest to `target`
    ///
    /// Returns the reading itself, not the distance. When two readings are
    /// equally near, the lower one wins, so `[-5.0, 5.0]` gives `-5.0` for a
    /// target of zero whatever order the readings were added in.
    pub fn closest_to_value(&self, target: f64) -> SeriesResult<f64> {
        check_non_empty(self.len())?;

        let values = self.values();
        let mut closest = values[0];
        let mut best_distance = libm::fabs(closest - target);

        for &value in &values[1..] {
            let distance = libm::fabs(value - target);
            if distance < best_distance || (distance == best_distance && value < closest) {
                closest = value;
                best_distance = distance;
            }
        }

        Ok(closest)
    }

    /// Reading nearest to 0°C
    pub fn closest_to_zero(&self) -> SeriesResult<f64> {
        self.closest_to_value(FREEZING_POINT_CELSIUS)
    }

    /// Readings strictly below `threshold`, in insertion order
    ///
    /// An empty result is not an error; an empty series is.
    pub fn less_than(&self, threshold: f64) -> SeriesResult<Vec<f64>> {
        self.filter(|value| value < threshold)
    }

    /// Readings strictly above `threshold`, in insertion order
    pub fn greater_than(&self, threshold: f64) -> SeriesResult<Vec<f64>> {
        self.filter(|value| value > threshold)
    }

    /// Snapshot of mean, deviation, min and max taken now
    pub fn summary_statistics(&self) -> SeriesResult<SummaryStatistics> {
        check_non_empty(self.len())?;

        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }

    /// Append readings and return the new length
    ///
    /// The whole batch is validated first. If any reading is below absolute
    /// zero the call fails with [`SeriesError::OutOfRange`] and the series is
    /// left exactly as it was.
    pub fn add_temps(&mut self, values: &[f64]) -> SeriesResult<usize> {
        validate_all(values)?;

        self.readings.extend_from_slice(values);
        Ok(self.len())
    }

    /// Fold live readings starting from the first one
    fn fold_first(&self, f: impl Fn(f64, f64) -> f64) -> f64 {
        let values = self.values();
        values[1..].iter().fold(values[0], |acc, &value| f(acc, value))
    }

    fn filter(&self, keep: impl Fn(f64) -> bool) -> SeriesResult<Vec<f64>> {
        check_non_empty(self.len())?;
        Ok(self.iter().copied().filter(|&value| keep(value)).collect())
    }
}

impl TryFrom<&[f64]> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(values: &[f64]) -> SeriesResult<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<f64>> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> SeriesResult<Self> {
        Self::from_values(&values)
    }
}

impl<'a> IntoIterator for &'a TemperatureSeries {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
