//! Common test utilities and data generators for integration tests
//!
//! Provides deterministic temperature series so integration tests do not
//! depend on a random source.

#![allow(dead_code)]

use tempseries_core::TemperatureSeries;

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Deterministic generator for realistic temperature readings
pub struct TestDataGenerator {
    seed: u32,
}

impl TestDataGenerator {
    /// Create new generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Generate hourly readings with diurnal variation and noise
    ///
    /// Simulates a sine wave with a 24h period around `base_temp`, with
    /// `amplitude` degrees of swing and ±0.5°C of noise.
    pub fn diurnal_series(&mut self, base_temp: f64, amplitude: f64, hours: usize) -> Vec<f64> {
        (0..hours)
            .map(|hour| {
                let angle = 2.0 * core::f64::consts::PI * hour as f64 / 24.0;
                let noise = self.random_float() - 0.5;
                base_temp + amplitude * libm::sin(angle) + noise
            })
            .collect()
    }

    /// Generate readings that include one value below absolute zero
    pub fn batch_with_glitch(&mut self, len: usize, glitch_at: usize) -> Vec<f64> {
        (0..len)
            .map(|i| if i == glitch_at { -300.0 } else { 15.0 + self.random_float() * 10.0 })
            .collect()
    }

    /// Simple LCG in [0, 1)
    fn random_float(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((self.seed >> 16) & 0x7fff) as f64 / 32_768.0
    }
}

/// Build a series, panicking on invalid test input
pub fn series_of(values: &[f64]) -> TemperatureSeries {
    TemperatureSeries::from_values(values).expect("test data must be valid")
}

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
