//! Physical Constants for TempSeries
//!
//! Limits that every accepted reading must respect. These are checked at
//! insertion time so that queries never have to re-validate stored data.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Absolute zero in Celsius (°C), rounded to the whole degree.
///
/// The lower limit of temperature where molecular motion ceases. Readings
/// below this value are rejected at construction and append time. The exact
/// value is -273.15°C; the series accepts anything from -273.0 upwards so
/// that a sensor's floor reading of -273 is still a valid input.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.0;

/// Temperature used by `closest_to_zero` (°C).
///
/// Freezing point of water at standard pressure.
pub const FREEZING_POINT_CELSIUS: f64 = 0.0;
