//! Constants for TempSeries Core
//!
//! Centralized constants used throughout the crate.
//!
//! ## Organization
//!
//! - **Physics**: physical limits applied to every reading
//! - **Buffers**: growth parameters of the backing store
//!
//! Always use these constants instead of magic numbers, and keep the unit in
//! the name.

/// Physical constants and limits based on thermodynamics.
pub mod physics;

/// Growth parameters for the series backing store.
pub mod buffers;

pub use physics::{ABSOLUTE_ZERO_CELSIUS, FREEZING_POINT_CELSIUS};

pub use buffers::{GROWTH_FACTOR, INITIAL_GROWTH_CAPACITY};
