//! Buffer Growth Constants
//!
//! Parameters for the growable backing store used by `TemperatureSeries`.

// ===== GROWTH STRATEGY =====

/// Capacity a zero-capacity buffer jumps to before doubling begins.
///
/// Doubling zero never makes room, so growth is seeded from this value.
pub const INITIAL_GROWTH_CAPACITY: usize = 1;

/// Multiplier applied to the total capacity on each growth step.
///
/// Doubling keeps a batch of `n` appends at amortized O(n) copies.
pub const GROWTH_FACTOR: usize = 2;
