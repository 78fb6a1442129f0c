//! Growable Buffer for Temperature Readings
//!
//! ## Overview
//!
//! This module provides the backing store of `TemperatureSeries`: an
//! arena-style buffer that separates the **logical length** (how many
//! readings are live) from the **physical capacity** (how many slots are
//! allocated).
//!
//! ## Design Rationale
//!
//! ### Why Track Capacity Separately?
//!
//! Reallocating on every append turns a batch of `n` appends into O(n²)
//! copying. Growing the capacity by doubling keeps the total copy cost
//! linear.
//!
//! The buffer owns a `Vec<f64>` whose *length* is the physical capacity.
//! Slots past `len` are allocated but stale. The buffer never reads them and
//! never exposes them.
//!
//! ### Memory Layout
//!
//! ```text
//! GrowableBuffer after 5 readings, capacity 8:
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │ 21.0│ 21.4│ 22.0│ 21.8│ 21.5│  ·  │  ·  │  ·  │
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!   0     1     2     3     4     5     6     7
//!                              ↑
//!                             len = 5
//! ```
//!
//! ### Growth Strategy
//!
//! Before appending `k` readings:
//!
//! ```text
//! if capacity == 0: capacity = INITIAL_GROWTH_CAPACITY
//! while capacity - len < k: capacity *= GROWTH_FACTOR
//! ```
//!
//! Capacity never shrinks.
//!
//! ## Usage Example
//!
//! ```rust
//! use tempseries_core::buffer::GrowableBuffer;
//!
//! let mut buffer = GrowableBuffer::new();
//! buffer.extend_from_slice(&[20.5, 21.0, 21.5]);
//!
//! assert_eq!(buffer.len(), 3);
//! assert_eq!(buffer.capacity(), 4);
//! assert_eq!(buffer.as_slice(), &[20.5, 21.0, 21.5]);
//! ```

use alloc::vec::Vec;

use crate::constants::{GROWTH_FACTOR, INITIAL_GROWTH_CAPACITY};

/// Growable buffer with a logical length independent of its capacity
///
/// ## Internal Invariants
///
/// - `len <= slots.len()` (never claim more readings than allocated slots)
/// - `slots[..len]` are the live readings in insertion order
///
/// ## Thread Safety
///
/// Plain owned data. Mutation requires `&mut self`, so the borrow checker
/// rules out concurrent appends without external synchronization.
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer {
    /// Physical storage; its length is the capacity
    slots: Vec<f64>,

    /// Number of live readings at the front of `slots`
    len: usize,
}

impl GrowableBuffer {
    /// Creates an empty buffer with zero capacity
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty buffer with `capacity` pre-allocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, 0.0);
        Self { slots, len: 0 }
    }

    /// Creates a full buffer holding a copy of `values`
    ///
    /// Capacity equals length, so the first append will trigger growth.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            slots: values.to_vec(),
            len: values.len(),
        }
    }

    /// Number of live readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer has no live readings
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Free slots after the live region
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Live readings in insertion order
    pub fn as_slice(&self) -> &[f64] {
        &self.slots[..self.len]
    }

    /// Iterate over live readings in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Grow capacity until at least `additional` free slots exist
    ///
    /// Capacity is doubled, not bumped to the exact size, so repeated small
    /// appends stay amortized O(1).
    pub fn reserve(&mut self, additional: usize) {
        if self.remaining() >= additional {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity, self.len, additional);
        self.slots.resize(new_capacity, 0.0);

        log_debug!(
            "Grew series buffer from {} to {} slots (len {}, adding {})",
            old_capacity, new_capacity, self.len, additional
        );
    }

    /// Append readings after the live region, growing as needed
    ///
    /// No validation happens here; callers validate before appending.
    pub fn extend_from_slice(&mut self, values: &[f64]) {
        self.reserve(values.len());

        let end = self.len + values.len();
        self.slots[self.len..end].copy_from_slice(values);
        self.len = end;
    }
}

/// Smallest doubled capacity that leaves room for `additional` readings
fn grown_capacity(capacity: usize, len: usize, additional: usize) -> usize {
    let mut capacity = capacity.max(INITIAL_GROWTH_CAPACITY);
    while capacity - len < additional {
        capacity *= GROWTH_FACTOR;
    }
    capacity
}
