//! Reusable scratch memory for neighborhood gathering.
//!
//! ## Purpose
//!
//! This module provides the per-pass workspace that neighborhood values are
//! gathered into. Allocating it once per pass (or once per worker thread)
//! and recycling it across cells keeps the per-cell hot path allocation-free.
//!
//! ## Design notes
//!
//! * **Lazy expansion**: the buffer grows on demand via `ensure_capacity`
//!   but is never shrunk, stabilizing at the maximum window size.
//! * **Logical clearing**: `clear()` resets the length, not the capacity.
//!
//! ## Invariants
//!
//! * Between cells the buffer is cleared, never deallocated.
//! * Capacity is monotonically increasing.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching; buffers are explicitly passed so that
//!   parallel executors can hold one per worker.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Neighborhood Buffer
// ============================================================================

/// Reusable buffer for the values gathered around one cell.
#[derive(Debug, Clone)]
pub struct NeighborhoodBuffer<T> {
    values: Vec<T>,
}

impl<T> NeighborhoodBuffer<T> {
    /// Create a buffer pre-sized for a window covering `capacity` cells.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Grow the backing storage if `capacity` exceeds it.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.values.capacity() < capacity {
            self.values.reserve(capacity - self.values.len());
        }
    }

    /// Drop all gathered values, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Append one gathered value.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Number of values currently gathered.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the buffer holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Immutable view of the gathered values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Mutable view of the gathered values (kernels sort in place).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }
}

impl<T> Default for NeighborhoodBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

// ============================================================================
// Tests
// ============================================================================
