//! Comparator-network primitives.
//!
//! ## Purpose
//!
//! This module defines the compare-exchange representation shared by the
//! generator, the embedded tables, and the verifier, together with the
//! branchless routine that applies a network to a slice.
//!
//! ## Design notes
//!
//! * **Branchless**: A comparator is applied as an unconditional
//!   `min`/`max` write pair, never as a conditional swap, so the inner loop
//!   carries no data-dependent branch.
//! * **Compact**: Indices are stored as `u8`; all supported networks are far
//!   below 256 elements.
//!
//! ## Invariants
//!
//! * A network for size `n` only references indices `< n`.
//! * Inputs never contain NaN; the gather stage filters missing values
//!   before any kernel sorts.

// External dependencies
use num_traits::Float;

// ============================================================================
// Comparator
// ============================================================================

/// A single compare-exchange `(lo, hi)`: if element `lo` is greater than
/// element `hi`, the two are swapped.
pub type Comparator = (u8, u8);

/// A fixed-size sorting network: an ordered comparator sequence that fully
/// sorts any slice of exactly `size` elements.
#[derive(Copy, Clone, Debug)]
pub struct SortingNetwork {
    /// Element count the network sorts.
    pub size: usize,
    /// Comparators in application order.
    pub comparators: &'static [Comparator],
}

impl SortingNetwork {
    /// Apply the network in place.
    #[inline]
    pub fn apply<T: Float>(&self, values: &mut [T]) {
        debug_assert_eq!(values.len(), self.size);
        apply_comparators(self.comparators, values);
    }
}

// ============================================================================
// Application
// ============================================================================

/// Apply a comparator sequence to `values` in place.
#[inline]
pub fn apply_comparators<T: Float>(comparators: &[Comparator], values: &mut [T]) {
    for &(lo, hi) in comparators {
        let (lo, hi) = (lo as usize, hi as usize);
        let a = values[lo];
        let b = values[hi];
        values[lo] = a.min(b);
        values[hi] = a.max(b);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_comparator_orders_a_pair() {
        let mut v = [2.0, 1.0];
        apply_comparators(&[(0, 1)], &mut v);
        assert_eq!(v, [1.0, 2.0]);

        let mut v = [1.0, 2.0];
        apply_comparators(&[(0, 1)], &mut v);
        assert_eq!(v, [1.0, 2.0]);
    }

    #[test]
    fn application_is_order_sensitive() {
        // (0,1) then (1,2) moves the maximum to the end but is not a full
        // sort of three elements.
        let mut v = [3.0, 2.0, 1.0];
        apply_comparators(&[(0, 1), (1, 2)], &mut v);
        assert_eq!(v, [2.0, 1.0, 3.0]);
    }
}
