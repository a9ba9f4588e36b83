//! Embedded comparator tables and the size-dispatched sorting entry point.
//!
//! ## Purpose
//!
//! This module holds the precomputed networks for every element count the
//! median kernel dispatches to, and the strategy selection that routes a
//! neighborhood to a network, a hybrid block sort, or a generic sort.
//!
//! ## Key concepts
//!
//! * **Embedded tables**: sizes 2..=16 carry a full network, transcribed
//!   from the generator's output. The verifier tests assert they match it
//!   comparator-for-comparator, so a hand-edited table can never silently
//!   diverge from the algorithm.
//! * **Hybrid sizes**: a pure network for 17..=27 elements would need
//!   ~115-200 comparators. Pre-sorting 9-element blocks with the size-9
//!   network and finishing with one insertion pass is cheaper, and the
//!   insertion pass runs near-linear on the mostly-sorted slice.
//! * **Generic fallback**: insertion sort below 40 elements, unstable sort
//!   above. Larger neighborhoods only arise from unusually large windows,
//!   off the optimized path.
//!
//! ## Invariants
//!
//! * `sort_values` produces an identical ordering on every path; which
//!   strategy ran is unobservable from the output.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::sorting::network::{apply_comparators, Comparator, SortingNetwork};

// ============================================================================
// Strategy Thresholds
// ============================================================================

/// Largest size with an embedded full network.
pub const MAX_NETWORK_SIZE: usize = 16;

/// Largest size handled by the hybrid block strategy.
pub const MAX_HYBRID_SIZE: usize = 27;

/// Block width used by the hybrid strategy.
pub const HYBRID_BLOCK: usize = 9;

/// Below this size the generic path uses insertion sort; above it, a full
/// comparison sort.
pub const GENERIC_SORT_THRESHOLD: usize = 40;

// ============================================================================
// Embedded Networks (generator output; see sorting::verifier tests)
// ============================================================================

/// Network for 2 elements (1 comparator).
pub static SORT2: &[Comparator] = &[(0, 1)];

/// Network for 3 elements (3 comparators).
pub static SORT3: &[Comparator] = &[(0, 1), (0, 2), (1, 2)];

/// Network for 4 elements (5 comparators).
pub static SORT4: &[Comparator] = &[(0, 1), (2, 3), (0, 2), (1, 3), (1, 2)];

/// Network for 5 elements (9 comparators).
pub static SORT5: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (0, 4), (2, 4), (1, 2), (3, 4),
];

/// Network for 6 elements (12 comparators).
pub static SORT6: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (0, 4), (2, 4), (1, 5), (3, 5),
    (1, 2), (3, 4),
];

/// Network for 7 elements (16 comparators).
pub static SORT7: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (4, 6), (5, 6), (0, 4), (2, 6),
    (2, 4), (1, 5), (3, 5), (1, 2), (3, 4), (5, 6),
];

/// Network for 8 elements (19 comparators).
pub static SORT8: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6),
];

/// Network for 9 elements (28 comparators).
pub static SORT9: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (0, 8),
    (4, 8), (2, 4), (6, 8), (3, 5), (1, 2), (3, 4), (5, 6), (7, 8),
];

/// Network for 10 elements (32 comparators).
pub static SORT10: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (0, 8), (4, 8), (2, 4), (6, 8), (1, 9), (5, 9), (3, 5), (7, 9), (1, 2), (3, 4),
    (5, 6), (7, 8),
];

/// Network for 11 elements (38 comparators).
pub static SORT11: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (8, 10), (9, 10), (9, 10), (0, 8), (4, 8), (2, 10), (6, 10), (2, 4), (6, 8),
    (1, 9), (5, 9), (3, 5), (7, 9), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10),
];

/// Network for 12 elements (42 comparators).
pub static SORT12: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (10, 11), (8, 10), (9, 11), (9, 10), (9, 10), (0, 8), (4, 8), (2, 10), (6, 10),
    (2, 4), (6, 8), (1, 9), (5, 9), (3, 11), (7, 11), (3, 5), (7, 9), (1, 2),
    (3, 4), (5, 6), (7, 8), (9, 10),
];

/// Network for 13 elements (48 comparators).
pub static SORT13: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (10, 11), (8, 10), (9, 11), (9, 10), (8, 12), (10, 12), (9, 10), (11, 12),
    (0, 8), (4, 12), (4, 8), (2, 10), (6, 10), (2, 4), (6, 8), (10, 12), (1, 9),
    (5, 9), (3, 11), (7, 11), (3, 5), (7, 9), (1, 2), (3, 4), (5, 6), (7, 8),
    (9, 10), (11, 12),
];

/// Network for 14 elements (53 comparators).
pub static SORT14: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (10, 11), (8, 10), (9, 11), (9, 10), (12, 13), (8, 12), (10, 12), (9, 13),
    (11, 13), (9, 10), (11, 12), (0, 8), (4, 12), (4, 8), (2, 10), (6, 10), (2, 4),
    (6, 8), (10, 12), (1, 9), (5, 13), (5, 9), (3, 11), (7, 11), (3, 5), (7, 9),
    (11, 13), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
];

/// Network for 15 elements (59 comparators).
pub static SORT15: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (10, 11), (8, 10), (9, 11), (9, 10), (12, 13), (12, 14), (13, 14), (8, 12),
    (10, 14), (10, 12), (9, 13), (11, 13), (9, 10), (11, 12), (13, 14), (0, 8),
    (4, 12), (4, 8), (2, 10), (6, 14), (6, 10), (2, 4), (6, 8), (10, 12), (1, 9),
    (5, 13), (5, 9), (3, 11), (7, 11), (3, 5), (7, 9), (11, 13), (1, 2), (3, 4),
    (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
];

/// Network for 16 elements (63 comparators).
pub static SORT16: &[Comparator] = &[
    (0, 1), (2, 3), (0, 2), (1, 3), (1, 2), (4, 5), (6, 7), (4, 6), (5, 7), (5, 6),
    (0, 4), (2, 6), (2, 4), (1, 5), (3, 7), (3, 5), (1, 2), (3, 4), (5, 6), (8, 9),
    (10, 11), (8, 10), (9, 11), (9, 10), (12, 13), (14, 15), (12, 14), (13, 15),
    (13, 14), (8, 12), (10, 14), (10, 12), (9, 13), (11, 15), (11, 13), (9, 10),
    (11, 12), (13, 14), (0, 8), (4, 12), (4, 8), (2, 10), (6, 14), (6, 10), (2, 4),
    (6, 8), (10, 12), (1, 9), (5, 13), (5, 9), (3, 11), (7, 15), (7, 11), (3, 5),
    (7, 9), (11, 13), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14),
];

/// Look up the embedded network for `n` elements.
pub fn network_for(n: usize) -> Option<SortingNetwork> {
    let comparators = match n {
        2 => SORT2,
        3 => SORT3,
        4 => SORT4,
        5 => SORT5,
        6 => SORT6,
        7 => SORT7,
        8 => SORT8,
        9 => SORT9,
        10 => SORT10,
        11 => SORT11,
        12 => SORT12,
        13 => SORT13,
        14 => SORT14,
        15 => SORT15,
        16 => SORT16,
        _ => return None,
    };
    Some(SortingNetwork {
        size: n,
        comparators,
    })
}

// ============================================================================
// Hybrid Strategy
// ============================================================================

/// Block offsets for the hybrid sort of `n` elements.
///
/// Disjoint 9-element blocks at 0, 9, ..., plus one final block at `n - 9`
/// (overlapping its predecessor) when `n` is not a multiple of 9. A 25-cell
/// window pre-sorts at offsets 0, 9 and 16.
fn hybrid_offsets(n: usize) -> impl Iterator<Item = usize> {
    debug_assert!((HYBRID_BLOCK..=MAX_HYBRID_SIZE).contains(&n));
    let full = n / HYBRID_BLOCK;
    let tail = if n % HYBRID_BLOCK == 0 {
        None
    } else {
        Some(n - HYBRID_BLOCK)
    };
    (0..full).map(|b| b * HYBRID_BLOCK).chain(tail)
}

// Pre-sort 9-element blocks, then finish with one insertion pass.
fn hybrid_sort<T: Float>(values: &mut [T]) {
    let n = values.len();
    for offset in hybrid_offsets(n) {
        apply_comparators(SORT9, &mut values[offset..offset + HYBRID_BLOCK]);
    }
    insertion_sort(values);
}

// ============================================================================
// Generic Fallbacks
// ============================================================================

/// Insertion sort; near-linear on mostly-sorted input.
pub fn insertion_sort<T: Float>(values: &mut [T]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Sort a neighborhood in place with the cheapest strategy for its size.
pub fn sort_values<T: Float>(values: &mut [T]) {
    let n = values.len();
    match n {
        0 | 1 => {}
        2..=MAX_NETWORK_SIZE => {
            // Unwrap is fine: every size in this arm has a table entry.
            let network = network_for(n).unwrap();
            network.apply(values);
        }
        _ if n <= MAX_HYBRID_SIZE => hybrid_sort(values),
        _ if n < GENERIC_SORT_THRESHOLD => insertion_sort(values),
        _ => values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Small multiplicative generator; good enough for shuffled test data.
    struct Lcg(u64);

    impl Lcg {
        fn next_f64(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn is_sorted(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn every_strategy_size_sorts_random_input() {
        let mut rng = Lcg(0x5eed);
        for n in 0..=64 {
            for _ in 0..50 {
                let mut values: Vec<f64> = (0..n).map(|_| rng.next_f64()).collect();
                sort_values(&mut values);
                assert!(is_sorted(&values), "sort_values failed for n={n}");
            }
        }
    }

    #[test]
    fn hybrid_offsets_match_the_25_element_layout() {
        let offsets: Vec<usize> = hybrid_offsets(25).collect();
        assert_eq!(offsets, vec![0, 9, 16]);

        let offsets: Vec<usize> = hybrid_offsets(27).collect();
        assert_eq!(offsets, vec![0, 9, 18]);

        let offsets: Vec<usize> = hybrid_offsets(17).collect();
        assert_eq!(offsets, vec![0, 8]);
    }

    #[test]
    fn hybrid_sizes_sort_reversed_and_constant_input() {
        for n in (MAX_NETWORK_SIZE + 1)..=MAX_HYBRID_SIZE {
            let mut values: Vec<f64> = (0..n).rev().map(|v| v as f64).collect();
            sort_values(&mut values);
            assert!(is_sorted(&values), "hybrid failed on reversed n={n}");

            let mut values = vec![1.0; n];
            sort_values(&mut values);
            assert!(values.iter().all(|&v| v == 1.0));
        }
    }

    #[test]
    fn insertion_sort_handles_duplicates() {
        let mut values = vec![3.0, 1.0, 3.0, 1.0, 2.0, 2.0];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn network_lookup_covers_exactly_the_table_range() {
        assert!(network_for(1).is_none());
        for n in 2..=MAX_NETWORK_SIZE {
            let network = network_for(n).unwrap();
            assert_eq!(network.size, n);
        }
        assert!(network_for(MAX_NETWORK_SIZE + 1).is_none());
    }
}
