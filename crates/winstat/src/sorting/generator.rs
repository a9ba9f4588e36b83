//! Comparator-network generation via Batcher's odd-even merge sort.
//!
//! ## Purpose
//!
//! This module synthesizes the canonical comparator sequence for a requested
//! element count. It is an offline facility: the hot path consumes the
//! embedded tables, and the verifier cross-checks those tables against this
//! generator.
//!
//! ## Key concepts
//!
//! * **Odd-even merge sort**: recursively sort the two halves, then merge
//!   them with an odd-even merge network. The merge handles the even- and
//!   odd-indexed subsequences at doubled stride, then compare-exchanges
//!   adjacent pairs across the seam; the recursion bottoms out in a single
//!   comparator.
//! * **Pruning**: the recursion is only defined for power-of-two sizes, so
//!   the network is generated for the next power of two and comparators
//!   whose upper index falls outside the requested size are dropped.
//!   Conceptually the input is padded with virtual `+∞` elements; a
//!   comparator reaching into the padding can never move a real element,
//!   so dropping it preserves correctness for every size.
//!
//! ## Invariants
//!
//! * Output comparators reference only indices `< n`, in application order.
//! * For a given `n` the output is deterministic; it is the canonical
//!   sequence the verifier compares candidates against.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::sorting::network::Comparator;

// ============================================================================
// Generator
// ============================================================================

/// Generate the canonical sorting network for `n` elements.
///
/// # Panics
///
/// Panics if `n` exceeds 256, the largest size the comparator encoding
/// supports (orders of magnitude beyond any window this crate dispatches
/// to a network).
pub fn odd_even_merge_sort(n: usize) -> Vec<Comparator> {
    assert!(n <= 256, "sorting networks are limited to 256 elements");

    if n < 2 {
        return Vec::new();
    }

    let padded = n.next_power_of_two();
    let mut comparators = Vec::new();
    generate_sort(0, padded, &mut comparators);

    // Keep only comparators that touch real elements.
    comparators.retain(|&(_, hi)| (hi as usize) < n);
    comparators
}

// Emit comparators sorting the `count` elements starting at `lo`.
fn generate_sort(lo: usize, count: usize, out: &mut Vec<Comparator>) {
    if count > 1 {
        let half = count / 2;
        generate_sort(lo, half, out);
        generate_sort(lo + half, count - half, out);
        generate_merge(lo, count, 1, out);
    }
}

// Emit comparators merging two sorted halves of the `count` elements at
// `lo`, considering only every `stride`-th element.
fn generate_merge(lo: usize, count: usize, stride: usize, out: &mut Vec<Comparator>) {
    let step = stride * 2;
    if step < count {
        generate_merge(lo, count, step, out);
        generate_merge(lo + stride, count, step, out);

        let mut i = lo + stride;
        while i + stride < lo + count {
            out.push((i as u8, (i + stride) as u8));
            i += step;
        }
    } else {
        out.push((lo as u8, (lo + stride) as u8));
    }
}

// ============================================================================
// Tests
// ============================================================================
