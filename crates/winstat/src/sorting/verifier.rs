//! Structural verification of comparator networks.
//!
//! ## Purpose
//!
//! This module cross-checks a concrete comparator sequence, however it was
//! authored, against the generator's canonical sequence for the same size.
//! It exists so that a transcribed or hand-tuned table can never silently
//! diverge from the algorithm that is presumed correct.
//!
//! ## Key concepts
//!
//! * **Structural equality**: same comparator count, same pairs, same
//!   order. A network that sorts correctly but differs structurally is
//!   still reported as a mismatch; the canonical sequence is the contract.
//! * **Zero-one principle**: a comparator network sorts every input of a
//!   given size iff it sorts every 0/1 vector of that size, which makes
//!   exhaustive behavioral checking feasible for the table sizes.
//!
//! ## Non-goals
//!
//! * This module is not on the per-cell hot path; it backs tests and
//!   offline table maintenance.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::sorting::generator::odd_even_merge_sort;
use crate::sorting::network::Comparator;

// ============================================================================
// Mismatch Report
// ============================================================================

/// Ways a candidate network can differ from the canonical sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkMismatch {
    /// The candidate has the wrong number of comparators.
    LengthMismatch {
        /// Element count of the network.
        size: usize,
        /// Canonical comparator count.
        expected: usize,
        /// Candidate comparator count.
        got: usize,
    },

    /// The candidate diverges at a specific comparator.
    ComparatorMismatch {
        /// Element count of the network.
        size: usize,
        /// Index of the first differing comparator.
        index: usize,
        /// Canonical pair at that index.
        expected: Comparator,
        /// Candidate pair at that index.
        got: Comparator,
    },
}

impl Display for NetworkMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::LengthMismatch {
                size,
                expected,
                got,
            } => {
                write!(
                    f,
                    "network for {size} elements has {got} comparators, canonical has {expected}"
                )
            }
            Self::ComparatorMismatch {
                size,
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "network for {size} elements differs at comparator {index}: \
                     got ({}, {}), canonical ({}, {})",
                    got.0, got.1, expected.0, expected.1
                )
            }
        }
    }
}

// ============================================================================
// Verification
// ============================================================================

/// Verify that `candidate` matches the canonical network for `size`,
/// comparator-for-comparator.
pub fn verify_network(size: usize, candidate: &[Comparator]) -> Result<(), NetworkMismatch> {
    let canonical = odd_even_merge_sort(size);

    if candidate.len() != canonical.len() {
        return Err(NetworkMismatch::LengthMismatch {
            size,
            expected: canonical.len(),
            got: candidate.len(),
        });
    }

    for (index, (&got, &expected)) in candidate.iter().zip(canonical.iter()).enumerate() {
        if got != expected {
            return Err(NetworkMismatch::ComparatorMismatch {
                size,
                index,
                expected,
                got,
            });
        }
    }

    Ok(())
}

/// Check that `comparators` sorts every 0/1 vector of length `size`.
///
/// By the zero-one principle this proves the network sorts arbitrary
/// inputs. Exhaustive up to `size` 24; larger sizes would take longer than
/// a test suite should.
pub fn sorts_all_binary_inputs(size: usize, comparators: &[Comparator]) -> bool {
    assert!(size <= 24, "exhaustive verification is limited to 24 elements");

    let mut lanes = [0u8; 24];
    for pattern in 0u32..(1u32 << size) {
        for (bit, lane) in lanes[..size].iter_mut().enumerate() {
            *lane = ((pattern >> bit) & 1) as u8;
        }

        for &(lo, hi) in comparators {
            let (lo, hi) = (lo as usize, hi as usize);
            if lanes[lo] > lanes[hi] {
                lanes.swap(lo, hi);
            }
        }

        if lanes[..size].windows(2).any(|w| w[0] > w[1]) {
            return false;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
