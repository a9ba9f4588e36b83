//! Median kernel.
//!
//! ## Purpose
//!
//! This module computes the median of a gathered neighborhood. Sorting goes
//! through the size-dispatched `sort_values`, so neighborhoods matching an
//! embedded network take the branchless path and arbitrary sizes fall back
//! to a generic sort with identical results.
//!
//! ## Key concepts
//!
//! * **Even counts**: the median of an even-sized neighborhood is the
//!   average of the two central elements.
//! * **Empty-neighborhood fallback**: with no valid neighbors (all-NaN or a
//!   degenerate excluded-center window) the cell reports its own value; a
//!   NaN center propagates the missing-value sentinel. This deliberately
//!   differs from the sigma kernel's zero convention.
//!
//! ## Invariants
//!
//! * NaN never reaches the sort; the gather stage filters missing values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::sorting::tables::sort_values;

// ============================================================================
// Median
// ============================================================================

/// Median of `values`, sorting in place. `None` when empty.
#[inline]
pub fn median_in_place<T: Float>(values: &mut [T]) -> Option<T> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    sort_values(values);

    let mid = n / 2;
    if n % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / (T::one() + T::one()))
    } else {
        Some(values[mid])
    }
}

/// Median of `values` with the empty-neighborhood fallback: the center
/// sample is reported as-is (a NaN center stays NaN).
#[inline]
pub fn median_or_center<T: Float>(values: &mut [T], center: T) -> T {
    median_in_place(values).unwrap_or(center)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn odd_count_returns_the_middle_element() {
        let mut values = vec![9.0, 1.0, 5.0];
        assert_eq!(median_in_place(&mut values), Some(5.0));
    }

    #[test]
    fn even_count_averages_the_two_central_elements() {
        let mut values = vec![4.0, 1.0, 3.0, 2.0];
        assert_relative_eq!(median_in_place(&mut values).unwrap(), 2.5);
    }

    #[test]
    fn single_element_is_its_own_median() {
        let mut values = vec![7.0];
        assert_eq!(median_in_place(&mut values), Some(7.0));
    }

    #[test]
    fn empty_neighborhood_reports_the_center() {
        let mut values: Vec<f64> = Vec::new();
        assert_eq!(median_or_center(&mut values, 42.0), 42.0);
    }

    #[test]
    fn empty_neighborhood_with_nan_center_stays_nan() {
        let mut values: Vec<f64> = Vec::new();
        assert!(median_or_center(&mut values, f64::NAN).is_nan());
    }

    #[test]
    fn network_and_generic_paths_agree() {
        // Sizes straddling every strategy boundary: network, hybrid,
        // insertion, generic.
        let mut state = 0x9e3779b97f4a7c15u64;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        };

        for n in [3usize, 9, 16, 25, 26, 27, 39, 41, 121] {
            for _ in 0..20 {
                let values: Vec<f64> = (0..n).map(|_| next()).collect();

                let mut via_kernel = values.clone();
                let kernel = median_in_place(&mut via_kernel).unwrap();

                let mut reference = values.clone();
                reference.sort_by(|a, b| a.partial_cmp(b).unwrap());
                let expected = if n % 2 == 0 {
                    (reference[n / 2 - 1] + reference[n / 2]) / 2.0
                } else {
                    reference[n / 2]
                };

                assert_relative_eq!(kernel, expected, max_relative = 1e-15);
            }
        }
    }
}
