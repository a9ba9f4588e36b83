//! Sigma kernel: population standard deviation.
//!
//! ## Purpose
//!
//! This module computes the population standard deviation (denominator =
//! sample count, not count − 1) of a gathered neighborhood, the statistic
//! thresholded against to flag outlier samples.
//!
//! ## Key concepts
//!
//! * **Two-pass formulation**: mean first, then the mean of squared
//!   deviations. Numerically stable for window-sized inputs and matches
//!   the original extension bit-for-bit in the common cases.
//! * **Degenerate neighborhoods**: the deviation of fewer than two samples
//!   is taken to be zero by convention. Note the asymmetry with the median
//!   kernel's center fallback; that divergence is intentional.
//!
//! ## Invariants
//!
//! * The result is never negative; rounding in the variance accumulation
//!   is clamped before the square root.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sigma
// ============================================================================

/// Population standard deviation of `values`; exactly zero for fewer than
/// two samples.
#[inline]
pub fn population_sigma<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }

    let count = T::from(n).unwrap();

    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    let mean = sum / count;

    let squared_sum = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    });
    let variance = squared_sum / count;

    variance.max(T::zero()).sqrt()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn empty_and_single_neighborhoods_are_zero() {
        assert_eq!(population_sigma::<f64>(&[]), 0.0);
        assert_eq!(population_sigma(&[3.5]), 0.0);
    }

    #[test]
    fn constant_neighborhood_has_zero_sigma() {
        assert_abs_diff_eq!(population_sigma(&[2.0; 25]), 0.0);
    }

    #[test]
    fn population_denominator_is_the_count() {
        // Var([1, 2, 3, 4]) with denominator 4 is 1.25.
        assert_relative_eq!(population_sigma(&[1.0, 2.0, 3.0, 4.0]), 1.25f64.sqrt());
    }

    #[test]
    fn eight_cell_ring_around_an_excluded_center() {
        // 3x3 block of 1..9 without the 5 at the center: variance 7.5.
        let ring = [1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0];
        assert_relative_eq!(population_sigma(&ring), 7.5f64.sqrt());
    }

    #[test]
    fn sigma_is_translation_invariant() {
        let base = [1.0, 5.0, 9.0, 2.0, 7.0];
        let shifted: Vec<f64> = base.iter().map(|v| v + 1000.0).collect();
        assert_relative_eq!(
            population_sigma(&base),
            population_sigma(&shifted),
            max_relative = 1e-12
        );
    }

    #[test]
    fn an_outlier_dominates_sigma() {
        let with = [1.0, 2.0, 3.0, 4.0, 999.0, 6.0, 7.0, 8.0, 9.0];
        let without = [1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0];
        assert!(population_sigma(&with) > population_sigma(&without));
    }
}
