//! Tests for the windowed sigma (population standard deviation) filter.
//!
//! These tests verify the sigma semantics end to end:
//! - Zero on constant grids for any window and either center setting
//! - Outlier sensitivity: excluding an extreme center shrinks sigma
//! - Missing-value exclusion
//! - The zero convention for empty and single-sample neighborhoods
//! - Agreement with an independent two-pass reference for every cell

use approx::{assert_abs_diff_eq, assert_relative_eq};
use winstat::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn reference_sigma_2d(
    data: &[f64],
    ny: usize,
    nx: usize,
    y: usize,
    x: usize,
    half: usize,
    exclude_center: bool,
) -> f64 {
    let mut values = Vec::new();
    for yy in y.saturating_sub(half)..=(y + half).min(ny - 1) {
        for xx in x.saturating_sub(half)..=(x + half).min(nx - 1) {
            if exclude_center && yy == y && xx == x {
                continue;
            }
            let v = data[yy * nx + xx];
            if !v.is_nan() {
                values.push(v);
            }
        }
    }
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    variance.sqrt()
}

fn sigma_filter(size: usize, exclude_center: bool) -> WinstatFilter<f64> {
    Winstat::new()
        .statistic(Sigma)
        .window_2d(size, size)
        .exclude_center(exclude_center)
        .build()
        .unwrap()
}

// ============================================================================
// Constant Grids
// ============================================================================

/// Sigma over a constant grid is zero everywhere, for any valid window and
/// either exclude-center setting.
#[test]
fn constant_grids_have_zero_sigma_everywhere() {
    let image = Grid::two_d(vec![5.5; 7 * 9], 7, 9).unwrap();
    for window in [1, 3, 5] {
        for exclude_center in [false, true] {
            let out = sigma_filter(window, exclude_center).apply(&image).unwrap();
            assert!(
                out.as_slice().iter().all(|&v| v == 0.0),
                "window {window}, exclude_center {exclude_center}"
            );
        }
    }
}

// ============================================================================
// Outlier Sensitivity
// ============================================================================

/// Excluding an extreme center strictly reduces sigma at that cell.
#[test]
fn excluding_an_outlier_center_reduces_sigma() {
    let image = Grid::two_d(vec![1.0, 2.0, 3.0, 4.0, 999.0, 6.0, 7.0, 8.0, 9.0], 3, 3).unwrap();

    let with_center = sigma_filter(3, false).apply(&image).unwrap().at2(1, 1);
    let without_center = sigma_filter(3, true).apply(&image).unwrap().at2(1, 1);

    assert!(with_center > without_center);
    // The eight remaining neighbors 1..9 minus the 5 have variance 7.5.
    assert_relative_eq!(without_center, 7.5f64.sqrt());
}

// ============================================================================
// Missing Values
// ============================================================================

/// NaN samples are absent from the statistic; the 3x3 block with a NaN
/// center yields sigma = sqrt(7.5) over the remaining eight values.
#[test]
fn nan_center_is_absent_from_sigma() {
    let image = Grid::two_d(
        vec![1.0, 2.0, 3.0, 4.0, f64::NAN, 6.0, 7.0, 8.0, 9.0],
        3,
        3,
    )
    .unwrap();
    let out = sigma_filter(3, false).apply(&image).unwrap();
    assert_relative_eq!(out.at2(1, 1), 7.5f64.sqrt());
}

/// An all-NaN grid yields zero everywhere (no valid samples anywhere).
#[test]
fn all_missing_grid_has_zero_sigma() {
    let image = Grid::two_d(vec![f64::NAN; 12], 3, 4).unwrap();
    let out = sigma_filter(3, false).apply(&image).unwrap();
    assert!(out.as_slice().iter().all(|&v| v == 0.0));
}

// ============================================================================
// Degenerate Neighborhoods
// ============================================================================

/// A 1x1 window yields zero whether the single sample is kept or dropped.
#[test]
fn degenerate_windows_have_zero_sigma() {
    let image = Grid::two_d(vec![3.0, 1.0, 4.0, 1.0], 2, 2).unwrap();
    for exclude_center in [false, true] {
        let out = sigma_filter(1, exclude_center).apply(&image).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0.0));
    }
}

/// Sigma never goes negative, even on numerically awkward data.
#[test]
fn sigma_is_never_negative() {
    // Nearly identical large values stress the squared-deviation sum.
    let image = Grid::two_d(vec![1e15, 1e15 + 1.0, 1e15, 1e15 - 1.0], 2, 2).unwrap();
    let out = sigma_filter(3, false).apply(&image).unwrap();
    assert!(out.as_slice().iter().all(|&v| v >= 0.0));
}

// ============================================================================
// Volumes
// ============================================================================

/// A constant volume has zero sigma; shape is preserved.
#[test]
fn constant_volume_has_zero_sigma() {
    let volume = Grid::three_d(vec![2.0; 3 * 4 * 5], 3, 4, 5).unwrap();
    let filter = Winstat::new()
        .statistic(Sigma)
        .window_3d(3, 3, 3)
        .exclude_center(true)
        .build()
        .unwrap();
    let out = filter.apply(&volume).unwrap();
    assert_eq!(out.shape(), volume.shape());
    assert!(out.as_slice().iter().all(|&v| v == 0.0));
}

/// Interior cell of a 3x3x3 ramp: sigma of 0..27 around its mean.
#[test]
fn volume_sigma_matches_a_hand_computed_value() {
    let data: Vec<f64> = (0..27).map(|v| v as f64).collect();
    let volume = Grid::three_d(data.clone(), 3, 3, 3).unwrap();
    let filter = Winstat::new()
        .statistic(Sigma)
        .window_3d(3, 3, 3)
        .build()
        .unwrap();
    let out = filter.apply(&volume).unwrap();

    let mean = 13.0;
    let variance = data.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 27.0;
    assert_relative_eq!(out.at3(1, 1, 1), variance.sqrt());
}

// ============================================================================
// Reference Agreement
// ============================================================================

/// Every cell matches an independent two-pass reference, across windows,
/// center settings, and sprinkled NaNs.
#[test]
fn sigma_matches_the_reference_for_every_cell() {
    let mut rng = Lcg(0x51e774);
    let (ny, nx) = (10, 12);

    for window in [1usize, 3, 5, 7] {
        for exclude_center in [false, true] {
            let data: Vec<f64> = (0..ny * nx)
                .map(|i| {
                    if i % 9 == 5 {
                        f64::NAN
                    } else {
                        rng.next_f64() * 50.0 - 25.0
                    }
                })
                .collect();
            let image = Grid::two_d(data.clone(), ny, nx).unwrap();
            let out = sigma_filter(window, exclude_center).apply(&image).unwrap();

            let half = window / 2;
            for y in 0..ny {
                for x in 0..nx {
                    let expected =
                        reference_sigma_2d(&data, ny, nx, y, x, half, exclude_center);
                    assert_abs_diff_eq!(out.at2(y, x), expected, epsilon = 1e-10);
                }
            }
        }
    }
}
