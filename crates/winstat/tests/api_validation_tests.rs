//! Tests for builder configuration and parameter validation.
//!
//! These tests verify that invalid configurations are rejected before any
//! per-cell computation starts:
//! - Window sizes that are even or zero, named per axis
//! - Missing required parameters
//! - Duplicate parameter configuration
//! - Window/grid dimensionality mismatches
//! - Empty input grids

use winstat::prelude::*;

// ============================================================================
// Window Size Validation
// ============================================================================

/// Even sizes are rejected with the axis that failed.
#[test]
fn even_window_sizes_name_the_failing_axis() {
    for (xsize, ysize, axis, got) in [(4, 3, "xsize", 4), (3, 2, "ysize", 2)] {
        let err = Winstat::<f64>::new()
            .statistic(Median)
            .window_2d(xsize, ysize)
            .build()
            .unwrap_err();
        assert_eq!(err, FilterError::EvenWindowSize { axis, got });
    }
}

/// Zero sizes are rejected as non-positive, before the parity check.
#[test]
fn zero_window_sizes_are_rejected() {
    let err = Winstat::<f64>::new()
        .statistic(Sigma)
        .window_2d(0, 3)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::NonPositiveWindowSize {
            axis: "xsize",
            got: 0
        }
    );
    assert_eq!(err.to_string(), "xsize must be positive, got 0");
}

/// The z axis is validated for 3D windows.
#[test]
fn volume_windows_validate_all_three_axes() {
    let err = Winstat::<f64>::new()
        .statistic(Median)
        .window_3d(3, 3, 6)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::EvenWindowSize {
            axis: "zsize",
            got: 6
        }
    );
    assert_eq!(err.to_string(), "zsize must be an odd number, got 6");
}

/// Validation stops at the first failing axis.
#[test]
fn validation_is_fail_fast_across_axes() {
    let err = Winstat::<f64>::new()
        .statistic(Median)
        .window_2d(2, 4)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::EvenWindowSize {
            axis: "xsize",
            got: 2
        }
    );
}

// ============================================================================
// Required Parameters
// ============================================================================

/// Building without a statistic fails.
#[test]
fn statistic_is_required() {
    let err = Winstat::<f64>::new().window_2d(3, 3).build().unwrap_err();
    assert_eq!(
        err,
        FilterError::MissingParameter {
            parameter: "statistic"
        }
    );
}

/// Building without a window fails.
#[test]
fn window_is_required() {
    let err = Winstat::<f64>::new().statistic(Sigma).build().unwrap_err();
    assert_eq!(
        err,
        FilterError::MissingParameter {
            parameter: "window"
        }
    );
}

/// Setting the same parameter twice is rejected at build time.
#[test]
fn duplicate_parameters_are_rejected() {
    let err = Winstat::<f64>::new()
        .statistic(Median)
        .statistic(Sigma)
        .window_2d(3, 3)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::DuplicateParameter {
            parameter: "statistic"
        }
    );
}

// ============================================================================
// Grid-Level Validation
// ============================================================================

/// A 2D window cannot be applied to a 3D grid, and vice versa.
#[test]
fn dimensionality_mismatch_is_rejected() {
    let image = Grid::two_d(vec![1.0; 9], 3, 3).unwrap();
    let volume = Grid::three_d(vec![1.0; 27], 3, 3, 3).unwrap();

    let planar = Winstat::new()
        .statistic(Median)
        .window_2d(3, 3)
        .build()
        .unwrap();
    let cubic = Winstat::new()
        .statistic(Median)
        .window_3d(3, 3, 3)
        .build()
        .unwrap();

    assert_eq!(
        planar.apply(&volume).unwrap_err(),
        FilterError::DimensionMismatch {
            window_dims: 2,
            grid_dims: 3
        }
    );
    assert_eq!(
        cubic.apply(&image).unwrap_err(),
        FilterError::DimensionMismatch {
            window_dims: 3,
            grid_dims: 2
        }
    );
}

/// Empty grids are rejected up front.
#[test]
fn empty_grids_are_rejected() {
    let empty = Grid::<f64>::two_d(vec![], 0, 0).unwrap();
    let filter = Winstat::new()
        .statistic(Sigma)
        .window_2d(3, 3)
        .build()
        .unwrap();
    assert_eq!(filter.apply(&empty).unwrap_err(), FilterError::EmptyInput);
}

/// Grid construction itself checks data length against the shape.
#[test]
fn grid_shape_mismatch_is_rejected() {
    let err = Grid::two_d(vec![1.0; 8], 3, 3).unwrap_err();
    assert_eq!(
        err,
        FilterError::ShapeMismatch {
            expected: 9,
            got: 8
        }
    );
}
