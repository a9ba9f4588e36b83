//! Execution engine for windowed filtering.
//!
//! ## Purpose
//!
//! This module orchestrates a filter run: it re-validates the grid against
//! the configuration, allocates the output, and drives the per-cell loop of
//! gathering the neighborhood, applying the statistic kernel, and writing
//! exactly one output cell.
//!
//! ## Design notes
//!
//! * **Single writer per cell**: cells are computed independently from the
//!   read-only input; the sequential pass writes each output cell exactly
//!   once, which is what makes the parallel pass a drop-in replacement.
//! * **Buffer reuse**: one `NeighborhoodBuffer` serves the whole pass; the
//!   hot loop performs no allocation.
//! * **Injection hook**: `GridPassFn` lets a companion crate substitute the
//!   whole-grid traversal (e.g., a rayon pass) without touching the
//!   per-cell semantics, which stay in `cell_statistic`.
//!
//! ## Invariants
//!
//! * Output shape equals input shape.
//! * The input grid is never mutated.
//! * Window/grid dimensionality has been validated before a pass runs.
//!
//! ## Non-goals
//!
//! * This module does not validate window sizes (builder's responsibility).
//! * This module does not parallelize (companion crate's responsibility).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gather::{gather_2d, gather_3d};
use crate::algorithms::median::median_or_center;
use crate::algorithms::sigma::population_sigma;
use crate::algorithms::Statistic;
use crate::engine::validator::Validator;
use crate::primitives::buffer::NeighborhoodBuffer;
use crate::primitives::errors::FilterError;
use crate::primitives::grid::{Grid, GridShape};
use crate::primitives::window::WindowSpec;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a whole-grid traversal pass.
///
/// Arguments: input samples, grid shape, window, exclude-center flag,
/// statistic, output samples (same length as the input).
#[doc(hidden)]
pub type GridPassFn<T> = fn(&[T], GridShape, WindowSpec, bool, Statistic, &mut [T]);

/// Validated configuration for one filter.
#[derive(Copy, Clone, Debug)]
pub struct FilterConfig<T> {
    /// Window half-extents.
    pub window: WindowSpec,

    /// Whether the target cell is removed from its own neighborhood.
    pub exclude_center: bool,

    /// The statistic computed per cell.
    pub statistic: Statistic,

    /// Custom traversal pass (parallel execution hook).
    #[doc(hidden)]
    pub custom_grid_pass: Option<GridPassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Drives a filter pass over a grid.
pub struct FilterExecutor;

impl FilterExecutor {
    /// Run the configured filter, producing an output grid of the input's
    /// shape.
    pub fn run<T: Float>(grid: &Grid<T>, config: &FilterConfig<T>) -> Result<Grid<T>, FilterError> {
        Validator::validate_grid(grid)?;
        Validator::validate_dimensions(&config.window, &grid.shape())?;

        let mut output = vec![T::zero(); grid.len()];
        let pass = config.custom_grid_pass.unwrap_or(grid_pass_sequential::<T>);
        pass(
            grid.as_slice(),
            grid.shape(),
            config.window,
            config.exclude_center,
            config.statistic,
            &mut output,
        );

        Grid::with_shape(output, grid.shape())
    }
}

// ============================================================================
// Per-Cell Kernel Dispatch
// ============================================================================

/// Apply the configured statistic to one gathered neighborhood.
#[inline]
pub fn cell_statistic<T: Float>(
    statistic: Statistic,
    neighborhood: &mut NeighborhoodBuffer<T>,
    center: T,
) -> T {
    match statistic {
        Statistic::Median => median_or_center(neighborhood.as_mut_slice(), center),
        Statistic::Sigma => population_sigma(neighborhood.as_slice()),
    }
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Traverse the grid cell by cell on the calling thread.
pub fn grid_pass_sequential<T: Float>(
    data: &[T],
    shape: GridShape,
    window: WindowSpec,
    exclude_center: bool,
    statistic: Statistic,
    output: &mut [T],
) {
    let mut buffer = NeighborhoodBuffer::with_capacity(window.max_count());

    match (shape, window) {
        (GridShape::TwoD { ny, nx }, WindowSpec::TwoD { half_x, half_y }) => {
            for y in 0..ny {
                for x in 0..nx {
                    let center =
                        gather_2d(data, ny, nx, y, x, half_x, half_y, exclude_center, &mut buffer);
                    output[y * nx + x] = cell_statistic(statistic, &mut buffer, center);
                }
            }
        }
        (
            GridShape::ThreeD { nz, ny, nx },
            WindowSpec::ThreeD {
                half_x,
                half_y,
                half_z,
            },
        ) => {
            for z in 0..nz {
                for y in 0..ny {
                    for x in 0..nx {
                        let center = gather_3d(
                            data,
                            nz,
                            ny,
                            nx,
                            z,
                            y,
                            x,
                            half_x,
                            half_y,
                            half_z,
                            exclude_center,
                            &mut buffer,
                        );
                        output[(z * ny + y) * nx + x] =
                            cell_statistic(statistic, &mut buffer, center);
                    }
                }
            }
        }
        _ => unreachable!("dimensionality is validated before execution"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config<T>(window: WindowSpec, exclude_center: bool, statistic: Statistic) -> FilterConfig<T> {
        FilterConfig {
            window,
            exclude_center,
            statistic,
            custom_grid_pass: None,
        }
    }

    #[test]
    fn median_pass_replaces_an_outlier() {
        let grid = Grid::two_d(vec![1.0, 1.0, 1.0, 1.0, 100.0, 1.0, 1.0, 1.0, 1.0], 3, 3).unwrap();
        let out = FilterExecutor::run(
            &grid,
            &config(WindowSpec::from_sizes_2d(3, 3), false, Statistic::Median),
        )
        .unwrap();
        assert_eq!(out.at2(1, 1), 1.0);
    }

    #[test]
    fn sigma_pass_on_a_constant_grid_is_zero() {
        let grid = Grid::two_d(vec![4.0; 25], 5, 5).unwrap();
        let out = FilterExecutor::run(
            &grid,
            &config(WindowSpec::from_sizes_2d(3, 3), false, Statistic::Sigma),
        )
        .unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn output_shape_matches_input_shape() {
        let grid = Grid::three_d(vec![1.0; 24], 2, 3, 4).unwrap();
        let out = FilterExecutor::run(
            &grid,
            &config(WindowSpec::from_sizes_3d(3, 3, 3), true, Statistic::Median),
        )
        .unwrap();
        assert_eq!(out.shape(), grid.shape());
    }

    #[test]
    fn dimension_mismatch_is_rejected_before_work() {
        let grid = Grid::two_d(vec![1.0; 9], 3, 3).unwrap();
        let err = FilterExecutor::run(
            &grid,
            &config(WindowSpec::from_sizes_3d(3, 3, 3), false, Statistic::Sigma),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FilterError::DimensionMismatch {
                window_dims: 3,
                grid_dims: 2
            }
        );
    }

    #[test]
    fn volume_median_tracks_the_reference_on_each_cell() {
        // 3x3x3 ramp; interior cell of an untruncated 3x3x3 window sees
        // all 27 values.
        let data: Vec<f64> = (0..27).map(|v| v as f64).collect();
        let grid = Grid::three_d(data, 3, 3, 3).unwrap();
        let out = FilterExecutor::run(
            &grid,
            &config(WindowSpec::from_sizes_3d(3, 3, 3), false, Statistic::Median),
        )
        .unwrap();
        assert_relative_eq!(out.at3(1, 1, 1), 13.0);
    }
}
