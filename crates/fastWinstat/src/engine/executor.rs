//! Parallel execution pass for windowed filtering.
//!
//! ## Purpose
//!
//! This module provides the whole-grid traversal that is injected into the
//! `winstat` executor, distributing output rows across CPU cores. Cells are
//! embarrassingly data-parallel: every cell reads only the shared input
//! grid and the read-only network tables, and writes exactly one output
//! cell, so no synchronization is needed.
//!
//! ## Design notes
//!
//! * **Implementation**: a drop-in replacement for the sequential pass,
//!   sharing `cell_statistic` so per-cell semantics cannot diverge.
//! * **Parallelism**: `rayon` splits the output into rows; both 2D and 3D
//!   grids decompose into `len / nx` contiguous rows.
//! * **Optimization**: one neighborhood buffer per worker thread, reused
//!   across that worker's rows.
//!
//! ## Invariants
//!
//! * The output ordering is identical to the sequential pass; parallelism
//!   is unobservable in the result.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the base engine).
//! * This module does not schedule cancellation; per-cell work is bounded
//!   and small, so stopping means not scheduling further rows.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from winstat crate
use winstat::internals::algorithms::gather::{gather_2d, gather_3d};
use winstat::internals::algorithms::Statistic;
use winstat::internals::engine::executor::cell_statistic;
use winstat::internals::primitives::buffer::NeighborhoodBuffer;
use winstat::internals::primitives::grid::GridShape;
use winstat::internals::primitives::window::WindowSpec;

// ============================================================================
// Parallel Pass
// ============================================================================

/// Traverse the grid with one rayon task per output row.
#[cfg(feature = "cpu")]
pub fn grid_pass_parallel<T>(
    data: &[T],
    shape: GridShape,
    window: WindowSpec,
    exclude_center: bool,
    statistic: Statistic,
    output: &mut [T],
) where
    T: Float + Send + Sync,
{
    let row_len = shape.row_len();
    if row_len == 0 {
        return;
    }

    output
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each_init(
            || NeighborhoodBuffer::with_capacity(window.max_count()),
            |buffer, (row, out_row)| match (shape, window) {
                (GridShape::TwoD { ny, nx }, WindowSpec::TwoD { half_x, half_y }) => {
                    let y = row;
                    for x in 0..nx {
                        let center =
                            gather_2d(data, ny, nx, y, x, half_x, half_y, exclude_center, buffer);
                        out_row[x] = cell_statistic(statistic, buffer, center);
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
                    let z = row / ny;
                    let y = row % ny;
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
                            buffer,
                        );
                        out_row[x] = cell_statistic(statistic, buffer, center);
                    }
                }
                _ => unreachable!("dimensionality is validated before execution"),
            },
        );
}
