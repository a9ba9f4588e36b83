//! Neighborhood gathering with boundary truncation and missing-value
//! exclusion.
//!
//! ## Purpose
//!
//! This module collects the valid samples around a target cell: the window
//! intersected with the grid bounds, minus the center when excluded, minus
//! any NaN samples.
//!
//! ## Key concepts
//!
//! * **Truncation**: windows are clamped to the grid (never padded,
//!   reflected, or wrapped), so border and corner neighborhoods are simply
//!   smaller.
//! * **Missing values**: NaN is the missing-value sentinel and is skipped
//!   wherever it occurs, center included. Infinities are ordinary samples
//!   and pass through.
//!
//! ## Invariants
//!
//! * Gathered values are always drawn from the input grid, never from the
//!   output.
//! * The buffer is cleared on entry; a gathered neighborhood never outlives
//!   the cell it was collected for.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics; kernels consume the buffer.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::NeighborhoodBuffer;

// ============================================================================
// 2D Gather
// ============================================================================

/// Gather the neighborhood of cell `(y, x)` in a `ny` × `nx` grid.
///
/// Returns the center sample so the median fallback can report it for an
/// empty neighborhood.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn gather_2d<T: Float>(
    data: &[T],
    ny: usize,
    nx: usize,
    y: usize,
    x: usize,
    half_x: usize,
    half_y: usize,
    exclude_center: bool,
    out: &mut NeighborhoodBuffer<T>,
) -> T {
    out.clear();
    let center = data[y * nx + x];

    let y_lo = y.saturating_sub(half_y);
    let y_hi = (y + half_y).min(ny - 1);
    let x_lo = x.saturating_sub(half_x);
    let x_hi = (x + half_x).min(nx - 1);

    for yy in y_lo..=y_hi {
        let row = yy * nx;
        for xx in x_lo..=x_hi {
            if exclude_center && yy == y && xx == x {
                continue;
            }
            let value = data[row + xx];
            if value.is_nan() {
                continue;
            }
            out.push(value);
        }
    }

    center
}

// ============================================================================
// 3D Gather
// ============================================================================

/// Gather the neighborhood of cell `(z, y, x)` in a `nz` × `ny` × `nx`
/// volume.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn gather_3d<T: Float>(
    data: &[T],
    nz: usize,
    ny: usize,
    nx: usize,
    z: usize,
    y: usize,
    x: usize,
    half_x: usize,
    half_y: usize,
    half_z: usize,
    exclude_center: bool,
    out: &mut NeighborhoodBuffer<T>,
) -> T {
    out.clear();
    let center = data[(z * ny + y) * nx + x];

    let z_lo = z.saturating_sub(half_z);
    let z_hi = (z + half_z).min(nz - 1);
    let y_lo = y.saturating_sub(half_y);
    let y_hi = (y + half_y).min(ny - 1);
    let x_lo = x.saturating_sub(half_x);
    let x_hi = (x + half_x).min(nx - 1);

    for zz in z_lo..=z_hi {
        for yy in y_lo..=y_hi {
            let row = (zz * ny + yy) * nx;
            for xx in x_lo..=x_hi {
                if exclude_center && zz == z && yy == y && xx == x {
                    continue;
                }
                let value = data[row + xx];
                if value.is_nan() {
                    continue;
                }
                out.push(value);
            }
        }
    }

    center
}

// ============================================================================
// Tests
// ============================================================================
