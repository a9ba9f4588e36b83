//! Dense grid storage for 2D images and 3D volumes.
//!
//! ## Purpose
//!
//! This module provides the owned, row-major sample container the engine
//! reads from and writes to. A grid is either a 2D image (`ny` rows of `nx`
//! columns) or a 3D volume (`nz` planes of `ny` rows of `nx` columns).
//!
//! ## Design notes
//!
//! * **Row-major**: `x` is the fastest-varying axis, matching the original
//!   image layout; linear index is `(z * ny + y) * nx + x`.
//! * **Shape-checked**: Constructors reject data whose length disagrees with
//!   the shape product.
//! * **Read-only inputs**: The engine never mutates an input grid; outputs
//!   are freshly allocated with the input's shape.
//!
//! ## Non-goals
//!
//! * This module does not provide strided or non-contiguous views.
//! * This module does not validate sample values (NaN is a legal sample).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FilterError;

// ============================================================================
// Grid Shape
// ============================================================================

/// Extents of a grid along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridShape {
    /// A 2D image: `ny` rows, `nx` columns.
    TwoD {
        /// Number of rows (y extent).
        ny: usize,
        /// Number of columns (x extent).
        nx: usize,
    },

    /// A 3D volume: `nz` planes, `ny` rows, `nx` columns.
    ThreeD {
        /// Number of planes (z extent).
        nz: usize,
        /// Number of rows (y extent).
        ny: usize,
        /// Number of columns (x extent).
        nx: usize,
    },
}

impl GridShape {
    /// Number of axes (2 or 3).
    #[inline]
    pub fn ndim(&self) -> usize {
        match self {
            Self::TwoD { .. } => 2,
            Self::ThreeD { .. } => 3,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            Self::TwoD { ny, nx } => ny * nx,
            Self::ThreeD { nz, ny, nx } => nz * ny * nx,
        }
    }

    /// Check whether the shape contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cells per output row (the x extent).
    ///
    /// Both 2D and 3D grids decompose into `len() / nx` contiguous rows,
    /// which is the unit the executors iterate over.
    #[inline]
    pub fn row_len(&self) -> usize {
        match *self {
            Self::TwoD { nx, .. } => nx,
            Self::ThreeD { nx, .. } => nx,
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// A dense, row-major grid of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    shape: GridShape,
}

impl<T> Grid<T> {
    /// Create a 2D grid from row-major data.
    pub fn two_d(data: Vec<T>, ny: usize, nx: usize) -> Result<Self, FilterError> {
        let shape = GridShape::TwoD { ny, nx };
        Self::with_shape(data, shape)
    }

    /// Create a 3D grid from row-major data (plane-by-plane).
    pub fn three_d(data: Vec<T>, nz: usize, ny: usize, nx: usize) -> Result<Self, FilterError> {
        let shape = GridShape::ThreeD { nz, ny, nx };
        Self::with_shape(data, shape)
    }

    /// Create a grid from data and an explicit shape.
    pub fn with_shape(data: Vec<T>, shape: GridShape) -> Result<Self, FilterError> {
        if data.len() != shape.len() {
            return Err(FilterError::ShapeMismatch {
                expected: shape.len(),
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// The grid's shape.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of axes (2 or 3).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the grid contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the samples.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid, returning its row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> Grid<T> {
    /// Sample at `(y, x)` in a 2D grid.
    ///
    /// Callers are expected to have matched on the shape first; indexing a
    /// 3D grid through this accessor is a logic error.
    #[inline]
    pub fn at2(&self, y: usize, x: usize) -> T {
        let nx = self.shape.row_len();
        self.data[y * nx + x]
    }

    /// Sample at `(z, y, x)` in a 3D grid.
    #[inline]
    pub fn at3(&self, z: usize, y: usize, x: usize) -> T {
        match self.shape {
            GridShape::ThreeD { ny, nx, .. } => self.data[(z * ny + y) * nx + x],
            GridShape::TwoD { .. } => unreachable!("at3 called on a 2D grid"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d_round_trip() {
        let g = Grid::two_d(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(g.ndim(), 2);
        assert_eq!(g.len(), 6);
        assert_eq!(g.at2(0, 2), 3.0);
        assert_eq!(g.at2(1, 0), 4.0);
    }

    #[test]
    fn three_d_indexing() {
        let data: Vec<f64> = (0..24).map(|v| v as f64).collect();
        let g = Grid::three_d(data, 2, 3, 4).unwrap();
        assert_eq!(g.ndim(), 3);
        assert_eq!(g.at3(1, 2, 3), 23.0);
        assert_eq!(g.at3(0, 1, 0), 4.0);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = Grid::two_d(vec![1.0; 5], 2, 3).unwrap_err();
        assert_eq!(
            err,
            FilterError::ShapeMismatch {
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn zero_sized_shapes_are_constructible() {
        let g = Grid::<f64>::two_d(vec![], 0, 0).unwrap();
        assert!(g.is_empty());
    }
}
