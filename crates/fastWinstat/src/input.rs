//! Input abstractions for windowed filtering.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over filter inputs, allowing
//! `apply` to process multiple data formats (the crate's own `Grid` and
//! `ndarray` 2-D/3-D arrays) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: a `Grid` input is borrowed as-is;
//!   `ndarray` inputs are copied into a `Grid` after a contiguity check.
//! * **Fail-fast validation**: non-contiguous or non-standard-layout arrays
//!   are rejected before processing.
//!
//! ## Invariants
//!
//! * A converted grid contains every element of the input, in row-major
//!   order.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle reshaping or dimensionality reduction.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2, Ix3};
use num_traits::Float;
use std::borrow::Cow;

// Export dependencies from winstat crate
use winstat::internals::primitives::errors::FilterError;
use winstat::internals::primitives::grid::Grid;

// ============================================================================
// Grid Input Trait
// ============================================================================

/// Trait for types that can be used as input for windowed filtering.
pub trait GridInput<T: Float> {
    /// View the input as a `Grid`, borrowing when no conversion is needed.
    fn as_grid(&self) -> Result<Cow<'_, Grid<T>>, FilterError>;
}

impl<T: Float> GridInput<T> for Grid<T> {
    fn as_grid(&self) -> Result<Cow<'_, Grid<T>>, FilterError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float, S> GridInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_grid(&self) -> Result<Cow<'_, Grid<T>>, FilterError> {
        let (ny, nx) = self.dim();
        let slice = self.as_slice().ok_or_else(|| {
            FilterError::InvalidInput(
                "ndarray input must be contiguous and in standard layout".to_string(),
            )
        })?;
        Ok(Cow::Owned(Grid::two_d(slice.to_vec(), ny, nx)?))
    }
}

impl<T: Float, S> GridInput<T> for ArrayBase<S, Ix3>
where
    S: Data<Elem = T>,
{
    fn as_grid(&self) -> Result<Cow<'_, Grid<T>>, FilterError> {
        let (nz, ny, nx) = self.dim();
        let slice = self.as_slice().ok_or_else(|| {
            FilterError::InvalidInput(
                "ndarray input must be contiguous and in standard layout".to_string(),
            )
        })?;
        Ok(Cow::Owned(Grid::three_d(slice.to_vec(), nz, ny, nx)?))
    }
}
