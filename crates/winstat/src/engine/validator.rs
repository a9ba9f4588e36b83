//! Input validation for filter configuration and grids.
//!
//! ## Purpose
//!
//! This module provides the validation functions that run before any
//! per-cell work begins: window-size constraints, grid contents, and
//! window/grid dimensionality agreement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Axis-named**: Window-size errors name the offending axis parameter
//!   (`xsize`, `ysize`, `zsize`) so a caller can fix the right argument.
//! * **Ordering**: A zero size is reported as non-positive, then parity is
//!   checked, matching the error taxonomy rather than the incidental check
//!   order of older wrappers.
//!
//! ## Invariants
//!
//! * All validated window sizes are positive and odd, so the half-extent
//!   conversion `size / 2` is exact.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not gather neighborhoods or compute statistics.
//! * This module does not coerce or repair invalid parameters.

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::grid::{Grid, GridShape};
use crate::primitives::window::WindowSpec;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration and input grids.
///
/// Provides static methods returning `Result<(), FilterError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate one full window size for the named axis.
    pub fn validate_window_size(size: usize, axis: &'static str) -> Result<(), FilterError> {
        if size == 0 {
            return Err(FilterError::NonPositiveWindowSize { axis, got: size });
        }
        if size % 2 == 0 {
            return Err(FilterError::EvenWindowSize { axis, got: size });
        }
        Ok(())
    }

    /// Validate that the grid has at least one cell.
    pub fn validate_grid<T>(grid: &Grid<T>) -> Result<(), FilterError> {
        if grid.is_empty() {
            return Err(FilterError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FilterError> {
        if let Some(parameter) = duplicate_param {
            return Err(FilterError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    /// Validate that window and grid dimensionality agree.
    pub fn validate_dimensions(
        window: &WindowSpec,
        shape: &GridShape,
    ) -> Result<(), FilterError> {
        if window.ndim() != shape.ndim() {
            return Err(FilterError::DimensionMismatch {
                window_dims: window.ndim(),
                grid_dims: shape.ndim(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
