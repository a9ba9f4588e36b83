//! Error types for windowed-statistics operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running a windowed filter, covering input validation, window-parameter
//! constraints, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending size
//!   and the axis it was given for).
//! * **Deferred**: Errors are often caught and stored during builder
//!   configuration and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty grids, shape/data-length disagreements.
//! 2. **Window validation**: Non-positive or even full window sizes, named by
//!    axis.
//! 3. **Dispatch validation**: Window dimensionality must match the grid's.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for windowed-statistics operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Input grid contains no samples.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Grid data length does not match the product of the shape extents.
    ShapeMismatch {
        /// Number of elements the shape requires.
        expected: usize,
        /// Number of elements actually provided.
        got: usize,
    },

    /// A full window size was zero along the named axis.
    NonPositiveWindowSize {
        /// Axis parameter name ("xsize", "ysize" or "zsize").
        axis: &'static str,
        /// The size provided.
        got: usize,
    },

    /// A full window size was even along the named axis.
    EvenWindowSize {
        /// Axis parameter name ("xsize", "ysize" or "zsize").
        axis: &'static str,
        /// The size provided.
        got: usize,
    },

    /// Window dimensionality does not match the grid's.
    DimensionMismatch {
        /// Dimensionality of the configured window (2 or 3).
        window_dims: usize,
        /// Dimensionality of the grid it was applied to.
        grid_dims: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input grid is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Shape mismatch: shape requires {expected} elements, data has {got}"
                )
            }
            Self::NonPositiveWindowSize { axis, got } => {
                write!(f, "{axis} must be positive, got {got}")
            }
            Self::EvenWindowSize { axis, got } => {
                write!(f, "{axis} must be an odd number, got {got}")
            }
            Self::DimensionMismatch {
                window_dims,
                grid_dims,
            } => {
                write!(
                    f,
                    "Dimension mismatch: {window_dims}-dimensional window applied to {grid_dims}-dimensional grid"
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FilterError {}
