//! # winstat: Windowed Median and Sigma Statistics for Rust
//!
//! Local (sliding-window) statistics over dense 2D images and 3D volumes:
//! a windowed **median** and a windowed **population standard deviation**
//! ("sigma"), the building blocks for detecting and repairing outlier
//! samples such as cosmic-ray hits in scientific image data.
//!
//! For every cell, the statistic is computed over a rectangular (or cuboid)
//! neighborhood clamped to the grid bounds, optionally excluding the center
//! cell, and always excluding missing (NaN) samples. Small neighborhoods
//! are sorted with fixed comparator networks generated by Batcher's
//! odd-even merge construction, keeping the hot loop free of
//! data-dependent branches.
//!
//! ## Quick Start
//!
//! ```rust
//! use winstat::prelude::*;
//!
//! // A 3x3 image with a cosmic-ray hit in the middle.
//! let image = Grid::two_d(vec![
//!     1.0, 1.0, 1.0,
//!     1.0, 99.0, 1.0,
//!     1.0, 1.0, 1.0,
//! ], 3, 3)?;
//!
//! let filter = Winstat::new()
//!     .statistic(Median)      // statistic per cell
//!     .window_2d(3, 3)        // full (odd) window sizes
//!     .exclude_center(true)   // judge each cell by its neighbors only
//!     .build()?;
//!
//! let repaired = filter.apply(&image)?;
//! assert_eq!(repaired.at2(1, 1), 1.0);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! Sigma works the same way; on a constant grid it is zero everywhere:
//!
//! ```rust
//! use winstat::prelude::*;
//!
//! let flat = Grid::two_d(vec![7.0; 25], 5, 5)?;
//! let sigma = Winstat::new()
//!     .statistic(Sigma)
//!     .window_2d(3, 3)
//!     .build()?;
//!
//! assert!(sigma.apply(&flat)?.as_slice().iter().all(|&v| v == 0.0));
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! * Windows are **truncated** at grid borders, never padded or wrapped.
//! * NaN samples are treated as missing and skipped, center included.
//! * A cell with an empty neighborhood keeps its own value under the
//!   median (NaN stays NaN), while sigma reports zero for fewer than two
//!   samples; both conventions come from the original cosmic-ray tooling.
//! * Window sizes are the **full** extents and must be positive odd
//!   numbers; violations are rejected per axis before any work starts.
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, FilterError>`; the `?` operator
//! is idiomatic. Numeric edge conditions (empty neighborhoods, all-missing
//! windows, infinite samples) are defined behaviors, not errors.
//!
//! For parallel execution over large grids, see the companion
//! `fastWinstat` crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Sorting - comparator networks and size dispatch.
mod sorting;

// Layer 3: Algorithms - gathering and statistic kernels.
mod algorithms;

// Layer 4: Engine - validation and execution control.
mod engine;

// High-level fluent API for windowed statistics.
mod api;

// Standard winstat prelude.
pub mod prelude {
    pub use crate::api::{
        FilterError, Grid, GridShape, Statistic,
        Statistic::{Median, Sigma},
        WindowSizes, WinstatBuilder as Winstat, WinstatFilter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod sorting {
        pub use crate::sorting::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
