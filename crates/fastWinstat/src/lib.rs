//! # fastWinstat: Parallel Windowed Statistics
//!
//! Multi-threaded windowed median and sigma filtering built on the
//! [`winstat`] engine. The per-cell semantics are identical to the base
//! crate; this crate distributes the whole-grid traversal across CPU cores
//! via `rayon` and accepts `ndarray` arrays directly as inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastWinstat::prelude::*;
//! use ndarray::Array2;
//!
//! // A flat image with one hot pixel.
//! let mut image = Array2::<f64>::ones((64, 64));
//! image[[32, 32]] = 4096.0;
//!
//! let filter = Winstat::new()
//!     .statistic(Median)
//!     .window_2d(5, 5)
//!     .exclude_center(true)
//!     .build()?;
//!
//! let repaired = filter.apply(&image)?;
//! assert_eq!(repaired.at2(32, 32), 1.0);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! Parallel execution is on by default; `.parallel(false)` rebuilds the
//! same filter on the sequential engine, which is occasionally useful for
//! debugging or for tiny grids where thread fan-out is not worth it.
//!
//! Cells are embarrassingly data-parallel: each reads only the shared
//! input grid and the read-only comparator tables and writes exactly one
//! output cell, so the parallel pass needs no locking and its output is
//! bit-identical to the sequential engine's.

#![allow(non_snake_case)]

// Input abstractions (Grid, ndarray).
mod input;

// Parallel execution engine.
mod engine;

// High-level fluent API.
mod api;

// Standard fastWinstat prelude.
pub mod prelude {
    pub use crate::api::{
        FilterError, Grid, GridShape, Statistic,
        Statistic::{Median, Sigma},
        WindowSizes, WinstatBuilder as Winstat, WinstatFilter,
    };
    pub use crate::input::GridInput;
}
