//! High-level API for windowed statistics with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for parallel windowed
//! filtering. It wraps the base `winstat` builder, injecting the rayon
//! grid pass by default, and widens `apply` to accept `ndarray` inputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: re-uses the base builder's parameters and
//!   validation; this crate adds execution policy only.
//! * **Parallel-First**: built filters run the rayon pass unless parallel
//!   execution is switched off (or the `cpu` feature is disabled).
//! * **Transparent**: results are bit-identical to the sequential engine.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WinstatBuilder`] via `Winstat::new()`.
//! 2. Chain configuration methods (`.statistic()`, `.window_2d()`, ...).
//! 3. Call `.build()` and apply the filter to grids or `ndarray` arrays.

// External dependencies
use num_traits::Float;

// Export dependencies from winstat crate
use winstat::internals::api::WinstatBuilder as BaseBuilder;
use winstat::internals::api::WinstatFilter as BaseFilter;

// Internal dependencies
use crate::input::GridInput;

// Publicly re-exported types
pub use winstat::internals::algorithms::Statistic;
pub use winstat::internals::api::WindowSizes;
pub use winstat::internals::primitives::errors::FilterError;
pub use winstat::internals::primitives::grid::{Grid, GridShape};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for parallel windowed-statistics filters.
#[derive(Copy, Clone, Debug)]
pub struct WinstatBuilder<T> {
    /// Base configuration builder.
    pub base: BaseBuilder<T>,

    /// Whether to run the rayon pass (default: true).
    pub parallel: bool,
}

impl<T: Float + Send + Sync> Default for WinstatBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> WinstatBuilder<T> {
    /// Create a new builder with parallel execution enabled.
    pub fn new() -> Self {
        Self {
            base: BaseBuilder::new(),
            parallel: true,
        }
    }

    /// Select the statistic to compute per cell.
    pub fn statistic(mut self, statistic: Statistic) -> Self {
        self.base = self.base.statistic(statistic);
        self
    }

    /// Configure a 2D window from full (odd) sizes.
    pub fn window_2d(mut self, xsize: usize, ysize: usize) -> Self {
        self.base = self.base.window_2d(xsize, ysize);
        self
    }

    /// Configure a 3D window from full (odd) sizes.
    pub fn window_3d(mut self, xsize: usize, ysize: usize, zsize: usize) -> Self {
        self.base = self.base.window_3d(xsize, ysize, zsize);
        self
    }

    /// Remove the target cell from its own neighborhood.
    pub fn exclude_center(mut self, exclude: bool) -> Self {
        self.base = self.base.exclude_center(exclude);
        self
    }

    /// Toggle parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<WinstatFilter<T>, FilterError> {
        #[cfg(feature = "cpu")]
        let base = if self.parallel {
            self.base
                .grid_pass(crate::engine::executor::grid_pass_parallel::<T>)
        } else {
            self.base
        };

        #[cfg(not(feature = "cpu"))]
        let base = self.base;

        Ok(WinstatFilter {
            base: base.build()?,
        })
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A validated, reusable parallel filter.
#[derive(Copy, Clone, Debug)]
pub struct WinstatFilter<T> {
    base: BaseFilter<T>,
}

impl<T: Float + Send + Sync> WinstatFilter<T> {
    /// Apply the filter to a grid or `ndarray` array, producing an output
    /// grid of the same shape.
    pub fn apply<I>(&self, input: &I) -> Result<Grid<T>, FilterError>
    where
        I: GridInput<T> + ?Sized,
    {
        let grid = input.as_grid()?;
        self.base.apply(&grid)
    }

    /// The statistic this filter computes.
    pub fn statistic(&self) -> Statistic {
        self.base.statistic()
    }
}
