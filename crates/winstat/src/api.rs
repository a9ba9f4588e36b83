//! High-level API for windowed statistics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the statistic, the window, and the
//! exclude-center flag, producing a validated filter that can be applied to
//! any number of grids.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with full window sizes as the public
//!   parameters, matching how window sizes are quoted in practice (a "3×3
//!   median" is `window_2d(3, 3)`).
//! * **Validated**: All parameters are checked once, at `build()`; applying
//!   a built filter can only fail on grid-level mismatches.
//! * **Single entry point**: dimensionality dispatch happens on the grid's
//!   shape inside `apply`, so there is exactly one public path per
//!   statistic.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WinstatBuilder`] via `Winstat::new()`.
//! 2. Chain configuration methods (`.statistic()`, `.window_2d()`, ...).
//! 3. Call `.build()` to validate and obtain a [`WinstatFilter`].
//! 4. Call `.apply(&grid)` as often as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FilterConfig, FilterExecutor, GridPassFn};
use crate::engine::validator::Validator;
use crate::primitives::window::WindowSpec;

// Publicly re-exported types
pub use crate::algorithms::Statistic;
pub use crate::primitives::errors::FilterError;
pub use crate::primitives::grid::{Grid, GridShape};

// ============================================================================
// Window Sizes
// ============================================================================

/// Full (odd) window sizes as supplied by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowSizes {
    /// A 2D window: `xsize` columns by `ysize` rows.
    TwoD {
        /// Full window size along x.
        xsize: usize,
        /// Full window size along y.
        ysize: usize,
    },

    /// A 3D window: `xsize` × `ysize` × `zsize` cells.
    ThreeD {
        /// Full window size along x.
        xsize: usize,
        /// Full window size along y.
        ysize: usize,
        /// Full window size along z.
        zsize: usize,
    },
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for windowed-statistics filters.
#[derive(Copy, Clone, Debug)]
pub struct WinstatBuilder<T> {
    /// Statistic computed per cell.
    pub statistic: Option<Statistic>,

    /// Full window sizes.
    pub window: Option<WindowSizes>,

    /// Whether the target cell is removed from its own neighborhood
    /// (default: false).
    pub exclude_center: Option<bool>,

    /// Custom whole-grid traversal pass.
    #[doc(hidden)]
    pub custom_grid_pass: Option<GridPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WinstatBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WinstatBuilder<T> {
    /// Create a new builder with no parameters set.
    pub fn new() -> Self {
        Self {
            statistic: None,
            window: None,
            exclude_center: None,
            custom_grid_pass: None,
            duplicate_param: None,
        }
    }

    /// Select the statistic to compute per cell.
    pub fn statistic(mut self, statistic: Statistic) -> Self {
        if self.statistic.is_some() {
            self.duplicate_param.get_or_insert("statistic");
        }
        self.statistic = Some(statistic);
        self
    }

    /// Configure a 2D window from full (odd) sizes.
    pub fn window_2d(mut self, xsize: usize, ysize: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param.get_or_insert("window");
        }
        self.window = Some(WindowSizes::TwoD { xsize, ysize });
        self
    }

    /// Configure a 3D window from full (odd) sizes.
    pub fn window_3d(mut self, xsize: usize, ysize: usize, zsize: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param.get_or_insert("window");
        }
        self.window = Some(WindowSizes::ThreeD {
            xsize,
            ysize,
            zsize,
        });
        self
    }

    /// Remove the target cell from its own neighborhood.
    pub fn exclude_center(mut self, exclude: bool) -> Self {
        if self.exclude_center.is_some() {
            self.duplicate_param.get_or_insert("exclude_center");
        }
        self.exclude_center = Some(exclude);
        self
    }

    /// Substitute the whole-grid traversal pass.
    #[doc(hidden)]
    pub fn grid_pass(mut self, pass: GridPassFn<T>) -> Self {
        self.custom_grid_pass = Some(pass);
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<WinstatFilter<T>, FilterError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let statistic = self.statistic.ok_or(FilterError::MissingParameter {
            parameter: "statistic",
        })?;
        let sizes = self.window.ok_or(FilterError::MissingParameter {
            parameter: "window",
        })?;

        let window = match sizes {
            WindowSizes::TwoD { xsize, ysize } => {
                Validator::validate_window_size(xsize, "xsize")?;
                Validator::validate_window_size(ysize, "ysize")?;
                WindowSpec::from_sizes_2d(xsize, ysize)
            }
            WindowSizes::ThreeD {
                xsize,
                ysize,
                zsize,
            } => {
                Validator::validate_window_size(xsize, "xsize")?;
                Validator::validate_window_size(ysize, "ysize")?;
                Validator::validate_window_size(zsize, "zsize")?;
                WindowSpec::from_sizes_3d(xsize, ysize, zsize)
            }
        };

        Ok(WinstatFilter {
            config: FilterConfig {
                window,
                exclude_center: self.exclude_center.unwrap_or(false),
                statistic,
                custom_grid_pass: self.custom_grid_pass,
            },
        })
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A validated, reusable windowed-statistics filter.
#[derive(Copy, Clone, Debug)]
pub struct WinstatFilter<T> {
    config: FilterConfig<T>,
}

impl<T: Float> WinstatFilter<T> {
    /// Apply the filter to a grid, producing an output grid of the same
    /// shape. The grid's dimensionality must match the configured window's.
    pub fn apply(&self, grid: &Grid<T>) -> Result<Grid<T>, FilterError> {
        FilterExecutor::run(grid, &self.config)
    }

    /// The statistic this filter computes.
    pub fn statistic(&self) -> Statistic {
        self.config.statistic
    }

    /// Whether the center cell is excluded from its neighborhood.
    pub fn excludes_center(&self) -> bool {
        self.config.exclude_center
    }
}

// ============================================================================
// Tests
// ============================================================================
