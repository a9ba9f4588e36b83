//! Parallel execution engine.

/// Rayon-backed whole-grid pass.
pub mod executor;
