//! Layer 2: Sorting
//!
//! # Purpose
//!
//! This layer provides the fixed-size sorting machinery behind the median
//! kernel: the comparator representation, the odd-even merge generator, the
//! embedded tables with their size dispatch, and the verifier that ties the
//! tables to the generator.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Sorting ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Comparator representation and branchless application.
pub mod network;

/// Batcher odd-even merge network generation.
pub mod generator;

/// Embedded tables and size-dispatched sorting.
pub mod tables;

/// Structural verification against the generator.
pub mod verifier;
