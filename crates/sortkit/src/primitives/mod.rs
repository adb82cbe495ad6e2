//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the ordering queries and the random
//! fixture generator used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: IO
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Ordering queries over numeric sequences.
pub mod sequence;

/// Random sequence generation.
#[cfg(feature = "std")]
pub mod generator;
