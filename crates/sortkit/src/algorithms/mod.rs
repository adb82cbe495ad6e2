//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the five sorting algorithms. Each one takes ownership
//! of a vector and returns it (or a new vector holding the same values)
//! sorted in non-strictly ascending order. None of them can fail.
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
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Selection sort.
pub mod selection;

/// Bubble sort.
pub mod bubble;

/// Insertion sort.
pub mod insertion;

/// Quick sort.
pub mod quick;

/// Merge sort.
pub mod merge;
