//! Layer 4: IO
//!
//! # Purpose
//!
//! This layer provides the numeric CSV codec: a strict reader that feeds
//! sequences into the algorithms and a writer that captures their results.
//! It requires the `std` feature.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: IO ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Codec configuration.
pub mod config;

/// Codec errors.
pub mod errors;

/// CSV reader.
pub mod reader;

/// CSV writer.
pub mod writer;
