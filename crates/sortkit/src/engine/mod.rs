//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer selects and runs an algorithm under a resolved configuration,
//! checks inputs and outputs on request, and packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: IO
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Algorithm selection and execution.
pub mod executor;

/// Result types.
pub mod output;

/// Input and output validation.
pub mod validator;
