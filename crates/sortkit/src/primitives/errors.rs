//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the configurable
//! sorting path (builder, executor and output validator). The plain sorting
//! functions never fail; these errors only arise when the caller opts into
//! input screening or output verification, or misconfigures the builder.
//!
//! ## Design notes
//!
//! * **No-std**: Uses `alloc` for dynamic messages so the sorting core builds
//!   without the standard library.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input screening**: Non-finite values rejected on request.
//! 2. **Output verification**: Length, ordering and multiset post-conditions.
//! 3. **Configuration**: Duplicate builder parameters, unknown algorithm names.
//!
//! ## Non-goals
//!
//! * This module does not report CSV codec failures (see the IO layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for configurable sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Input contains NaN or an infinite value while non-finite values are rejected.
    NonFiniteValue(String),

    /// The sorted output does not have the same length as the input.
    LengthMismatch {
        /// Number of input values.
        input: usize,
        /// Number of output values.
        output: usize,
    },

    /// The sorted output is not non-strictly ascending.
    NotAscending {
        /// Index `i` such that `output[i] > output[i + 1]`.
        index: usize,
    },

    /// The sorted output is not a permutation of the input.
    NotPermutation,

    /// An algorithm name could not be recognized.
    UnknownAlgorithm(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::LengthMismatch { input, output } => {
                write!(
                    f,
                    "Length mismatch: input has {input} values, output has {output}"
                )
            }
            Self::NotAscending { index } => {
                write!(
                    f,
                    "Output is not ascending: element {index} is greater than element {}",
                    index + 1
                )
            }
            Self::NotPermutation => write!(f, "Output is not a permutation of the input"),
            Self::UnknownAlgorithm(name) => write!(f, "Unknown sorting algorithm: {name}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
