//! High-level API for configured sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for running a sort with
//! options. It implements a fluent builder that selects an algorithm and the
//! optional input/output checks, and produces a reusable [`SortModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Duplicate parameters are reported when `.build()` is called.
//! * **Type-Safe**: The model sorts any `Float` type.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.verify_output()`, etc.).
//! 3. Call `.build()` to get a [`SortModel`], then `.sort(values)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::algorithms::bubble::bubble_sort;
pub use crate::algorithms::insertion::insertion_sort;
pub use crate::algorithms::merge::merge_sort;
pub use crate::algorithms::quick::quick_sort;
pub use crate::algorithms::selection::selection_sort;
pub use crate::engine::executor::{Algorithm, SortConfig, SortExecutor};
pub use crate::engine::output::SortResult;
pub use crate::engine::validator::Validator;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::sequence::{is_ascending, same_multiset};

#[cfg(feature = "std")]
pub use crate::io::config::CsvConfig;
#[cfg(feature = "std")]
pub use crate::io::errors::CsvError;
#[cfg(feature = "std")]
pub use crate::io::reader::{parse_csv, read_csv};
#[cfg(feature = "std")]
pub use crate::io::writer::{format_csv, write_csv, write_csv_default};
#[cfg(feature = "std")]
pub use crate::primitives::generator::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, RandomSequence};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a sort.
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Algorithm to run (default: Merge).
    pub algorithm: Option<Algorithm>,

    /// Reject NaN and infinite values (default: false).
    pub reject_non_finite: Option<bool>,

    /// Verify the sorting post-conditions (default: false).
    pub verify_output: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sorting algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Reject input containing NaN or infinite values.
    pub fn reject_non_finite(mut self) -> Self {
        if self.reject_non_finite.is_some() {
            self.duplicate_param = Some("reject_non_finite");
        }
        self.reject_non_finite = Some(true);
        self
    }

    /// Check that every output is an ascending permutation of its input.
    pub fn verify_output(mut self) -> Self {
        if self.verify_output.is_some() {
            self.duplicate_param = Some("verify_output");
        }
        self.verify_output = Some(true);
        self
    }

    /// Resolve the configuration into a model.
    pub fn build(self) -> Result<SortModel, SortError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }

        Ok(SortModel {
            config: SortConfig {
                algorithm: self.algorithm.unwrap_or_default(),
                reject_non_finite: self.reject_non_finite.unwrap_or(false),
                verify_output: self.verify_output.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A resolved, reusable sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortModel {
    config: SortConfig,
}

impl SortModel {
    /// The resolved configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Sort `values` under this configuration.
    pub fn sort<T: Float>(&self, values: Vec<T>) -> Result<SortResult<T>, SortError> {
        SortExecutor::run_with_config(values, &self.config)
    }
}
