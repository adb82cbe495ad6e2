//! Algorithm selection and sort execution.
//!
//! ## Purpose
//!
//! This module defines the [`Algorithm`] selector, the resolved
//! [`SortConfig`], and the [`SortExecutor`] that screens input, dispatches to
//! the chosen algorithm and verifies the output when asked to.
//!
//! ## Design notes
//!
//! * **Ownership**: Every algorithm consumes its input vector and returns the
//!   sorted one. Callers that need the original keep a clone.
//! * **Opt-in checks**: Input screening and output verification are off by
//!   default; the plain path cannot fail.
//! * **Logging**: Each run emits a `debug` event before sorting and a `trace`
//!   event after.
//!
//! ## Key concepts
//!
//! ### Execution Flow
//! 1. Screen for non-finite values (if `reject_non_finite`).
//! 2. Sort with the selected algorithm.
//! 3. Verify length, order and multiset (if `verify_output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::quick::quick_sort;
use crate::algorithms::selection::selection_sort;
use crate::engine::output::SortResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;

// ============================================================================
// Algorithm
// ============================================================================

/// Sorting algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Minimum-selection with swaps. Unstable.
    Selection,

    /// Adjacent swaps until a clean sweep. Stable.
    Bubble,

    /// Shifting into a sorted prefix. Stable.
    Insertion,

    /// First-element pivot partitioning. Unstable in general.
    Quick,

    /// Top-down halving with left-preferring merges. Stable.
    #[default]
    Merge,
}

impl Algorithm {
    /// Every algorithm, in a fixed order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Capitalized name, also used as the result-file label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Selection => "Selection",
            Self::Bubble => "Bubble",
            Self::Insertion => "Insertion",
            Self::Quick => "Quick",
            Self::Merge => "Merge",
        }
    }

    /// Whether equal values always keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }

    /// Sort `values` with this algorithm.
    pub fn sort<T: Float>(self, values: Vec<T>) -> Vec<T> {
        match self {
            Self::Selection => selection_sort(values),
            Self::Bubble => bubble_sort(values),
            Self::Insertion => insertion_sort(values),
            Self::Quick => quick_sort(values),
            Self::Merge => merge_sort(values),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Reject NaN and infinite input values.
    pub reject_non_finite: bool,

    /// Check the sorting post-conditions on the output.
    pub verify_output: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a configured sort.
#[derive(Debug, Clone, Default)]
pub struct SortExecutor {
    config: SortConfig,
}

impl SortExecutor {
    /// Create an executor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor from a resolved configuration.
    pub fn from_config(config: &SortConfig) -> Self {
        Self { config: *config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Enable or disable non-finite input rejection.
    pub fn reject_non_finite(mut self, flag: bool) -> Self {
        self.config.reject_non_finite = flag;
        self
    }

    /// Enable or disable output verification.
    pub fn verify_output(mut self, flag: bool) -> Self {
        self.config.verify_output = flag;
        self
    }

    /// Run a sort with an explicit configuration.
    pub fn run_with_config<T: Float>(
        values: Vec<T>,
        config: &SortConfig,
    ) -> Result<SortResult<T>, SortError> {
        Self::from_config(config).run(values)
    }

    /// Screen, sort and optionally verify `values`.
    pub fn run<T: Float>(&self, values: Vec<T>) -> Result<SortResult<T>, SortError> {
        let SortConfig {
            algorithm,
            reject_non_finite,
            verify_output,
        } = self.config;

        if reject_non_finite {
            Validator::validate_inputs(&values)?;
        }

        debug!(%algorithm, len = values.len(), "sorting");

        let input = verify_output.then(|| values.clone());
        let sorted = algorithm.sort(values);

        if let Some(input) = &input {
            Validator::validate_output(input, &sorted)?;
        }

        trace!(%algorithm, len = sorted.len(), verified = verify_output, "sorted");

        Ok(SortResult {
            values: sorted,
            algorithm,
            verified: verify_output,
        })
    }
}
