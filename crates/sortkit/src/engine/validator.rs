//! Input screening and output verification for sorting.
//!
//! ## Purpose
//!
//! This module checks the optional pre-condition (all values finite) and the
//! sorting post-conditions (length preserved, non-strictly ascending, same
//! multiset of values as the input).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the multiset
//!   check sorts copies and runs last.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or repair its inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::sequence::{first_descent, same_multiset};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorting inputs and outputs.
pub struct Validator;

impl Validator {
    /// Reject the first NaN or infinite value.
    pub fn validate_inputs<T: Float>(values: &[T]) -> Result<(), SortError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(SortError::NonFiniteValue(format!(
                "values[{}]={}",
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Check that `output` is an ascending permutation of `input`.
    pub fn validate_output<T: Float>(input: &[T], output: &[T]) -> Result<(), SortError> {
        // Check 1: Length preserved
        if input.len() != output.len() {
            return Err(SortError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        // Check 2: Ascending
        if let Some(index) = first_descent(output) {
            return Err(SortError::NotAscending { index });
        }

        // Check 3: Same values, same multiplicities
        if !same_multiset(input, output) {
            return Err(SortError::NotPermutation);
        }

        Ok(())
    }
}
