//! Output type for configured sort runs.
//!
//! ## Purpose
//!
//! This module defines [`SortResult`], which carries the sorted values
//! together with the algorithm that produced them and whether the
//! post-conditions were verified.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not sort or validate; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::Algorithm;
use crate::primitives::sequence::extremes;

// ============================================================================
// Result Structure
// ============================================================================

/// Sorted values and run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    /// Values in non-strictly ascending order.
    pub values: Vec<T>,

    /// Algorithm that produced `values`.
    pub algorithm: Algorithm,

    /// Whether the sorting post-conditions were checked.
    pub verified: bool,
}

impl<T: Float> SortResult<T> {
    /// Number of sorted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, ignoring NaN.
    pub fn min(&self) -> Option<T> {
        extremes(&self.values).map(|(lo, _)| lo)
    }

    /// Largest value, ignoring NaN.
    pub fn max(&self) -> Option<T> {
        extremes(&self.values).map(|(_, hi)| hi)
    }

    /// Take the sorted values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SortResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", self.algorithm)?;
        writeln!(f, "  Values:      {}", self.values.len())?;

        if let Some((lo, hi)) = extremes(&self.values) {
            writeln!(f, "  Range:       [{}, {}]", lo, hi)?;
        }

        if self.verified {
            writeln!(f, "  Verified:    yes")?;
        }
        writeln!(f)?;

        writeln!(f, "Sorted Values:")?;
        writeln!(f, "{:>8} {:>20}", "Index", "Value")?;
        writeln!(f, "{:-<width$}", "", width = 29)?;

        // Show first 10 and last 10 if more than 20 values
        let n = self.values.len();
        for (idx, value) in self.values.iter().enumerate() {
            if n > 20 && (10..n - 10).contains(&idx) {
                if idx == 10 {
                    writeln!(f, "{:>8}", "...")?;
                }
                continue;
            }
            writeln!(f, "{:>8} {:>20}", idx, value)?;
        }

        Ok(())
    }
}
