//! Ordering utilities over numeric sequences.
//!
//! ## Purpose
//!
//! This module provides the small set of ordering queries shared by the
//! algorithms, the output validator and the result type: ascending checks,
//! a total order over floats, and multiset comparison.
//!
//! ## Design notes
//!
//! * **Ordering**: Finite values and infinities use the standard numeric
//!   order. NaN is placed after every other value and equal to itself, so
//!   multiset comparison stays total.
//! * **Allocation**: Multiset comparison sorts copies; the inputs are never
//!   reordered.
//!
//! ## Invariants
//!
//! * `is_ascending` holds for empty and single-element slices.
//! * `same_multiset` implies equal lengths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Ordering
// ============================================================================

/// Total order over floats: numeric order, with NaN after every other value.
#[inline]
pub fn total_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Check that every element is `<=` its successor.
#[inline]
pub fn is_ascending<T: Float>(values: &[T]) -> bool {
    first_descent(values).is_none()
}

/// Index of the first element that is not `<=` its successor.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn first_descent<T: Float>(values: &[T]) -> Option<usize> {
    values.windows(2).position(|w| !(w[0] <= w[1]))
}

/// Check that two slices hold the same values with the same multiplicities.
pub fn same_multiset<T: Float>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut left: Vec<T> = a.to_vec();
    let mut right: Vec<T> = b.to_vec();
    left.sort_unstable_by(total_cmp);
    right.sort_unstable_by(total_cmp);

    left.iter()
        .zip(right.iter())
        .all(|(l, r)| total_cmp(l, r) == Ordering::Equal)
}

/// Smallest and largest value, ignoring NaN. `None` when no such value exists.
pub fn extremes<T: Float>(values: &[T]) -> Option<(T, T)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
