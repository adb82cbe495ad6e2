//! Top-down merge sort.
//!
//! ## Purpose
//!
//! Sorts by splitting the sequence at `floor(len / 2)`, sorting both halves
//! recursively, and merging the two sorted runs.
//!
//! ## Design notes
//!
//! * **Complexity**: O(n log n) in every case; recursion depth is
//!   `ceil(log2 n)`.
//! * **Ties**: The merge takes from the left run when fronts are equal, so the
//!   sort is stable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Sort `values` in ascending order using merge sort.
pub fn merge_sort<T: Float>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let middle = values.len() / 2;
    let right = values.split_off(middle);

    merge(merge_sort(values), merge_sort(right))
}

/// Merge two ascending runs, preferring `left` on ties.
fn merge<T: Float>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            merged.push(left[l]);
            l += 1;
        } else {
            merged.push(right[r]);
            r += 1;
        }
    }

    // At most one run still has values
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}
