//! Selection sort.
//!
//! ## Purpose
//!
//! Sorts by repeatedly scanning the unsorted suffix for its minimum and
//! swapping it into place at the boundary of the sorted prefix.
//!
//! ## Design notes
//!
//! * **Comparisons**: Always O(n^2), regardless of input order.
//! * **Swaps**: At most n - 1; a swap is skipped when the minimum is already
//!   at the boundary.
//! * **Ties**: The first occurrence of the minimum wins (strict `<` scan).
//!   The long-distance swap makes the sort unstable.
//!
//! ## Invariants
//!
//! * After step `i`, `values[..=i]` holds the `i + 1` smallest values in order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Sort `values` in ascending order using selection sort.
#[allow(clippy::needless_range_loop)]
pub fn selection_sort<T: Float>(mut values: Vec<T>) -> Vec<T> {
    let len = values.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;

        for j in (i + 1)..len {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            values.swap(i, min_index);
        }
    }

    values
}
