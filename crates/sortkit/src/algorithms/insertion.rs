//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time. Prefix elements strictly
//! greater than the key shift one slot right; the key lands after any equal
//! elements, so the sort is stable. O(n) on sorted input, O(n^2) worst case.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Sort `values` in ascending order using insertion sort.
pub fn insertion_sort<T: Float>(mut values: Vec<T>) -> Vec<T> {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;

        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }

        values[j] = key;
    }

    values
}
