//! Bubble sort.
//!
//! ## Purpose
//!
//! Sorts by sweeping adjacent pairs across the whole sequence, swapping any
//! pair that is out of order, until a full sweep makes no swap.
//!
//! ## Design notes
//!
//! * **Early exit**: A single sweep suffices for sorted input, giving O(n)
//!   best case; O(n^2) otherwise.
//! * **Ties**: Pairs are swapped only on strict `>`, so equal neighbours never
//!   move and all-equal input terminates after one sweep. Stable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Sort `values` in ascending order using bubble sort.
pub fn bubble_sort<T: Float>(mut values: Vec<T>) -> Vec<T> {
    let len = values.len();

    loop {
        let mut swapped = false;

        for i in 1..len {
            if values[i - 1] > values[i] {
                values.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    values
}
