//! Quick sort with a first-element pivot.
//!
//! ## Purpose
//!
//! Sorts by partitioning each range around its first element into values
//! strictly less than the pivot and values greater than or equal to it, then
//! emitting `sorted(less) ++ [pivot] ++ sorted(greater_or_equal)`.
//!
//! ## Design notes
//!
//! * **Pivot**: Always the first element of the range. Sorted and
//!   reverse-sorted input therefore degrade to O(n^2); O(n log n) on average.
//! * **Ties**: Values equal to the pivot go to the right partition, after the
//!   pivot itself.
//! * **Work-list**: Pending ranges and pivots are kept on an explicit heap
//!   stack instead of the call stack, so degenerate partitions cannot
//!   overflow it. Tasks are pushed right-to-left and popped left-to-right,
//!   which reproduces the in-order concatenation of the recursive form.
//!
//! ## Invariants
//!
//! * `sorted` only ever grows with values that are final in position.
//! * Every partition step removes its pivot, so the loop terminates on any
//!   input, NaN included.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Work-list
// ============================================================================

/// A unit of pending work.
enum Task<T> {
    /// A range still to be partitioned.
    Partition(Vec<T>),

    /// A pivot ready to be appended to the output.
    Emit(T),
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort `values` in ascending order using quick sort.
pub fn quick_sort<T: Float>(values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let mut sorted = Vec::with_capacity(values.len());
    let mut pending = vec![Task::Partition(values)];

    while let Some(task) = pending.pop() {
        match task {
            Task::Emit(pivot) => sorted.push(pivot),
            Task::Partition(range) if range.len() <= 1 => sorted.extend(range),
            Task::Partition(range) => {
                let pivot = range[0];
                let (less, greater_or_equal) = partition(&range[1..], pivot);

                pending.push(Task::Partition(greater_or_equal));
                pending.push(Task::Emit(pivot));
                pending.push(Task::Partition(less));
            }
        }
    }

    sorted
}

/// Split `rest` into values strictly below `pivot` and everything else.
#[inline]
fn partition<T: Float>(rest: &[T], pivot: T) -> (Vec<T>, Vec<T>) {
    rest.iter().copied().partition(|&v| v < pivot)
}
