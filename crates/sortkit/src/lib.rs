//! # sortkit: classical sorting algorithms over numeric sequences
//!
//! Five textbook sorting algorithms (selection, bubble, insertion, quick and
//! merge) over sequences of floating-point numbers, plus a strict numeric CSV
//! codec for loading inputs and capturing results.
//!
//! ## Quick Start
//!
//! ### Plain functions
//!
//! Every algorithm takes ownership of a vector and returns it sorted in
//! non-strictly ascending order. Keep a clone if you need the original.
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let values = vec![5.0, 3.0, 8.0, 1.0, 2.0];
//!
//! assert_eq!(quick_sort(values.clone()), vec![1.0, 2.0, 3.0, 5.0, 8.0]);
//! assert_eq!(merge_sort(values), vec![1.0, 2.0, 3.0, 5.0, 8.0]);
//! ```
//!
//! ### Configured sorting
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let model = Sorter::new()
//!     .algorithm(Insertion)   // Stable, O(n) on sorted input
//!     .reject_non_finite()    // Fail on NaN / infinities
//!     .verify_output()        // Check order, length and multiset
//!     .build()?;
//!
//! let result = model.sort(vec![3.0, -1.5, 2.0])?;
//! assert_eq!(result.values, vec![-1.5, 2.0, 3.0]);
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:   Insertion
//!   Values:      3
//!   Range:       [-1.5, 3]
//!   Verified:    yes
//!
//! Sorted Values:
//!    Index                Value
//! -----------------------------
//!        0                 -1.5
//!        1                    2
//!        2                    3
//! ```
//!
//! ### CSV round trip
//!
//! ```rust,no_run
//! use sortkit::prelude::*;
//!
//! let values: Vec<f64> = read_csv("data/input.csv")?;
//! let path = write_csv_default(&bubble_sort(values), "Bubble")?; // results/Bubble.csv
//! # let _ = path;
//! # Result::<(), CsvError>::Ok(())
//! ```
//!
//! ## Choosing an algorithm
//!
//! | Algorithm   | Worst case | Best case  | Stable |
//! |-------------|------------|------------|--------|
//! | `Selection` | O(n^2)     | O(n^2)     | no     |
//! | `Bubble`    | O(n^2)     | O(n)       | yes    |
//! | `Insertion` | O(n^2)     | O(n)       | yes    |
//! | `Quick`     | O(n^2)     | O(n log n) | no     |
//! | `Merge`     | O(n log n) | O(n log n) | yes    |
//!
//! Quick sort always pivots on the first element, so sorted and
//! reverse-sorted inputs hit its quadratic case.
//!
//! ## Minimal Usage (no_std)
//!
//! The algorithms and the configured path only need `alloc`. Disable default
//! features to drop the standard library (and with it the CSV codec and the
//! random generator):
//!
//! ```toml
//! [dependencies]
//! sortkit = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per sort and per file,
//! `warn` per rejected CSV token) and never installs a subscriber.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, ordering queries, fixtures.
mod primitives;

// Layer 2: Algorithms - the five sorting routines.
mod algorithms;

// Layer 3: Engine - selection, execution and validation.
mod engine;

// Layer 4: IO - numeric CSV codec.
#[cfg(feature = "std")]
mod io;

// High-level fluent API.
mod api;

pub use crate::api::*;

// Standard sortkit prelude.
pub mod prelude {
    pub use crate::api::{
        bubble_sort, insertion_sort, is_ascending, merge_sort, quick_sort, same_multiset,
        selection_sort, Algorithm,
        Algorithm::{Bubble, Insertion, Merge, Quick, Selection},
        SortConfig, SortError, SortModel, SortResult, SorterBuilder as Sorter, Validator,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{
        format_csv, parse_csv, read_csv, write_csv, write_csv_default, CsvConfig, CsvError,
        RandomSequence, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    #[cfg(feature = "std")]
    pub mod io {
        pub use crate::io::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
