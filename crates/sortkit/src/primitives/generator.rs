//! Random numeric sequences for fixtures and demos.
//!
//! ## Purpose
//!
//! This module generates reproducible random integer-valued sequences, with
//! optional boundary values at the largest integers a `f64` represents
//! exactly. These are the inputs the sorting algorithms are exercised on.
//!
//! ## Design notes
//!
//! * **Reproducible**: A seed yields the same sequence on every run.
//! * **Extremes first**: Requested boundary values are placed at the front,
//!   max before min, ahead of the random body.
//!
//! ## Non-goals
//!
//! * This module does not generate non-integral or non-finite values.

// External dependencies
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Constants
// ============================================================================

/// Largest integer `n` such that `n` and `n + 1` are exactly representable as `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

// ============================================================================
// Generator
// ============================================================================

/// Builder for random integer-valued sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSequence {
    /// Upper bound (inclusive) of the random body length.
    pub max_len: usize,

    /// Upper bound (inclusive) of each random value; values start at 0.
    pub max_value: u64,

    /// Prepend [`MAX_SAFE_INTEGER`].
    pub include_max: bool,

    /// Prepend [`MIN_SAFE_INTEGER`].
    pub include_min: bool,

    /// Seed for reproducible output; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self {
            max_len: 9999,
            max_value: 9999,
            include_max: false,
            include_min: false,
            seed: None,
        }
    }
}

impl RandomSequence {
    /// Create a generator with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper bound of the random body length.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the upper bound of each random value.
    pub fn max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Include the largest safe integer.
    pub fn include_max(mut self) -> Self {
        self.include_max = true;
        self
    }

    /// Include the smallest safe integer.
    pub fn include_min(mut self) -> Self {
        self.include_min = true;
        self
    }

    /// Fix the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a sequence.
    pub fn generate(&self) -> Vec<f64> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let len = rng.gen_range(0..=self.max_len);
        let mut values = Vec::with_capacity(len + 2);

        if self.include_max {
            values.push(MAX_SAFE_INTEGER);
        }
        if self.include_min {
            values.push(MIN_SAFE_INTEGER);
        }

        values.extend((0..len).map(|_| rng.gen_range(0..=self.max_value) as f64));
        values
    }
}
