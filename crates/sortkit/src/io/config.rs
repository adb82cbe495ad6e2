//! Codec configuration
//!
//! Controls where the writer places result files.

use std::path::{Path, PathBuf};

/// Default directory for result files, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// File extension of result files.
pub const CSV_EXTENSION: &str = "csv";

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Directory that receives `<label>.csv` files (default: "results")
    pub results_dir: PathBuf,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }
}

impl CsvConfig {
    /// Set the results directory
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// The results directory
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Path of the result file for `label`
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.results_dir.join(format!("{label}.{CSV_EXTENSION}"))
    }
}
