//! Numeric CSV writer.
//!
//! Values are joined with a single comma using Rust's shortest round-trip
//! decimal formatting: no header, no trailing delimiter, no trailing newline.
//! Integral floats print without a fractional part (`3`, not `3.0`), so the
//! reader parses every written file back to the same values.

// External dependencies
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

// Internal dependencies
use crate::io::config::CsvConfig;
use crate::io::errors::CsvError;

/// Serialize values as comma-joined decimal text.
pub fn format_csv<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Write `values` to `<results_dir>/<label>.csv`, creating missing directories.
///
/// Returns the path written.
pub fn write_csv<T: Display>(
    values: &[T],
    label: &str,
    config: &CsvConfig,
) -> Result<PathBuf, CsvError> {
    let path = config.path_for(label);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, format_csv(values))?;

    debug!(path = %path.display(), count = values.len(), "wrote csv");
    Ok(path)
}

/// Write `values` under the default results directory.
pub fn write_csv_default<T: Display>(values: &[T], label: &str) -> Result<PathBuf, CsvError> {
    write_csv(values, label, &CsvConfig::default())
}
