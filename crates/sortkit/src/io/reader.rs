//! Numeric CSV reader.
//!
//! ## Purpose
//!
//! This module turns a comma-delimited text blob into a numeric sequence in
//! file order, rejecting anything that is not a well-formed number list.
//!
//! ## Design notes
//!
//! * **Whole-file**: The file is read in one blocking call; no streaming.
//! * **Fail-Fast**: The first offending token aborts the parse; no partial
//!   result is returned.
//! * **Token checks**: Each token is checked in order for being empty, being
//!   exactly `"\n"` or `"\r"`, and parsing as a number. Surrounding
//!   whitespace is trimmed before parsing, so a trailing newline at end of
//!   file is accepted. Whitespace-only tokens and NaN are rejected as not a
//!   number.
//!
//! ## Non-goals
//!
//! * No header row, quoting or escaping. A delimiter inside a value cannot be
//!   expressed.

// External dependencies
use num_traits::Float;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

// Internal dependencies
use crate::io::errors::CsvError;

// ============================================================================
// Reading
// ============================================================================

/// Read a numeric CSV file.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, CsvError>
where
    T: Float + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let values = parse_csv(&content)?;
    debug!(path = %path.display(), count = values.len(), "read csv");

    Ok(values)
}

/// Parse comma-delimited numeric text.
pub fn parse_csv<T: Float + FromStr>(content: &str) -> Result<Vec<T>, CsvError> {
    if content.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    content.split(',').map(parse_token::<T>).collect()
}

/// Parse a single token.
fn parse_token<T: Float + FromStr>(token: &str) -> Result<T, CsvError> {
    if token.is_empty() {
        return Err(CsvError::EmptyValue);
    }

    if token == "\n" || token == "\r" {
        return Err(CsvError::LineBreakInValue);
    }

    match token.trim().parse::<T>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => {
            warn!(token, "rejected non-numeric token");
            Err(CsvError::NotANumber(token.to_string()))
        }
    }
}
