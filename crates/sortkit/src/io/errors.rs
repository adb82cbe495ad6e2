//! Error type for the numeric CSV codec.
//!
//! The first four variants are the reader's validation failures; their
//! messages are fixed. `Io` wraps failures opening, reading, creating or
//! writing files.

use thiserror::Error;

/// Numeric CSV codec errors.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file has no content at all.
    #[error("File is empty")]
    EmptyFile,

    /// A token between two delimiters (or at either end) is empty.
    #[error("Empty value in CSV")]
    EmptyValue,

    /// A token is exactly a line feed or a carriage return.
    #[error("Carriage return or new line in CSV")]
    LineBreakInValue,

    /// A token does not parse as a number. Holds the token verbatim.
    #[error("{0} is not a number")]
    NotANumber(String),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
