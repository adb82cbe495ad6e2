#![cfg(feature = "std")]
//! Tests for the numeric CSV reader.
//!
//! These tests verify:
//! - Parsing of well-formed content in file order
//! - The four validation failures and their exact messages
//! - Whitespace handling around tokens
//! - Reading from disk, including missing files
//!
//! ## Test Organization
//!
//! 1. **Parsing** - Well-formed content
//! 2. **Validation Errors** - Empty file, empty value, line break, not a number
//! 3. **Files** - Reading through the filesystem

use sortkit::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn parse(content: &str) -> Result<Vec<f64>, CsvError> {
    parse_csv::<f64>(content)
}

fn message(content: &str) -> String {
    parse(content).unwrap_err().to_string()
}

// ============================================================================
// Parsing Tests
// ============================================================================

/// Test values come back in file order.
#[test]
fn test_parse_preserves_order() {
    assert_eq!(parse("3,4,5,1,6,7").unwrap(), vec![3.0, 4.0, 5.0, 1.0, 6.0, 7.0]);
}

/// Test a single value without delimiters.
#[test]
fn test_parse_single_value() {
    assert_eq!(parse("42").unwrap(), vec![42.0]);
}

/// Test negative, fractional, exponent and extreme values.
#[test]
fn test_parse_number_forms() {
    assert_eq!(
        parse("-3,0.25,1e3,-0,9007199254740991,-9007199254740991").unwrap(),
        vec![-3.0, 0.25, 1000.0, 0.0, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER]
    );
}

/// Test surrounding whitespace and a trailing newline are tolerated.
#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse(" 1, 2 ,3\n").unwrap(), vec![1.0, 2.0, 3.0]);
    assert_eq!(parse("1,2,3\r\n").unwrap(), vec![1.0, 2.0, 3.0]);
}

/// Test f32 parsing.
#[test]
fn test_parse_f32() {
    assert_eq!(parse_csv::<f32>("1.5,-2").unwrap(), vec![1.5_f32, -2.0]);
}

// ============================================================================
// Validation Error Tests
// ============================================================================

/// Test empty content.
#[test]
fn test_parse_empty_file() {
    assert!(matches!(parse(""), Err(CsvError::EmptyFile)));
    assert_eq!(message(""), "File is empty");
}

/// Test consecutive delimiters.
#[test]
fn test_parse_empty_value() {
    assert!(matches!(parse("3,4,5,,6,7"), Err(CsvError::EmptyValue)));
    assert_eq!(message("3,4,5,,6,7"), "Empty value in CSV");
}

/// Test leading and trailing delimiters.
#[test]
fn test_parse_empty_value_at_edges() {
    assert!(matches!(parse(",1"), Err(CsvError::EmptyValue)));
    assert!(matches!(parse("1,"), Err(CsvError::EmptyValue)));
    assert!(matches!(parse(","), Err(CsvError::EmptyValue)));
}

/// Test a bare line feed or carriage return token.
#[test]
fn test_parse_line_break_in_value() {
    assert!(matches!(
        parse("3,4,5,\n,6,7"),
        Err(CsvError::LineBreakInValue)
    ));
    assert!(matches!(
        parse("3,\r,6"),
        Err(CsvError::LineBreakInValue)
    ));
    assert_eq!(message("3,4,5,\n,6,7"), "Carriage return or new line in CSV");
}

/// Test a non-numeric token is reported verbatim.
#[test]
fn test_parse_not_a_number() {
    assert!(matches!(
        parse("3,4,5,hello,6,7"),
        Err(CsvError::NotANumber(ref token)) if token == "hello"
    ));
    assert_eq!(message("3,4,5,hello,6,7"), "hello is not a number");
}

/// Test tokens that only look numeric are rejected untrimmed.
#[test]
fn test_parse_not_a_number_variants() {
    assert_eq!(message("1,NaN"), "NaN is not a number");
    assert_eq!(message("1, "), "  is not a number");
    assert_eq!(message("1,2.5.1"), "2.5.1 is not a number");
    assert_eq!(message("1\n2"), "1\n2 is not a number");
}

/// Test the first offending token determines the error.
#[test]
fn test_parse_first_error_wins() {
    assert!(matches!(parse("x,,1"), Err(CsvError::NotANumber(_))));
    assert!(matches!(parse(",x"), Err(CsvError::EmptyValue)));
}

// ============================================================================
// File Tests
// ============================================================================

/// Test reading a file from disk.
#[test]
fn test_read_csv_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, "5,3,8,1,2").unwrap();

    let values: Vec<f64> = read_csv(&path).unwrap();
    assert_eq!(values, vec![5.0, 3.0, 8.0, 1.0, 2.0]);
}

/// Test reading an empty file.
#[test]
fn test_read_csv_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let err = read_csv::<f64, _>(&path).unwrap_err();
    assert_eq!(err.to_string(), "File is empty");
}

/// Test a missing file is an I/O error.
#[test]
fn test_read_csv_missing_file() {
    let dir = TempDir::new().unwrap();

    let err = read_csv::<f64, _>(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
    assert!(err.to_string().starts_with("I/O error: "));
}

/// Test reading then sorting with every algorithm.
#[test]
fn test_read_csv_then_sort() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, "10,-2,7,7,0,3").unwrap();

    for algorithm in Algorithm::ALL {
        let values: Vec<f64> = read_csv(&path).unwrap();
        assert_eq!(
            algorithm.sort(values),
            vec![-2.0, 0.0, 3.0, 7.0, 7.0, 10.0],
            "{algorithm}"
        );
    }
}
