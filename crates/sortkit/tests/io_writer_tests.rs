#![cfg(feature = "std")]
//! Tests for the numeric CSV writer and codec configuration.
//!
//! ## Test Organization
//!
//! 1. **Formatting** - Text produced for a sequence
//! 2. **Configuration** - Result paths
//! 3. **Writing** - Files, directories, round trips

use sortkit::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Formatting Tests
// ============================================================================

/// Test values are comma-joined without padding or trailing delimiter.
#[test]
fn test_format_csv_basic() {
    assert_eq!(format_csv(&[1.0, 2.0, 3.0, 5.0, 8.0]), "1,2,3,5,8");
}

/// Test fractional, negative and extreme values.
#[test]
fn test_format_csv_number_forms() {
    assert_eq!(
        format_csv(&[-0.5, 0.1, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER]),
        "-0.5,0.1,9007199254740991,-9007199254740991"
    );
}

/// Test edge lengths.
#[test]
fn test_format_csv_edges() {
    assert_eq!(format_csv::<f64>(&[]), "");
    assert_eq!(format_csv(&[7.0]), "7");
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the default results directory.
#[test]
fn test_config_default() {
    let config = CsvConfig::default();

    assert_eq!(config.results_dir(), PathBuf::from("results").as_path());
    assert_eq!(config.path_for("Quick"), PathBuf::from("results/Quick.csv"));
}

/// Test a custom results directory.
#[test]
fn test_config_custom_dir() {
    let config = CsvConfig::default().with_results_dir("out/runs");

    assert_eq!(config.path_for("Merge"), PathBuf::from("out/runs/Merge.csv"));
}

// ============================================================================
// Writing Tests
// ============================================================================

/// Test writing creates missing directories and returns the path.
#[test]
fn test_write_csv_creates_directories() {
    let dir = TempDir::new().unwrap();
    let config = CsvConfig::default().with_results_dir(dir.path().join("tmp/results"));

    let path = write_csv(&[3.0, 1.0, 2.0], "Selection", &config).unwrap();

    assert_eq!(path, dir.path().join("tmp/results/Selection.csv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "3,1,2");
}

/// Test writing twice replaces the file.
#[test]
fn test_write_csv_overwrites() {
    let dir = TempDir::new().unwrap();
    let config = CsvConfig::default().with_results_dir(dir.path());

    write_csv(&[1.0, 2.0, 3.0], "Bubble", &config).unwrap();
    let path = write_csv(&[4.0], "Bubble", &config).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "4");
}

/// Test writing into a path blocked by a file is an I/O error.
#[test]
fn test_write_csv_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = CsvConfig::default().with_results_dir(blocker.join("results"));

    let err = write_csv(&[1.0], "Quick", &config).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}

/// Test an empty sequence writes an empty file that reads back as empty.
#[test]
fn test_write_csv_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let config = CsvConfig::default().with_results_dir(dir.path());

    let path = write_csv::<f64>(&[], "Empty", &config).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(matches!(read_csv::<f64, _>(&path), Err(CsvError::EmptyFile)));
}

/// Test sorted results of every algorithm round-trip through their files.
#[test]
fn test_write_then_read_every_algorithm() {
    let dir = TempDir::new().unwrap();
    let config = CsvConfig::default().with_results_dir(dir.path().join("results"));
    let input_path = dir.path().join("input.csv");

    let generated = RandomSequence::new()
        .max_len(400)
        .include_max()
        .include_min()
        .seed(11)
        .generate();
    fs::write(&input_path, format_csv(&generated)).unwrap();

    let data: Vec<f64> = read_csv(&input_path).unwrap();
    assert_eq!(data, generated);

    let mut expected = generated.clone();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for algorithm in Algorithm::ALL {
        let path = write_csv(&algorithm.sort(data.clone()), algorithm.name(), &config).unwrap();
        assert_eq!(path, config.path_for(algorithm.name()));

        let read_back: Vec<f64> = read_csv(&path).unwrap();
        assert_eq!(read_back, expected, "{algorithm}");
    }
}
