//! CSV round trip
//!
//! Generates a random sequence, writes it as CSV, reads it back through the
//! strict reader, sorts it with every algorithm and captures each result
//! under `results/<Algorithm>.csv`.
//!
//! Run with `RUST_LOG=debug` to see the codec and executor events.

use sortkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CsvConfig::default();

    // Input file
    let generated = RandomSequence::new()
        .max_len(500)
        .include_max()
        .include_min()
        .seed(42)
        .generate();
    let input_path = write_csv(&generated, "input", &config)?;
    println!("Wrote {} values to {}", generated.len(), input_path.display());

    // Read it back and sort with every algorithm
    let values: Vec<f64> = read_csv(&input_path)?;
    assert_eq!(values, generated);

    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(values.clone());
        let path = write_csv(&sorted, algorithm.name(), &config)?;
        println!("{:<10} -> {}", algorithm, path.display());
    }

    // Rejected inputs
    for content in ["3,4,5,hello,6,7", "", "3,4,5,,6,7", "3,4,5,\n,6,7"] {
        match parse_csv::<f64>(content) {
            Ok(values) => println!("{:?} parsed as {:?}", content, values),
            Err(e) => println!("{:?} rejected: {}", content, e),
        }
    }

    Ok(())
}
