//! Algorithm comparison
//!
//! Sorts the same inputs (random, sorted, reverse-sorted, all-equal) with
//! each algorithm, checks that all five agree, and prints the timings.

use sortkit::prelude::*;
use std::time::Instant;

fn main() -> Result<(), SortError> {
    tracing_subscriber::fmt::init();

    let random = RandomSequence::new().max_len(3000).seed(7).generate();
    let sorted = merge_sort(random.clone());
    let reversed: Vec<f64> = sorted.iter().rev().copied().collect();
    let constant = vec![3.0; 2000];

    let inputs = [
        ("random", random),
        ("sorted", sorted),
        ("reversed", reversed),
        ("constant", constant),
    ];

    println!("{:<10} {:>8} {:>12} {:>12}", "Input", "Len", "Algorithm", "Time (ms)");
    println!("{}", "-".repeat(45));

    for (label, input) in &inputs {
        let mut reference: Option<Vec<f64>> = None;

        for algorithm in Algorithm::ALL {
            let model = Sorter::new().algorithm(algorithm).verify_output().build()?;

            let start = Instant::now();
            let result = model.sort(input.clone())?;
            let elapsed = start.elapsed().as_secs_f64() * 1000.0;

            println!(
                "{:<10} {:>8} {:>12} {:>12.3}",
                label,
                result.len(),
                algorithm,
                elapsed
            );

            match &reference {
                Some(expected) => assert_eq!(&result.values, expected),
                None => reference = Some(result.into_values()),
            }
        }
    }

    Ok(())
}
