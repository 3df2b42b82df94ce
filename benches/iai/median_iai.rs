//! IAI-Callgrind benchmark for the partition search.
//!
//! Measures instruction counts for balanced and skewed input pairs. For the
//! skewed pairs the count should not grow with the longer sequence.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sorted_median::{MedianError, find_median};
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_balanced_1000() -> (Vec<i64>, Vec<i64>) {
    ((0..1000).map(|value| value * 2).collect(), (0..1000).map(|value| value * 2 + 1).collect())
}

fn setup_balanced_100000() -> (Vec<i64>, Vec<i64>) {
    ((0..100000).map(|value| value * 2).collect(), (0..100000).map(|value| value * 2 + 1).collect())
}

fn setup_skewed_1000() -> (Vec<i64>, Vec<i64>) {
    (vec![1], (0..1000).map(|value| value * 2).collect())
}

fn setup_skewed_100000() -> (Vec<i64>, Vec<i64>) {
    (vec![1], (0..100000).map(|value| value * 2).collect())
}

#[library_benchmark]
#[bench::with_setup(setup_balanced_1000())]
fn balanced_1000(sequences: (Vec<i64>, Vec<i64>)) -> Result<f64, MedianError> {
    black_box(find_median(black_box(&sequences.0), black_box(&sequences.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_balanced_100000())]
fn balanced_100000(sequences: (Vec<i64>, Vec<i64>)) -> Result<f64, MedianError> {
    black_box(find_median(black_box(&sequences.0), black_box(&sequences.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_skewed_1000())]
fn skewed_1000(sequences: (Vec<i64>, Vec<i64>)) -> Result<f64, MedianError> {
    black_box(find_median(black_box(&sequences.0), black_box(&sequences.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_skewed_100000())]
fn skewed_100000(sequences: (Vec<i64>, Vec<i64>)) -> Result<f64, MedianError> {
    black_box(find_median(black_box(&sequences.0), black_box(&sequences.1)))
}

library_benchmark_group!(
    name = median_group;
    benchmarks = balanced_1000, balanced_100000, skewed_1000, skewed_100000
);

main!(library_benchmark_groups = median_group);
