//! Scenario tests for the median of two sorted sequences.

use rstest::rstest;
use sorted_median::prelude::*;

#[rstest]
#[case::single_against_single(&[1], &[2], 1.5)]
#[case::single_against_single_reversed(&[2], &[1], 1.5)]
#[case::odd_total(&[1, 3], &[2], 2.0)]
#[case::disjoint_halves(&[1, 2], &[3, 4], 2.5)]
#[case::worked_example(&[1, 3, 7, 8], &[3, 4], 3.5)]
#[case::empty_against_single(&[], &[1], 1.0)]
#[case::empty_against_pair(&[], &[1, 2], 1.5)]
#[case::interleaved(&[1, 4, 9, 16], &[2, 3, 5, 7, 11], 5.0)]
#[case::all_duplicates(&[5, 5, 5], &[5, 5], 5.0)]
#[case::negative_values(&[-10, -3], &[-7, -1, 0], -3.0)]
fn test_find_median_scenarios(#[case] first: &[i32], #[case] second: &[i32], #[case] expected: f64) {
    assert_eq!(find_median(first, second), Ok(expected));
}

#[rstest]
fn test_argument_order_does_not_matter_for_worked_example() {
    assert_eq!(
        find_median(&[1, 3, 7, 8], &[3, 4]),
        find_median(&[3, 4], &[1, 3, 7, 8])
    );
}

#[rstest]
fn test_both_empty_is_invalid_argument() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(find_median(&empty, &empty), Err(MedianError::EmptyInput));
}

#[rstest]
fn test_subnormal_floats_keep_their_value() {
    let tiny = f64::from_bits(1);
    assert_eq!(find_median(&[tiny], &[tiny]), Ok(tiny));
    assert_eq!(median_of_sorted(&[tiny, tiny]), Ok(tiny));
    assert_eq!(find_median(&[0.0, tiny], &[tiny, tiny]), Ok(tiny));
}

#[rstest]
fn test_float_sequences() {
    assert_eq!(find_median(&[0.5, 1.5], &[1.0]), Ok(1.0));
    assert_eq!(find_median(&[0.25_f32, 0.75], &[0.5, 1.0]), Ok(0.625));
}

#[rstest]
fn test_unsigned_sequences_do_not_overflow() {
    assert_eq!(find_median(&[u64::MAX], &[u64::MAX]), Ok(u64::MAX as f64));
    assert_eq!(find_median(&[0_u8, 255], &[255]), Ok(255.0));
}

#[rstest]
fn test_middle_for_strings() {
    let finder = MedianFinder::new(&["ant", "cat", "eel"], &["bee", "dog"]);
    assert_eq!(finder.middle(), Ok(Middle::Single(&"cat")));

    let finder = MedianFinder::new(&["ant", "cat"], &["bee", "dog"]);
    assert_eq!(finder.middle(), Ok(Middle::Pair(&"bee", &"cat")));
}

#[rstest]
fn test_partition_for_worked_example() {
    let (partition, stats) = MedianFinder::new(&[1, 3, 7, 8], &[3, 4]).partition().unwrap();
    assert_eq!(partition, Partition { cut_a: 1, cut_b: 2 });
    assert_eq!(stats, SearchStats { iterations: 1 });
}

#[rstest]
fn test_skewed_lengths_search_only_the_shorter_sequence() {
    let long: Vec<i64> = (0..1_000_000).map(|value| value * 2).collect();

    let (median, stats) = MedianFinder::new(&long, &[1]).median_with_stats().unwrap();
    assert_eq!(median, 999_998.0);
    assert!(stats.iterations <= 2, "took {} iterations", stats.iterations);

    let short: Vec<i64> = (0..1_000).map(|value| value * 2 + 1).collect();
    let (_, stats) = MedianFinder::new(&long, &short).median_with_stats().unwrap();
    // floor(log2(1001)) + 1
    assert!(stats.iterations <= 10, "took {} iterations", stats.iterations);
}

#[rstest]
fn test_degenerate_pairs_report_no_iterations() {
    let empty: [i32; 0] = [];
    let (median, stats) = MedianFinder::new(&[1, 2, 3, 4], &empty).median_with_stats().unwrap();
    assert_eq!(median, 2.5);
    assert_eq!(stats.iterations, 0);
}

#[rstest]
fn test_inputs_are_left_untouched() {
    let first = vec![9, 10, 11];
    let second = vec![1];
    let before = (first.clone(), second.clone());

    assert_eq!(find_median(&first, &second), Ok(9.5));

    assert_eq!((first, second), before);
}
