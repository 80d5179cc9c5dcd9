use num_light::numeric::Numeric;
use num_light::stats;

use rand::prelude::*;
use rand_distr::Normal;

#[test]
fn test_par_sum_matches_sum_for_integers() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let values: Vec<i32> = (0..100_000).map(|_| rng.gen()).collect();
    assert_eq!(stats::par_sum(&values), stats::sum(&values));

    let pixels: Vec<u8> = (0..100_000).map(|_| rng.gen()).collect();
    // u8 sums overflow u16 at this length, so accumulate chunk-wise within
    // the guaranteed headroom and compare totals in u64
    let total: u64 = pixels
        .chunks(2)
        .map(|chunk| u64::from(stats::sum(chunk)))
        .sum();
    let expected: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
    assert_eq!(total, expected);
}

#[test]
fn test_sum_is_exact_at_the_accumulator_edge() {
    assert_eq!(stats::sum(&[u8::MAX, u8::MAX]), 510u16);
    assert_eq!(stats::sum(&[i8::MIN, i8::MIN]), -256i16);
    assert_eq!(stats::par_sum(&[u16::MAX, u16::MAX]), 131_070u32);
}

#[test]
fn test_mean_of_seeded_normal_samples() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let normal = Normal::new(5.0, 2.0).unwrap();
    let samples: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();
    let mean = stats::mean(&samples).unwrap();
    assert!((mean - 5.0).abs() < 0.1, "mean={mean}");
}

#[test]
fn test_mean_of_narrow_integers() {
    let values = [10u8, 20, 30, 40];
    assert_eq!(stats::mean(&values), Some(25.0));
}

#[test]
fn test_bounds_and_peak_on_sampled_data() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut values: Vec<i16> = (0..1_000).map(|_| rng.gen()).collect();
    values.push(i16::MIN);
    values.push(i16::MAX);
    let (lo, hi) = stats::bounds(&values).unwrap();
    assert_eq!(lo, i16::MIN);
    assert_eq!(hi, i16::MAX);
    // |MIN| beats |MAX| in two's complement
    assert_eq!(stats::peak(&values), Some(32_768u16));
}

#[test]
fn test_sign_counts_against_predicates() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let values: Vec<i64> = (0..10_000).map(|_| rng.gen()).collect();
    let counts = stats::sign_counts(&values);
    assert_eq!(counts.total(), values.len());
    let negatives = values.iter().filter(|&&v| Numeric::is_negative(v)).count();
    assert_eq!(counts.negative, negatives);
}

#[test]
fn test_bool_masks_accumulate_as_counts() {
    let mask = [true, true, false, true];
    assert_eq!(stats::sum(&mask), 3u8);
    let counts = stats::sign_counts(&mask);
    assert_eq!(counts.positive, 3);
    assert_eq!(counts.zero, 1);
    assert_eq!(counts.negative, 0);
}
