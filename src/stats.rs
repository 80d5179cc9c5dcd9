//! Small accumulator utilities over slices of any [`Numeric`] type.
//!
//! Everything here widens into `T::Accumulate` before doing arithmetic, so
//! the same call works for `u8` pixels and `f64` samples without the caller
//! thinking about overflow.

use itertools::Itertools;
use itertools::MinMaxResult::{MinMax, NoElements, OneElement};
use num::{ToPrimitive, Zero};
use rayon::prelude::*;
use std::cmp::Ordering;

use crate::numeric::Numeric;

/// Sum of all values, carried in the accumulator type.
pub fn sum<T: Numeric>(values: &[T]) -> T::Accumulate {
    let mut total = T::Accumulate::zero();
    for &v in values {
        total += v.widen();
    }
    total
}

/// Same as [`sum`], split across the rayon thread pool.
///
/// Integer results match [`sum`] exactly; float results may differ by
/// rounding since the reduction order is unspecified.
pub fn par_sum<T: Numeric>(values: &[T]) -> T::Accumulate {
    values
        .par_iter()
        .map(|&v| v.widen())
        .reduce(|| T::Accumulate::zero(), |a, b| a + b)
}

/// Arithmetic mean as `f64`, or `None` for an empty slice.
pub fn mean<T: Numeric>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total = sum(values).to_f64()?;
    Some(total / values.len() as f64)
}

/// Smallest and largest value, or `None` for an empty slice.
///
/// NaN values compare as equal to everything and so never win either slot.
pub fn bounds<T: Numeric>(values: &[T]) -> Option<(T, T)> {
    let minmax = values
        .iter()
        .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    match minmax {
        NoElements => None,
        OneElement(&v) => Some((v, v)),
        MinMax(&lo, &hi) => Some((lo, hi)),
    }
}

/// Largest magnitude in the slice, or `None` for an empty slice.
pub fn peak<T: Numeric>(values: &[T]) -> Option<T::Abs> {
    values
        .iter()
        .map(|&v| v.abs())
        .reduce(|a, b| if b > a { b } else { a })
}

/// Tally of a slice partitioned by sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignCounts {
    pub negative: usize,
    pub zero: usize,
    pub positive: usize,
}

impl SignCounts {
    pub fn total(&self) -> usize {
        self.negative + self.zero + self.positive
    }
}

/// Count negative, zero and positive values in one pass.
///
/// Float NaN is neither negative nor positive and lands in the zero bucket.
pub fn sign_counts<T: Numeric>(values: &[T]) -> SignCounts {
    let mut counts = SignCounts::default();
    for &v in values {
        if v.is_negative() {
            counts.negative += 1;
        } else if v.is_positive() {
            counts.positive += 1;
        } else {
            counts.zero += 1;
        }
    }
    counts
}

#[test]
fn test_sum_widens_past_element_range() {
    let pixels = [u8::MAX, u8::MAX];
    assert_eq!(sum(&pixels), 510u16);
}

#[test]
fn test_sum_of_bools_counts_true() {
    let mask = [true, false, true, true, false];
    assert_eq!(sum(&mask), 3u8);
}

#[test]
fn test_mean_empty_is_none() {
    assert_eq!(mean::<i32>(&[]), None);
    assert_eq!(bounds::<f64>(&[]), None);
    assert_eq!(peak::<u8>(&[]), None);
}

#[test]
fn test_bounds() {
    let values = [3i16, -7, 0, 12, -1];
    assert_eq!(bounds(&values), Some((-7, 12)));
}

#[test]
fn test_peak_uses_magnitude() {
    let values = [3i8, -100, 12];
    assert_eq!(peak(&values), Some(100u8));
    assert_eq!(peak(&[i8::MIN]), Some(128u8));
}

#[test]
fn test_sign_counts_partition() {
    let values = [-2i32, 0, 5, 5, -1, 0];
    let counts = sign_counts(&values);
    assert_eq!(
        counts,
        SignCounts {
            negative: 2,
            zero: 2,
            positive: 2
        }
    );
    assert_eq!(counts.total(), values.len());
}

#[test]
fn test_sign_counts_unsigned_never_negative() {
    let values = [0u16, 1, u16::MAX];
    let counts = sign_counts(&values);
    assert_eq!(counts.negative, 0);
    assert_eq!(counts.zero, 1);
    assert_eq!(counts.positive, 2);
}
