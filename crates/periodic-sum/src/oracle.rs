// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Reference implementations by direct scan.
//!
//! These walk every integer of an interval and test it for periodicity one
//! by one. They are far too slow for wide intervals and exist to cross-check
//! the candidate enumeration in tests and benchmarks.

use crate::{
    bounds::repeating_multiplier,
    candidate::proper_divisors,
    error::{OverflowError, OverflowStage, PeriodicSumError},
    partition::validate,
};
use periodic_core::{
    math::interval::ClosedInterval,
    num::digits::{DecimalInt, num_digits, pow10},
};
use rustc_hash::FxHashSet;

/// Returns `true` if the decimal form of `n` is a block of digits repeated
/// at least twice, decided on the digit string.
///
/// A string `s` of length `n` is a repetition of a shorter block exactly
/// when `s` occurs in `(s + s)[1..2n - 1]`. No divisor of the length is
/// enumerated, so the result does not depend on how the engine partitions
/// candidates.
///
/// # Examples
///
/// ```rust
/// # use periodic_sum::oracle::is_periodic_brute;
/// assert!(is_periodic_brute(123123u64));
/// assert!(is_periodic_brute(7777u64));
/// assert!(!is_periodic_brute(1231u64));
/// assert!(!is_periodic_brute(7u64));
/// ```
pub fn is_periodic_brute<T>(n: T) -> bool
where
    T: DecimalInt,
{
    if n < T::ZERO {
        return false;
    }
    let digits = n.to_string();
    let doubled = format!("{digits}{digits}");
    doubled[1..doubled.len() - 1].contains(&digits)
}

/// Returns `true` if `n` is periodic, decided arithmetically: `n` is
/// divisible by the repeating multiplier of some proper divisor `p` of its
/// digit length and the quotient has exactly `p` digits.
pub fn is_periodic<T>(n: T) -> bool
where
    T: DecimalInt,
{
    let Some(length) = num_digits(n) else {
        return false;
    };
    proper_divisors(length).any(|period| {
        let Some(k) = repeating_multiplier::<T>(period, length / period) else {
            return false;
        };
        let Some(min_base) = pow10::<T>(period - 1) else {
            return false;
        };
        n % k == T::ZERO && n / k >= min_base
    })
}

/// Sums the periodic integers of `interval` by scanning every member.
pub fn brute_force_sum<T>(interval: &ClosedInterval<T>) -> Result<T, PeriodicSumError>
where
    T: DecimalInt,
{
    validate(interval)?;
    interval
        .iter()
        .filter(|&n| is_periodic_brute(n))
        .try_fold(T::ZERO, |sum, n| {
            sum.checked_add_val(n)
                .ok_or(PeriodicSumError::from(OverflowError::new(OverflowStage::Sum)))
        })
}

/// Sums the distinct periodic integers of the union of `intervals` by
/// scanning every member of every interval.
pub fn brute_force_distinct_sum<T>(intervals: &[ClosedInterval<T>]) -> Result<T, PeriodicSumError>
where
    T: DecimalInt,
{
    for interval in intervals {
        validate(interval)?;
    }

    let mut seen = FxHashSet::default();
    let mut sum = T::ZERO;
    for n in intervals.iter().flat_map(|iv| iv.iter()) {
        if is_periodic_brute(n) && seen.insert(n) {
            sum = sum
                .checked_add_val(n)
                .ok_or(OverflowError::new(OverflowStage::Sum))?;
        }
    }
    Ok(sum)
}
