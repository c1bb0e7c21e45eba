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

//! Digit-length partitioning.
//!
//! An interval `[start, end]` can only contain integers whose decimal length
//! lies between the length of `start` and the length of `end`. Those lengths
//! are the only ones worth generating period candidates for.

use crate::error::{InvalidIntervalError, PeriodicSumError};
use periodic_core::{
    math::interval::ClosedInterval,
    num::digits::{DecimalInt, num_digits},
};
use std::ops::RangeInclusive;

/// Builds a validated interval, rejecting `start > end` and negative bounds.
///
/// # Examples
///
/// ```rust
/// # use periodic_sum::partition::checked_interval;
/// assert!(checked_interval(11i64, 22).is_ok());
/// assert!(checked_interval(22i64, 11).is_err());
/// assert!(checked_interval(-1i64, 11).is_err());
/// ```
pub fn checked_interval<T>(start: T, end: T) -> Result<ClosedInterval<T>, PeriodicSumError>
where
    T: DecimalInt,
{
    if start < T::ZERO || start > end {
        return Err(InvalidIntervalError::new(start, end).into());
    }
    Ok(ClosedInterval::new_unchecked(start, end))
}

/// Checks that an already ordered interval has non-negative bounds.
#[inline]
pub fn validate<T>(interval: &ClosedInterval<T>) -> Result<(), PeriodicSumError>
where
    T: DecimalInt,
{
    if interval.start() < T::ZERO {
        return Err(InvalidIntervalError::new(interval.start(), interval.end()).into());
    }
    Ok(())
}

/// Returns the span of decimal digit lengths `interval` can contain.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// # use periodic_sum::partition::digit_length_span;
/// assert_eq!(digit_length_span(&ClosedInterval::new(95u64, 1012)).unwrap(), 2..=4);
/// assert_eq!(digit_length_span(&ClosedInterval::new(0u64, 9)).unwrap(), 1..=1);
/// ```
pub fn digit_length_span<T>(
    interval: &ClosedInterval<T>,
) -> Result<RangeInclusive<u32>, PeriodicSumError>
where
    T: DecimalInt,
{
    let invalid = || InvalidIntervalError::new(interval.start(), interval.end());
    let min_len = num_digits(interval.start()).ok_or_else(invalid)?;
    let max_len = num_digits(interval.end()).ok_or_else(invalid)?;
    Ok(min_len..=max_len)
}

/// Returns the span of digit lengths covered by a whole batch, from the
/// smallest start to the largest end, or `None` for an empty batch.
pub fn batch_digit_length_span<T>(
    intervals: &[ClosedInterval<T>],
) -> Result<Option<RangeInclusive<u32>>, PeriodicSumError>
where
    T: DecimalInt,
{
    match ClosedInterval::hull(intervals.iter().copied()) {
        Some(hull) => digit_length_span(&hull).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_length_span_single_length() {
        let span = digit_length_span(&ClosedInterval::new(100u64, 999)).unwrap();
        assert_eq!(span, 3..=3);
    }

    #[test]
    fn test_digit_length_span_crosses_powers_of_ten() {
        let span = digit_length_span(&ClosedInterval::new(1u64, 10_000)).unwrap();
        assert_eq!(span, 1..=5);
    }

    #[test]
    fn test_digit_length_span_rejects_negative_start() {
        let res = digit_length_span(&ClosedInterval::new(-10i32, 10));
        assert!(matches!(res, Err(PeriodicSumError::InvalidInterval(_))));
    }

    #[test]
    fn test_checked_interval() {
        assert_eq!(checked_interval(5u8, 5).unwrap(), ClosedInterval::new(5, 5));
        match checked_interval(9u64, 1) {
            Err(PeriodicSumError::InvalidInterval(e)) => {
                assert_eq!(e.start, "9");
                assert_eq!(e.end, "1");
            }
            other => panic!("Expected InvalidInterval, got {other:?}"),
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&ClosedInterval::new(0i64, 0)).is_ok());
        assert!(validate(&ClosedInterval::new(-1i64, 0)).is_err());
    }

    #[test]
    fn test_batch_digit_length_span() {
        let ivs = [ClosedInterval::new(998u64, 1012), ClosedInterval::new(11, 22)];
        assert_eq!(batch_digit_length_span(&ivs).unwrap(), Some(2..=4));
        assert_eq!(batch_digit_length_span::<u64>(&[]).unwrap(), None);
    }
}
