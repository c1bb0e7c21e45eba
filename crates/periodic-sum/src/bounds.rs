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

//! Multiplier and bounds calculation.
//!
//! A periodic integer of length `L` and period `p` is `base * K` where `base`
//! is a `p`-digit block and `K = sum_{i < L/p} (10^p)^i` (`1111`, `0101`,
//! `001001`, ...). Intersecting `[start, end]` with the multiples of `K`
//! whose cofactor is a valid block gives every such integer in the interval
//! directly:
//!
//! ```raw
//! low  = max(ceil(start / K), 10^(p-1))
//! high = min(floor(end / K),  10^p - 1)
//! ```
//!
//! The number of values produced is `high - low + 1`, bounded by the block
//! count `9 * 10^(p-1)` and independent of the width of the interval.

use crate::{
    candidate::PeriodCandidate,
    error::{OverflowError, OverflowStage},
};
use periodic_core::{
    math::interval::ClosedInterval,
    num::digits::{DecimalInt, ceil_div, pow10},
};

/// Computes `K = sum_{i < repeats} (10^period)^i` exactly.
///
/// The sum is built by Horner's scheme (`K <- K * 10^p + 1`), so the only
/// intermediate values are prefixes of `K` itself. `None` therefore means
/// that `K` does not fit into `T`, never that a larger closed-form
/// intermediate such as `(10^p)^r` would not.
///
/// # Examples
///
/// ```rust
/// # use periodic_sum::bounds::repeating_multiplier;
/// assert_eq!(repeating_multiplier::<u64>(1, 3), Some(111));
/// assert_eq!(repeating_multiplier::<u64>(2, 2), Some(101));
/// assert_eq!(repeating_multiplier::<u64>(3, 2), Some(1001));
/// assert_eq!(repeating_multiplier::<u8>(1, 4), None);
/// ```
pub fn repeating_multiplier<T>(period: u32, repeats: u32) -> Option<T>
where
    T: DecimalInt,
{
    let block = pow10::<T>(period)?;
    let mut multiplier = T::ZERO;
    for _ in 0..repeats {
        multiplier = multiplier.checked_mul_val(block)?.checked_add_val(T::PLUS_ONE)?;
    }
    Some(multiplier)
}

/// Returns the inclusive range `(10^(p-1), 10^p - 1)` of `p`-digit blocks.
///
/// # Examples
///
/// ```rust
/// # use periodic_sum::bounds::block_range;
/// assert_eq!(block_range::<u32>(1), Some((1, 9)));
/// assert_eq!(block_range::<u32>(3), Some((100, 999)));
/// assert_eq!(block_range::<u8>(3), None);
/// ```
pub fn block_range<T>(period: u32) -> Option<(T, T)>
where
    T: DecimalInt,
{
    debug_assert!(period >= 1, "called `block_range` with period 0");
    let min_base = pow10::<T>(period.checked_sub(1)?)?;
    let max_base = pow10::<T>(period)?.checked_sub_val(T::PLUS_ONE)?;
    Some((min_base, max_base))
}

/// Returns the blocks whose expansion by `candidate` falls into `interval`,
/// or `None` if there are none.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// # use periodic_sum::{bounds::base_range, candidate::PeriodCandidate};
/// let c = PeriodCandidate::<u64>::new(4, 2).unwrap(); // K = 101
/// let bases = base_range(&c, &ClosedInterval::new(1000, 2000)).unwrap();
/// assert_eq!(bases, ClosedInterval::new(10, 19)); // 1010 ..= 1919
/// assert!(base_range(&c, &ClosedInterval::new(1, 999)).is_none());
/// ```
pub fn base_range<T>(
    candidate: &PeriodCandidate<T>,
    interval: &ClosedInterval<T>,
) -> Option<ClosedInterval<T>>
where
    T: DecimalInt,
{
    let k = candidate.multiplier();
    let (min_base, max_base) = candidate.base_bounds();
    debug_assert!(
        k > T::ZERO,
        "candidate multiplier must be positive, got {}",
        k
    );

    let reachable = ClosedInterval::try_new(ceil_div(interval.start(), k)?, interval.end() / k)?;
    reachable.intersection(ClosedInterval::new_unchecked(min_base, max_base))
}

/// Iterates the periodic integers `candidate` produces inside `interval`,
/// in ascending order.
///
/// Each item is `base * K` for one base of [`base_range`]. Every value lies
/// in `interval`, has exactly `candidate.length()` digits, and repeats a
/// `candidate.period()`-digit block. A product that does not fit into `T`
/// yields an `OverflowError` instead of a wrapped value.
pub fn candidate_values<T>(
    candidate: PeriodCandidate<T>,
    interval: ClosedInterval<T>,
) -> impl Iterator<Item = Result<T, OverflowError>>
where
    T: DecimalInt,
{
    let k = candidate.multiplier();
    let (length, period) = (candidate.length(), candidate.period());

    base_range(&candidate, &interval)
        .into_iter()
        .flatten()
        .map(move |base| {
            base.checked_mul_val(k)
                .ok_or(OverflowError::at(OverflowStage::Value, length, period))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_core::num::digits::num_digits;

    fn values(length: u32, period: u32, start: u64, end: u64) -> Vec<u64> {
        let c = PeriodCandidate::new(length, period).unwrap();
        candidate_values(c, ClosedInterval::new(start, end))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_repeating_multiplier_matches_closed_form() {
        for period in 1..=4u32 {
            for repeats in 2..=4u32 {
                let block = 10u64.pow(period);
                let closed = (block.pow(repeats) - 1) / (block - 1);
                assert_eq!(repeating_multiplier::<u64>(period, repeats), Some(closed));
            }
        }
    }

    #[test]
    fn test_repeating_multiplier_beyond_closed_form_intermediate() {
        // (10^10)^2 overflows u64 but K = 10^10 + 1 does not.
        assert_eq!(repeating_multiplier::<u64>(10, 2), Some(10_000_000_001));
    }

    #[test]
    fn test_base_range_clamps_to_block_bounds() {
        let c = PeriodCandidate::<u64>::new(2, 1).unwrap(); // K = 11
        assert_eq!(
            base_range(&c, &ClosedInterval::new(0, 1_000_000)),
            Some(ClosedInterval::new(1, 9))
        );
        assert_eq!(base_range(&c, &ClosedInterval::new(12, 21)), None);
        assert_eq!(
            base_range(&c, &ClosedInterval::new(22, 22)),
            Some(ClosedInterval::new(2, 2))
        );
    }

    #[test]
    fn test_candidate_values_two_digit_repdigits() {
        assert_eq!(values(2, 1, 1, 100), vec![11, 22, 33, 44, 55, 66, 77, 88, 99]);
        assert_eq!(values(2, 1, 95, 115), vec![99]);
        assert!(values(2, 1, 1, 10).is_empty());
    }

    #[test]
    fn test_candidate_values_properties() {
        let c = PeriodCandidate::<u64>::new(6, 3).unwrap();
        let iv = ClosedInterval::new(123_000, 456_789);
        for value in candidate_values(c, iv) {
            let value = value.unwrap();
            assert!(iv.contains_point(value));
            assert_eq!(num_digits(value), Some(6));
            let s = value.to_string();
            assert_eq!(&s[..3], &s[3..]);
        }
    }

    #[test]
    fn test_candidate_values_near_type_max() {
        let c = PeriodCandidate::<u8>::new(2, 1).unwrap();
        assert_eq!(
            candidate_values(c, ClosedInterval::new(90u8, 255))
                .collect::<Result<Vec<_>, _>>()
                .unwrap(),
            vec![99]
        );
        let c = PeriodCandidate::<u8>::new(3, 1).unwrap();
        assert_eq!(
            candidate_values(c, ClosedInterval::new(0u8, u8::MAX))
                .collect::<Result<Vec<_>, _>>()
                .unwrap(),
            vec![111, 222]
        );
    }
}
