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

//! Period candidate generation.
//!
//! For every digit length `L` in a span, every proper divisor `p` of `L`
//! (`1 <= p < L`, `L % p == 0`) is a period a periodic integer of that length
//! may have. `p = L` is never emitted: with a single repeat every integer
//! would trivially qualify.

use crate::{
    bounds::{block_range, repeating_multiplier},
    error::{OverflowError, OverflowStage},
};
use periodic_core::num::digits::DecimalInt;
use std::ops::RangeInclusive;

/// One `(length, period)` pair together with its derived constants.
///
/// # Invariants
///
/// - `period` is a proper divisor of `length`, so `repeats >= 2`.
/// - `multiplier = sum_{i < repeats} (10^period)^i`.
/// - `[min_base, max_base] = [10^(period - 1), 10^period - 1]`, the blocks
///   of exactly `period` digits without a leading zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodCandidate<T> {
    length: u32,
    period: u32,
    repeats: u32,
    multiplier: T,
    min_base: T,
    max_base: T,
}

impl<T> PeriodCandidate<T>
where
    T: DecimalInt,
{
    /// Creates the candidate for `length` digits repeating a `period`-digit block.
    ///
    /// Returns an `OverflowError` if the multiplier or the block bounds do
    /// not fit into `T`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not a proper divisor of `length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_sum::candidate::PeriodCandidate;
    /// let c = PeriodCandidate::<u64>::new(6, 2).unwrap();
    /// assert_eq!(c.repeats(), 3);
    /// assert_eq!(c.multiplier(), 10_101);
    /// assert_eq!(c.base_bounds(), (10, 99));
    /// ```
    pub fn new(length: u32, period: u32) -> Result<Self, OverflowError> {
        assert!(
            period >= 1 && period < length && length % period == 0,
            "called `PeriodCandidate::new` with period {} which is not a proper divisor of \
             length {}",
            period,
            length
        );

        let repeats = length / period;
        let overflow = || OverflowError::at(OverflowStage::Multiplier, length, period);
        let multiplier = repeating_multiplier(period, repeats).ok_or_else(overflow)?;
        let (min_base, max_base) = block_range(period).ok_or_else(overflow)?;

        Ok(Self {
            length,
            period,
            repeats,
            multiplier,
            min_base,
            max_base,
        })
    }

    /// Returns the total digit length `L`.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the block length `p`.
    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Returns the number of repeats `L / p`, always at least 2.
    #[inline]
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Returns the multiplier `K` expanding a block into the full integer.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }

    /// Returns the inclusive range of valid blocks `(10^(p-1), 10^p - 1)`.
    #[inline]
    pub fn base_bounds(&self) -> (T, T) {
        (self.min_base, self.max_base)
    }
}

/// Returns the proper divisors of `length` in ascending order.
///
/// # Examples
///
/// ```rust
/// # use periodic_sum::candidate::proper_divisors;
/// assert_eq!(proper_divisors(6).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(proper_divisors(7).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(proper_divisors(1).count(), 0);
/// ```
#[inline]
pub fn proper_divisors(length: u32) -> impl Iterator<Item = u32> + Clone {
    (1..length).filter(move |p| length % p == 0)
}

/// Enumerates every period candidate for every length in `lengths`.
///
/// Lengths below 2 have no proper divisor and contribute nothing.
pub fn period_candidates<T>(
    lengths: RangeInclusive<u32>,
) -> impl Iterator<Item = Result<PeriodCandidate<T>, OverflowError>>
where
    T: DecimalInt,
{
    lengths.flat_map(|length| {
        proper_divisors(length).map(move |period| PeriodCandidate::new(length, period))
    })
}
