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

//! Deduplicating accumulator.
//!
//! The same periodic integer is produced by several `(length, period)` pairs
//! (`1111` is both `1 * 1111` and `11 * 101`), so candidate values must be
//! summed as a set, never as a stream. `DedupAccumulator` is the single place
//! where that happens.
//!
//! Membership is split into two tiers by magnitude:
//! - Dense tier: a `FixedBitSet` with one bit per value below `dense_limit`.
//! - Sparse tier: an `FxHashSet` for everything at or above it.
//!
//! The split only trades memory for lookup speed; both tiers deduplicate with
//! identical semantics and the dense limit never changes a result.

use crate::error::{OverflowError, OverflowStage};
use fixedbitset::FixedBitSet;
use num_traits::NumCast;
use periodic_core::num::digits::DecimalInt;
use rustc_hash::FxHashSet;

/// Default number of values tracked by the dense tier (`2^20`).
pub const DEFAULT_DENSE_LIMIT: usize = 1 << 20;

/// Insert-only set of periodic values with a running sum of its members.
#[derive(Debug, Clone)]
pub struct DedupAccumulator<T> {
    dense: FixedBitSet,
    sparse: FxHashSet<T>,
    sum: T,
    len: usize,
}

impl<T> Default for DedupAccumulator<T>
where
    T: DecimalInt,
{
    fn default() -> Self {
        Self::new(DEFAULT_DENSE_LIMIT)
    }
}

impl<T> DedupAccumulator<T>
where
    T: DecimalInt,
{
    /// Creates an empty accumulator whose dense tier covers `[0, dense_limit)`.
    ///
    /// A `dense_limit` of zero disables the dense tier entirely.
    #[inline]
    pub fn new(dense_limit: usize) -> Self {
        Self {
            dense: FixedBitSet::with_capacity(dense_limit),
            sparse: FxHashSet::default(),
            sum: T::ZERO,
            len: 0,
        }
    }

    /// Returns the number of values covered by the dense tier.
    #[inline]
    pub fn dense_limit(&self) -> usize {
        self.dense.len()
    }

    /// Returns the sum of all distinct values offered so far.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Returns the number of distinct values offered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no value has been counted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn dense_index(&self, value: T) -> Option<usize> {
        value.to_usize().filter(|&index| index < self.dense.len())
    }

    /// Returns `true` if `value` has already been counted.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        match self.dense_index(value) {
            Some(index) => self.dense.contains(index),
            None => self.sparse.contains(&value),
        }
    }

    /// Offers a candidate value.
    ///
    /// Returns `Ok(true)` if `value` was new and has been added to the sum,
    /// `Ok(false)` if it was already counted. If adding it would overflow
    /// the running sum, the accumulator is left unchanged and an
    /// `OverflowError` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_sum::accumulator::DedupAccumulator;
    /// let mut acc = DedupAccumulator::<u64>::new(100);
    /// assert_eq!(acc.offer(1111), Ok(true)); // 1 * 1111, sparse tier
    /// assert_eq!(acc.offer(1111), Ok(false)); // 11 * 101, already counted
    /// assert_eq!(acc.offer(99), Ok(true)); // dense tier
    /// assert_eq!(acc.sum(), 1210);
    /// ```
    pub fn offer(&mut self, value: T) -> Result<bool, OverflowError> {
        debug_assert!(
            value >= T::ZERO,
            "called `DedupAccumulator::offer` with negative value {}",
            value
        );

        match self.dense_index(value) {
            Some(index) => {
                if self.dense.contains(index) {
                    return Ok(false);
                }
                self.sum = self.checked_sum(value)?;
                self.dense.insert(index);
            }
            None => {
                if self.sparse.contains(&value) {
                    return Ok(false);
                }
                self.sum = self.checked_sum(value)?;
                self.sparse.insert(value);
            }
        }

        self.len += 1;
        Ok(true)
    }

    #[inline(always)]
    fn checked_sum(&self, value: T) -> Result<T, OverflowError> {
        self.sum
            .checked_add_val(value)
            .ok_or(OverflowError::new(OverflowStage::Sum))
    }

    /// Returns an iterator over all counted values: dense-tier members in
    /// ascending order, followed by sparse-tier members in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.dense
            .ones()
            .filter_map(<T as NumCast>::from)
            .chain(self.sparse.iter().copied())
    }

    /// Merges `other` into `self` as a set union.
    ///
    /// Values present in both are counted once, so absorbing is idempotent
    /// and the final sum does not depend on merge order. Returns the number
    /// of values that were new to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_sum::accumulator::DedupAccumulator;
    /// let mut a = DedupAccumulator::<u64>::new(1 << 10);
    /// let mut b = DedupAccumulator::<u64>::new(0);
    /// a.offer(1111).unwrap();
    /// b.offer(1111).unwrap();
    /// b.offer(1010).unwrap();
    /// assert_eq!(a.absorb(&b), Ok(1));
    /// assert_eq!(a.absorb(&b), Ok(0));
    /// assert_eq!(a.sum(), 2121);
    /// ```
    pub fn absorb(&mut self, other: &Self) -> Result<usize, OverflowError> {
        let mut added = 0;
        for value in other.values() {
            if self.offer(value)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
