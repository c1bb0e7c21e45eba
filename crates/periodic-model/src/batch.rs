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

use periodic_core::math::interval::ClosedInterval;
use num_traits::PrimInt;

/// An ordered group of intervals that is queried as one unit.
///
/// The order is the input order; it determines the order of per-interval
/// sums reported by the engine but never the totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalBatch<T>
where
    T: PrimInt,
{
    intervals: Vec<ClosedInterval<T>>,
}

impl<T> Default for IntervalBatch<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<T> IntervalBatch<T>
where
    T: PrimInt,
{
    /// Creates an empty batch.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval to the end of the batch.
    #[inline]
    pub fn push(&mut self, interval: ClosedInterval<T>) {
        self.intervals.push(interval);
    }

    /// Returns the intervals in input order.
    #[inline]
    pub fn intervals(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }

    /// Returns the number of intervals in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the batch holds no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns an iterator over the intervals in input order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ClosedInterval<T>> {
        self.intervals.iter()
    }

    /// Concatenates several batches into one, preserving order.
    ///
    /// Useful when every interval of an input should share a single
    /// deduplication scope regardless of how the text was grouped.
    pub fn concat<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self {
            intervals: batches
                .into_iter()
                .flat_map(|batch| batch.intervals)
                .collect(),
        }
    }
}

impl<T> From<Vec<ClosedInterval<T>>> for IntervalBatch<T>
where
    T: PrimInt,
{
    fn from(intervals: Vec<ClosedInterval<T>>) -> Self {
        Self { intervals }
    }
}

impl<T> FromIterator<ClosedInterval<T>> for IntervalBatch<T>
where
    T: PrimInt,
{
    fn from_iter<I: IntoIterator<Item = ClosedInterval<T>>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<T> AsRef<[ClosedInterval<T>]> for IntervalBatch<T>
where
    T: PrimInt,
{
    fn as_ref(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }
}

impl<'a, T> IntoIterator for &'a IntervalBatch<T>
where
    T: PrimInt,
{
    type Item = &'a ClosedInterval<T>;
    type IntoIter = std::slice::Iter<'a, ClosedInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
