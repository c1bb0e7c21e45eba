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

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// A closed interval `[start, end]` where both bounds are inclusive.
///
/// # Invariants
///
/// `start` must always be less than or equal to `end`, so an interval is
/// never empty: the smallest one, `[x, x]`, contains exactly `x`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// The iterator tracks exhaustion explicitly so that intervals ending at
/// `T::max_value()` terminate without overflowing.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// let iv = ClosedInterval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        self.back
            .checked_sub(&self.front)
            .and_then(|d| d.to_usize())
            .and_then(|d| d.checked_add(1))
            .expect("ClosedIntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: PrimInt {}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(95, 115);
    /// assert_eq!(iv.len(), Some(21));
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if `start <= end`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_core::math::interval::ClosedInterval;
    /// assert!(ClosedInterval::try_new(10, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 9).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking the invariant in release builds.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns the common part of both intervals, or `None` if they are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(80, 120);
    /// let b = ClosedInterval::new(100, 150);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(100, 120)));
    /// assert_eq!(a.intersection(ClosedInterval::new(121, 130)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);
        Self::try_new(start, end)
    }

    /// Returns the smallest interval covering every interval in `intervals`,
    /// or `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periodic_core::math::interval::ClosedInterval;
    /// let hull = ClosedInterval::hull([ClosedInterval::new(5, 9), ClosedInterval::new(1, 3)]);
    /// assert_eq!(hull, Some(ClosedInterval::new(1, 9)));
    /// ```
    pub fn hull<I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        intervals.into_iter().reduce(|acc, iv| {
            Self::new_unchecked(min(acc.start, iv.start), max(acc.end, iv.end))
        })
    }

    /// Returns the number of points in the interval (`end - start + 1`), or
    /// `None` if that count does not fit into `T`.
    #[inline]
    pub fn len(&self) -> Option<T> {
        self.end.checked_sub(&self.start)?.checked_add(&T::one())
    }

    /// Returns an iterator over every point of the interval.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(1, 100);
        assert_eq!(iv.start(), 1);
        assert_eq!(iv.end(), 100);
        assert_eq!(iv.len(), Some(100));
    }

    #[test]
    fn test_construction_single_point() {
        let iv = ClosedInterval::new(7u32, 7);
        assert_eq!(iv.len(), Some(1));
        assert!(iv.contains_point(7));
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(0, 0).is_some());
        assert!(ClosedInterval::try_new(-5, 5).is_some());
        assert!(ClosedInterval::try_new(6, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_len_overflow() {
        let full = ClosedInterval::new(u8::MIN, u8::MAX);
        assert_eq!(full.len(), None);
        assert_eq!(ClosedInterval::new(1u8, 255).len(), Some(255));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(80, 120);
        let b = ClosedInterval::new(100, 150);
        assert_eq!(a.intersection(b), Some(ClosedInterval::new(100, 120)));
        assert_eq!(b.intersection(a), Some(ClosedInterval::new(100, 120)));
        assert_eq!(
            a.intersection(ClosedInterval::new(120, 200)),
            Some(ClosedInterval::new(120, 120))
        );
        assert_eq!(a.intersection(ClosedInterval::new(121, 200)), None);
    }

    #[test]
    fn test_hull() {
        let ivs = [
            ClosedInterval::new(100, 150),
            ClosedInterval::new(80, 120),
            ClosedInterval::new(998, 1012),
        ];
        assert_eq!(ClosedInterval::hull(ivs), Some(ClosedInterval::new(80, 1012)));
        assert_eq!(ClosedInterval::<u64>::hull([]), None);
    }

    #[test]
    fn test_iterator_includes_end() {
        let collected: Vec<i32> = ClosedInterval::new(1, 4).iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iterator_at_type_max() {
        let iv = ClosedInterval::new(253u8, 255);
        let collected: Vec<u8> = iv.into_iter().collect();
        assert_eq!(collected, vec![253, 254, 255]);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut iter = ClosedInterval::new(1, 4).iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = ClosedInterval::new(11, 22);
        assert_eq!(format!("{}", a), "[11, 22]");
        assert_eq!(format!("{:?}", a), "ClosedInterval { start: 11, end: 22 }");
    }
}
