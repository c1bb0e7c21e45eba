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

use periodic_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// Counters collected while answering a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStatistics {
    /// Digit lengths scanned, summed over deduplication scopes.
    pub lengths_scanned: u64,
    /// `(length, period)` candidates generated.
    pub candidates_generated: u64,
    /// Candidate/interval pairs whose base range was empty.
    pub ranges_pruned: u64,
    /// Candidate values handed to an accumulator.
    pub values_offered: u64,
    /// Distinct values counted into a sum.
    pub values_counted: u64,
    /// Offered values rejected as already counted.
    pub duplicates_rejected: u64,
}

impl QueryStatistics {
    #[inline]
    pub fn on_lengths_scanned(&mut self, lengths: u64) {
        self.lengths_scanned = self.lengths_scanned.saturating_add_val(lengths);
    }

    #[inline]
    pub fn on_candidate_generated(&mut self) {
        self.candidates_generated = self.candidates_generated.saturating_add_val(1);
    }

    #[inline]
    pub fn on_range_pruned(&mut self) {
        self.ranges_pruned = self.ranges_pruned.saturating_add_val(1);
    }

    /// Records one offered value and whether it was new.
    #[inline]
    pub fn on_value_offered(&mut self, counted: bool) {
        self.values_offered = self.values_offered.saturating_add_val(1);
        if counted {
            self.values_counted = self.values_counted.saturating_add_val(1);
        } else {
            self.duplicates_rejected = self.duplicates_rejected.saturating_add_val(1);
        }
    }

    /// Adds the counters of `other` to `self`.
    pub fn merge(&mut self, other: &Self) {
        self.lengths_scanned = self.lengths_scanned.saturating_add_val(other.lengths_scanned);
        self.candidates_generated = self
            .candidates_generated
            .saturating_add_val(other.candidates_generated);
        self.ranges_pruned = self.ranges_pruned.saturating_add_val(other.ranges_pruned);
        self.values_offered = self.values_offered.saturating_add_val(other.values_offered);
        self.values_counted = self.values_counted.saturating_add_val(other.values_counted);
        self.duplicates_rejected = self
            .duplicates_rejected
            .saturating_add_val(other.duplicates_rejected);
    }

    /// Overrides the distinct count after several local scopes were merged
    /// into one, where per-worker counts overlap.
    #[inline]
    pub fn set_values_counted(&mut self, distinct: u64) {
        self.values_counted = distinct;
        self.duplicates_rejected = self.values_offered.saturating_sub(distinct);
    }
}

impl std::fmt::Display for QueryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Periodic Sum Query Statistics:")?;
        writeln!(f, "  Lengths scanned:      {}", self.lengths_scanned)?;
        writeln!(f, "  Candidates generated: {}", self.candidates_generated)?;
        writeln!(f, "  Ranges pruned:        {}", self.ranges_pruned)?;
        writeln!(f, "  Values offered:       {}", self.values_offered)?;
        writeln!(f, "  Values counted:       {}", self.values_counted)?;
        writeln!(f, "  Duplicates rejected:  {}", self.duplicates_rejected)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_value_offered_splits_counts() {
        let mut stats = QueryStatistics::default();
        stats.on_value_offered(true);
        stats.on_value_offered(false);
        stats.on_value_offered(true);
        assert_eq!(stats.values_offered, 3);
        assert_eq!(stats.values_counted, 2);
        assert_eq!(stats.duplicates_rejected, 1);
    }

    #[test]
    fn test_merge_and_override_distinct() {
        let mut a = QueryStatistics::default();
        a.on_candidate_generated();
        a.on_value_offered(true);
        let mut b = QueryStatistics::default();
        b.on_candidate_generated();
        b.on_range_pruned();
        b.on_value_offered(true);

        a.merge(&b);
        assert_eq!(a.candidates_generated, 2);
        assert_eq!(a.ranges_pruned, 1);
        assert_eq!(a.values_counted, 2);

        // Both workers counted the same value.
        a.set_values_counted(1);
        assert_eq!(a.values_counted, 1);
        assert_eq!(a.duplicates_rejected, 1);
    }

    #[test]
    fn test_saturating_counters() {
        let mut stats = QueryStatistics {
            ranges_pruned: u64::MAX,
            ..Default::default()
        };
        stats.on_range_pruned();
        assert_eq!(stats.ranges_pruned, u64::MAX);
    }
}
