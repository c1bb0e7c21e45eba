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

use crate::{aggregate::AggregationPolicy, stats::QueryStatistics};

/// Result of a periodic sum query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome<T> {
    policy: AggregationPolicy,
    total: T,
    per_interval: Vec<T>,
    statistics: QueryStatistics,
}

impl<T> QueryOutcome<T> {
    /// Outcome of a per-interval query: one sum per input interval, in input
    /// order, and their total.
    #[inline]
    pub fn per_interval(sums: Vec<T>, total: T, statistics: QueryStatistics) -> Self {
        Self {
            policy: AggregationPolicy::PerInterval,
            total,
            per_interval: sums,
            statistics,
        }
    }

    /// Outcome of a shared-batch query: a single deduplicated total.
    #[inline]
    pub fn shared_batch(total: T, statistics: QueryStatistics) -> Self {
        Self {
            policy: AggregationPolicy::SharedBatch,
            total,
            per_interval: Vec::new(),
            statistics,
        }
    }

    /// Returns the policy the query ran under.
    #[inline]
    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Returns the aggregate sum.
    #[inline]
    pub fn total(&self) -> T
    where
        T: Copy,
    {
        self.total
    }

    /// Returns the per-interval sums in input order. Empty for shared-batch queries.
    #[inline]
    pub fn per_interval_sums(&self) -> &[T] {
        &self.per_interval
    }

    /// Returns the query statistics.
    #[inline]
    pub fn statistics(&self) -> &QueryStatistics {
        &self.statistics
    }
}
