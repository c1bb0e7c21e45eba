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

//! Query aggregation.
//!
//! A query runs every period candidate against a sequence of intervals and
//! reduces the produced values to a sum. How deduplication scopes are drawn
//! is an explicit caller decision:
//!
//! - `AggregationPolicy::PerInterval`: one fresh accumulator per interval.
//!   A periodic integer lying in two overlapping intervals is counted once
//!   per interval, so it may appear several times in the total.
//! - `AggregationPolicy::SharedBatch`: one accumulator for the whole batch.
//!   Every periodic integer in the union of the intervals is counted once.
//!
//! The two totals differ whenever intervals overlap on a periodic integer,
//! which is why there is no default policy.

use crate::{
    accumulator::{DEFAULT_DENSE_LIMIT, DedupAccumulator},
    bounds::candidate_values,
    candidate::{PeriodCandidate, period_candidates},
    error::{OverflowError, OverflowStage, PeriodicSumError},
    parallel::accumulate_parallel,
    partition::{batch_digit_length_span, digit_length_span, validate},
    result::QueryOutcome,
    stats::QueryStatistics,
};
use periodic_core::{math::interval::ClosedInterval, num::digits::DecimalInt};
use std::{ops::RangeInclusive, str::FromStr};
use thiserror::Error;

/// How deduplication scopes are drawn across the intervals of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationPolicy {
    /// Fresh deduplication state per interval; per-interval sums are added.
    PerInterval,
    /// One deduplication state shared by all intervals of the batch.
    SharedBatch,
}

impl std::fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerInterval => write!(f, "per-interval"),
            Self::SharedBatch => write!(f, "shared-batch"),
        }
    }
}

/// A string that names no aggregation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregation policy '{0}', expected 'per-interval' or 'shared-batch'")]
pub struct ParsePolicyError(pub String);

impl FromStr for AggregationPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-interval" | "per_interval" => Ok(Self::PerInterval),
            "shared-batch" | "shared_batch" => Ok(Self::SharedBatch),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

/// Options of a periodic sum query.
///
/// # Configuration
/// * `policy`: The aggregation policy. Always chosen by the caller.
/// * `dense_limit`: Number of values tracked by the bitset tier of each
///   accumulator. A performance knob only; results never depend on it.
/// * `threads`: Worker threads per deduplication scope. `1` runs inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    policy: AggregationPolicy,
    dense_limit: usize,
    threads: usize,
}

impl QueryOptions {
    /// Creates options for `policy` with the default dense limit on one thread.
    #[inline]
    pub fn new(policy: AggregationPolicy) -> Self {
        Self {
            policy,
            dense_limit: DEFAULT_DENSE_LIMIT,
            threads: 1,
        }
    }

    /// Sets the dense-tier size of each accumulator.
    #[inline]
    pub fn dense_limit(mut self, dense_limit: usize) -> Self {
        self.dense_limit = dense_limit;
        self
    }

    /// Sets the number of worker threads; zero is treated as one.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Returns the aggregation policy.
    #[inline]
    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Returns the dense-tier size.
    #[inline]
    pub fn get_dense_limit(&self) -> usize {
        self.dense_limit
    }

    /// Returns the number of worker threads.
    #[inline]
    pub fn get_threads(&self) -> usize {
        self.threads
    }
}

/// Sums distinct periodic integers over interval sequences.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// # use periodic_sum::aggregate::{AggregationPolicy, PeriodicSumEngine, QueryOptions};
/// let intervals = [ClosedInterval::new(80u64, 120), ClosedInterval::new(100, 150)];
///
/// let per = PeriodicSumEngine::new(QueryOptions::new(AggregationPolicy::PerInterval));
/// let outcome = per.query(&intervals).unwrap();
/// assert_eq!(outcome.per_interval_sums(), &[298, 111]);
/// assert_eq!(outcome.total(), 409); // 111 counted in both intervals
///
/// let shared = PeriodicSumEngine::new(QueryOptions::new(AggregationPolicy::SharedBatch));
/// assert_eq!(shared.query(&intervals).unwrap().total(), 298); // 111 counted once
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicSumEngine {
    options: QueryOptions,
}

impl PeriodicSumEngine {
    /// Creates an engine running every query with `options`.
    #[inline]
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Returns the query options.
    #[inline]
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Runs one query over `intervals`.
    ///
    /// Every interval is validated before any candidate is generated. Any
    /// overflow aborts the whole query; no partial result is returned.
    pub fn query<T>(
        &self,
        intervals: &[ClosedInterval<T>],
    ) -> Result<QueryOutcome<T>, PeriodicSumError>
    where
        T: DecimalInt,
    {
        let _span = tracing::debug_span!(
            "periodic_sum_query",
            policy = %self.options.policy,
            intervals = intervals.len()
        )
        .entered();

        for interval in intervals {
            validate(interval)?;
        }

        let mut stats = QueryStatistics::default();
        let outcome = match self.options.policy {
            AggregationPolicy::PerInterval => {
                let mut sums = Vec::with_capacity(intervals.len());
                let mut total = T::ZERO;
                for interval in intervals {
                    let lengths = digit_length_span(interval)?;
                    let scope = std::slice::from_ref(interval);
                    let sum = self.accumulate_scope(lengths, scope, &mut stats)?.sum();
                    total = total
                        .checked_add_val(sum)
                        .ok_or(OverflowError::new(OverflowStage::Total))?;
                    sums.push(sum);
                }
                QueryOutcome::per_interval(sums, total, stats)
            }
            AggregationPolicy::SharedBatch => {
                let total = match batch_digit_length_span(intervals)? {
                    Some(lengths) => self.accumulate_scope(lengths, intervals, &mut stats)?.sum(),
                    None => T::ZERO,
                };
                QueryOutcome::shared_batch(total, stats)
            }
        };

        tracing::debug!(
            total = %outcome.total(),
            candidates = outcome.statistics().candidates_generated,
            duplicates = outcome.statistics().duplicates_rejected,
            "periodic sum query finished"
        );
        Ok(outcome)
    }

    /// Returns every distinct periodic integer in the union of `intervals`,
    /// in ascending order. The policy option is ignored.
    pub fn periodic_values<T>(
        &self,
        intervals: &[ClosedInterval<T>],
    ) -> Result<Vec<T>, PeriodicSumError>
    where
        T: DecimalInt,
    {
        for interval in intervals {
            validate(interval)?;
        }
        let Some(lengths) = batch_digit_length_span(intervals)? else {
            return Ok(Vec::new());
        };

        let mut stats = QueryStatistics::default();
        let acc = self.accumulate_scope(lengths, intervals, &mut stats)?;
        let mut values: Vec<T> = acc.values().collect();
        values.sort_unstable();
        Ok(values)
    }

    /// Runs one deduplication scope: every candidate for `lengths` against
    /// every interval in `intervals`, into a single accumulator.
    fn accumulate_scope<T>(
        &self,
        lengths: RangeInclusive<u32>,
        intervals: &[ClosedInterval<T>],
        stats: &mut QueryStatistics,
    ) -> Result<DedupAccumulator<T>, PeriodicSumError>
    where
        T: DecimalInt,
    {
        stats.on_lengths_scanned(u64::from(lengths.end().saturating_sub(*lengths.start()) + 1));
        let candidates = period_candidates::<T>(lengths).collect::<Result<Vec<_>, _>>()?;
        let dense_limit = dense_capacity(self.options.dense_limit, intervals);

        if self.options.threads > 1 && candidates.len() > 1 {
            return accumulate_parallel(
                &candidates,
                intervals,
                dense_limit,
                self.options.threads,
                stats,
            );
        }

        let mut acc = DedupAccumulator::new(dense_limit);
        for candidate in &candidates {
            stats.on_candidate_generated();
            feed_candidate(candidate, intervals, &mut acc, stats)?;
        }
        Ok(acc)
    }
}

/// Offers every value `candidate` produces in each of `intervals` to `acc`.
pub(crate) fn feed_candidate<T>(
    candidate: &PeriodCandidate<T>,
    intervals: &[ClosedInterval<T>],
    acc: &mut DedupAccumulator<T>,
    stats: &mut QueryStatistics,
) -> Result<(), OverflowError>
where
    T: DecimalInt,
{
    for interval in intervals {
        let mut values = candidate_values(*candidate, *interval).peekable();
        if values.peek().is_none() {
            stats.on_range_pruned();
            tracing::trace!(
                length = candidate.length(),
                period = candidate.period(),
                interval = %interval,
                "empty base range"
            );
            continue;
        }

        for value in values {
            let counted = acc
                .offer(value?)
                .map_err(|e| e.with_candidate(candidate.length(), candidate.period()))?;
            stats.on_value_offered(counted);
        }
    }
    Ok(())
}

/// Caps the dense tier at the largest value the scope can produce.
fn dense_capacity<T>(dense_limit: usize, intervals: &[ClosedInterval<T>]) -> usize
where
    T: DecimalInt,
{
    intervals
        .iter()
        .map(ClosedInterval::end)
        .max()
        .and_then(|end| end.to_usize())
        .and_then(|end| end.checked_add(1))
        .map_or(dense_limit, |needed| needed.min(dense_limit))
}

/// Sums periodic integers with a fresh deduplication scope per interval.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// # use periodic_sum::aggregate::sum_per_interval;
/// let outcome = sum_per_interval(&[ClosedInterval::new(1u64, 100)]).unwrap();
/// assert_eq!(outcome.total(), 495);
/// ```
pub fn sum_per_interval<T>(
    intervals: &[ClosedInterval<T>],
) -> Result<QueryOutcome<T>, PeriodicSumError>
where
    T: DecimalInt,
{
    PeriodicSumEngine::new(QueryOptions::new(AggregationPolicy::PerInterval)).query(intervals)
}

/// Sums the distinct periodic integers of the union of `intervals`.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::math::interval::ClosedInterval;
/// # use periodic_sum::aggregate::sum_shared_batch;
/// let outcome = sum_shared_batch(&[ClosedInterval::new(100u64, 1000)]).unwrap();
/// assert_eq!(outcome.total(), 4995);
/// ```
pub fn sum_shared_batch<T>(
    intervals: &[ClosedInterval<T>],
) -> Result<QueryOutcome<T>, PeriodicSumError>
where
    T: DecimalInt,
{
    PeriodicSumEngine::new(QueryOptions::new(AggregationPolicy::SharedBatch)).query(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::brute_force_sum;

    fn iv(a: u64, b: u64) -> ClosedInterval<u64> {
        ClosedInterval::new(a, b)
    }

    fn engine(policy: AggregationPolicy) -> PeriodicSumEngine {
        PeriodicSumEngine::new(QueryOptions::new(policy))
    }

    #[test]
    fn test_single_digit_interval_sums_to_zero() {
        let outcome = sum_per_interval(&[iv(1, 9)]).unwrap();
        assert_eq!(outcome.total(), 0);
        assert_eq!(outcome.per_interval_sums(), &[0]);
        assert_eq!(outcome.statistics().candidates_generated, 0);
    }

    #[test]
    fn test_two_digit_repdigits() {
        assert_eq!(sum_per_interval(&[iv(1, 100)]).unwrap().total(), 495);
    }

    #[test]
    fn test_three_digit_repdigits_exclude_upper_power_of_ten() {
        assert_eq!(sum_shared_batch(&[iv(100, 1000)]).unwrap().total(), 4995);
    }

    #[test]
    fn test_four_digit_range_exercises_deduplication() {
        let outcome = sum_per_interval(&[iv(1000, 10_000)]).unwrap();
        assert_eq!(outcome.total(), brute_force_sum(&iv(1000, 10_000)).unwrap());
        assert_eq!(outcome.total(), 495_405);

        let stats = outcome.statistics();
        // 1111 ..= 9999 are produced by both (4, 1) and (4, 2).
        assert_eq!(stats.duplicates_rejected, 9);
        assert_eq!(stats.values_counted, 90);
    }

    #[test]
    fn test_policy_divergence_on_overlap() {
        let intervals = [iv(80, 120), iv(100, 150)];
        let per = engine(AggregationPolicy::PerInterval).query(&intervals).unwrap();
        let shared = engine(AggregationPolicy::SharedBatch).query(&intervals).unwrap();

        assert_eq!(per.policy(), AggregationPolicy::PerInterval);
        assert_eq!(per.per_interval_sums(), &[88 + 99 + 111, 111]);
        assert_eq!(per.total(), 409);

        assert_eq!(shared.policy(), AggregationPolicy::SharedBatch);
        assert!(shared.per_interval_sums().is_empty());
        assert_eq!(shared.total(), 298);
        assert_eq!(per.total() - shared.total(), 111);
    }

    #[test]
    fn test_policies_agree_on_disjoint_intervals() {
        let intervals = [iv(11, 22), iv(95, 115), iv(998, 1012), iv(222_220, 222_224)];
        let per = sum_per_interval(&intervals).unwrap();
        let shared = sum_shared_batch(&intervals).unwrap();
        assert_eq!(per.total(), shared.total());
    }

    #[test]
    fn test_puzzle_example_batch() {
        let intervals = [
            iv(11, 22),
            iv(95, 115),
            iv(998, 1012),
            iv(1_188_511_880, 1_188_511_890),
            iv(222_220, 222_224),
            iv(1_698_522, 1_698_528),
            iv(446_443, 446_449),
            iv(38_593_856, 38_593_862),
            iv(565_653, 565_659),
            iv(824_824_821, 824_824_827),
            iv(2_121_212_118, 2_121_212_124),
        ];
        assert_eq!(sum_per_interval(&intervals).unwrap().total(), 4_174_379_265);
        assert_eq!(sum_shared_batch(&intervals).unwrap().total(), 4_174_379_265);
    }

    #[test]
    fn test_empty_batch() {
        for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
            let outcome = engine(policy).query::<u64>(&[]).unwrap();
            assert_eq!(outcome.total(), 0);
            assert!(outcome.per_interval_sums().is_empty());
        }
    }

    #[test]
    fn test_query_is_deterministic() {
        let intervals = [iv(1, 123_456), iv(100_000, 200_000)];
        for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
            let first = engine(policy).query(&intervals).unwrap();
            let second = engine(policy).query(&intervals).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_dense_limit_and_threads_do_not_change_results() {
        let intervals = [iv(1, 2_000_000), iv(1_000_000, 3_000_000)];
        for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
            let reference = engine(policy).query(&intervals).unwrap().total();
            for dense_limit in [0usize, 100, 1 << 20, 1 << 24] {
                for threads in [1usize, 4] {
                    let options = QueryOptions::new(policy)
                        .dense_limit(dense_limit)
                        .threads(threads);
                    let total = PeriodicSumEngine::new(options)
                        .query(&intervals)
                        .unwrap()
                        .total();
                    assert_eq!(total, reference, "{policy} dense={dense_limit} threads={threads}");
                }
            }
        }
    }

    #[test]
    fn test_negative_interval_rejected_before_enumeration() {
        let intervals = [ClosedInterval::new(1i64, 100), ClosedInterval::new(-5, 5)];
        for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
            let res = engine(policy).query(&intervals);
            assert!(matches!(res, Err(PeriodicSumError::InvalidInterval(_))));
        }
    }

    #[test]
    fn test_sum_overflow_aborts_query() {
        match sum_shared_batch(&[ClosedInterval::new(100u8, 255)]) {
            Err(PeriodicSumError::Overflow(e)) => {
                assert_eq!(e.stage, OverflowStage::Sum);
                assert_eq!(e.candidate, Some((3, 1)));
            }
            other => panic!("Expected Overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_total_overflow_aborts_per_interval_query() {
        // 222 fits per interval, 444 does not fit the grand total.
        let intervals = [ClosedInterval::new(200u8, 250), ClosedInterval::new(200u8, 250)];
        match sum_per_interval(&intervals) {
            Err(PeriodicSumError::Overflow(e)) => assert_eq!(e.stage, OverflowStage::Total),
            other => panic!("Expected Overflow, got {other:?}"),
        }
        assert_eq!(sum_shared_batch(&intervals).unwrap().total(), 222);
    }

    #[test]
    fn test_intervals_near_u64_max() {
        let top = ClosedInterval::new(u64::MAX - 1_000_000_000, u64::MAX);
        let outcome = sum_shared_batch(&[top]).unwrap();
        let values = engine(AggregationPolicy::SharedBatch).periodic_values(&[top]).unwrap();
        assert!(values.iter().all(|v| top.contains_point(*v)));
        assert_eq!(outcome.statistics().values_counted, values.len() as u64);
    }

    #[test]
    fn test_periodic_values_sorted_and_distinct() {
        let values = engine(AggregationPolicy::PerInterval)
            .periodic_values(&[iv(1000, 1300), iv(1200, 1250)])
            .unwrap();
        assert_eq!(values, vec![1010, 1111, 1212]);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "per-interval".parse::<AggregationPolicy>(),
            Ok(AggregationPolicy::PerInterval)
        );
        assert_eq!(
            "Shared_Batch".parse::<AggregationPolicy>(),
            Ok(AggregationPolicy::SharedBatch)
        );
        assert!("both".parse::<AggregationPolicy>().is_err());
        assert_eq!(AggregationPolicy::SharedBatch.to_string(), "shared-batch");
    }

    #[test]
    fn test_dense_capacity() {
        assert_eq!(dense_capacity(1 << 20, &[iv(1, 99)]), 100);
        assert_eq!(dense_capacity(1 << 20, &[iv(1, 99), iv(5, 5_000_000)]), 1 << 20);
        assert_eq!(dense_capacity::<u64>(64, &[]), 64);
        assert_eq!(dense_capacity(64, &[iv(0, u64::MAX)]), 64);
    }
}
