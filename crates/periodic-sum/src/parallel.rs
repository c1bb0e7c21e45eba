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

//! Parallel accumulation over disjoint candidate groups.
//!
//! Distinct `(length, period)` candidates can produce the same integer, so
//! partial sums from concurrent workers cannot simply be added. Each worker
//! instead fills its own `DedupAccumulator` and the accumulators are merged
//! by set union (`DedupAccumulator::absorb`), which is idempotent and
//! commutative. The merged sum equals the single-threaded one.

use crate::{
    accumulator::DedupAccumulator,
    aggregate::feed_candidate,
    candidate::PeriodCandidate,
    error::{OverflowError, PeriodicSumError},
    stats::QueryStatistics,
};
use periodic_core::{math::interval::ClosedInterval, num::digits::DecimalInt};

type WorkerResult<T> = Result<(DedupAccumulator<T>, QueryStatistics), OverflowError>;

/// Feeds `candidates` into `threads` worker-local accumulators, distributing
/// them round-robin, and merges the results into one accumulator.
pub(crate) fn accumulate_parallel<T>(
    candidates: &[PeriodCandidate<T>],
    intervals: &[ClosedInterval<T>],
    dense_limit: usize,
    threads: usize,
    stats: &mut QueryStatistics,
) -> Result<DedupAccumulator<T>, PeriodicSumError>
where
    T: DecimalInt,
{
    let workers = threads.min(candidates.len()).max(1);
    tracing::debug!(
        workers,
        candidates = candidates.len(),
        "accumulating candidate groups in parallel"
    );

    let results: Vec<WorkerResult<T>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || -> WorkerResult<T> {
                    let mut acc = DedupAccumulator::new(dense_limit);
                    let mut local = QueryStatistics::default();
                    for candidate in candidates.iter().skip(worker).step_by(workers) {
                        local.on_candidate_generated();
                        feed_candidate(candidate, intervals, &mut acc, &mut local)?;
                    }
                    Ok((acc, local))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("periodic sum worker thread panicked"))
            .collect()
    });

    let mut merged: Option<DedupAccumulator<T>> = None;
    let mut scope_stats = QueryStatistics::default();
    for result in results {
        let (acc, local) = result?;
        scope_stats.merge(&local);
        match merged.as_mut() {
            Some(target) => {
                target.absorb(&acc)?;
            }
            None => merged = Some(acc),
        }
    }

    let merged = merged.unwrap_or_else(|| DedupAccumulator::new(dense_limit));
    scope_stats.set_values_counted(merged.len() as u64);
    stats.merge(&scope_stats);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::period_candidates;

    fn candidates(lengths: std::ops::RangeInclusive<u32>) -> Vec<PeriodCandidate<u64>> {
        period_candidates(lengths)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential_sum() {
        let cands = candidates(1..=6);
        let intervals = [ClosedInterval::new(1u64, 999_999)];

        let mut seq = DedupAccumulator::new(1 << 20);
        let mut seq_stats = QueryStatistics::default();
        for c in &cands {
            feed_candidate(c, &intervals, &mut seq, &mut seq_stats).unwrap();
        }

        for threads in [1usize, 2, 3, 8, 64] {
            let mut stats = QueryStatistics::default();
            let par =
                accumulate_parallel(&cands, &intervals, 1 << 20, threads, &mut stats).unwrap();
            assert_eq!(par.sum(), seq.sum(), "threads = {threads}");
            assert_eq!(par.len(), seq.len());
            assert_eq!(stats.values_counted, seq.len() as u64);
            assert_eq!(stats.values_offered, seq_stats.values_offered);
        }
    }

    #[test]
    fn test_parallel_with_no_candidates() {
        let mut stats = QueryStatistics::default();
        let acc = accumulate_parallel::<u64>(&[], &[ClosedInterval::new(1, 9)], 16, 4, &mut stats)
            .unwrap();
        assert!(acc.is_empty());
        assert_eq!(acc.sum(), 0);
    }

    #[test]
    fn test_parallel_propagates_overflow() {
        let cands: Vec<PeriodCandidate<u8>> = period_candidates(3..=3)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut stats = QueryStatistics::default();
        let intervals = [ClosedInterval::new(100u8, 255)];
        let res = accumulate_parallel(&cands, &intervals, 256, 2, &mut stats);
        assert!(matches!(res, Err(PeriodicSumError::Overflow(_))));
    }
}
