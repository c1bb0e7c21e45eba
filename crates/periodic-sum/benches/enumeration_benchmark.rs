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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use periodic_core::math::interval::ClosedInterval;
use periodic_model::loading::IntervalLoader;
use periodic_sum::aggregate::{AggregationPolicy, PeriodicSumEngine, QueryOptions};
use periodic_sum::oracle::brute_force_sum;
use std::hint::black_box;
use std::path::{Path, PathBuf};

fn find_data_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("data");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

fn engine(policy: AggregationPolicy) -> PeriodicSumEngine {
    PeriodicSumEngine::new(QueryOptions::new(policy))
}

/// Enumeration against a direct scan on intervals small enough to scan.
fn bench_engine_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_vs_scan");
    let engine = engine(AggregationPolicy::SharedBatch);

    for end in [1_000u64, 100_000, 1_000_000] {
        let interval = ClosedInterval::new(1u64, end);
        group.throughput(Throughput::Elements(end));

        group.bench_with_input(BenchmarkId::new("enumeration", end), &interval, |b, iv| {
            b.iter(|| engine.query(black_box(std::slice::from_ref(iv))).unwrap().total())
        });
        group.bench_with_input(BenchmarkId::new("scan", end), &interval, |b, iv| {
            b.iter(|| brute_force_sum(black_box(iv)).unwrap())
        });
    }
    group.finish();
}

/// Both policies, with and without worker threads, on wide intervals.
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let intervals = [
        ClosedInterval::new(1u64, 1_000_000_000_000),
        ClosedInterval::new(500_000_000_000, 2_000_000_000_000),
    ];

    for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
        for threads in [1usize, 4] {
            let engine = PeriodicSumEngine::new(QueryOptions::new(policy).threads(threads));
            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), threads),
                &intervals,
                |b, ivs| b.iter(|| engine.query(black_box(ivs)).unwrap().total()),
            );
        }
    }
    group.finish();
}

fn bench_data_files(c: &mut Criterion) {
    let Some(dir) = find_data_dir() else {
        eprintln!("No data/ directory found. Skipping benchmark.");
        return;
    };
    let batches = IntervalLoader::<u64>::new()
        .from_path(dir.join("example.txt"))
        .unwrap_or_else(|e| panic!("Failed to load example.txt: {}", e));

    let mut group = c.benchmark_group("data_files");
    for policy in [AggregationPolicy::PerInterval, AggregationPolicy::SharedBatch] {
        let engine = engine(policy);
        group.bench_function(BenchmarkId::new("example", policy), |b| {
            b.iter(|| {
                batches
                    .iter()
                    .map(|batch| engine.query(black_box(batch.intervals())).unwrap().total())
                    .sum::<u64>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_vs_scan, bench_policies, bench_data_files);
criterion_main!(benches);
