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

//! Periodic-Sum CLI
//!
//! Reads interval batches from a file (or `-` for stdin) and prints the sum
//! of periodic integers of each batch under the selected aggregation policy.
//!
//! Input: comma separated `start-end` tokens, blank lines between batches,
//! `#` comments to end of line.

use anyhow::{Context, Result};
use clap::Parser;
use periodic_model::{batch::IntervalBatch, loading::IntervalLoader};
use periodic_sum::{
    accumulator::DEFAULT_DENSE_LIMIT,
    aggregate::{AggregationPolicy, PeriodicSumEngine, QueryOptions},
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_subscriber::{EnvFilter, fmt};

/// Sum distinct periodic integers over closed intervals.
#[derive(Parser, Debug)]
#[command(name = "periodic-sum")]
#[command(version)]
#[command(about = "Sum integers whose decimal digits repeat a block at least twice")]
struct Cli {
    /// Input file with interval batches, or `-` for stdin.
    input: PathBuf,

    /// Deduplication scope: `per-interval` or `shared-batch`.
    #[arg(short, long)]
    policy: AggregationPolicy,

    /// Values tracked by the bitset tier of each accumulator.
    #[arg(long, default_value_t = DEFAULT_DENSE_LIMIT)]
    dense_limit: usize,

    /// Worker threads per deduplication scope.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Print the sum of every interval (per-interval policy only).
    #[arg(long)]
    details: bool,

    /// Print enumeration statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_batches(input: &Path) -> Result<Vec<IntervalBatch<u64>>> {
    let loader = IntervalLoader::<u64>::new();
    if input.as_os_str() == "-" {
        loader
            .from_reader(io::stdin().lock())
            .context("failed to read interval batches from stdin")
    } else {
        loader
            .from_path(input)
            .with_context(|| format!("failed to read interval batches from {}", input.display()))
    }
}

fn run(cli: Cli) -> Result<()> {
    let batches = load_batches(&cli.input)?;
    tracing::info!(batches = batches.len(), policy = %cli.policy, "loaded input");

    let options = QueryOptions::new(cli.policy)
        .dense_limit(cli.dense_limit)
        .threads(cli.threads);
    let engine = PeriodicSumEngine::new(options);

    let mut out = io::stdout().lock();
    for (index, batch) in batches.iter().enumerate() {
        let outcome = engine
            .query(batch.intervals())
            .with_context(|| format!("query failed for batch {}", index + 1))?;

        writeln!(out, "{}", outcome.total())?;
        if cli.details {
            for (interval, sum) in batch.iter().zip(outcome.per_interval_sums()) {
                writeln!(out, "  {interval}: {sum}")?;
            }
        }
        if cli.stats {
            eprintln!("batch {}:\n{}", index + 1, outcome.statistics());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
