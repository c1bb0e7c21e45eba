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

//! Periodic-Sum: distinct periodic integers over closed intervals
//!
//! A non-negative integer is periodic when its decimal form is a block of
//! `p` digits repeated `r >= 2` times (`55`, `6464`, `123123123`). This crate
//! sums such integers over intervals without scanning them: every periodic
//! integer of length `L` with period `p` is `base * K` with
//! `K = 1 + 10^p + ... + 10^(p*(r-1))`, so the bases landing in an interval
//! form one contiguous range obtained by two divisions.
//!
//! Core flow
//! - Validate the intervals (`partition`).
//! - Span the digit lengths they cover and enumerate `(length, period)`
//!   candidates with their multipliers (`candidate`).
//! - Clamp each candidate's base range to the interval (`bounds`).
//! - Offer the produced values to a deduplicating set with a running sum
//!   (`accumulator`). `1111` is produced by both periods 1 and 2.
//! - Reduce per interval or per batch as the caller chooses (`aggregate`).
//!
//! Guarantees
//! - Results are exact and deterministic, independent of the dense-tier size
//!   and of the number of worker threads.
//! - Any overflow of the integer type aborts the whole query with
//!   `PeriodicSumError::Overflow`; nothing wraps or saturates.
//!
//! Module map
//! - `aggregate`: the query engine, its options and aggregation policies.
//! - `accumulator`: two-tier deduplicating accumulator.
//! - `bounds`: repeating multipliers and base ranges.
//! - `candidate`: period candidates per digit length.
//! - `error`: query errors.
//! - `oracle`: direct-scan reference sums for cross-checking.
//! - `partition`: interval validation and digit-length spans.
//! - `result`: query outcomes.
//! - `stats`: enumeration counters.

pub mod accumulator;
pub mod aggregate;
pub mod bounds;
pub mod candidate;
pub mod error;
pub mod oracle;
mod parallel;
pub mod partition;
pub mod result;
pub mod stats;
