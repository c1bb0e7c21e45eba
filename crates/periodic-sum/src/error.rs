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

//! Error types of the enumeration engine.
//!
//! A query either succeeds as a whole or fails with one of these errors;
//! partial sums are never reported because they lack the deduplication
//! context of the full query.

use thiserror::Error;

/// The error type for periodic sum queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodicSumError {
    /// An input interval violates `0 <= start <= end`.
    #[error("Invalid interval: {0}")]
    InvalidInterval(#[from] InvalidIntervalError),
    /// An intermediate or final value does not fit into the integer width.
    #[error("Overflow: {0}")]
    Overflow(#[from] OverflowError),
}

/// Details about a rejected interval.
///
/// Bounds are kept in their rendered form so the error type stays
/// independent of the integer width the query ran with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{start}, {end}] must satisfy 0 <= start <= end")]
pub struct InvalidIntervalError {
    /// The rendered start bound.
    pub start: String,
    /// The rendered end bound.
    pub end: String,
}

impl InvalidIntervalError {
    #[inline]
    pub(crate) fn new<T>(start: T, end: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Which computation exceeded the integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OverflowStage {
    /// The repeating-block multiplier or the block bounds `10^(p-1)`, `10^p - 1`.
    #[error("repeating-block multiplier")]
    Multiplier,
    /// A candidate value `base * multiplier`.
    #[error("candidate value")]
    Value,
    /// The running sum of one deduplication scope.
    #[error("running sum")]
    Sum,
    /// The grand total across per-interval sums.
    #[error("grand total")]
    Total,
}

/// Details about an overflow, including the `(length, period)` candidate
/// that was being processed when it happened, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{stage} exceeds the integer width{}", CandidateContext(.candidate))]
pub struct OverflowError {
    /// The computation that overflowed.
    pub stage: OverflowStage,
    /// The `(length, period)` pair being processed.
    pub candidate: Option<(u32, u32)>,
}

impl OverflowError {
    #[inline]
    pub(crate) fn new(stage: OverflowStage) -> Self {
        Self {
            stage,
            candidate: None,
        }
    }

    #[inline]
    pub(crate) fn at(stage: OverflowStage, length: u32, period: u32) -> Self {
        Self {
            stage,
            candidate: Some((length, period)),
        }
    }

    /// Attaches the candidate context unless one is already present.
    #[inline]
    pub(crate) fn with_candidate(self, length: u32, period: u32) -> Self {
        Self {
            candidate: self.candidate.or(Some((length, period))),
            ..self
        }
    }
}

/// Renders the optional `(length, period)` suffix of an overflow message.
struct CandidateContext<'a>(&'a Option<(u32, u32)>);

impl std::fmt::Display for CandidateContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some((length, period)) => write!(f, " (length {}, period {})", length, period),
            None => Ok(()),
        }
    }
}
