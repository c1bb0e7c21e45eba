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

//! Interval batch loader.
//!
//! Turns the textual interval encoding into validated `IntervalBatch` values.
//! The format is line oriented:
//!
//! ```raw
//! 11-22,95-115,998-1012      # one or more comma-separated start-end tokens
//! 1188511880-1188511890,
//!                            # a blank line ends the current batch
//! 80-120,100-150
//! ```
//!
//! Whitespace around tokens is ignored, empty tokens (for example after a
//! trailing comma) are skipped, and `#` starts a comment that runs to the end
//! of the line. A line holding only a comment neither contributes intervals
//! nor separates batches. Every interval is checked before it is handed out:
//! bounds must parse into `T`, be non-negative, and satisfy `start <= end`.
//! Errors carry the 1-based line number and the offending token.

use crate::batch::IntervalBatch;
use periodic_core::{math::interval::ClosedInterval, num::digits::DecimalInt};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The error type for the interval loading process.
#[derive(Debug, Error)]
pub enum IntervalLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A token did not have the `start-end` shape.
    #[error("Malformed token: {0}")]
    Malformed(#[from] MalformedTokenError),
    /// A bound could not be parsed into the expected numeric type.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseTokenError),
    /// Both bounds parsed but do not form a valid interval.
    #[error("Invalid interval: {0}")]
    Bounds(#[from] IntervalBoundsError),
}

/// A token without a `-` separating its two bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected `start-end`, found '{token}'")]
pub struct MalformedTokenError {
    /// The 1-based line number.
    pub line: usize,
    /// The offending token, trimmed.
    pub token: String,
}

/// Details about a failed bound parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: could not parse '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The 1-based line number.
    pub line: usize,
    /// The bound text that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u64").
    pub type_name: &'static str,
}

/// Why a parsed pair of bounds was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsViolation {
    /// `start > end`.
    Reversed,
    /// One of the bounds is below zero.
    Negative,
}

impl std::fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reversed => write!(f, "start is greater than end"),
            Self::Negative => write!(f, "bounds must be non-negative"),
        }
    }
}

/// Details about an interval whose bounds violate `0 <= start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: '{token}': {violation}")]
pub struct IntervalBoundsError {
    /// The 1-based line number.
    pub line: usize,
    /// The full interval token.
    pub token: String,
    /// The violated constraint.
    pub violation: BoundsViolation,
}

/// A configurable loader for interval batches.
///
/// # Configuration
/// * `keep_empty_batches`: If true, every blank line closes a batch even when
///   no interval was read since the previous one, so runs of blank lines
///   yield empty batches. By default empty batches are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalLoader<T> {
    keep_empty_batches: bool,
    _marker: PhantomData<T>,
}

impl<T> Default for IntervalLoader<T> {
    fn default() -> Self {
        Self {
            keep_empty_batches: false,
            _marker: PhantomData,
        }
    }
}

impl<T> IntervalLoader<T>
where
    T: DecimalInt + FromStr,
{
    /// Creates a new `IntervalLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether blank-line separated empty batches are reported.
    #[inline]
    pub fn keep_empty_batches(mut self, yes: bool) -> Self {
        self.keep_empty_batches = yes;
        self
    }

    /// Loads all batches from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(
        &self,
        rdr: R,
    ) -> Result<Vec<IntervalBatch<T>>, IntervalLoaderError> {
        let mut batches = Vec::new();
        let mut current = IntervalBatch::new();

        for (index, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            if line.trim().is_empty() {
                if !current.is_empty() || self.keep_empty_batches {
                    batches.push(std::mem::take(&mut current));
                }
                continue;
            }

            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };

            for token in content.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                current.push(parse_interval(token, line_no)?);
            }
        }

        if !current.is_empty() {
            batches.push(current);
        }

        tracing::debug!(
            batches = batches.len(),
            intervals = batches.iter().map(IntervalBatch::len).sum::<usize>(),
            "loaded interval batches"
        );

        Ok(batches)
    }

    /// Loads all batches from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<IntervalBatch<T>>, IntervalLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads all batches from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<IntervalBatch<T>>, IntervalLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads all batches from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<IntervalBatch<T>>, IntervalLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Parses one `start-end` token into a validated interval.
///
/// The separator search starts after the first character so that a leading
/// minus sign is read as part of the start bound and rejected as negative
/// instead of being mistaken for the separator.
fn parse_interval<T>(token: &str, line: usize) -> Result<ClosedInterval<T>, IntervalLoaderError>
where
    T: DecimalInt + FromStr,
{
    let split = token
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(pos, _)| (&token[..pos], &token[pos + 1..]));

    let Some((start, end)) = split else {
        return Err(MalformedTokenError {
            line,
            token: token.to_owned(),
        }
        .into());
    };

    let start: T = parse_bound(start.trim(), line)?;
    let end: T = parse_bound(end.trim(), line)?;

    let violation = if start < T::ZERO || end < T::ZERO {
        Some(BoundsViolation::Negative)
    } else if start > end {
        Some(BoundsViolation::Reversed)
    } else {
        None
    };

    match violation {
        Some(violation) => Err(IntervalBoundsError {
            line,
            token: token.to_owned(),
            violation,
        }
        .into()),
        None => Ok(ClosedInterval::new_unchecked(start, end)),
    }
}

fn parse_bound<T>(text: &str, line: usize) -> Result<T, ParseTokenError>
where
    T: FromStr,
{
    text.parse::<T>().map_err(|_| ParseTokenError {
        line,
        token: text.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}
