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

//! # Periodic Core
//!
//! Numeric foundations and interval primitives shared by the periodic integer
//! crates. Everything here is integer-exact and never touches floating
//! point, so the enumeration engine built on top can reason about overflow
//! explicitly.
//!
//! ## Modules
//!
//! - `math`: The closed interval `[start, end]` type with validation,
//!   point containment, intersection and hull, and point iteration.
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`, `Ten`), by-value
//!   checked and saturating arithmetic traits, and decimal digit helpers
//!   (`num_digits`, `pow10`, `ipow`, `ceil_div`).

pub mod math;
pub mod num;
