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

//! Decimal digit arithmetic.
//!
//! Exact integer helpers for reasoning about the decimal representation of
//! a number: how many digits it has, what `10^k` is, and how to divide with
//! rounding towards positive infinity. All fallible operations return `None`
//! instead of wrapping, so callers can turn an unrepresentable intermediate
//! into a proper error.

use crate::num::{
    constants::{PlusOne, Ten, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedSubVal},
};
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Umbrella bound for the integer types the periodic engine works over.
///
/// Blanket-implemented for every primitive integer, signed or unsigned.
pub trait DecimalInt:
    PrimInt
    + Hash
    + Debug
    + Display
    + Zero
    + PlusOne
    + Ten
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedDivVal
    + Send
    + Sync
    + 'static
{
}

impl<T> DecimalInt for T where
    T: PrimInt
        + Hash
        + Debug
        + Display
        + Zero
        + PlusOne
        + Ten
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
        + CheckedDivVal
        + Send
        + Sync
        + 'static
{
}

/// Returns the number of decimal digits of `n`, or `None` if `n` is negative.
///
/// Zero has one digit.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::digits::num_digits;
/// assert_eq!(num_digits(0u64), Some(1));
/// assert_eq!(num_digits(99u64), Some(2));
/// assert_eq!(num_digits(100u64), Some(3));
/// assert_eq!(num_digits(-1i64), None);
/// ```
#[inline]
pub fn num_digits<T>(n: T) -> Option<u32>
where
    T: DecimalInt,
{
    if n < T::ZERO {
        return None;
    }

    let mut rest = n;
    let mut digits = 1;
    while rest >= T::TEN {
        rest = rest / T::TEN;
        digits += 1;
    }
    Some(digits)
}

/// Raises `base` to `exp` by square-and-multiply, returning `None` on overflow.
///
/// The base is only squared while bits of the exponent remain, so a result
/// that fits is never rejected because of an unused intermediate square.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::digits::ipow;
/// assert_eq!(ipow(10u64, 19), Some(10_000_000_000_000_000_000));
/// assert_eq!(ipow(10u64, 20), None);
/// assert_eq!(ipow(7u8, 0), Some(1));
/// ```
#[inline]
pub fn ipow<T>(base: T, exp: u32) -> Option<T>
where
    T: DecimalInt,
{
    let mut result = T::PLUS_ONE;
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul_val(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul_val(base)?;
        }
    }
    Some(result)
}

/// Returns `10^k`, or `None` if it does not fit into `T`.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::digits::pow10;
/// assert_eq!(pow10::<u32>(9), Some(1_000_000_000));
/// assert_eq!(pow10::<u32>(10), None);
/// ```
#[inline]
pub fn pow10<T>(k: u32) -> Option<T>
where
    T: DecimalInt,
{
    ipow(T::TEN, k)
}

/// Divides `numerator` by `denominator`, rounding up.
///
/// Returns `None` if `denominator` is zero. Both operands are expected to be
/// non-negative. Unlike the textbook `(n + d - 1) / d`, this never forms an
/// intermediate larger than `numerator`, so it is safe right up to `T::MAX`.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::digits::ceil_div;
/// assert_eq!(ceil_div(10u64, 3), Some(4));
/// assert_eq!(ceil_div(9u64, 3), Some(3));
/// assert_eq!(ceil_div(u64::MAX, 1), Some(u64::MAX));
/// assert_eq!(ceil_div(1u64, 0), None);
/// ```
#[inline]
pub fn ceil_div<T>(numerator: T, denominator: T) -> Option<T>
where
    T: DecimalInt,
{
    debug_assert!(
        numerator >= T::ZERO && denominator >= T::ZERO,
        "called `ceil_div` with a negative operand: {} / {}",
        numerator,
        denominator
    );

    let quotient = numerator.checked_div_val(denominator)?;
    if quotient * denominator == numerator {
        Some(quotient)
    } else {
        quotient.checked_add_val(T::PLUS_ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_digits_boundaries() {
        let cases: [(u64, u32); 9] = [
            (0, 1),
            (1, 1),
            (9, 1),
            (10, 2),
            (99, 2),
            (100, 3),
            (999_999, 6),
            (1_000_000, 7),
            (u64::MAX, 20),
        ];
        for (n, expected) in cases {
            assert_eq!(num_digits(n), Some(expected), "digits of {n}");
        }
    }

    #[test]
    fn test_num_digits_small_and_signed_types() {
        assert_eq!(num_digits(255u8), Some(3));
        assert_eq!(num_digits(i8::MAX), Some(3));
        assert_eq!(num_digits(-5i32), None);
        assert_eq!(num_digits(i64::MIN), None);
    }

    #[test]
    fn test_ipow_exact_and_overflow() {
        assert_eq!(ipow(2u64, 63), Some(1 << 63));
        assert_eq!(ipow(2u64, 64), None);
        assert_eq!(ipow(100u64, 5), Some(10_000_000_000));
        assert_eq!(ipow(0u32, 0), Some(1));
        assert_eq!(ipow(0u32, 3), Some(0));
        assert_eq!(ipow(-3i32, 3), Some(-27));
    }

    #[test]
    fn test_pow10_largest_representable() {
        assert_eq!(pow10::<u8>(2), Some(100));
        assert_eq!(pow10::<u8>(3), None);
        assert_eq!(pow10::<i64>(18), Some(1_000_000_000_000_000_000));
        assert_eq!(pow10::<i64>(19), None);
        assert_eq!(pow10::<u128>(38), Some(10u128.pow(38)));
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(0u64, 7), Some(0));
        assert_eq!(ceil_div(1u64, 7), Some(1));
        assert_eq!(ceil_div(7u64, 7), Some(1));
        assert_eq!(ceil_div(8u64, 7), Some(2));
        assert_eq!(ceil_div(1_000u64, 111), Some(10));
        assert_eq!(ceil_div(u64::MAX, 2), Some(u64::MAX / 2 + 1));
    }
}
