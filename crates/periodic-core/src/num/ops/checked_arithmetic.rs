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

use core::ops::{Add, Div, Mul, Sub};

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::ops::checked_arithmetic::CheckedAddVal;
/// assert_eq!(200u8.checked_add_val(100), None);
/// assert_eq!(200u8.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::ops::checked_arithmetic::CheckedSubVal;
/// assert_eq!(50u8.checked_sub_val(100), None);
/// assert_eq!(50u8.checked_sub_val(20), Some(30));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// This is the operation the enumeration engine leans on hardest: every
/// repeating-block multiplier and every `base * multiplier` product goes
/// through it, so an unrepresentable periodic value surfaces as `None`
/// instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::ops::checked_arithmetic::CheckedMulVal;
/// assert_eq!(20u8.checked_mul_val(10), Some(200));
/// assert_eq!(20u8.checked_mul_val(20), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use periodic_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(100u8.checked_div_val(0), None);
/// assert_eq!(100u8.checked_div_val(4), Some(25));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by zero
    /// (or `MIN / -1` for signed types).
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);
checked_impl_val!(CheckedSubVal, checked_sub_val, checked_sub; u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);
checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);
checked_impl_val!(CheckedDivVal, checked_div_val, checked_div; u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn mul<T: CheckedMulVal>(a: T, b: T) -> Option<T> {
        a.checked_mul_val(b)
    }

    #[test]
    fn test_checked_add_val_bounds() {
        assert_eq!(u64::MAX.checked_add_val(1), None);
        assert_eq!(i32::MIN.checked_add_val(-1), None);
        assert_eq!(7i64.checked_add_val(-3), Some(4));
    }

    #[test]
    fn test_checked_sub_val_bounds() {
        assert_eq!(0u32.checked_sub_val(1), None);
        assert_eq!(i8::MIN.checked_sub_val(1), None);
        assert_eq!(10usize.checked_sub_val(10), Some(0));
    }

    #[test]
    fn test_checked_mul_val_generic() {
        assert_eq!(mul(10_000_000_000u64, 10_000_000_000), None);
        assert_eq!(
            mul(10_000_000_000u64, 1_000_000_000),
            Some(10_000_000_000_000_000_000)
        );
        assert_eq!(mul(1_111_111_111u64, 9), Some(9_999_999_999));
        assert_eq!(mul(-128i16, 2), Some(-256));
        assert_eq!(mul(i8::MIN, -1), None);
    }

    #[test]
    fn test_checked_div_val_zero_and_min() {
        assert_eq!(1u8.checked_div_val(0), None);
        assert_eq!(i64::MIN.checked_div_val(-1), None);
        assert_eq!(9_999u32.checked_div_val(101), Some(99));
    }
}
