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

use core::ops::{Div, Rem};

/// A trait for types that support checked division by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_div`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
/// `None` is returned for a zero divisor and for the single signed overflow
/// case `MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::ops::checked_division::CheckedDivVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_div_val(0), None); // Division by zero
/// assert_eq!(i8::MIN.checked_div_val(-1), None); // Overflow: 128 does not fit in i8
/// assert_eq!(a.checked_div_val(4), Some(25)); // Well-defined quotient
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on a zero
    /// divisor or signed overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked remainder by value (no references).
///
/// `None` is returned for a zero divisor and for `MIN % -1`, which Rust's
/// intrinsic `checked_rem` treats as overflow even though the mathematical
/// result would be zero.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::ops::checked_division::CheckedRemVal;
/// let a: i16 = 10;
/// assert_eq!(a.checked_rem_val(0), None); // Division by zero
/// assert_eq!(i16::MIN.checked_rem_val(-1), None); // Overflow case
/// assert_eq!(a.checked_rem_val(3), Some(1)); // Well-defined remainder
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` on a zero
    /// divisor or signed overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

checked_impl_val!(CheckedDivVal, checked_div_val, u8, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u16, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u32, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u64, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, usize, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u128, checked_div);

checked_impl_val!(CheckedDivVal, checked_div_val, i8, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i16, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i32, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i64, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, isize, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i128, checked_div);

checked_impl_val!(CheckedRemVal, checked_rem_val, u8, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, u16, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, u32, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, u64, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, usize, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, u128, checked_rem);

checked_impl_val!(CheckedRemVal, checked_rem_val, i8, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, i16, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, i32, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, i64, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, isize, checked_rem);
checked_impl_val!(CheckedRemVal, checked_rem_val, i128, checked_rem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_div_val_matches_intrinsics() {
        assert_eq!(42u8.checked_div_val(6), Some(7));
        assert_eq!(42u8.checked_div_val(0), None);
        assert_eq!((-42i64).checked_div_val(5), Some(-8));
        assert_eq!(i32::MIN.checked_div_val(-1), None);
        assert_eq!(i32::MIN.checked_div_val(1), Some(i32::MIN));
    }

    #[test]
    fn test_checked_rem_val_matches_intrinsics() {
        assert_eq!(42u8.checked_rem_val(5), Some(2));
        assert_eq!(42u8.checked_rem_val(0), None);
        assert_eq!((-42i64).checked_rem_val(5), Some(-2));
        assert_eq!(isize::MIN.checked_rem_val(-1), None);
    }
}
