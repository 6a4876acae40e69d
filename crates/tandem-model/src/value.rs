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

//! # Kinded Scalar Values
//!
//! [`ElementValue`] carries one scalar of any supported element kind. It is
//! how scalar operands enter an operation request before the engine knows
//! which typed kernel will run, and how integer kind limits are reported.
//!
//! The interesting part is [`ElementValue::coerce`]: a scalar operand may
//! be supplied in a wider or different kind than the buffers it meets, and
//! coercion decides whether it can participate without changing its
//! mathematical value beyond well-defined rounding.

use crate::kind::ElementKind;
use num_traits::ToPrimitive;
use std::fmt;

/// A scalar tagged with its element kind.
///
/// # Examples
///
/// ```rust
/// # use tandem_model::{kind::ElementKind, value::ElementValue};
/// let value = ElementValue::from(-7i32);
/// assert_eq!(value.kind(), ElementKind::I32);
/// assert_eq!(value.to_string(), "-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementValue {
    /// An `i8` scalar.
    I8(i8),
    /// An `i16` scalar.
    I16(i16),
    /// An `i32` scalar.
    I32(i32),
    /// An `i64` scalar.
    I64(i64),
    /// An `isize` scalar.
    Int(isize),
    /// A `u8` scalar.
    U8(u8),
    /// A `u16` scalar.
    U16(u16),
    /// A `u32` scalar.
    U32(u32),
    /// A `u64` scalar.
    U64(u64),
    /// A `usize` scalar.
    UInt(usize),
    /// An `f32` scalar.
    F32(f32),
    /// An `f64` scalar.
    F64(f64),
}

impl ElementValue {
    /// Returns the kind of this scalar.
    #[inline]
    pub fn kind(self) -> ElementKind {
        match self {
            ElementValue::I8(_) => ElementKind::I8,
            ElementValue::I16(_) => ElementKind::I16,
            ElementValue::I32(_) => ElementKind::I32,
            ElementValue::I64(_) => ElementKind::I64,
            ElementValue::Int(_) => ElementKind::Int,
            ElementValue::U8(_) => ElementKind::U8,
            ElementValue::U16(_) => ElementKind::U16,
            ElementValue::U32(_) => ElementKind::U32,
            ElementValue::U64(_) => ElementKind::U64,
            ElementValue::UInt(_) => ElementKind::UInt,
            ElementValue::F32(_) => ElementKind::F32,
            ElementValue::F64(_) => ElementKind::F64,
        }
    }

    /// Re-expresses this scalar in `target`, or returns `None` if the value
    /// cannot participate in a call of that kind.
    ///
    /// The rules:
    ///
    /// - Same kind: always succeeds.
    /// - Integer to integer: succeeds iff the value is within the target's
    ///   range; the value itself never changes.
    /// - Integer to float: always succeeds, rounding to the nearest
    ///   representable float.
    /// - Float to float: succeeds with rounding; widening is exact, and a
    ///   narrowing overflow yields an infinity (which the float kernels
    ///   then treat under the special-value policy).
    /// - Float to integer: succeeds only for finite values with a zero
    ///   fractional part that fit the target's range. NaN and infinities
    ///   never coerce to an integer kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_model::{kind::ElementKind, value::ElementValue};
    /// let two = ElementValue::from(2i64);
    /// assert_eq!(two.coerce(ElementKind::I8), Some(ElementValue::I8(2)));
    /// assert_eq!(two.coerce(ElementKind::F64), Some(ElementValue::F64(2.0)));
    /// assert_eq!(ElementValue::from(300i64).coerce(ElementKind::I8), None);
    /// assert_eq!(ElementValue::from(-1i32).coerce(ElementKind::U32), None);
    /// assert_eq!(ElementValue::from(2.5f64).coerce(ElementKind::I32), None);
    /// assert_eq!(
    ///     ElementValue::from(2.0f64).coerce(ElementKind::I32),
    ///     Some(ElementValue::I32(2))
    /// );
    /// assert_eq!(ElementValue::from(f64::NAN).coerce(ElementKind::I64), None);
    /// ```
    pub fn coerce(self, target: ElementKind) -> Option<ElementValue> {
        if self.kind() == target {
            return Some(self);
        }
        match self {
            ElementValue::I8(v) => coerce_from_int(v as i128, target),
            ElementValue::I16(v) => coerce_from_int(v as i128, target),
            ElementValue::I32(v) => coerce_from_int(v as i128, target),
            ElementValue::I64(v) => coerce_from_int(v as i128, target),
            ElementValue::Int(v) => coerce_from_int(v as i128, target),
            ElementValue::U8(v) => coerce_from_int(v as i128, target),
            ElementValue::U16(v) => coerce_from_int(v as i128, target),
            ElementValue::U32(v) => coerce_from_int(v as i128, target),
            ElementValue::U64(v) => coerce_from_int(v as i128, target),
            ElementValue::UInt(v) => coerce_from_int(v as i128, target),
            ElementValue::F32(v) => coerce_from_float(v as f64, target),
            ElementValue::F64(v) => coerce_from_float(v, target),
        }
    }
}

/// Places an integer, widened to `i128`, into `target` if it fits.
///
/// Every supported integer kind embeds losslessly into `i128`, so a single
/// range check covers all source/target pairs.
fn coerce_from_int(value: i128, target: ElementKind) -> Option<ElementValue> {
    match target {
        ElementKind::I8 => i8::try_from(value).ok().map(ElementValue::I8),
        ElementKind::I16 => i16::try_from(value).ok().map(ElementValue::I16),
        ElementKind::I32 => i32::try_from(value).ok().map(ElementValue::I32),
        ElementKind::I64 => i64::try_from(value).ok().map(ElementValue::I64),
        ElementKind::Int => isize::try_from(value).ok().map(ElementValue::Int),
        ElementKind::U8 => u8::try_from(value).ok().map(ElementValue::U8),
        ElementKind::U16 => u16::try_from(value).ok().map(ElementValue::U16),
        ElementKind::U32 => u32::try_from(value).ok().map(ElementValue::U32),
        ElementKind::U64 => u64::try_from(value).ok().map(ElementValue::U64),
        ElementKind::UInt => usize::try_from(value).ok().map(ElementValue::UInt),
        ElementKind::F32 => Some(ElementValue::F32(value as f32)),
        ElementKind::F64 => Some(ElementValue::F64(value as f64)),
    }
}

/// Places a float, widened to `f64`, into `target`.
///
/// Integer targets demand a finite, integral, in-range value. Note that the
/// integrality test alone would admit huge floats (every float at or above
/// 2^52 is integral), so the range check via `to_i128` is load-bearing.
fn coerce_from_float(value: f64, target: ElementKind) -> Option<ElementValue> {
    match target {
        ElementKind::F32 => Some(ElementValue::F32(value as f32)),
        ElementKind::F64 => Some(ElementValue::F64(value)),
        _ => {
            if !value.is_finite() || value.fract() != 0.0 {
                return None;
            }
            coerce_from_int(value.to_i128()?, target)
        }
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::I8(v) => write!(f, "{}", v),
            ElementValue::I16(v) => write!(f, "{}", v),
            ElementValue::I32(v) => write!(f, "{}", v),
            ElementValue::I64(v) => write!(f, "{}", v),
            ElementValue::Int(v) => write!(f, "{}", v),
            ElementValue::U8(v) => write!(f, "{}", v),
            ElementValue::U16(v) => write!(f, "{}", v),
            ElementValue::U32(v) => write!(f, "{}", v),
            ElementValue::U64(v) => write!(f, "{}", v),
            ElementValue::UInt(v) => write!(f, "{}", v),
            ElementValue::F32(v) => write!(f, "{}", v),
            ElementValue::F64(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_value_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for ElementValue {
            #[inline]
            fn from(value: $t) -> Self {
                ElementValue::$variant(value)
            }
        }
    };
}

impl_value_from!(i8, I8);
impl_value_from!(i16, I16);
impl_value_from!(i32, I32);
impl_value_from!(i64, I64);
impl_value_from!(isize, Int);
impl_value_from!(u8, U8);
impl_value_from!(u16, U16);
impl_value_from!(u32, U32);
impl_value_from!(u64, U64);
impl_value_from!(usize, UInt);
impl_value_from!(f32, F32);
impl_value_from!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_the_constructor() {
        assert_eq!(ElementValue::from(1i8).kind(), ElementKind::I8);
        assert_eq!(ElementValue::from(1u64).kind(), ElementKind::U64);
        assert_eq!(ElementValue::from(1usize).kind(), ElementKind::UInt);
        assert_eq!(ElementValue::from(1.0f32).kind(), ElementKind::F32);
    }

    #[test]
    fn test_same_kind_coercion_is_identity() {
        for value in [
            ElementValue::from(i64::MIN),
            ElementValue::from(u8::MAX),
            ElementValue::from(f64::NAN),
        ] {
            let coerced = value.coerce(value.kind()).unwrap();
            assert_eq!(coerced.kind(), value.kind());
        }
        // NaN never equals itself, so check the identity case structurally.
        match ElementValue::from(f32::NAN).coerce(ElementKind::F32) {
            Some(ElementValue::F32(v)) => assert!(v.is_nan()),
            other => panic!("unexpected coercion result: {:?}", other),
        }
    }

    #[test]
    fn integer_to_integer_respects_ranges() {
        assert_eq!(
            ElementValue::from(127i64).coerce(ElementKind::I8),
            Some(ElementValue::I8(127))
        );
        assert_eq!(ElementValue::from(128i64).coerce(ElementKind::I8), None);
        assert_eq!(
            ElementValue::from(-128i64).coerce(ElementKind::I8),
            Some(ElementValue::I8(-128))
        );
        assert_eq!(ElementValue::from(-129i64).coerce(ElementKind::I8), None);
        assert_eq!(ElementValue::from(-1i8).coerce(ElementKind::U64), None);
        assert_eq!(ElementValue::from(u64::MAX).coerce(ElementKind::I64), None);
        assert_eq!(
            ElementValue::from(u64::MAX).coerce(ElementKind::UInt),
            usize::try_from(u64::MAX)
                .ok()
                .map(|v| ElementValue::UInt(v))
        );
        assert_eq!(
            ElementValue::from(255u16).coerce(ElementKind::U8),
            Some(ElementValue::U8(255))
        );
        assert_eq!(ElementValue::from(256u16).coerce(ElementKind::U8), None);
    }

    #[test]
    fn integer_to_float_always_succeeds_with_rounding() {
        assert_eq!(
            ElementValue::from(3i32).coerce(ElementKind::F32),
            Some(ElementValue::F32(3.0))
        );
        // 2^53 + 1 is not representable in f64; nearest-even rounds down.
        let big = (1i64 << 53) + 1;
        assert_eq!(
            ElementValue::from(big).coerce(ElementKind::F64),
            Some(ElementValue::F64((1i64 << 53) as f64))
        );
    }

    #[test]
    fn float_to_integer_requires_finite_integral_in_range() {
        assert_eq!(
            ElementValue::from(-3.0f64).coerce(ElementKind::I16),
            Some(ElementValue::I16(-3))
        );
        assert_eq!(ElementValue::from(-3.5f64).coerce(ElementKind::I16), None);
        assert_eq!(ElementValue::from(f64::NAN).coerce(ElementKind::I16), None);
        assert_eq!(
            ElementValue::from(f64::INFINITY).coerce(ElementKind::U64),
            None
        );
        // Huge floats are integral (fract() == 0) but out of range.
        assert_eq!(ElementValue::from(1e300f64).coerce(ElementKind::I64), None);
        // 2^63 is one past i64::MAX.
        assert_eq!(
            ElementValue::from(9_223_372_036_854_775_808.0f64).coerce(ElementKind::I64),
            None
        );
        assert_eq!(
            ElementValue::from(-0.0f64).coerce(ElementKind::I32),
            Some(ElementValue::I32(0))
        );
    }

    #[test]
    fn test_float_to_float_narrowing_may_overflow_to_infinity() {
        assert_eq!(
            ElementValue::from(1.5f32).coerce(ElementKind::F64),
            Some(ElementValue::F64(1.5))
        );
        assert_eq!(
            ElementValue::from(1e300f64).coerce(ElementKind::F32),
            Some(ElementValue::F32(f32::INFINITY))
        );
    }

    #[test]
    fn test_display_prints_the_raw_scalar() {
        assert_eq!(ElementValue::from(-42i16).to_string(), "-42");
        assert_eq!(ElementValue::from(2.5f64).to_string(), "2.5");
        assert_eq!(ElementValue::from(f32::NAN).to_string(), "NaN");
    }
}
