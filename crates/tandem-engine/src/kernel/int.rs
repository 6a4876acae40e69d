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

//! Integer kernels.
//!
//! Floored semantics on all ten integer kinds: the quotient rounds toward
//! negative infinity and the remainder is zero or carries the divisor's
//! sign, so `a == q * b + r` holds for every accepted pair. Hardware
//! division truncates toward zero; the kernels correct the truncated
//! result by one step when the operands' signs differ and the division is
//! inexact. On unsigned kinds the sign checks are vacuous and floored and
//! truncated semantics coincide.

use super::KernelFault;
use tandem_core::num::element::IntElement;

/// Floor division of `a` by `b`.
///
/// Rejects a zero divisor and, on signed kinds, the `MIN / -1` pair whose
/// true quotient does not fit.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::kernel::{KernelFault, int::floor_div};
/// assert_eq!(floor_div(7i32, 2), Ok(3));
/// assert_eq!(floor_div(-7i32, 2), Ok(-4));
/// assert_eq!(floor_div(5i32, 0), Err(KernelFault::ZeroDivision));
/// assert_eq!(floor_div(i8::MIN, -1i8), Err(KernelFault::Overflow));
/// ```
#[inline(always)]
pub fn floor_div<T: IntElement>(a: T, b: T) -> Result<T, KernelFault> {
    if b == T::ZERO {
        return Err(KernelFault::ZeroDivision);
    }
    let q = a.checked_div_val(b).ok_or(KernelFault::Overflow)?;
    // b is nonzero and MIN / -1 was rejected above, so `%` cannot trip.
    let r = a % b;
    if r != T::ZERO && (a < T::ZERO) != (b < T::ZERO) {
        // An inexact division implies |b| >= 2, so q - 1 stays in range.
        Ok(q - T::PLUS_ONE)
    } else {
        Ok(q)
    }
}

/// Floored remainder of `a` by `b`: the `r` in `a == floor(a / b) * b + r`.
///
/// Rejects the same pairs as [`floor_div`], including `MIN / -1` whose
/// companion quotient overflows.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::kernel::int::floor_rem;
/// assert_eq!(floor_rem(7i32, 2), Ok(1));
/// assert_eq!(floor_rem(-7i32, 2), Ok(1));
/// assert_eq!(floor_rem(7i32, -2), Ok(-1));
/// ```
#[inline(always)]
pub fn floor_rem<T: IntElement>(a: T, b: T) -> Result<T, KernelFault> {
    if b == T::ZERO {
        return Err(KernelFault::ZeroDivision);
    }
    let r = a.checked_rem_val(b).ok_or(KernelFault::Overflow)?;
    if r != T::ZERO && (r < T::ZERO) != (b < T::ZERO) {
        // r and b have opposite signs and |r| < |b|, so r + b stays in range.
        Ok(r + b)
    } else {
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7i32, 2), Ok(3));
        assert_eq!(floor_div(-7i32, 2), Ok(-4));
        assert_eq!(floor_div(7i32, -2), Ok(-4));
        assert_eq!(floor_div(-7i32, -2), Ok(3));
        assert_eq!(floor_div(-1i32, 2), Ok(-1));
        // Exact division needs no correction in any quadrant.
        assert_eq!(floor_div(6i32, 2), Ok(3));
        assert_eq!(floor_div(-6i32, 2), Ok(-3));
        assert_eq!(floor_div(6i32, -2), Ok(-3));
        assert_eq!(floor_div(-6i32, -2), Ok(3));
    }

    #[test]
    fn test_unsigned_floor_div_is_plain_division() {
        assert_eq!(floor_div(7u8, 2), Ok(3));
        assert_eq!(floor_div(0u64, 5), Ok(0));
        assert_eq!(floor_div(u32::MAX, 1), Ok(u32::MAX));
        assert_eq!(floor_div(1usize, 2), Ok(0));
    }

    #[test]
    fn test_zero_divisor_faults_in_both_families() {
        assert_eq!(floor_div(5i16, 0), Err(KernelFault::ZeroDivision));
        assert_eq!(floor_div(5u16, 0), Err(KernelFault::ZeroDivision));
        assert_eq!(floor_rem(5i16, 0), Err(KernelFault::ZeroDivision));
        assert_eq!(floor_rem(0u16, 0), Err(KernelFault::ZeroDivision));
    }

    #[test]
    fn test_min_over_minus_one_overflows_on_every_signed_kind() {
        assert_eq!(floor_div(i8::MIN, -1i8), Err(KernelFault::Overflow));
        assert_eq!(floor_div(i16::MIN, -1i16), Err(KernelFault::Overflow));
        assert_eq!(floor_div(i32::MIN, -1i32), Err(KernelFault::Overflow));
        assert_eq!(floor_div(i64::MIN, -1i64), Err(KernelFault::Overflow));
        assert_eq!(floor_div(isize::MIN, -1isize), Err(KernelFault::Overflow));
        // MIN over 1 is representable and must pass.
        assert_eq!(floor_div(i8::MIN, 1i8), Ok(i8::MIN));
        assert_eq!(floor_div(i64::MIN, 1i64), Ok(i64::MIN));
    }

    #[test]
    fn test_floor_rem_takes_the_divisor_sign() {
        assert_eq!(floor_rem(7i32, 2), Ok(1));
        assert_eq!(floor_rem(-7i32, 2), Ok(1));
        assert_eq!(floor_rem(7i32, -2), Ok(-1));
        assert_eq!(floor_rem(-7i32, -2), Ok(-1));
        assert_eq!(floor_rem(6i32, -2), Ok(0));
        assert_eq!(floor_rem(7u32, 2), Ok(1));
    }

    #[test]
    fn test_min_rem_minus_one_reports_overflow() {
        // The companion quotient overflows, so the pair is rejected as a
        // whole even though the mathematical remainder is zero.
        assert_eq!(floor_rem(i32::MIN, -1i32), Err(KernelFault::Overflow));
        assert_eq!(floor_rem(i8::MIN, -1i8), Err(KernelFault::Overflow));
    }

    #[test]
    fn test_division_identity_holds_on_a_signed_grid() {
        for a in -20i32..=20 {
            for b in -5i32..=5 {
                if b == 0 {
                    continue;
                }
                let q = floor_div(a, b).unwrap();
                let r = floor_rem(a, b).unwrap();
                assert_eq!(q * b + r, a, "a={} b={}", a, b);
                assert!(r.abs() < b.abs(), "a={} b={}", a, b);
                // The remainder is zero or carries the divisor's sign.
                assert!(r == 0 || (r < 0) == (b < 0), "a={} b={}", a, b);
            }
        }
    }
}
