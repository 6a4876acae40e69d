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

//! Float kernels.
//!
//! Floored semantics on the two float kinds. A zero divisor is fatal and
//! checked first; `-0.0` compares equal to zero and counts. After that,
//! NaN or infinite operands fault unless suppression is on, in which case
//! they flow through IEEE arithmetic untouched. A quotient that becomes
//! infinite from two finite operands is an ordinary rounding outcome and
//! never faults.

use super::KernelFault;
use tandem_core::num::element::FloatElement;

/// Floor division of `a` by `b`.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::kernel::{KernelFault, float::floor_div};
/// assert_eq!(floor_div(7.5f64, 2.0, false), Ok(3.0));
/// assert_eq!(floor_div(-7.0f64, 2.0, false), Ok(-4.0));
/// assert_eq!(floor_div(1.0f64, 0.0, false), Err(KernelFault::ZeroDivision));
/// assert_eq!(floor_div(f64::NAN, 2.0, false), Err(KernelFault::SpecialValue));
/// ```
#[inline(always)]
pub fn floor_div<T: FloatElement>(
    a: T,
    b: T,
    suppress_special_values: bool,
) -> Result<T, KernelFault> {
    if b == T::zero() {
        return Err(KernelFault::ZeroDivision);
    }
    if !suppress_special_values && !(a.is_finite() && b.is_finite()) {
        return Err(KernelFault::SpecialValue);
    }
    Ok((a / b).floor())
}

/// Floored remainder of `a` by `b`, carrying the divisor's sign.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::kernel::float::floor_rem;
/// assert_eq!(floor_rem(7.5f64, 2.0, false), Ok(1.5));
/// assert_eq!(floor_rem(-7.5f64, 2.0, false), Ok(0.5));
/// ```
#[inline(always)]
pub fn floor_rem<T: FloatElement>(
    a: T,
    b: T,
    suppress_special_values: bool,
) -> Result<T, KernelFault> {
    if b == T::zero() {
        return Err(KernelFault::ZeroDivision);
    }
    if !suppress_special_values && !(a.is_finite() && b.is_finite()) {
        return Err(KernelFault::SpecialValue);
    }
    let r = a % b;
    if r != T::zero() && (r < T::zero()) != (b < T::zero()) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
