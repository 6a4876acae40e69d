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

//! # Operations
//!
//! The operation selector and one free function per operation. Both
//! functions accept any of the six calling shapes and return how many
//! elements were written, or the first fault hit.

use crate::eval;
use tandem_model::{fault::Fault, operand::OperationRequest};

pub use crate::eval::evaluate;

/// The elementwise operations the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Quotient rounded toward negative infinity.
    FloorDivide,
    /// The matching remainder, zero or carrying the divisor's sign.
    Remainder,
}

/// Elementwise floor division.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::ops::floor_divide;
/// # use tandem_model::operand::OperationRequest;
/// let lhs = [7i64, -7, 9];
/// let mut out = [0i64; 3];
/// let request = OperationRequest::new((&lhs[..]).into(), 2i64.into())
///     .output((&mut out[..]).into());
/// let written = floor_divide(request).unwrap();
/// assert_eq!(written, 3);
/// assert_eq!(out, [3, -4, 4]);
/// ```
#[inline]
pub fn floor_divide(request: OperationRequest<'_>) -> Result<usize, Fault> {
    eval::evaluate(BinaryOp::FloorDivide, request)
}

/// Elementwise floored remainder.
///
/// # Examples
///
/// ```rust
/// # use tandem_engine::ops::remainder;
/// # use tandem_model::operand::OperationRequest;
/// let mut data = [7i32, -7, 8];
/// let written = remainder(OperationRequest::new((&mut data[..]).into(), 3i32.into())).unwrap();
/// assert_eq!(written, 3);
/// assert_eq!(data, [1, 2, 2]);
/// ```
#[inline]
pub fn remainder(request: OperationRequest<'_>) -> Result<usize, Fault> {
    eval::evaluate(BinaryOp::Remainder, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_the_wrappers_select_their_operation() {
        let lhs = [7i32, -7];
        let mut q = [0i32; 2];
        let mut r = [0i32; 2];
        floor_divide(
            OperationRequest::new((&lhs[..]).into(), 2i32.into()).output((&mut q[..]).into()),
        )
        .unwrap();
        remainder(
            OperationRequest::new((&lhs[..]).into(), 2i32.into()).output((&mut r[..]).into()),
        )
        .unwrap();
        assert_eq!(q, [3, -4]);
        assert_eq!(r, [1, 1]);
        for i in 0..lhs.len() {
            assert_eq!(q[i] * 2 + r[i], lhs[i]);
        }
    }

    #[test]
    fn test_structural_faults_surface_unchanged() {
        let fault = floor_divide(OperationRequest::new(1i32.into(), 2i32.into())).unwrap_err();
        assert!(matches!(fault, Fault::InvalidRequest { .. }));
    }
}
