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

//! # Dispatch and Drive
//!
//! [`evaluate`] resolves a request to its dominant element kind, lowers it
//! through the shape rules, and drives the matching kernel across the
//! active range. The drive loop is generic over the element type and the
//! kernel closure; each of the twelve kinds monomorphizes to a tight
//! indexed loop with no per-element branching beyond the kernel's own
//! guards.
//!
//! Elements are committed left to right. The first faulting pair stops
//! the loop with the fault's index attached; everything before it has
//! been written, everything at and after it keeps its prior bits.

use crate::{
    kernel::{self, KernelFault},
    ops::BinaryOp,
    shape::{self, Side, TypedCall},
};
use tandem_core::num::element::{FloatElement, IntElement};
use tandem_model::{buffer::Element, fault::Fault, kind::ElementKind, operand::OperationRequest};

#[inline(always)]
fn read<T: Copy>(side: Side<'_, T>, target: &[T], i: usize) -> T {
    match side {
        Side::Scalar(v) => v,
        Side::Slice(s) => s[i],
        Side::Target => target[i],
    }
}

/// Runs `kernel` over the active range, committing results left to right.
fn drive<T, F>(call: TypedCall<'_, T>, mut kernel: F) -> Result<usize, Fault>
where
    T: Element,
    F: FnMut(T, T) -> Result<T, KernelFault>,
{
    let TypedCall {
        target,
        lhs,
        rhs,
        active,
        ..
    } = call;
    debug_assert!(active <= target.len());
    if let Side::Slice(s) = lhs {
        debug_assert!(active <= s.len());
    }
    if let Side::Slice(s) = rhs {
        debug_assert!(active <= s.len());
    }
    for i in 0..active {
        let a = read(lhs, target, i);
        let b = read(rhs, target, i);
        target[i] = kernel(a, b).map_err(|fault| fault.at(i))?;
    }
    Ok(active)
}

fn run_int<T: Element + IntElement>(
    op: BinaryOp,
    request: OperationRequest<'_>,
) -> Result<usize, Fault> {
    let call = shape::resolve::<T>(request)?;
    match op {
        BinaryOp::FloorDivide => drive(call, kernel::int::floor_div),
        BinaryOp::Remainder => drive(call, kernel::int::floor_rem),
    }
}

fn run_float<T: Element + FloatElement>(
    op: BinaryOp,
    request: OperationRequest<'_>,
) -> Result<usize, Fault> {
    let call = shape::resolve::<T>(request)?;
    let suppress = call.suppress_special_values;
    match op {
        BinaryOp::FloorDivide => drive(call, |a, b| kernel::float::floor_div(a, b, suppress)),
        BinaryOp::Remainder => drive(call, |a, b| kernel::float::floor_rem(a, b, suppress)),
    }
}

/// Evaluates one operation, returning the number of elements written.
///
/// The request is resolved to the kind of its first buffer operand and
/// every structural rule is checked before the first write, so a
/// structural fault leaves all buffers bit-identical.
pub fn evaluate(op: BinaryOp, request: OperationRequest<'_>) -> Result<usize, Fault> {
    match shape::dominant_kind(&request)? {
        ElementKind::I8 => run_int::<i8>(op, request),
        ElementKind::I16 => run_int::<i16>(op, request),
        ElementKind::I32 => run_int::<i32>(op, request),
        ElementKind::I64 => run_int::<i64>(op, request),
        ElementKind::Int => run_int::<isize>(op, request),
        ElementKind::U8 => run_int::<u8>(op, request),
        ElementKind::U16 => run_int::<u16>(op, request),
        ElementKind::U32 => run_int::<u32>(op, request),
        ElementKind::U64 => run_int::<u64>(op, request),
        ElementKind::UInt => run_int::<usize>(op, request),
        ElementKind::F32 => run_float::<f32>(op, request),
        ElementKind::F64 => run_float::<f64>(op, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_model::value::ElementValue;

    fn div(request: OperationRequest<'_>) -> Result<usize, Fault> {
        evaluate(BinaryOp::FloorDivide, request)
    }

    fn rem(request: OperationRequest<'_>) -> Result<usize, Fault> {
        evaluate(BinaryOp::Remainder, request)
    }

    #[test]
    fn test_array_array_into_output() {
        let lhs = [7i32, -7, 9, -9];
        let rhs = [2i32, 2, -2, -2];
        let mut out = [0i32; 4];
        let written = div(OperationRequest::new((&lhs[..]).into(), (&rhs[..]).into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 4);
        assert_eq!(out, [3, -4, -5, 4]);
    }

    #[test]
    fn test_array_scalar_into_output() {
        let lhs = [10i64, -10, 3];
        let mut out = [0i64; 3];
        let written = div(OperationRequest::new((&lhs[..]).into(), 4i64.into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 3);
        assert_eq!(out, [2, -3, 0]);
    }

    #[test]
    fn test_scalar_array_into_output() {
        let rhs = [3u32, 5, 9];
        let mut out = [0u32; 3];
        let written = div(OperationRequest::new(100u32.into(), (&rhs[..]).into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 3);
        assert_eq!(out, [33, 20, 11]);
    }

    #[test]
    fn test_array_array_in_place() {
        let mut lhs = [7i16, -8, 9];
        let rhs = [2i16, 3, -4];
        let written =
            div(OperationRequest::new((&mut lhs[..]).into(), (&rhs[..]).into())).unwrap();
        assert_eq!(written, 3);
        assert_eq!(lhs, [3, -3, -3]);
    }

    #[test]
    fn test_array_scalar_in_place() {
        let mut data = [10i32, -10, 7];
        let written = div(OperationRequest::new((&mut data[..]).into(), 3i32.into())).unwrap();
        assert_eq!(written, 3);
        assert_eq!(data, [3, -4, 2]);
    }

    #[test]
    fn test_scalar_array_in_place() {
        let mut divisors = [3i32, 5, 9];
        let written =
            div(OperationRequest::new(100i32.into(), (&mut divisors[..]).into())).unwrap();
        assert_eq!(written, 3);
        assert_eq!(divisors, [33, 20, 11]);
    }

    #[test]
    fn test_runtime_fault_commits_the_prefix_in_output_mode() {
        let lhs = [12i32, 12, 12, 12];
        let rhs = [6i32, 3, 0, 2];
        let mut out = [99i32; 4];
        let fault = div(OperationRequest::new((&lhs[..]).into(), (&rhs[..]).into())
            .output((&mut out[..]).into()))
        .unwrap_err();
        assert_eq!(fault, Fault::ZeroDivision { index: 2 });
        assert_eq!(out, [2, 4, 99, 99]);
    }

    #[test]
    fn test_runtime_fault_commits_the_prefix_in_place() {
        let mut data = [8i64, 6, i64::MIN, 4];
        let rhs = [2i64, 2, -1, 2];
        let fault =
            div(OperationRequest::new((&mut data[..]).into(), (&rhs[..]).into())).unwrap_err();
        assert_eq!(fault, Fault::SignedOverflow { index: 2 });
        assert_eq!(data, [4, 3, i64::MIN, 4]);
    }

    #[test]
    fn test_max_len_preserves_the_tail() {
        let mut data = [9i32, 9, 9, 9];
        let written =
            div(OperationRequest::new((&mut data[..]).into(), 3i32.into()).max_len(2)).unwrap();
        assert_eq!(written, 2);
        assert_eq!(data, [3, 3, 9, 9]);

        let lhs = [9u8, 9, 9];
        let mut out = [7u8; 3];
        let written = div(OperationRequest::new((&lhs[..]).into(), 3u8.into())
            .output((&mut out[..]).into())
            .max_len(1))
        .unwrap();
        assert_eq!(written, 1);
        assert_eq!(out, [3, 7, 7]);
    }

    #[test]
    fn test_max_len_clamps_and_zero_is_a_no_op() {
        let mut data = [10i32, 20];
        let written =
            div(OperationRequest::new((&mut data[..]).into(), 10i32.into()).max_len(100)).unwrap();
        assert_eq!(written, 2);
        assert_eq!(data, [1, 2]);

        // With a zero cap nothing is read, so even a zero divisor passes.
        let mut data = [10i32, 20];
        let written =
            div(OperationRequest::new((&mut data[..]).into(), 0i32.into()).max_len(0)).unwrap();
        assert_eq!(written, 0);
        assert_eq!(data, [10, 20]);
    }

    #[test]
    fn test_empty_buffers_succeed_with_zero_written() {
        let lhs: [i32; 0] = [];
        let mut out: [i32; 0] = [];
        let written = div(OperationRequest::new((&lhs[..]).into(), 5i32.into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 0);

        let mut data: [f64; 0] = [];
        let written = rem(OperationRequest::new((&mut data[..]).into(), 2.0f64.into())).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_special_values_fault_and_can_be_suppressed() {
        let lhs = [8.0f64, f64::NAN, 6.0];
        let mut out = [0.0f64; 3];
        let fault = div(OperationRequest::new((&lhs[..]).into(), 2.0f64.into())
            .output((&mut out[..]).into()))
        .unwrap_err();
        assert_eq!(fault, Fault::SpecialValue { index: 1 });
        assert_eq!(out[0], 4.0);
        assert_eq!(out[2], 0.0);

        let mut out = [0.0f64; 3];
        let written = div(OperationRequest::new((&lhs[..]).into(), 2.0f64.into())
            .output((&mut out[..]).into())
            .suppress_special_values(true))
        .unwrap();
        assert_eq!(written, 3);
        assert_eq!(out[0], 4.0);
        assert!(out[1].is_nan());
        assert_eq!(out[2], 3.0);
    }

    #[test]
    fn test_zero_divisor_stays_fatal_under_suppression() {
        let mut data = [4.0f32, 4.0];
        let rhs = [2.0f32, -0.0];
        let fault = div(OperationRequest::new((&mut data[..]).into(), (&rhs[..]).into())
            .suppress_special_values(true))
        .unwrap_err();
        assert_eq!(fault, Fault::ZeroDivision { index: 1 });
        assert_eq!(data, [2.0, 4.0]);
    }

    #[test]
    fn test_unsigned_zero_divisor_faults() {
        let mut data = [5u64, 5];
        let rhs = [5u64, 0];
        let fault =
            div(OperationRequest::new((&mut data[..]).into(), (&rhs[..]).into())).unwrap_err();
        assert_eq!(fault, Fault::ZeroDivision { index: 1 });
        assert_eq!(data, [1, 5]);
    }

    fn smoke_div<T: Element + IntElement>(a: T, b: T, expect: T) {
        let lhs = [a];
        let rhs = [b];
        let mut out = [b];
        let written = div(OperationRequest::new((&lhs[..]).into(), (&rhs[..]).into())
            .output(T::buffer_mut_of(&mut out)))
        .unwrap();
        assert_eq!(written, 1);
        assert_eq!(out[0], expect);
    }

    #[test]
    fn test_every_integer_kind_dispatches() {
        smoke_div(-7i8, 2i8, -4i8);
        smoke_div(-7i16, 2i16, -4i16);
        smoke_div(-7i32, 2i32, -4i32);
        smoke_div(-7i64, 2i64, -4i64);
        smoke_div(-7isize, 2isize, -4isize);
        smoke_div(7u8, 2u8, 3u8);
        smoke_div(7u16, 2u16, 3u16);
        smoke_div(7u32, 2u32, 3u32);
        smoke_div(7u64, 2u64, 3u64);
        smoke_div(7usize, 2usize, 3usize);
    }

    #[test]
    fn test_both_float_kinds_dispatch() {
        let lhs = [-7.0f32];
        let mut out = [0.0f32];
        div(OperationRequest::new((&lhs[..]).into(), 2.0f32.into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(out[0], -4.0);

        let lhs = [-7.0f64];
        let mut out = [0.0f64];
        div(OperationRequest::new((&lhs[..]).into(), 2.0f64.into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(out[0], -4.0);
    }

    #[test]
    fn test_remainder_through_the_selector() {
        let lhs = [7i64, -7, 7, -7];
        let rhs = [2i64, 2, -2, -2];
        let mut out = [0i64; 4];
        let written = rem(OperationRequest::new((&lhs[..]).into(), (&rhs[..]).into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 4);
        assert_eq!(out, [1, 1, -1, -1]);

        let mut data = [7.5f64, -7.5];
        let written = rem(OperationRequest::new((&mut data[..]).into(), 2.0f64.into())).unwrap();
        assert_eq!(written, 2);
        assert_eq!(data, [1.5, 0.5]);
    }

    #[test]
    fn test_mutable_input_with_output_leaves_the_source_untouched() {
        let mut lhs = [9i32, 8, 7];
        let mut out = [0i32; 3];
        let written = div(OperationRequest::new((&mut lhs[..]).into(), 2i32.into())
            .output((&mut out[..]).into()))
        .unwrap();
        assert_eq!(written, 3);
        assert_eq!(lhs, [9, 8, 7]);
        assert_eq!(out, [4, 4, 3]);
    }

    #[test]
    fn test_structural_faults_leave_every_buffer_untouched() {
        let lhs = [10i32, 20];
        let rhs = [1i64, 2];
        let mut out = [77i32, 77];
        let fault = div(OperationRequest::new((&lhs[..]).into(), (&rhs[..]).into())
            .output((&mut out[..]).into()))
        .unwrap_err();
        assert!(fault.is_structural());
        assert_eq!(out, [77, 77]);

        // Unrepresentable scalar, in-place shape.
        let mut data = [10i8, 20];
        let fault =
            div(OperationRequest::new((&mut data[..]).into(), 300i32.into())).unwrap_err();
        assert!(fault.is_structural());
        assert_eq!(data, [10, 20]);
    }

    #[test]
    fn test_scalars_coerce_to_the_buffer_kind() {
        let mut data = [10i8, 20];
        let written = div(OperationRequest::new(
            (&mut data[..]).into(),
            ElementValue::I64(3).into(),
        ))
        .unwrap();
        assert_eq!(written, 2);
        assert_eq!(data, [3, 6]);
    }
}
