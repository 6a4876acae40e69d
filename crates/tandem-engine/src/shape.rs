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

//! Shape resolution.
//!
//! Turns an untyped [`OperationRequest`] into a [`TypedCall`] over one
//! concrete element type, or a structural fault. The rules:
//!
//! - At least one input operand must be a buffer; the first buffer operand
//!   drives the element count.
//! - Every buffer in the call must carry the resolved kind, and scalars
//!   must coerce to it without changing value.
//! - With an output attached, inputs are read-only and results land in the
//!   output. Without one, the call is in-place and the leading buffer
//!   operand must be a `BufferMut`, which doubles as input and target.
//! - Secondary input buffers and the output must cover the active range.
//!
//! All of this happens before the first element is touched, so a request
//! rejected here leaves every buffer bit-identical.

use crate::bounds;
use tandem_model::{
    buffer::Element,
    fault::Fault,
    kind::ElementKind,
    operand::{Operand, OperationRequest},
};

pub(crate) const NO_INPUT_BUFFER: &str = "at least one input operand must be a buffer";
pub(crate) const TARGET_NOT_MUTABLE: &str =
    "in-place evaluation requires the leading buffer operand to be mutable";

/// A request lowered to one concrete element type, ready to drive.
#[derive(Debug)]
pub(crate) struct TypedCall<'a, T> {
    /// Where results are written. In an in-place call this is the leading
    /// buffer operand itself.
    pub target: &'a mut [T],
    /// The first input. `Side::Target` means "read the target slice".
    pub lhs: Side<'a, T>,
    /// The second input.
    pub rhs: Side<'a, T>,
    /// How many leading elements to process.
    pub active: usize,
    /// Whether NaN and infinite float operands are tolerated.
    pub suppress_special_values: bool,
}

/// One input of a typed call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Side<'a, T> {
    /// A coerced scalar, broadcast across the active range.
    Scalar(T),
    /// A shared slice read positionally.
    Slice(&'a [T]),
    /// The target slice itself, read before each write.
    Target,
}

/// The element kind a request resolves to: the kind of its first buffer
/// operand.
pub(crate) fn dominant_kind(request: &OperationRequest<'_>) -> Result<ElementKind, Fault> {
    request
        .lhs()
        .buffer_kind()
        .or_else(|| request.rhs().buffer_kind())
        .ok_or(Fault::InvalidRequest {
            reason: NO_INPUT_BUFFER,
        })
}

/// An input operand checked against the resolved element type.
enum Input<'a, T> {
    Scalar(T),
    Shared(&'a [T]),
    Exclusive(&'a mut [T]),
}

impl<'a, T> Input<'a, T> {
    fn buffer_len(&self) -> Option<usize> {
        match self {
            Input::Scalar(_) => None,
            Input::Shared(s) => Some(s.len()),
            Input::Exclusive(s) => Some(s.len()),
        }
    }

    fn into_side(self) -> Side<'a, T> {
        match self {
            Input::Scalar(v) => Side::Scalar(v),
            Input::Shared(s) => Side::Slice(s),
            Input::Exclusive(s) => Side::Slice(s),
        }
    }
}

fn classify<'a, T: Element>(operand: Operand<'a>) -> Result<Input<'a, T>, Fault> {
    match operand {
        Operand::Scalar(value) => {
            let typed = value
                .coerce(T::KIND)
                .and_then(T::from_value)
                .ok_or(Fault::UnrepresentableScalar {
                    value,
                    kind: T::KIND,
                })?;
            Ok(Input::Scalar(typed))
        }
        Operand::Buffer(buffer) => {
            let found = buffer.kind();
            T::slice_of(buffer)
                .map(Input::Shared)
                .ok_or(Fault::KindMismatch {
                    expected: T::KIND,
                    found,
                })
        }
        Operand::BufferMut(buffer) => {
            let found = buffer.kind();
            T::mut_slice_of(buffer)
                .map(Input::Exclusive)
                .ok_or(Fault::KindMismatch {
                    expected: T::KIND,
                    found,
                })
        }
    }
}

/// Resolves a request against element type `T`, checking kinds, shape and
/// coverage, and computing the active range.
pub(crate) fn resolve<'a, T: Element>(
    request: OperationRequest<'a>,
) -> Result<TypedCall<'a, T>, Fault> {
    let (lhs, rhs, out, options) = request.into_parts();
    let lhs = classify::<T>(lhs)?;
    let rhs = classify::<T>(rhs)?;

    match out {
        Some(out) => {
            let found = out.kind();
            let target = T::mut_slice_of(out).ok_or(Fault::KindMismatch {
                expected: T::KIND,
                found,
            })?;
            let driving = match (lhs.buffer_len(), rhs.buffer_len()) {
                (Some(len), _) => len,
                (None, Some(len)) => len,
                (None, None) => {
                    return Err(Fault::InvalidRequest {
                        reason: NO_INPUT_BUFFER,
                    });
                }
            };
            let active = bounds::active_len(driving, options.max_len);
            // Only an rhs buffer behind a driving lhs buffer is secondary.
            if lhs.buffer_len().is_some() {
                if let Some(len) = rhs.buffer_len() {
                    bounds::ensure_secondary_covers(len, active)?;
                }
            }
            bounds::ensure_output_covers(target.len(), active)?;
            Ok(TypedCall {
                target,
                lhs: lhs.into_side(),
                rhs: rhs.into_side(),
                active,
                suppress_special_values: options.suppress_special_values,
            })
        }
        None => match (lhs, rhs) {
            (Input::Exclusive(target), rhs) => {
                let active = bounds::active_len(target.len(), options.max_len);
                let rhs = match rhs {
                    Input::Scalar(v) => Side::Scalar(v),
                    Input::Shared(s) => {
                        bounds::ensure_secondary_covers(s.len(), active)?;
                        Side::Slice(s)
                    }
                    Input::Exclusive(s) => {
                        bounds::ensure_secondary_covers(s.len(), active)?;
                        Side::Slice(s)
                    }
                };
                Ok(TypedCall {
                    target,
                    lhs: Side::Target,
                    rhs,
                    active,
                    suppress_special_values: options.suppress_special_values,
                })
            }
            (Input::Scalar(v), Input::Exclusive(target)) => {
                let active = bounds::active_len(target.len(), options.max_len);
                Ok(TypedCall {
                    target,
                    lhs: Side::Scalar(v),
                    rhs: Side::Target,
                    active,
                    suppress_special_values: options.suppress_special_values,
                })
            }
            (Input::Shared(_), _) | (Input::Scalar(_), Input::Shared(_)) => {
                Err(Fault::InvalidRequest {
                    reason: TARGET_NOT_MUTABLE,
                })
            }
            (Input::Scalar(_), Input::Scalar(_)) => Err(Fault::InvalidRequest {
                reason: NO_INPUT_BUFFER,
            }),
        },
    }
}
