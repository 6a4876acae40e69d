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

//! # Operation Requests
//!
//! One evaluation call is described by an [`OperationRequest`]: two input
//! [`Operand`]s, an optional separate output buffer, and the per-call
//! [`EvalOptions`]. Requests are built with chainable methods and consumed
//! by the engine; nothing here is retained across calls.
//!
//! ## Calling shapes
//!
//! An operand is a scalar or a buffer, and at least one input must be a
//! buffer. With an `output` attached, results land there; without one, the
//! call is in-place and the leading buffer operand must be supplied as a
//! `BufferMut` (ownership of the exclusive view is what authorizes the
//! engine to overwrite it).

use crate::{
    buffer::{BufferMut, BufferRef, Element},
    kind::ElementKind,
    value::ElementValue,
};

/// A single input operand of an evaluation call.
#[derive(Debug)]
pub enum Operand<'a> {
    /// A kinded scalar, broadcast across the active range.
    Scalar(ElementValue),
    /// A shared buffer view, read-only for the whole call.
    Buffer(BufferRef<'a>),
    /// An exclusive buffer view; readable as input and, in an in-place
    /// call, eligible to be the evaluation target.
    BufferMut(BufferMut<'a>),
}

impl<'a> Operand<'a> {
    /// Returns the element kind of this operand if it is a buffer.
    #[inline]
    pub fn buffer_kind(&self) -> Option<ElementKind> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Buffer(b) => Some(b.kind()),
            Operand::BufferMut(b) => Some(b.kind()),
        }
    }

    /// Returns `true` if this operand is a scalar.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }
}

impl<'a> From<ElementValue> for Operand<'a> {
    #[inline]
    fn from(value: ElementValue) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<BufferRef<'a>> for Operand<'a> {
    #[inline]
    fn from(buffer: BufferRef<'a>) -> Self {
        Operand::Buffer(buffer)
    }
}

impl<'a> From<BufferMut<'a>> for Operand<'a> {
    #[inline]
    fn from(buffer: BufferMut<'a>) -> Self {
        Operand::BufferMut(buffer)
    }
}

impl<'a, T: Element> From<&'a [T]> for Operand<'a> {
    #[inline]
    fn from(slice: &'a [T]) -> Self {
        Operand::Buffer(T::buffer_of(slice))
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Operand<'a> {
    #[inline]
    fn from(slice: &'a mut [T]) -> Self {
        Operand::BufferMut(T::buffer_mut_of(slice))
    }
}

macro_rules! impl_operand_from_primitive {
    ($t:ty) => {
        impl<'a> From<$t> for Operand<'a> {
            #[inline]
            fn from(value: $t) -> Self {
                Operand::Scalar(ElementValue::from(value))
            }
        }
    };
}

impl_operand_from_primitive!(i8);
impl_operand_from_primitive!(i16);
impl_operand_from_primitive!(i32);
impl_operand_from_primitive!(i64);
impl_operand_from_primitive!(isize);
impl_operand_from_primitive!(u8);
impl_operand_from_primitive!(u16);
impl_operand_from_primitive!(u32);
impl_operand_from_primitive!(u64);
impl_operand_from_primitive!(usize);
impl_operand_from_primitive!(f32);
impl_operand_from_primitive!(f64);

/// Per-call evaluation options.
///
/// The defaults are "process everything, suppress nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    /// When set, float operands that are NaN or infinite propagate into the
    /// result instead of raising a special-value fault. Zero divisors and
    /// signed overflow stay fatal regardless.
    pub suppress_special_values: bool,
    /// Caps how many leading elements are processed. A cap beyond the
    /// driving buffer's length is clamped; elements past the cap keep their
    /// exact bit patterns.
    pub max_len: Option<usize>,
}

impl EvalOptions {
    /// Creates options with the defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether NaN and infinite float operands are tolerated.
    #[inline]
    pub fn suppress_special_values(mut self, yes: bool) -> Self {
        self.suppress_special_values = yes;
        self
    }

    /// Caps the number of processed elements.
    #[inline]
    pub fn max_len(mut self, limit: usize) -> Self {
        self.max_len = Some(limit);
        self
    }
}

/// A complete description of one evaluation call.
///
/// # Examples
///
/// ```rust
/// # use tandem_model::{kind::ElementKind, operand::OperationRequest};
/// let lhs = [10i32, 7, -3];
/// let mut out = [0i32; 3];
/// let request = OperationRequest::new((&lhs[..]).into(), 2i32.into())
///     .output((&mut out[..]).into())
///     .max_len(2);
/// assert_eq!(request.lhs().buffer_kind(), Some(ElementKind::I32));
/// assert!(request.rhs().is_scalar());
/// ```
#[derive(Debug)]
pub struct OperationRequest<'a> {
    lhs: Operand<'a>,
    rhs: Operand<'a>,
    out: Option<BufferMut<'a>>,
    options: EvalOptions,
}

impl<'a> OperationRequest<'a> {
    /// Creates a request with default options and no separate output.
    #[inline]
    pub fn new(lhs: Operand<'a>, rhs: Operand<'a>) -> Self {
        Self {
            lhs,
            rhs,
            out: None,
            options: EvalOptions::default(),
        }
    }

    /// Attaches a separate output buffer; without one the call is in-place.
    #[inline]
    pub fn output(mut self, out: BufferMut<'a>) -> Self {
        self.out = Some(out);
        self
    }

    /// Sets whether NaN and infinite float operands are tolerated.
    #[inline]
    pub fn suppress_special_values(mut self, yes: bool) -> Self {
        self.options.suppress_special_values = yes;
        self
    }

    /// Caps the number of processed elements.
    #[inline]
    pub fn max_len(mut self, limit: usize) -> Self {
        self.options.max_len = Some(limit);
        self
    }

    /// Replaces the options wholesale.
    #[inline]
    pub fn options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the first input operand.
    #[inline]
    pub fn lhs(&self) -> &Operand<'a> {
        &self.lhs
    }

    /// Returns the second input operand.
    #[inline]
    pub fn rhs(&self) -> &Operand<'a> {
        &self.rhs
    }

    /// Decomposes the request for evaluation.
    #[inline]
    pub fn into_parts(self) -> (Operand<'a>, Operand<'a>, Option<BufferMut<'a>>, EvalOptions) {
        (self.lhs, self.rhs, self.out, self.options)
    }
}
