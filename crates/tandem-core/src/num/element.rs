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

//! # Element Trait Aliases
//!
//! Unified numeric bounds for the evaluation kernels. `IntElement` specifies
//! the capabilities the integer floor-division kernel requires, including
//! intrinsic traits (`PrimInt`), the associated constants `Zero` and
//! `PlusOne`, and the by-value checked division traits. `FloatElement` does
//! the same for the float kernel on top of `num_traits::Float`.
//!
//! ## Motivation
//!
//! The kernels should remain generic over element types while retaining
//! predictable division semantics. These aliases collect the necessary
//! bounds, simplifying generic signatures and ensuring consistent overflow
//! handling across all supported widths.
//!
//! ## Highlights
//!
//! - `IntElement` covers both signed and unsigned widths; signedness shows
//!   up only through comparisons against `Zero::ZERO`.
//! - Checked division traits make `MIN / -1` and zero divisors observable
//!   as `None` instead of panics.
//! - `Send + Sync` so buffers of elements can cross thread boundaries.

use crate::num::{
    constants::{PlusOne, Zero},
    ops::checked_division::{CheckedDivVal, CheckedRemVal},
};
use num_traits::{Float, PrimInt};

/// A trait alias for integer types the evaluation kernels can process.
///
/// Implemented via a blanket impl for every primitive integer type; the
/// engine instantiates it for the eight fixed widths plus `isize`/`usize`.
pub trait IntElement:
    PrimInt
    + Zero
    + PlusOne
    + CheckedDivVal
    + CheckedRemVal
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> IntElement for T where
    T: PrimInt
        + Zero
        + PlusOne
        + CheckedDivVal
        + CheckedRemVal
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

/// A trait alias for floating-point types the evaluation kernels can
/// process, in practice `f32` and `f64`.
pub trait FloatElement: Float + std::fmt::Debug + std::fmt::Display + Send + Sync {}

impl<T> FloatElement for T where T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync {}
