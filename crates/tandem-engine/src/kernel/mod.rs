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

//! # Arithmetic Kernels
//!
//! Per-pair floor division and floored remainder, one submodule per
//! numeric family. Kernels know nothing about buffers or positions; they
//! take two elements and either produce a result or report which fault
//! family the pair belongs to. The drive loop attaches the element index.
//!
//! ## Submodules
//!
//! - `int`: the ten integer kinds, with explicit zero-divisor and
//!   `MIN / -1` rejection.
//! - `float`: the two float kinds, with zero-divisor rejection and the
//!   suppressible special-value policy.

pub mod float;
pub mod int;

use tandem_model::fault::Fault;

/// A faulting element pair, without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelFault {
    /// The divisor is zero.
    ZeroDivision,
    /// The true result does not fit the element type.
    Overflow,
    /// An operand is NaN or infinite and suppression is off.
    SpecialValue,
}

impl KernelFault {
    /// Attaches the element index, producing the full fault.
    #[inline]
    pub fn at(self, index: usize) -> Fault {
        match self {
            KernelFault::ZeroDivision => Fault::ZeroDivision { index },
            KernelFault::Overflow => Fault::SignedOverflow { index },
            KernelFault::SpecialValue => Fault::SpecialValue { index },
        }
    }
}
