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

//! # Tandem Engine
//!
//! Elementwise floor division and floored remainder over kinded numeric
//! buffers. A call arrives as a `tandem_model::operand::OperationRequest`,
//! is resolved to one of the twelve element kinds, checked against the
//! shape rules, and then driven element by element through a branch-free
//! kernel until it completes or hits the first faulting pair.
//!
//! ## Core flow
//!
//! - Build an `OperationRequest` from two operands, an optional output
//!   buffer, and per-call options.
//! - Call [`ops::floor_divide`] or [`ops::remainder`].
//! - On success, receive the number of elements written. On a fault,
//!   receive a `tandem_model::fault::Fault` naming what went wrong and,
//!   for runtime faults, where.
//!
//! ## Modules
//!
//! - `ops`: the public entry points and the operation selector.
//! - `eval`: kind dispatch and the element drive loop.
//! - `kernel`: per-pair arithmetic for integer and float kinds.
//!
//! ## Highlights
//!
//! - One generic drive loop serves all twelve kinds and all six calling
//!   shapes; monomorphization keeps the per-element cost at a plain
//!   indexed loop with no per-element matching.
//! - Faults stop the loop at the offending index; everything before it is
//!   committed, everything after keeps its exact prior bits.

pub mod eval;
pub mod kernel;
pub mod ops;

mod bounds;
mod shape;
