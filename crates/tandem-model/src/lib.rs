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

//! # Tandem Model
//!
//! The data model of the Tandem elementwise arithmetic engine: element
//! kinds, dynamically kinded scalars and buffers, operation requests, and
//! the fault taxonomy shared by every layer above.
//!
//! ## Modules
//!
//! - `kind`: The closed `ElementKind` registry of the twelve supported
//!   element kinds, with external tags, widths, and integer limits.
//! - `value`: `ElementValue`, a kinded scalar, plus the representability
//!   rules that decide whether a scalar may join a call of another kind.
//! - `buffer`: `BufferRef`/`BufferMut`, kind-tagged views over contiguous
//!   slices, and the `Element` trait bridging them to typed code.
//! - `operand`: `Operand`, `EvalOptions`, and the `OperationRequest`
//!   builder describing one evaluation call.
//! - `fault`: The `Fault` taxonomy, the four externally distinguishable
//!   `FaultClass`es, and the suppression policy.
//!
//! ## Purpose
//!
//! Everything here is per-call data with no retained state; buffers are
//! borrowed views into caller memory, and mutability is expressed through
//! ownership so aliasing questions are settled at the type level.

pub mod buffer;
pub mod fault;
pub mod kind;
pub mod operand;
pub mod value;
