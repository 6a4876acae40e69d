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

//! # Tandem Core
//!
//! Foundational numeric traits for the Tandem elementwise arithmetic
//! ecosystem. This crate consolidates the reusable numeric building blocks
//! that the buffer model and the evaluation engine are written against.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`), by-value checked
//!   division traits (`CheckedDivVal`, `CheckedRemVal`), and the
//!   `IntElement`/`FloatElement` trait aliases that collect the bounds the
//!   evaluation kernels require.
//!
//! ## Purpose
//!
//! Elementwise arithmetic over many primitive types demands generic code
//! with predictable overflow and division semantics. These traits keep the
//! per-type surface in one place so the kernels stay short and uniform.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
