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

//! # Tandem FFI
//!
//! **C-Compatible Bindings for the Tandem Elementwise Arithmetic Engine.**
//!
//! This crate bridges the Rust core of Tandem to external environments
//! such as C, C++, Python, C#, and Java. The entire surface is flat
//! functions over caller-owned buffers; no handles are allocated and no
//! state survives a call, so there is nothing to free.
//!
//! ## Core Design Principles
//!
//! 1.  **Caller-Owned Memory**: Every buffer is allocated and owned by the
//!     host. The engine reads and writes through the pointers for the
//!     duration of one call and retains nothing.
//! 2.  **Status Codes**: Every entry point returns an `i32` from
//!     [`status`]. The four non-OK codes match the four fault classes of
//!     the Rust API one-to-one, so hosts can surface zero division,
//!     overflow, special float values, and parameter misuse as distinct
//!     catchable errors.
//! 3.  **Catchable Misuse**: Null pointers and unknown kind tags report
//!     `TANDEM_PARAMETER_ERROR` instead of aborting the process; host
//!     user input routinely reaches these functions. What cannot be
//!     checked (pointer validity, accurate lengths, non-overlap of a
//!     separate output) remains the caller's contract.
//!
//! ## Exported API
//!
//! ### Evaluation ([`ops`])
//! * `tandem_floor_divide_<tag>` / `tandem_remainder_<tag>`
//! * `tandem_floor_divide_<tag>_scalar` / `tandem_remainder_<tag>_scalar`
//! * `tandem_floor_divide_<tag>_scalar_in_place` /
//!   `tandem_remainder_<tag>_scalar_in_place`
//!
//! ### Kind Registry ([`ops`])
//! * `tandem_kind_code`
//! * `tandem_kind_size_bytes`
//! * `tandem_kind_is_float`
//! * `tandem_kind_is_signed`
//! * `tandem_<tag>_min` / `tandem_<tag>_max` (integer kinds)
//!
//! ### Status Codes ([`status`])
//! * `TANDEM_OK`, `TANDEM_PARAMETER_ERROR`, `TANDEM_ZERO_DIVISION`,
//!   `TANDEM_OVERFLOW`, `TANDEM_SPECIAL_VALUE`, `TANDEM_NO_LIMIT`

pub mod ops;
pub mod status;
