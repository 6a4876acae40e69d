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

//! Active-range arithmetic.
//!
//! The first buffer operand drives the element count; a `max_len` cap can
//! only shrink it. Every other buffer involved in the call must cover the
//! resulting active range, checked here before the first element is
//! touched so that coverage faults stay atomic.

use tandem_model::fault::Fault;

pub(crate) const SECONDARY_TOO_SHORT: &str =
    "second buffer operand is shorter than the active range";
pub(crate) const OUTPUT_TOO_SHORT: &str = "output buffer is shorter than the active range";

/// Number of leading elements a call processes: the driving buffer's
/// length, clamped by the cap when one is set.
#[inline]
pub(crate) fn active_len(driving_len: usize, max_len: Option<usize>) -> usize {
    match max_len {
        Some(limit) => driving_len.min(limit),
        None => driving_len,
    }
}

/// Checks that a second input buffer covers the active range.
#[inline]
pub(crate) fn ensure_secondary_covers(len: usize, active: usize) -> Result<(), Fault> {
    if len < active {
        return Err(Fault::InvalidRequest {
            reason: SECONDARY_TOO_SHORT,
        });
    }
    Ok(())
}

/// Checks that the output buffer covers the active range.
#[inline]
pub(crate) fn ensure_output_covers(len: usize, active: usize) -> Result<(), Fault> {
    if len < active {
        return Err(Fault::InvalidRequest {
            reason: OUTPUT_TOO_SHORT,
        });
    }
    Ok(())
}
