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

//! # Status Codes
//!
//! The stable `i32` codes every Tandem entry point returns. `TANDEM_OK`
//! means the call completed; each of the four remaining codes corresponds
//! to one externally distinguishable fault class, so a host language can
//! map them onto four distinct catchable error types.

use tandem_model::fault::{Fault, FaultClass};

/// The call completed; the reported number of elements was written.
pub const TANDEM_OK: i32 = 0;

/// The request was malformed: a null pointer, an unknown kind tag, a
/// scalar that does not fit the element kind, or a shape violation. No
/// element was written.
pub const TANDEM_PARAMETER_ERROR: i32 = 1;

/// A divisor element was zero. Elements before the faulting index were
/// written; the rest keep their prior values.
pub const TANDEM_ZERO_DIVISION: i32 = 2;

/// A signed integer pair was `MIN / -1`. Same partial-commit behavior as
/// [`TANDEM_ZERO_DIVISION`].
pub const TANDEM_OVERFLOW: i32 = 3;

/// A float operand was NaN or infinite while suppression was off. Same
/// partial-commit behavior as [`TANDEM_ZERO_DIVISION`].
pub const TANDEM_SPECIAL_VALUE: i32 = 4;

/// The `max_len` sentinel meaning "process the whole driving buffer".
pub const TANDEM_NO_LIMIT: usize = usize::MAX;

/// Maps a fault to its status code.
///
/// # Examples
///
/// ```rust
/// # use tandem_ffi::status::{fault_status, TANDEM_ZERO_DIVISION};
/// # use tandem_model::fault::Fault;
/// assert_eq!(fault_status(&Fault::ZeroDivision { index: 3 }), TANDEM_ZERO_DIVISION);
/// ```
#[inline]
pub fn fault_status(fault: &Fault) -> i32 {
    match fault.class() {
        FaultClass::Parameter => TANDEM_PARAMETER_ERROR,
        FaultClass::ZeroDivision => TANDEM_ZERO_DIVISION,
        FaultClass::Overflow => TANDEM_OVERFLOW,
        FaultClass::SpecialValue => TANDEM_SPECIAL_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_model::kind::ElementKind;

    #[test]
    fn test_status_codes_are_distinct_and_stable() {
        let codes = [
            TANDEM_OK,
            TANDEM_PARAMETER_ERROR,
            TANDEM_ZERO_DIVISION,
            TANDEM_OVERFLOW,
            TANDEM_SPECIAL_VALUE,
        ];
        assert_eq!(codes, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_every_fault_class_maps_to_its_code() {
        assert_eq!(
            fault_status(&Fault::KindMismatch {
                expected: ElementKind::I32,
                found: ElementKind::F64,
            }),
            TANDEM_PARAMETER_ERROR
        );
        assert_eq!(
            fault_status(&Fault::InvalidRequest { reason: "x" }),
            TANDEM_PARAMETER_ERROR
        );
        assert_eq!(
            fault_status(&Fault::ZeroDivision { index: 0 }),
            TANDEM_ZERO_DIVISION
        );
        assert_eq!(
            fault_status(&Fault::SignedOverflow { index: 0 }),
            TANDEM_OVERFLOW
        );
        assert_eq!(
            fault_status(&Fault::SpecialValue { index: 0 }),
            TANDEM_SPECIAL_VALUE
        );
    }
}
