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

//! # Evaluation Entry Points
//!
//! One C-compatible function family per element kind and operation. Every
//! entry point returns a status code from [`crate::status`]; on success
//! the number of elements written is stored through the optional `written`
//! out-parameter.
//!
//! ## Shapes
//!
//! Three shapes are exported per kind and operation:
//!
//! * `tandem_<op>_<tag>`: array ⊘ array into a separate output buffer.
//! * `tandem_<op>_<tag>_scalar`: array ⊘ scalar into a separate output
//!   buffer.
//! * `tandem_<op>_<tag>_scalar_in_place`: array ⊘ scalar overwriting the
//!   input buffer.
//!
//! The scalar ⊘ array shape is reachable from C by swapping the operand
//! roles on the Rust side; hosts that need it bind through the richer Rust
//! API instead.
//!
//! ## Error reporting
//!
//! Misuse (null pointers, unknown kind tags) is reported as
//! `TANDEM_PARAMETER_ERROR` rather than aborting the process: an
//! arithmetic call is routinely driven by host-language user input, and
//! hosts expect a catchable signal. Pointer validity and length accuracy
//! beyond the null check cannot be verified and remain the caller's
//! obligation.

use crate::status::{self, TANDEM_NO_LIMIT, TANDEM_OK, TANDEM_PARAMETER_ERROR};
use std::os::raw::c_char;
use tandem_engine::ops;
use tandem_model::{fault::Fault, kind::ElementKind, operand::OperationRequest};

/// Stores the element count on success and maps the outcome to a status.
#[inline]
unsafe fn finish(result: Result<usize, Fault>, written: *mut usize) -> i32 {
    match result {
        Ok(count) => {
            if !written.is_null() {
                *written = count;
            }
            TANDEM_OK
        }
        Err(fault) => status::fault_status(&fault),
    }
}

/// Applies the cap to a request, honoring the no-limit sentinel.
#[inline]
fn capped(request: OperationRequest<'_>, max_len: usize) -> OperationRequest<'_> {
    if max_len == TANDEM_NO_LIMIT {
        request
    } else {
        request.max_len(max_len)
    }
}

macro_rules! ffi_elementwise {
    ($t:ty, $op:path, $array:ident, $scalar:ident, $scalar_in_place:ident) => {
        /// Elementwise evaluation of two arrays into a separate output
        /// buffer.
        ///
        /// `len` is the element count of all three buffers. `max_len` caps
        /// how many leading elements are processed; pass `TANDEM_NO_LIMIT`
        /// to process everything. On success the number of written
        /// elements is stored through `written` when it is non-null.
        ///
        /// Returns `TANDEM_PARAMETER_ERROR` if any buffer pointer is null.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// `lhs`, `rhs` and `out` must point to `len` readable (and for
        /// `out`, writable) elements, and `out` must not overlap the
        /// inputs.
        #[no_mangle]
        pub unsafe extern "C" fn $array(
            lhs: *const $t,
            rhs: *const $t,
            out: *mut $t,
            len: usize,
            suppress_special_values: bool,
            max_len: usize,
            written: *mut usize,
        ) -> i32 {
            if lhs.is_null() || rhs.is_null() || out.is_null() {
                return TANDEM_PARAMETER_ERROR;
            }
            let lhs = std::slice::from_raw_parts(lhs, len);
            let rhs = std::slice::from_raw_parts(rhs, len);
            let out = std::slice::from_raw_parts_mut(out, len);
            let request = OperationRequest::new(lhs.into(), rhs.into())
                .output(out.into())
                .suppress_special_values(suppress_special_values);
            finish($op(capped(request, max_len)), written)
        }

        /// Elementwise evaluation of an array against a scalar divisor
        /// into a separate output buffer.
        ///
        /// Semantics match the array variant with the scalar broadcast
        /// across the active range.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// `lhs` and `out` must point to `len` elements and must not
        /// overlap.
        #[no_mangle]
        pub unsafe extern "C" fn $scalar(
            lhs: *const $t,
            rhs: $t,
            out: *mut $t,
            len: usize,
            suppress_special_values: bool,
            max_len: usize,
            written: *mut usize,
        ) -> i32 {
            if lhs.is_null() || out.is_null() {
                return TANDEM_PARAMETER_ERROR;
            }
            let lhs = std::slice::from_raw_parts(lhs, len);
            let out = std::slice::from_raw_parts_mut(out, len);
            let request = OperationRequest::new(lhs.into(), rhs.into())
                .output(out.into())
                .suppress_special_values(suppress_special_values);
            finish($op(capped(request, max_len)), written)
        }

        /// Elementwise evaluation of an array against a scalar divisor,
        /// overwriting the array.
        ///
        /// Elements past the active range keep their exact prior values,
        /// as do all elements at and after a faulting index.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// `data` must point to `len` writable elements with no other
        /// live view of the same memory for the duration of the call.
        #[no_mangle]
        pub unsafe extern "C" fn $scalar_in_place(
            data: *mut $t,
            rhs: $t,
            len: usize,
            suppress_special_values: bool,
            max_len: usize,
            written: *mut usize,
        ) -> i32 {
            if data.is_null() {
                return TANDEM_PARAMETER_ERROR;
            }
            let data = std::slice::from_raw_parts_mut(data, len);
            let request = OperationRequest::new(data.into(), rhs.into())
                .suppress_special_values(suppress_special_values);
            finish($op(capped(request, max_len)), written)
        }
    };
}

ffi_elementwise!(
    i8,
    ops::floor_divide,
    tandem_floor_divide_int8,
    tandem_floor_divide_int8_scalar,
    tandem_floor_divide_int8_scalar_in_place
);
ffi_elementwise!(
    i16,
    ops::floor_divide,
    tandem_floor_divide_int16,
    tandem_floor_divide_int16_scalar,
    tandem_floor_divide_int16_scalar_in_place
);
ffi_elementwise!(
    i32,
    ops::floor_divide,
    tandem_floor_divide_int32,
    tandem_floor_divide_int32_scalar,
    tandem_floor_divide_int32_scalar_in_place
);
ffi_elementwise!(
    i64,
    ops::floor_divide,
    tandem_floor_divide_int64,
    tandem_floor_divide_int64_scalar,
    tandem_floor_divide_int64_scalar_in_place
);
ffi_elementwise!(
    isize,
    ops::floor_divide,
    tandem_floor_divide_int,
    tandem_floor_divide_int_scalar,
    tandem_floor_divide_int_scalar_in_place
);
ffi_elementwise!(
    u8,
    ops::floor_divide,
    tandem_floor_divide_uint8,
    tandem_floor_divide_uint8_scalar,
    tandem_floor_divide_uint8_scalar_in_place
);
ffi_elementwise!(
    u16,
    ops::floor_divide,
    tandem_floor_divide_uint16,
    tandem_floor_divide_uint16_scalar,
    tandem_floor_divide_uint16_scalar_in_place
);
ffi_elementwise!(
    u32,
    ops::floor_divide,
    tandem_floor_divide_uint32,
    tandem_floor_divide_uint32_scalar,
    tandem_floor_divide_uint32_scalar_in_place
);
ffi_elementwise!(
    u64,
    ops::floor_divide,
    tandem_floor_divide_uint64,
    tandem_floor_divide_uint64_scalar,
    tandem_floor_divide_uint64_scalar_in_place
);
ffi_elementwise!(
    usize,
    ops::floor_divide,
    tandem_floor_divide_uint,
    tandem_floor_divide_uint_scalar,
    tandem_floor_divide_uint_scalar_in_place
);
ffi_elementwise!(
    f32,
    ops::floor_divide,
    tandem_floor_divide_float32,
    tandem_floor_divide_float32_scalar,
    tandem_floor_divide_float32_scalar_in_place
);
ffi_elementwise!(
    f64,
    ops::floor_divide,
    tandem_floor_divide_float64,
    tandem_floor_divide_float64_scalar,
    tandem_floor_divide_float64_scalar_in_place
);

ffi_elementwise!(
    i8,
    ops::remainder,
    tandem_remainder_int8,
    tandem_remainder_int8_scalar,
    tandem_remainder_int8_scalar_in_place
);
ffi_elementwise!(
    i16,
    ops::remainder,
    tandem_remainder_int16,
    tandem_remainder_int16_scalar,
    tandem_remainder_int16_scalar_in_place
);
ffi_elementwise!(
    i32,
    ops::remainder,
    tandem_remainder_int32,
    tandem_remainder_int32_scalar,
    tandem_remainder_int32_scalar_in_place
);
ffi_elementwise!(
    i64,
    ops::remainder,
    tandem_remainder_int64,
    tandem_remainder_int64_scalar,
    tandem_remainder_int64_scalar_in_place
);
ffi_elementwise!(
    isize,
    ops::remainder,
    tandem_remainder_int,
    tandem_remainder_int_scalar,
    tandem_remainder_int_scalar_in_place
);
ffi_elementwise!(
    u8,
    ops::remainder,
    tandem_remainder_uint8,
    tandem_remainder_uint8_scalar,
    tandem_remainder_uint8_scalar_in_place
);
ffi_elementwise!(
    u16,
    ops::remainder,
    tandem_remainder_uint16,
    tandem_remainder_uint16_scalar,
    tandem_remainder_uint16_scalar_in_place
);
ffi_elementwise!(
    u32,
    ops::remainder,
    tandem_remainder_uint32,
    tandem_remainder_uint32_scalar,
    tandem_remainder_uint32_scalar_in_place
);
ffi_elementwise!(
    u64,
    ops::remainder,
    tandem_remainder_uint64,
    tandem_remainder_uint64_scalar,
    tandem_remainder_uint64_scalar_in_place
);
ffi_elementwise!(
    usize,
    ops::remainder,
    tandem_remainder_uint,
    tandem_remainder_uint_scalar,
    tandem_remainder_uint_scalar_in_place
);
ffi_elementwise!(
    f32,
    ops::remainder,
    tandem_remainder_float32,
    tandem_remainder_float32_scalar,
    tandem_remainder_float32_scalar_in_place
);
ffi_elementwise!(
    f64,
    ops::remainder,
    tandem_remainder_float64,
    tandem_remainder_float64_scalar,
    tandem_remainder_float64_scalar_in_place
);

#[inline]
fn kind_of(code: i32) -> Option<ElementKind> {
    usize::try_from(code)
        .ok()
        .and_then(|i| ElementKind::ALL.get(i).copied())
}

/// Resolves an element kind tag to its stable numeric code.
///
/// The code is the kind's position in the registry order; it is what the
/// query functions below accept. Returns `-1` for a null pointer, invalid
/// UTF-8, or an unknown tag.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer. `tag`
/// must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn tandem_kind_code(tag: *const c_char) -> i32 {
    if tag.is_null() {
        return -1;
    }
    let Ok(tag) = std::ffi::CStr::from_ptr(tag).to_str() else {
        return -1;
    };
    match ElementKind::from_tag(tag) {
        Ok(kind) => ElementKind::ALL.iter().position(|k| *k == kind).unwrap_or(0) as i32,
        Err(_) => -1,
    }
}

/// Returns the size in bytes of one element of the kind, or `0` for an
/// unknown code.
#[no_mangle]
pub extern "C" fn tandem_kind_size_bytes(code: i32) -> usize {
    kind_of(code).map_or(0, ElementKind::size_bytes)
}

/// Returns whether the kind is one of the two float kinds. Unknown codes
/// report `false`.
#[no_mangle]
pub extern "C" fn tandem_kind_is_float(code: i32) -> bool {
    kind_of(code).is_some_and(ElementKind::is_float)
}

/// Returns whether the kind can represent negative values. Unknown codes
/// report `false`.
#[no_mangle]
pub extern "C" fn tandem_kind_is_signed(code: i32) -> bool {
    kind_of(code).is_some_and(ElementKind::is_signed)
}

macro_rules! ffi_limits {
    ($t:ty, $min:ident, $max:ident) => {
        /// Returns the smallest representable value of the kind.
        #[no_mangle]
        pub extern "C" fn $min() -> $t {
            <$t>::MIN
        }

        /// Returns the largest representable value of the kind.
        #[no_mangle]
        pub extern "C" fn $max() -> $t {
            <$t>::MAX
        }
    };
}

ffi_limits!(i8, tandem_int8_min, tandem_int8_max);
ffi_limits!(i16, tandem_int16_min, tandem_int16_max);
ffi_limits!(i32, tandem_int32_min, tandem_int32_max);
ffi_limits!(i64, tandem_int64_min, tandem_int64_max);
ffi_limits!(isize, tandem_int_min, tandem_int_max);
ffi_limits!(u8, tandem_uint8_min, tandem_uint8_max);
ffi_limits!(u16, tandem_uint16_min, tandem_uint16_max);
ffi_limits!(u32, tandem_uint32_min, tandem_uint32_max);
ffi_limits!(u64, tandem_uint64_min, tandem_uint64_max);
ffi_limits!(usize, tandem_uint_min, tandem_uint_max);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{
        TANDEM_OVERFLOW, TANDEM_SPECIAL_VALUE, TANDEM_ZERO_DIVISION,
    };
    use std::ffi::CString;

    #[test]
    fn test_array_array_entry_computes_floor_division() {
        let lhs = [7i8, -7, 9];
        let rhs = [2i8, 2, -2];
        let mut out = [0i8; 3];
        let mut written = 0usize;
        let status = unsafe {
            tandem_floor_divide_int8(
                lhs.as_ptr(),
                rhs.as_ptr(),
                out.as_mut_ptr(),
                3,
                false,
                TANDEM_NO_LIMIT,
                &mut written,
            )
        };
        assert_eq!(status, TANDEM_OK);
        assert_eq!(written, 3);
        assert_eq!(out, [3, -4, -5]);
    }

    #[test]
    fn test_scalar_entry_broadcasts_the_divisor() {
        let lhs = [10u32, 25, 7];
        let mut out = [0u32; 3];
        let status = unsafe {
            tandem_floor_divide_uint32_scalar(
                lhs.as_ptr(),
                5,
                out.as_mut_ptr(),
                3,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_OK);
        assert_eq!(out, [2, 5, 1]);
    }

    #[test]
    fn test_in_place_entry_respects_the_cap() {
        let mut data = [9.0f64, 9.0, 9.0];
        let mut written = 0usize;
        let status = unsafe {
            tandem_floor_divide_float64_scalar_in_place(
                data.as_mut_ptr(),
                2.0,
                3,
                false,
                2,
                &mut written,
            )
        };
        assert_eq!(status, TANDEM_OK);
        assert_eq!(written, 2);
        assert_eq!(data, [4.0, 4.0, 9.0]);
    }

    #[test]
    fn test_null_pointers_report_a_parameter_error() {
        let mut out = [0i64; 1];
        let status = unsafe {
            tandem_floor_divide_int64(
                std::ptr::null(),
                std::ptr::null(),
                out.as_mut_ptr(),
                1,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_PARAMETER_ERROR);

        let status = unsafe {
            tandem_remainder_float32_scalar_in_place(
                std::ptr::null_mut(),
                2.0,
                1,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_PARAMETER_ERROR);
    }

    #[test]
    fn test_runtime_faults_map_to_their_codes() {
        let mut data = [5i32, 5];
        let status = unsafe {
            tandem_floor_divide_int32_scalar_in_place(
                data.as_mut_ptr(),
                0,
                2,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_ZERO_DIVISION);
        assert_eq!(data, [5, 5]);

        let mut data = [i16::MIN];
        let status = unsafe {
            tandem_floor_divide_int16_scalar_in_place(
                data.as_mut_ptr(),
                -1,
                1,
                true,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_OVERFLOW);
        assert_eq!(data, [i16::MIN]);
    }

    #[test]
    fn test_special_values_fault_unless_suppressed() {
        let lhs = [f32::NAN];
        let mut out = [0.0f32];
        let status = unsafe {
            tandem_floor_divide_float32_scalar(
                lhs.as_ptr(),
                2.0,
                out.as_mut_ptr(),
                1,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_SPECIAL_VALUE);

        let mut written = 0usize;
        let status = unsafe {
            tandem_floor_divide_float32_scalar(
                lhs.as_ptr(),
                2.0,
                out.as_mut_ptr(),
                1,
                true,
                TANDEM_NO_LIMIT,
                &mut written,
            )
        };
        assert_eq!(status, TANDEM_OK);
        assert_eq!(written, 1);
        assert!(out[0].is_nan());
    }

    #[test]
    fn test_remainder_entries_share_the_pipeline() {
        let lhs = [7i64, -7];
        let rhs = [2i64, 2];
        let mut out = [0i64; 2];
        let status = unsafe {
            tandem_remainder_int64(
                lhs.as_ptr(),
                rhs.as_ptr(),
                out.as_mut_ptr(),
                2,
                false,
                TANDEM_NO_LIMIT,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, TANDEM_OK);
        assert_eq!(out, [1, 1]);
    }

    #[test]
    fn test_kind_codes_resolve_tags_in_registry_order() {
        for (i, kind) in ElementKind::ALL.iter().enumerate() {
            let tag = CString::new(kind.tag()).unwrap();
            assert_eq!(unsafe { tandem_kind_code(tag.as_ptr()) }, i as i32);
        }
        let bad = CString::new("complex64").unwrap();
        assert_eq!(unsafe { tandem_kind_code(bad.as_ptr()) }, -1);
        assert_eq!(unsafe { tandem_kind_code(std::ptr::null()) }, -1);
    }

    #[test]
    fn test_kind_queries_answer_per_code() {
        let f64_code = ElementKind::ALL
            .iter()
            .position(|k| *k == ElementKind::F64)
            .unwrap() as i32;
        assert_eq!(tandem_kind_size_bytes(f64_code), 8);
        assert!(tandem_kind_is_float(f64_code));
        assert!(tandem_kind_is_signed(f64_code));

        let u8_code = ElementKind::ALL
            .iter()
            .position(|k| *k == ElementKind::U8)
            .unwrap() as i32;
        assert_eq!(tandem_kind_size_bytes(u8_code), 1);
        assert!(!tandem_kind_is_float(u8_code));
        assert!(!tandem_kind_is_signed(u8_code));

        assert_eq!(tandem_kind_size_bytes(-1), 0);
        assert_eq!(tandem_kind_size_bytes(99), 0);
        assert!(!tandem_kind_is_float(99));
    }

    #[test]
    fn test_limit_entries_report_the_primitive_ranges() {
        assert_eq!(tandem_int8_min(), -128);
        assert_eq!(tandem_int8_max(), 127);
        assert_eq!(tandem_uint64_min(), 0);
        assert_eq!(tandem_uint64_max(), u64::MAX);
        assert_eq!(tandem_int_min(), isize::MIN);
        assert_eq!(tandem_uint_max(), usize::MAX);
    }
}
