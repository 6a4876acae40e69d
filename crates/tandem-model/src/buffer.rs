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

//! # Kind-Tagged Buffer Views
//!
//! [`BufferRef`] and [`BufferMut`] are borrowed views over contiguous
//! caller-owned slices, tagged with their element kind so the engine can
//! dispatch before any typed code runs. A `BufferMut` is an exclusive
//! handle; it is the only thing the engine ever writes through, which
//! settles in-place aliasing questions at the type level instead of at
//! runtime.
//!
//! The [`Element`] trait is the bridge back from the dynamically kinded
//! world into typed slices. It is implemented for exactly the twelve
//! primitive types the registry names; the engine's dispatch relies on the
//! two sides agreeing.

use crate::{kind::ElementKind, value::ElementValue};

/// A shared, kind-tagged view of a slice of elements.
///
/// # Examples
///
/// ```rust
/// # use tandem_model::{buffer::BufferRef, kind::ElementKind};
/// let data = [1i32, 2, 3];
/// let buffer = BufferRef::from(&data[..]);
/// assert_eq!(buffer.kind(), ElementKind::I32);
/// assert_eq!(buffer.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum BufferRef<'a> {
    /// A view of `i8` elements.
    I8(&'a [i8]),
    /// A view of `i16` elements.
    I16(&'a [i16]),
    /// A view of `i32` elements.
    I32(&'a [i32]),
    /// A view of `i64` elements.
    I64(&'a [i64]),
    /// A view of `isize` elements.
    Int(&'a [isize]),
    /// A view of `u8` elements.
    U8(&'a [u8]),
    /// A view of `u16` elements.
    U16(&'a [u16]),
    /// A view of `u32` elements.
    U32(&'a [u32]),
    /// A view of `u64` elements.
    U64(&'a [u64]),
    /// A view of `usize` elements.
    UInt(&'a [usize]),
    /// A view of `f32` elements.
    F32(&'a [f32]),
    /// A view of `f64` elements.
    F64(&'a [f64]),
}

/// An exclusive, kind-tagged view of a slice of elements.
///
/// Holding one proves no other view of the same memory exists, so the
/// engine may use it as an evaluation target.
#[derive(Debug)]
pub enum BufferMut<'a> {
    /// An exclusive view of `i8` elements.
    I8(&'a mut [i8]),
    /// An exclusive view of `i16` elements.
    I16(&'a mut [i16]),
    /// An exclusive view of `i32` elements.
    I32(&'a mut [i32]),
    /// An exclusive view of `i64` elements.
    I64(&'a mut [i64]),
    /// An exclusive view of `isize` elements.
    Int(&'a mut [isize]),
    /// An exclusive view of `u8` elements.
    U8(&'a mut [u8]),
    /// An exclusive view of `u16` elements.
    U16(&'a mut [u16]),
    /// An exclusive view of `u32` elements.
    U32(&'a mut [u32]),
    /// An exclusive view of `u64` elements.
    U64(&'a mut [u64]),
    /// An exclusive view of `usize` elements.
    UInt(&'a mut [usize]),
    /// An exclusive view of `f32` elements.
    F32(&'a mut [f32]),
    /// An exclusive view of `f64` elements.
    F64(&'a mut [f64]),
}

impl<'a> BufferRef<'a> {
    /// Returns the element kind of this view.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            BufferRef::I8(_) => ElementKind::I8,
            BufferRef::I16(_) => ElementKind::I16,
            BufferRef::I32(_) => ElementKind::I32,
            BufferRef::I64(_) => ElementKind::I64,
            BufferRef::Int(_) => ElementKind::Int,
            BufferRef::U8(_) => ElementKind::U8,
            BufferRef::U16(_) => ElementKind::U16,
            BufferRef::U32(_) => ElementKind::U32,
            BufferRef::U64(_) => ElementKind::U64,
            BufferRef::UInt(_) => ElementKind::UInt,
            BufferRef::F32(_) => ElementKind::F32,
            BufferRef::F64(_) => ElementKind::F64,
        }
    }

    /// Returns the number of elements in this view.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            BufferRef::I8(s) => s.len(),
            BufferRef::I16(s) => s.len(),
            BufferRef::I32(s) => s.len(),
            BufferRef::I64(s) => s.len(),
            BufferRef::Int(s) => s.len(),
            BufferRef::U8(s) => s.len(),
            BufferRef::U16(s) => s.len(),
            BufferRef::U32(s) => s.len(),
            BufferRef::U64(s) => s.len(),
            BufferRef::UInt(s) => s.len(),
            BufferRef::F32(s) => s.len(),
            BufferRef::F64(s) => s.len(),
        }
    }

    /// Returns `true` if this view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> BufferMut<'a> {
    /// Returns the element kind of this view.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            BufferMut::I8(_) => ElementKind::I8,
            BufferMut::I16(_) => ElementKind::I16,
            BufferMut::I32(_) => ElementKind::I32,
            BufferMut::I64(_) => ElementKind::I64,
            BufferMut::Int(_) => ElementKind::Int,
            BufferMut::U8(_) => ElementKind::U8,
            BufferMut::U16(_) => ElementKind::U16,
            BufferMut::U32(_) => ElementKind::U32,
            BufferMut::U64(_) => ElementKind::U64,
            BufferMut::UInt(_) => ElementKind::UInt,
            BufferMut::F32(_) => ElementKind::F32,
            BufferMut::F64(_) => ElementKind::F64,
        }
    }

    /// Returns the number of elements in this view.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            BufferMut::I8(s) => s.len(),
            BufferMut::I16(s) => s.len(),
            BufferMut::I32(s) => s.len(),
            BufferMut::I64(s) => s.len(),
            BufferMut::Int(s) => s.len(),
            BufferMut::U8(s) => s.len(),
            BufferMut::U16(s) => s.len(),
            BufferMut::U32(s) => s.len(),
            BufferMut::U64(s) => s.len(),
            BufferMut::UInt(s) => s.len(),
            BufferMut::F32(s) => s.len(),
            BufferMut::F64(s) => s.len(),
        }
    }

    /// Returns `true` if this view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The bridge between dynamically kinded buffers and typed element code.
///
/// Implemented for exactly the twelve primitives the kind registry names.
/// `KIND` ties each implementation to its registry entry; the accessors
/// return `None` when a buffer or value carries a different kind, which is
/// how the engine turns kind disagreement into a reportable fault instead
/// of a panic.
pub trait Element: Copy + 'static {
    /// The registry kind of this element type.
    const KIND: ElementKind;

    /// Wraps this element as a kinded scalar.
    fn into_value(self) -> ElementValue;

    /// Extracts an element of exactly this kind; no coercion is attempted.
    fn from_value(value: ElementValue) -> Option<Self>;

    /// Wraps a slice as a shared kinded view.
    fn buffer_of(slice: &[Self]) -> BufferRef<'_>;

    /// Wraps a slice as an exclusive kinded view.
    fn buffer_mut_of(slice: &mut [Self]) -> BufferMut<'_>;

    /// Recovers the typed slice from a shared view of this kind.
    fn slice_of(buffer: BufferRef<'_>) -> Option<&[Self]>;

    /// Recovers the typed slice from an exclusive view of this kind,
    /// consuming the handle.
    fn mut_slice_of(buffer: BufferMut<'_>) -> Option<&mut [Self]>;
}

macro_rules! impl_element {
    ($t:ty, $variant:ident) => {
        impl Element for $t {
            const KIND: ElementKind = ElementKind::$variant;

            #[inline(always)]
            fn into_value(self) -> ElementValue {
                ElementValue::$variant(self)
            }

            #[inline(always)]
            fn from_value(value: ElementValue) -> Option<Self> {
                match value {
                    ElementValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline(always)]
            fn buffer_of(slice: &[Self]) -> BufferRef<'_> {
                BufferRef::$variant(slice)
            }

            #[inline(always)]
            fn buffer_mut_of(slice: &mut [Self]) -> BufferMut<'_> {
                BufferMut::$variant(slice)
            }

            #[inline(always)]
            fn slice_of(buffer: BufferRef<'_>) -> Option<&[Self]> {
                match buffer {
                    BufferRef::$variant(s) => Some(s),
                    _ => None,
                }
            }

            #[inline(always)]
            fn mut_slice_of(buffer: BufferMut<'_>) -> Option<&mut [Self]> {
                match buffer {
                    BufferMut::$variant(s) => Some(s),
                    _ => None,
                }
            }
        }

        impl<'a> From<&'a [$t]> for BufferRef<'a> {
            #[inline]
            fn from(slice: &'a [$t]) -> Self {
                BufferRef::$variant(slice)
            }
        }

        impl<'a> From<&'a mut [$t]> for BufferMut<'a> {
            #[inline]
            fn from(slice: &'a mut [$t]) -> Self {
                BufferMut::$variant(slice)
            }
        }
    };
}

impl_element!(i8, I8);
impl_element!(i16, I16);
impl_element!(i32, I32);
impl_element!(i64, I64);
impl_element!(isize, Int);
impl_element!(u8, U8);
impl_element!(u16, U16);
impl_element!(u32, U32);
impl_element!(u64, U64);
impl_element!(usize, UInt);
impl_element!(f32, F32);
impl_element!(f64, F64);
