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

//! # Element Kind Registry
//!
//! The closed set of element kinds the engine can evaluate: four fixed
//! signed integer widths, the native signed width, four fixed unsigned
//! widths, the native unsigned width, and two float widths. Each kind knows
//! its external tag, its bit width and byte size, and (for integer kinds)
//! its representable limits.
//!
//! The registry is a pure lookup table; no state is held anywhere. Parsing
//! an unknown tag yields a dedicated [`UnknownKindTag`] error so callers at
//! the boundary can report it as a parameter problem.

use crate::value::ElementValue;
use std::{fmt, str::FromStr};

/// The element kinds supported by the engine.
///
/// `Int` and `UInt` are the native pointer-width pair (`isize`/`usize`);
/// their widths therefore depend on the target platform.
///
/// # Examples
///
/// ```rust
/// # use tandem_model::kind::ElementKind;
/// assert_eq!(ElementKind::from_tag("int32"), Ok(ElementKind::I32));
/// assert_eq!(ElementKind::I32.tag(), "int32");
/// assert!(ElementKind::from_tag("complex64").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integer (`i8`), tag `int8`.
    I8,
    /// 16-bit signed integer (`i16`), tag `int16`.
    I16,
    /// 32-bit signed integer (`i32`), tag `int32`.
    I32,
    /// 64-bit signed integer (`i64`), tag `int64`.
    I64,
    /// Native-width signed integer (`isize`), tag `int`.
    Int,
    /// 8-bit unsigned integer (`u8`), tag `uint8`.
    U8,
    /// 16-bit unsigned integer (`u16`), tag `uint16`.
    U16,
    /// 32-bit unsigned integer (`u32`), tag `uint32`.
    U32,
    /// 64-bit unsigned integer (`u64`), tag `uint64`.
    U64,
    /// Native-width unsigned integer (`usize`), tag `uint`.
    UInt,
    /// 32-bit float (`f32`), tag `float32`.
    F32,
    /// 64-bit float (`f64`), tag `float64`.
    F64,
}

/// The error returned when a kind tag does not name a supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKindTag {
    /// The tag that failed to parse.
    pub tag: String,
}

impl fmt::Display for UnknownKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown element kind tag '{}'", self.tag)
    }
}

impl std::error::Error for UnknownKindTag {}

impl ElementKind {
    /// Every supported kind, in registry order. The position of a kind in
    /// this array is its stable numeric code at the C boundary.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::Int,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
        ElementKind::UInt,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Returns the external tag of this kind.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            ElementKind::I8 => "int8",
            ElementKind::I16 => "int16",
            ElementKind::I32 => "int32",
            ElementKind::I64 => "int64",
            ElementKind::Int => "int",
            ElementKind::U8 => "uint8",
            ElementKind::U16 => "uint16",
            ElementKind::U32 => "uint32",
            ElementKind::U64 => "uint64",
            ElementKind::UInt => "uint",
            ElementKind::F32 => "float32",
            ElementKind::F64 => "float64",
        }
    }

    /// Looks a kind up by its external tag.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownKindTag> {
        match tag {
            "int8" => Ok(ElementKind::I8),
            "int16" => Ok(ElementKind::I16),
            "int32" => Ok(ElementKind::I32),
            "int64" => Ok(ElementKind::I64),
            "int" => Ok(ElementKind::Int),
            "uint8" => Ok(ElementKind::U8),
            "uint16" => Ok(ElementKind::U16),
            "uint32" => Ok(ElementKind::U32),
            "uint64" => Ok(ElementKind::U64),
            "uint" => Ok(ElementKind::UInt),
            "float32" => Ok(ElementKind::F32),
            "float64" => Ok(ElementKind::F64),
            _ => Err(UnknownKindTag {
                tag: tag.to_string(),
            }),
        }
    }

    /// Returns `true` for the two float kinds.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Returns `true` for the ten integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` if the kind can represent negative values.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            ElementKind::I8
                | ElementKind::I16
                | ElementKind::I32
                | ElementKind::I64
                | ElementKind::Int
                | ElementKind::F32
                | ElementKind::F64
        )
    }

    /// Returns the width of one element in bits.
    #[inline]
    pub const fn width_bits(self) -> u32 {
        match self {
            ElementKind::I8 => i8::BITS,
            ElementKind::I16 => i16::BITS,
            ElementKind::I32 => i32::BITS,
            ElementKind::I64 => i64::BITS,
            ElementKind::Int => isize::BITS,
            ElementKind::U8 => u8::BITS,
            ElementKind::U16 => u16::BITS,
            ElementKind::U32 => u32::BITS,
            ElementKind::U64 => u64::BITS,
            ElementKind::UInt => usize::BITS,
            ElementKind::F32 => 32,
            ElementKind::F64 => 64,
        }
    }

    /// Returns the size of one element in bytes.
    #[inline]
    pub const fn size_bytes(self) -> usize {
        (self.width_bits() / 8) as usize
    }

    /// Returns the smallest representable value of an integer kind, or
    /// `None` for float kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_model::{kind::ElementKind, value::ElementValue};
    /// assert_eq!(ElementKind::I8.min_value(), Some(ElementValue::I8(i8::MIN)));
    /// assert_eq!(ElementKind::U32.min_value(), Some(ElementValue::U32(0)));
    /// assert_eq!(ElementKind::F64.min_value(), None);
    /// ```
    pub fn min_value(self) -> Option<ElementValue> {
        match self {
            ElementKind::I8 => Some(ElementValue::I8(i8::MIN)),
            ElementKind::I16 => Some(ElementValue::I16(i16::MIN)),
            ElementKind::I32 => Some(ElementValue::I32(i32::MIN)),
            ElementKind::I64 => Some(ElementValue::I64(i64::MIN)),
            ElementKind::Int => Some(ElementValue::Int(isize::MIN)),
            ElementKind::U8 => Some(ElementValue::U8(u8::MIN)),
            ElementKind::U16 => Some(ElementValue::U16(u16::MIN)),
            ElementKind::U32 => Some(ElementValue::U32(u32::MIN)),
            ElementKind::U64 => Some(ElementValue::U64(u64::MIN)),
            ElementKind::UInt => Some(ElementValue::UInt(usize::MIN)),
            ElementKind::F32 | ElementKind::F64 => None,
        }
    }

    /// Returns the largest representable value of an integer kind, or
    /// `None` for float kinds.
    pub fn max_value(self) -> Option<ElementValue> {
        match self {
            ElementKind::I8 => Some(ElementValue::I8(i8::MAX)),
            ElementKind::I16 => Some(ElementValue::I16(i16::MAX)),
            ElementKind::I32 => Some(ElementValue::I32(i32::MAX)),
            ElementKind::I64 => Some(ElementValue::I64(i64::MAX)),
            ElementKind::Int => Some(ElementValue::Int(isize::MAX)),
            ElementKind::U8 => Some(ElementValue::U8(u8::MAX)),
            ElementKind::U16 => Some(ElementValue::U16(u16::MAX)),
            ElementKind::U32 => Some(ElementValue::U32(u32::MAX)),
            ElementKind::U64 => Some(ElementValue::U64(u64::MAX)),
            ElementKind::UInt => Some(ElementValue::UInt(usize::MAX)),
            ElementKind::F32 | ElementKind::F64 => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = UnknownKindTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
