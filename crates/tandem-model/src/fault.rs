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

//! # Fault Taxonomy
//!
//! Every way an evaluation call can fail, split into structural faults
//! (the request itself is malformed, detected before any element is
//! written) and runtime faults (a specific element pair cannot be
//! computed, carrying the offending index).
//!
//! | Fault                  | Class         | When                                  | Suppressible |
//! |------------------------|---------------|---------------------------------------|--------------|
//! | `KindMismatch`         | `Parameter`   | buffer kinds disagree                 | no           |
//! | `UnrepresentableScalar`| `Parameter`   | scalar will not coerce to buffer kind | no           |
//! | `InvalidRequest`       | `Parameter`   | shape rules violated                  | no           |
//! | `ZeroDivision`         | `ZeroDivision`| divisor is zero (`-0.0` included)     | no           |
//! | `SignedOverflow`       | `Overflow`    | `MIN / -1` on a signed integer kind   | no           |
//! | `SpecialValue`         | `SpecialValue`| float operand is NaN or infinite      | yes          |
//!
//! Structural faults are atomic: no output element has been touched.
//! Runtime faults commit every element before the reported index and leave
//! the rest of the output untouched.

use crate::{kind::ElementKind, value::ElementValue};
use std::fmt::{Display, Formatter};

/// A failed evaluation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// Two buffer operands carry different element kinds.
    KindMismatch {
        /// The kind the call resolved to.
        expected: ElementKind,
        /// The kind actually found on the offending buffer.
        found: ElementKind,
    },
    /// A scalar operand cannot be coerced to the resolved kind without
    /// changing its value.
    UnrepresentableScalar {
        /// The scalar as supplied.
        value: ElementValue,
        /// The kind it was required to become.
        kind: ElementKind,
    },
    /// The request violates a shape rule, such as two scalar inputs or a
    /// buffer shorter than the active range.
    InvalidRequest {
        /// A short human-readable description of the violated rule.
        reason: &'static str,
    },
    /// The divisor at `index` is zero. Fatal for every kind; `-0.0`
    /// counts as zero.
    ZeroDivision {
        /// Position of the offending element pair.
        index: usize,
    },
    /// The pair at `index` is `MIN / -1` on a signed integer kind, whose
    /// true result does not fit the kind.
    SignedOverflow {
        /// Position of the offending element pair.
        index: usize,
    },
    /// A float operand at `index` is NaN or infinite and suppression is
    /// off.
    SpecialValue {
        /// Position of the offending element pair.
        index: usize,
    },
}

/// The coarse category of a [`Fault`], stable across element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultClass {
    /// The request itself is malformed; nothing was evaluated.
    Parameter,
    /// A zero divisor was hit.
    ZeroDivision,
    /// A signed integer result fell outside its kind.
    Overflow,
    /// A NaN or infinite float operand was hit.
    SpecialValue,
}

impl FaultClass {
    /// Returns `true` if faults of this class can be turned off per call.
    ///
    /// Only special values are negotiable; zero divisors, overflow and
    /// malformed requests always fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_model::fault::{Fault, FaultClass};
    /// let fault = Fault::ZeroDivision { index: 3 };
    /// assert_eq!(fault.class(), FaultClass::ZeroDivision);
    /// assert!(!fault.class().suppressible());
    /// assert!(FaultClass::SpecialValue.suppressible());
    /// ```
    #[inline]
    pub fn suppressible(self) -> bool {
        matches!(self, FaultClass::SpecialValue)
    }
}

impl Fault {
    /// Returns the class of this fault.
    #[inline]
    pub fn class(&self) -> FaultClass {
        match self {
            Fault::KindMismatch { .. }
            | Fault::UnrepresentableScalar { .. }
            | Fault::InvalidRequest { .. } => FaultClass::Parameter,
            Fault::ZeroDivision { .. } => FaultClass::ZeroDivision,
            Fault::SignedOverflow { .. } => FaultClass::Overflow,
            Fault::SpecialValue { .. } => FaultClass::SpecialValue,
        }
    }

    /// Returns the offending element index for runtime faults, `None` for
    /// structural ones.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Fault::ZeroDivision { index }
            | Fault::SignedOverflow { index }
            | Fault::SpecialValue { index } => Some(*index),
            _ => None,
        }
    }

    /// Returns `true` if the fault was raised before any element was
    /// written.
    #[inline]
    pub fn is_structural(&self) -> bool {
        self.class() == FaultClass::Parameter
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::KindMismatch { expected, found } => {
                write!(f, "Element kind mismatch: expected {}, found {}", expected, found)
            }
            Fault::UnrepresentableScalar { value, kind } => {
                write!(f, "Scalar {} cannot be represented as {}", value, kind)
            }
            Fault::InvalidRequest { reason } => {
                write!(f, "Invalid request: {}", reason)
            }
            Fault::ZeroDivision { index } => {
                write!(f, "Division by zero at element {}", index)
            }
            Fault::SignedOverflow { index } => {
                write!(f, "Signed overflow at element {}", index)
            }
            Fault::SpecialValue { index } => {
                write!(f, "Special value (NaN or infinity) at element {}", index)
            }
        }
    }
}

impl std::error::Error for Fault {}
