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

//! Error types shared by the comparison and conversion helpers.
//!
//! Every fallible operation in this crate has exactly one failure mode, so
//! the error enums are small and carry just enough context (operation name,
//! offending token, target type) to produce a readable message.

use thiserror::Error;

/// The error type for comparisons that require a value to be present.
///
/// Returned by the `try_*` family in [`crate::cmp::bounds`] when the value
/// under test is `None`. A missing value cannot be ordered against anything,
/// so the comparison is rejected instead of defaulting to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CompareError {
    /// The value to compare was absent.
    #[error("cannot evaluate `{operation}`: the value to compare is missing")]
    MissingValue {
        /// The name of the comparison that was attempted (e.g. `"between"`).
        operation: &'static str,
    },
}

impl CompareError {
    #[inline]
    pub(crate) const fn missing(operation: &'static str) -> Self {
        Self::MissingValue { operation }
    }
}

/// The error type for strict scalar conversions.
///
/// Only [`crate::convert::try_cast_to`] and [`crate::convert::Converter::try_convert`]
/// surface this type. The masking variants swallow it and fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The source value was absent ([`crate::convert::Scalar::Unit`]).
    #[error("cannot convert a missing value to {target}")]
    Missing {
        /// The name of the requested target type.
        target: &'static str,
    },
    /// There is no conversion rule from the source kind to the target type.
    #[error("no conversion from {source_kind} to {target}")]
    Unsupported {
        /// The kind of the source value (e.g. `"char"`).
        source_kind: &'static str,
        /// The name of the requested target type.
        target: &'static str,
    },
    /// A string token could not be parsed as the target type.
    #[error("could not parse token '{token}' as {target}")]
    Parse {
        /// The string token that failed to parse.
        token: String,
        /// The name of the requested target type.
        target: &'static str,
    },
    /// The source value does not fit in the target type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange {
        /// The rendered source value.
        value: String,
        /// The name of the requested target type.
        target: &'static str,
    },
    /// A floating point source was `NaN` or infinite and the target is not a float.
    #[error("non-finite value {value} cannot be converted to {target}")]
    NotFinite {
        /// The rendered source value.
        value: String,
        /// The name of the requested target type.
        target: &'static str,
    },
}

impl ConversionError {
    /// Returns the name of the target type the failed conversion was aiming for.
    pub fn target(&self) -> &'static str {
        match self {
            Self::Missing { target }
            | Self::Unsupported { target, .. }
            | Self::Parse { target, .. }
            | Self::OutOfRange { target, .. }
            | Self::NotFinite { target, .. } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_error_display() {
        let e = CompareError::missing("between");
        assert_eq!(
            e.to_string(),
            "cannot evaluate `between`: the value to compare is missing"
        );
    }

    #[test]
    fn test_conversion_error_display() {
        let e = ConversionError::Parse {
            token: "abc".to_string(),
            target: "i32",
        };
        assert_eq!(e.to_string(), "could not parse token 'abc' as i32");

        let e = ConversionError::OutOfRange {
            value: "300".to_string(),
            target: "u8",
        };
        assert_eq!(e.to_string(), "value 300 is out of range for u8");
    }

    #[test]
    fn test_conversion_error_target() {
        assert_eq!(ConversionError::Missing { target: "bool" }.target(), "bool");
        let e = ConversionError::Unsupported {
            source_kind: "char",
            target: "f64",
        };
        assert_eq!(e.target(), "f64");
    }
}
