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

//! # Scalar Conversion
//!
//! Converts a [`Scalar`] into a statically known primitive type with fixed,
//! locale-independent rules:
//!
//! - Text is parsed with `FromStr`: `.` as the decimal separator, no digit
//!   grouping. Surrounding whitespace is trimmed unless the [`Converter`] is
//!   configured otherwise. Text to `char` is never trimmed.
//! - Booleans parse case-insensitively from `true` / `false`. Numbers become
//!   `true` when non-zero; `true` / `false` become `1` / `0`.
//! - Floats become integers by rounding half to even (configurable to
//!   truncation). `NaN`, infinities and values that do not fit are rejected.
//! - Narrowing into `f32` rejects finite values beyond `f32::MAX` instead of
//!   saturating to infinity. Text only yields an infinity when it spells one
//!   (`inf`, `-Infinity`, ...).
//! - Integers and floats are range-checked through `num_traits::NumCast`.
//!
//! ## Two flavours
//!
//! [`try_cast_to`] is strict and reports every failure as a
//! [`ConversionError`].
//!
//! [`cast_to`] and [`cast_or`] **mask failures**. Whenever the conversion
//! fails they return `T::default()` (or the given fallback) and the error is
//! dropped after a `debug`-level `tracing` event. A caller cannot tell
//! "the input really was `0`" apart from "the input was garbage". Use them
//! only where that ambiguity is acceptable.
//!
//! ```rust
//! use cleat_core::convert::{cast_to, try_cast_to};
//!
//! assert_eq!(cast_to::<i32>("42"), 42);
//! assert_eq!(cast_to::<i32>("not a number"), 0); // masked
//! assert!(try_cast_to::<i32>("not a number").is_err());
//! ```

use super::scalar::Scalar;
use crate::error::ConversionError;
use num_traits::{Float, NumCast, PrimInt};
use std::str::FromStr;

/// How a floating point value is turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatToInt {
    /// Round to the nearest integer; ties go to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    #[default]
    RoundHalfEven,
    /// Drop the fractional part (`2.9 -> 2`, `-2.9 -> -2`).
    Truncate,
}

/// A configurable scalar converter.
///
/// The default configuration trims whitespace around text input and rounds
/// floats half to even when an integer is requested.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::convert::{Converter, FloatToInt};
///
/// let strict = Converter::new().trim_whitespace(false);
/// assert!(strict.try_convert::<u8>(" 7 ").is_err());
///
/// let truncating = Converter::new().float_to_int(FloatToInt::Truncate);
/// assert_eq!(truncating.try_convert::<i32>(2.9), Ok(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Converter {
    trim_whitespace: bool,
    float_to_int: FloatToInt,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            float_to_int: FloatToInt::RoundHalfEven,
        }
    }
}

impl Converter {
    /// Creates a new `Converter` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether surrounding whitespace is removed before parsing text.
    #[inline]
    pub fn trim_whitespace(mut self, yes: bool) -> Self {
        self.trim_whitespace = yes;
        self
    }

    /// Configures how floats are turned into integers.
    #[inline]
    pub fn float_to_int(mut self, mode: FloatToInt) -> Self {
        self.float_to_int = mode;
        self
    }

    /// Returns whether text is trimmed before parsing.
    #[inline]
    pub fn trims_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Returns the float-to-integer mode.
    #[inline]
    pub fn float_to_int_mode(&self) -> FloatToInt {
        self.float_to_int
    }

    /// Converts `value` into `T`, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] describing why `value` has no `T`
    /// representation.
    #[inline]
    pub fn try_convert<'a, T>(&self, value: impl Into<Scalar<'a>>) -> Result<T, ConversionError>
    where
        T: FromScalar,
    {
        T::from_scalar(&value.into(), self)
    }

    /// Converts `value` into `T`, returning `T::default()` on any failure.
    ///
    /// **Failures are masked.** See the [module documentation](self).
    #[inline]
    pub fn convert<'a, T>(&self, value: impl Into<Scalar<'a>>) -> T
    where
        T: FromScalar + Default,
    {
        self.convert_or_else(value, T::default)
    }

    /// Converts `value` into `T`, returning `fallback` on any failure.
    ///
    /// **Failures are masked.** See the [module documentation](self).
    #[inline]
    pub fn convert_or<'a, T>(&self, value: impl Into<Scalar<'a>>, fallback: T) -> T
    where
        T: FromScalar,
    {
        self.convert_or_else(value, || fallback)
    }

    fn convert_or_else<'a, T, F>(&self, value: impl Into<Scalar<'a>>, fallback: F) -> T
    where
        T: FromScalar,
        F: FnOnce() -> T,
    {
        match self.try_convert(value) {
            Ok(v) => v,
            Err(error) => {
                tracing::debug!(
                    %error,
                    target_type = T::TYPE_NAME,
                    "conversion failed, substituting fallback"
                );
                fallback()
            }
        }
    }

    #[inline]
    fn prepare<'s>(&self, text: &'s str) -> &'s str {
        if self.trim_whitespace {
            text.trim()
        } else {
            text
        }
    }

    #[inline]
    fn float_to_integral(&self, value: f64) -> f64 {
        match self.float_to_int {
            FloatToInt::RoundHalfEven => value.round_ties_even(),
            FloatToInt::Truncate => value.trunc(),
        }
    }
}

/// Types that can be produced from a [`Scalar`].
pub trait FromScalar: Sized {
    /// The type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Converts `value` according to the rules of `converter`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] if `value` has no representation in `Self`.
    fn from_scalar(value: &Scalar<'_>, converter: &Converter) -> Result<Self, ConversionError>;
}

fn unsupported<T: FromScalar>(value: &Scalar<'_>) -> ConversionError {
    ConversionError::Unsupported {
        source_kind: value.kind(),
        target: T::TYPE_NAME,
    }
}

fn out_of_range<T: FromScalar>(value: impl ToString) -> ConversionError {
    ConversionError::OutOfRange {
        value: value.to_string(),
        target: T::TYPE_NAME,
    }
}

fn parse_error<T: FromScalar>(token: &str) -> ConversionError {
    ConversionError::Parse {
        token: token.to_string(),
        target: T::TYPE_NAME,
    }
}

fn integer_from_scalar<T>(value: &Scalar<'_>, converter: &Converter) -> Result<T, ConversionError>
where
    T: FromScalar + PrimInt + FromStr,
{
    match value {
        Scalar::Unit => Err(ConversionError::Missing {
            target: T::TYPE_NAME,
        }),
        Scalar::Bool(b) => Ok(if *b { T::one() } else { T::zero() }),
        Scalar::Int(i) => <T as NumCast>::from(*i).ok_or_else(|| out_of_range::<T>(i)),
        Scalar::UInt(u) => <T as NumCast>::from(*u).ok_or_else(|| out_of_range::<T>(u)),
        Scalar::Float(f) => {
            if !f.is_finite() {
                return Err(ConversionError::NotFinite {
                    value: f.to_string(),
                    target: T::TYPE_NAME,
                });
            }
            let integral = converter.float_to_integral(*f);
            <T as NumCast>::from(integral).ok_or_else(|| out_of_range::<T>(f))
        }
        Scalar::Char(c) => {
            let code_point = <u32 as From<char>>::from(*c);
            <T as NumCast>::from(code_point).ok_or_else(|| out_of_range::<T>(c))
        }
        Scalar::Str(s) => {
            let token = converter.prepare(s);
            token.parse::<T>().map_err(|_| parse_error::<T>(s))
        }
    }
}

fn float_from_scalar<T>(value: &Scalar<'_>, converter: &Converter) -> Result<T, ConversionError>
where
    T: FromScalar + Float + FromStr,
{
    match value {
        Scalar::Unit => Err(ConversionError::Missing {
            target: T::TYPE_NAME,
        }),
        Scalar::Bool(b) => Ok(if *b { T::one() } else { T::zero() }),
        Scalar::Int(i) => narrow_float(<T as NumCast>::from(*i), i),
        Scalar::UInt(u) => narrow_float(<T as NumCast>::from(*u), u),
        Scalar::Float(f) if !f.is_finite() => {
            <T as NumCast>::from(*f).ok_or_else(|| out_of_range::<T>(f))
        }
        Scalar::Float(f) => narrow_float(<T as NumCast>::from(*f), f),
        Scalar::Char(_) => Err(unsupported::<T>(value)),
        Scalar::Str(s) => {
            let token = converter.prepare(s);
            let parsed = token.parse::<T>().map_err(|_| parse_error::<T>(s))?;
            if parsed.is_infinite() && !is_infinity_literal(token) {
                return Err(out_of_range::<T>(token));
            }
            Ok(parsed)
        }
    }
}

/// Rejects a finite source that saturated to infinity in the target float type.
///
/// `NumCast` rounds overflowing magnitudes to `±inf` instead of returning
/// `None`, so the range check has to happen after the cast.
fn narrow_float<T>(cast: Option<T>, source: impl ToString) -> Result<T, ConversionError>
where
    T: FromScalar + Float,
{
    match cast {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(out_of_range::<T>(source)),
    }
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_from_scalar {
    ($helper:ident, $($t:ty),+) => {
        $(
            impl FromScalar for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn from_scalar(
                    value: &Scalar<'_>,
                    converter: &Converter,
                ) -> Result<Self, ConversionError> {
                    $helper(value, converter)
                }
            }
        )+
    };
}

impl_from_scalar!(
    integer_from_scalar,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize
);
impl_from_scalar!(float_from_scalar, f32, f64);

impl FromScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_scalar(value: &Scalar<'_>, converter: &Converter) -> Result<Self, ConversionError> {
        match value {
            Scalar::Unit => Err(ConversionError::Missing {
                target: Self::TYPE_NAME,
            }),
            Scalar::Bool(b) => Ok(*b),
            Scalar::Int(i) => Ok(*i != 0),
            Scalar::UInt(u) => Ok(*u != 0),
            Scalar::Float(f) => Ok(*f != 0.0),
            Scalar::Char(_) => Err(unsupported::<Self>(value)),
            Scalar::Str(s) => {
                let token = converter.prepare(s);
                if token.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if token.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(parse_error::<Self>(s))
                }
            }
        }
    }
}

impl FromScalar for char {
    const TYPE_NAME: &'static str = "char";

    fn from_scalar(value: &Scalar<'_>, _converter: &Converter) -> Result<Self, ConversionError> {
        match value {
            Scalar::Unit => Err(ConversionError::Missing {
                target: Self::TYPE_NAME,
            }),
            Scalar::Char(c) => Ok(*c),
            Scalar::Int(i) => u32::try_from(*i)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| out_of_range::<Self>(i)),
            Scalar::UInt(u) => u32::try_from(*u)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| out_of_range::<Self>(u)),
            Scalar::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(parse_error::<Self>(s)),
                }
            }
            Scalar::Bool(_) | Scalar::Float(_) => Err(unsupported::<Self>(value)),
        }
    }
}

impl FromScalar for String {
    const TYPE_NAME: &'static str = "String";

    fn from_scalar(value: &Scalar<'_>, _converter: &Converter) -> Result<Self, ConversionError> {
        match value {
            Scalar::Unit => Err(ConversionError::Missing {
                target: Self::TYPE_NAME,
            }),
            Scalar::Str(s) => Ok(s.to_string()),
            other => Ok(other.to_string()),
        }
    }
}

/// Converts `value` into `T` with the default [`Converter`], reporting any failure.
///
/// # Errors
///
/// Returns a [`ConversionError`] if `value` has no `T` representation.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::convert::try_cast_to;
/// # use cleat_core::error::ConversionError;
///
/// assert_eq!(try_cast_to::<u8>(200i64), Ok(200));
/// assert_eq!(
///     try_cast_to::<u8>(300i64),
///     Err(ConversionError::OutOfRange { value: "300".into(), target: "u8" })
/// );
/// ```
#[inline]
pub fn try_cast_to<'a, T>(value: impl Into<Scalar<'a>>) -> Result<T, ConversionError>
where
    T: FromScalar,
{
    Converter::default().try_convert(value)
}

/// Converts `value` into `T` with the default [`Converter`], returning
/// `T::default()` if the conversion fails.
///
/// **This masks failures.** A result of `0`, `false` or `""` may mean the
/// input was exactly that, or that it could not be converted at all. Use
/// [`try_cast_to`] when the difference matters.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::convert::cast_to;
///
/// assert_eq!(cast_to::<f64>(" 2.5 "), 2.5);
/// assert_eq!(cast_to::<i32>("not a number"), 0);
/// assert_eq!(cast_to::<bool>(None::<bool>), false);
/// ```
#[inline]
pub fn cast_to<'a, T>(value: impl Into<Scalar<'a>>) -> T
where
    T: FromScalar + Default,
{
    Converter::default().convert(value)
}

/// Converts `value` into `T` with the default [`Converter`], returning
/// `fallback` if the conversion fails.
///
/// **This masks failures**, like [`cast_to`].
///
/// # Examples
///
/// ```rust
/// # use cleat_core::convert::cast_or;
///
/// assert_eq!(cast_or("12", -1i32), 12);
/// assert_eq!(cast_or("twelve", -1i32), -1);
/// ```
#[inline]
pub fn cast_or<'a, T>(value: impl Into<Scalar<'a>>, fallback: T) -> T
where
    T: FromScalar,
{
    Converter::default().convert_or(value, fallback)
}
