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

//! The opaque source value accepted by the conversion helpers.
//!
//! `Scalar` erases the static type of a primitive while keeping enough of its
//! shape (signedness, float vs. integer, text) for the conversion rules to
//! stay exact. Every primitive, `&str`, `String`, `Cow<str>` and `Option<_>`
//! of those converts into a `Scalar` through `From`.

use std::borrow::Cow;

/// A dynamically typed primitive value.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::convert::Scalar;
///
/// assert_eq!(Scalar::from(-3i8), Scalar::Int(-3));
/// assert_eq!(Scalar::from(3u64), Scalar::UInt(3));
/// assert_eq!(Scalar::from("hi"), Scalar::Str("hi".into()));
/// assert_eq!(Scalar::from(None::<i32>), Scalar::Unit);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar<'a> {
    /// No value at all.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// Any signed integer, widened.
    Int(i128),
    /// Any unsigned integer, widened.
    UInt(u128),
    /// Any floating point number, widened.
    Float(f64),
    /// A single Unicode scalar value.
    Char(char),
    /// Text, borrowed or owned.
    Str(Cow<'a, str>),
}

impl Scalar<'_> {
    /// Returns a short name for the kind of value held, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
        }
    }

    /// Returns `true` if this is [`Scalar::Unit`].
    #[inline]
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Detaches the value from any borrowed text.
    pub fn into_owned(self) -> Scalar<'static> {
        match self {
            Self::Unit => Scalar::Unit,
            Self::Bool(b) => Scalar::Bool(b),
            Self::Int(i) => Scalar::Int(i),
            Self::UInt(u) => Scalar::UInt(u),
            Self::Float(f) => Scalar::Float(f),
            Self::Char(c) => Scalar::Char(c),
            Self::Str(s) => Scalar::Str(Cow::Owned(s.into_owned())),
        }
    }
}

impl std::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => write!(f, "<missing>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Scalar<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

scalar_from!(Int, i128, i8, i16, i32, i64, i128);
scalar_from!(UInt, u128, u8, u16, u32, u64, u128);
scalar_from!(Float, f64, f32, f64);

// `isize`/`usize` have no lossless `From` into the 128-bit types.
impl From<isize> for Scalar<'_> {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i128)
    }
}

impl From<usize> for Scalar<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u128)
    }
}

impl From<bool> for Scalar<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Scalar<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Scalar<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Scalar<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Self::Str(value)
    }
}

impl<'a, T> From<Option<T>> for Scalar<'a>
where
    T: Into<Scalar<'a>>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unit, Into::into)
    }
}
