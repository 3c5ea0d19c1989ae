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

//! # Range Tests and Clamping
//!
//! Ordering predicates for any `T: PartialOrd`. The functions here never
//! normalise their bounds: `between(5, 10, 0)` is simply `false`, and
//! `clamp` with `min > max` returns whatever the two comparisons select.
//!
//! Incomparable values (for example `f64::NAN`) make every predicate return
//! `false`, because each one is defined through `PartialOrd::partial_cmp`.
//!
//! ## Usage
//!
//! ```rust
//! use cleat_core::cmp::bounds::{Inclusion, between, between_with, clamp};
//!
//! assert!(between(5, 0, 10));
//! assert!(!between(10, 0, 10));
//! assert!(between_with(10, 0, 10, Inclusion::UPPER));
//! assert_eq!(clamp(42, 0, 10), 10);
//! ```
//!
//! Values that may be absent go through the `try_*` variants, which reject a
//! missing value with [`CompareError::MissingValue`]:
//!
//! ```rust
//! use cleat_core::cmp::bounds::try_between;
//! use cleat_core::error::CompareError;
//!
//! assert_eq!(try_between(Some(&3), &0, &5), Ok(true));
//! assert!(matches!(
//!     try_between(None, &0, &5),
//!     Err(CompareError::MissingValue { operation: "between" })
//! ));
//! ```

use crate::error::CompareError;
use std::cmp::Ordering;

/// Which bounds of a range test count as inside the range.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::cmp::bounds::{Inclusion, between_with};
///
/// assert!(!between_with(0, 0, 10, Inclusion::EXCLUSIVE));
/// assert!(between_with(0, 0, 10, Inclusion::LOWER));
/// assert!(between_with(0, 0, 10, Inclusion::new(true, false)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inclusion {
    /// Whether a value equal to the lower bound is inside the range.
    pub lower: bool,
    /// Whether a value equal to the upper bound is inside the range.
    pub upper: bool,
}

impl Inclusion {
    /// Both bounds excluded: `(lower, upper)`.
    pub const EXCLUSIVE: Self = Self::new(false, false);
    /// Both bounds included: `[lower, upper]`.
    pub const INCLUSIVE: Self = Self::new(true, true);
    /// Only the lower bound included: `[lower, upper)`.
    pub const LOWER: Self = Self::new(true, false);
    /// Only the upper bound included: `(lower, upper]`.
    pub const UPPER: Self = Self::new(false, true);

    /// Creates a new `Inclusion` from the two flags.
    #[inline]
    pub const fn new(lower: bool, upper: bool) -> Self {
        Self { lower, upper }
    }
}

impl std::fmt::Display for Inclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.lower { '[' } else { '(' };
        let close = if self.upper { ']' } else { ')' };
        write!(f, "{open}lower, upper{close}")
    }
}

/// Returns `true` if `value` lies strictly between `lower` and `upper`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::cmp::bounds::between;
///
/// assert!(between(1.5, 1.0, 2.0));
/// assert!(!between(1.0, 1.0, 2.0));
/// // Bounds are not reordered.
/// assert!(!between(1.5, 2.0, 1.0));
/// ```
#[inline]
pub fn between<T>(value: T, lower: T, upper: T) -> bool
where
    T: PartialOrd,
{
    between_with(value, lower, upper, Inclusion::EXCLUSIVE)
}

/// Returns `true` if `value` lies strictly between `lower` and `upper`, or
/// equals a bound that `inclusion` marks as included.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::cmp::bounds::{Inclusion, between_with};
///
/// assert!(between_with(10, 0, 10, Inclusion::INCLUSIVE));
/// assert!(!between_with(10, 0, 10, Inclusion::LOWER));
/// ```
#[inline]
pub fn between_with<T>(value: T, lower: T, upper: T, inclusion: Inclusion) -> bool
where
    T: PartialOrd,
{
    let above_lower = match value.partial_cmp(&lower) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => inclusion.lower,
        _ => false,
    };
    let below_upper = match value.partial_cmp(&upper) {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => inclusion.upper,
        _ => false,
    };
    above_lower && below_upper
}

/// Restricts `value` to `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, and `value`
/// otherwise. The result is always one of the three arguments.
///
/// Unlike [`Ord::clamp`] this never panics. When `min > max` the bounds are
/// not swapped; a value below `min` still yields `min` and a value above
/// `max` (but not below `min`) yields `max`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::cmp::bounds::clamp;
///
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(7, 0, 10), 7);
/// assert_eq!(clamp(11, 0, 10), 10);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns `true` if `value < other`.
#[inline]
pub fn less_than<T>(value: &T, other: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    matches!(value.partial_cmp(other), Some(Ordering::Less))
}

/// Returns `true` if `value <= other`.
#[inline]
pub fn less_or_equal<T>(value: &T, other: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    matches!(
        value.partial_cmp(other),
        Some(Ordering::Less | Ordering::Equal)
    )
}

/// Returns `true` if `value > other`.
#[inline]
pub fn greater_than<T>(value: &T, other: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    matches!(value.partial_cmp(other), Some(Ordering::Greater))
}

/// Returns `true` if `value >= other`.
#[inline]
pub fn greater_or_equal<T>(value: &T, other: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    matches!(
        value.partial_cmp(other),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

/// Returns `true` if `value` compares equal to `other`.
///
/// This is equality through the ordering, not through `PartialEq`.
/// For well-behaved types the two agree.
#[inline]
pub fn equal_to<T>(value: &T, other: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    matches!(value.partial_cmp(other), Some(Ordering::Equal))
}

/// Like [`between`], but rejects a missing `value`.
///
/// # Errors
///
/// Returns [`CompareError::MissingValue`] if `value` is `None`.
#[inline]
pub fn try_between<T>(value: Option<&T>, lower: &T, upper: &T) -> Result<bool, CompareError>
where
    T: PartialOrd,
{
    let value = value.ok_or(CompareError::missing("between"))?;
    Ok(between(value, lower, upper))
}

/// Like [`between_with`], but rejects a missing `value`.
///
/// # Errors
///
/// Returns [`CompareError::MissingValue`] if `value` is `None`.
#[inline]
pub fn try_between_with<T>(
    value: Option<&T>,
    lower: &T,
    upper: &T,
    inclusion: Inclusion,
) -> Result<bool, CompareError>
where
    T: PartialOrd,
{
    let value = value.ok_or(CompareError::missing("between"))?;
    Ok(between_with(value, lower, upper, inclusion))
}

/// Like [`clamp`], but rejects a missing `value`.
///
/// # Errors
///
/// Returns [`CompareError::MissingValue`] if `value` is `None`.
#[inline]
pub fn try_clamp<T>(value: Option<T>, min: T, max: T) -> Result<T, CompareError>
where
    T: PartialOrd,
{
    let value = value.ok_or(CompareError::missing("clamp"))?;
    Ok(clamp(value, min, max))
}

macro_rules! try_relation {
    ($(#[$doc:meta])* $name:ident, $inner:ident, $op:literal) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns [`CompareError::MissingValue`] if `value` is `None`.
        #[inline]
        pub fn $name<T>(value: Option<&T>, other: &T) -> Result<bool, CompareError>
        where
            T: PartialOrd + ?Sized,
        {
            let value = value.ok_or(CompareError::missing($op))?;
            Ok($inner(value, other))
        }
    };
}

try_relation!(
    /// Like [`less_than`], but rejects a missing `value`.
    try_less_than,
    less_than,
    "less_than"
);
try_relation!(
    /// Like [`less_or_equal`], but rejects a missing `value`.
    try_less_or_equal,
    less_or_equal,
    "less_or_equal"
);
try_relation!(
    /// Like [`greater_than`], but rejects a missing `value`.
    try_greater_than,
    greater_than,
    "greater_than"
);
try_relation!(
    /// Like [`greater_or_equal`], but rejects a missing `value`.
    try_greater_or_equal,
    greater_or_equal,
    "greater_or_equal"
);
try_relation!(
    /// Like [`equal_to`], but rejects a missing `value`.
    try_equal_to,
    equal_to,
    "equal_to"
);

/// Method-call sugar for the free functions in this module.
///
/// Blanket-implemented for every `T: PartialOrd`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::cmp::bounds::{BoundsExt, Inclusion};
///
/// assert!(5.is_between(&0, &10));
/// assert!(10.is_between_with(&0, &10, Inclusion::INCLUSIVE));
/// assert_eq!(15.clamp_between(0, 10), 10);
/// assert!(3.is_less_than(&4));
/// ```
pub trait BoundsExt: PartialOrd {
    /// See [`between`].
    #[inline]
    fn is_between(&self, lower: &Self, upper: &Self) -> bool {
        between(self, lower, upper)
    }

    /// See [`between_with`].
    #[inline]
    fn is_between_with(&self, lower: &Self, upper: &Self, inclusion: Inclusion) -> bool {
        between_with(self, lower, upper, inclusion)
    }

    /// See [`clamp`].
    #[inline]
    fn clamp_between(self, min: Self, max: Self) -> Self
    where
        Self: Sized,
    {
        clamp(self, min, max)
    }

    /// See [`less_than`].
    #[inline]
    fn is_less_than(&self, other: &Self) -> bool {
        less_than(self, other)
    }

    /// See [`less_or_equal`].
    #[inline]
    fn is_less_or_equal(&self, other: &Self) -> bool {
        less_or_equal(self, other)
    }

    /// See [`greater_than`].
    #[inline]
    fn is_greater_than(&self, other: &Self) -> bool {
        greater_than(self, other)
    }

    /// See [`greater_or_equal`].
    #[inline]
    fn is_greater_or_equal(&self, other: &Self) -> bool {
        greater_or_equal(self, other)
    }

    /// See [`equal_to`].
    #[inline]
    fn is_equal_to(&self, other: &Self) -> bool {
        equal_to(self, other)
    }
}

impl<T> BoundsExt for T where T: PartialOrd + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_strict() {
        assert!(between(5, 0, 10));
        assert!(!between(0, 0, 10));
        assert!(!between(10, 0, 10));
        assert!(!between(-1, 0, 10));
        assert!(!between(11, 0, 10));
    }

    #[test]
    fn test_between_matches_strict_definition() {
        for x in -3..=13 {
            assert_eq!(between(x, 0, 10), 0 < x && x < 10, "x = {x}");
        }
    }

    #[test]
    fn test_between_with_inclusion_flags() {
        assert!(between_with(0, 0, 10, Inclusion::LOWER));
        assert!(!between_with(10, 0, 10, Inclusion::LOWER));
        assert!(between_with(10, 0, 10, Inclusion::UPPER));
        assert!(!between_with(0, 0, 10, Inclusion::UPPER));
        assert!(between_with(0, 0, 10, Inclusion::INCLUSIVE));
        assert!(between_with(10, 0, 10, Inclusion::INCLUSIVE));
        // Inclusion never widens the range beyond the bounds.
        assert!(!between_with(11, 0, 10, Inclusion::INCLUSIVE));
    }

    #[test]
    fn test_between_does_not_normalise_bounds() {
        assert!(!between(5, 10, 0));
        assert!(!between_with(5, 10, 0, Inclusion::INCLUSIVE));
    }

    #[test]
    fn test_between_degenerate_range() {
        assert!(!between(3, 3, 3));
        assert!(!between_with(3, 3, 3, Inclusion::LOWER));
        assert!(between_with(3, 3, 3, Inclusion::INCLUSIVE));
    }

    #[test]
    fn test_between_nan_is_never_inside() {
        assert!(!between(f64::NAN, 0.0, 1.0));
        assert!(!between_with(f64::NAN, f64::NAN, f64::NAN, Inclusion::INCLUSIVE));
    }

    #[test]
    fn test_between_strings() {
        assert!(between("b", "a", "c"));
        assert!(!between("a", "a", "c"));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(10, 0, 10), 10);
        assert_eq!(clamp(50, 0, 10), 10);
    }

    #[test]
    fn test_clamp_stays_within_bounds() {
        for x in -20..=20 {
            let c = clamp(x, -5, 5);
            assert!((-5..=5).contains(&c));
            assert!(c == -5 || c == 5 || c == x);
        }
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        // min > max: below min picks min, otherwise anything above max picks max.
        assert_eq!(clamp(0, 10, 5), 10);
        assert_eq!(clamp(7, 10, 5), 10);
        assert_eq!(clamp(20, 10, 5), 5);
    }

    #[test]
    fn test_relations() {
        assert!(less_than(&1, &2));
        assert!(!less_than(&2, &2));
        assert!(less_or_equal(&2, &2));
        assert!(!less_or_equal(&3, &2));
        assert!(greater_than(&3, &2));
        assert!(!greater_than(&2, &2));
        assert!(greater_or_equal(&2, &2));
        assert!(!greater_or_equal(&1, &2));
        assert!(equal_to(&2, &2));
        assert!(!equal_to(&1, &2));
    }

    #[test]
    fn test_relations_nan() {
        let nan = f32::NAN;
        assert!(!less_than(&nan, &1.0));
        assert!(!less_or_equal(&nan, &1.0));
        assert!(!greater_than(&nan, &1.0));
        assert!(!greater_or_equal(&nan, &1.0));
        assert!(!equal_to(&nan, &nan));
    }

    #[test]
    fn test_relations_unsized() {
        assert!(less_than("apple", "banana"));
        assert!(greater_or_equal::<[i32]>(&[2, 0], &[1, 9]));
    }

    #[test]
    fn test_try_variants_present() {
        assert_eq!(try_between(Some(&5), &0, &10), Ok(true));
        assert_eq!(try_between_with(Some(&10), &0, &10, Inclusion::UPPER), Ok(true));
        assert_eq!(try_clamp(Some(12), 0, 10), Ok(10));
        assert_eq!(try_less_than(Some(&1), &2), Ok(true));
        assert_eq!(try_less_or_equal(Some(&3), &2), Ok(false));
        assert_eq!(try_greater_than(Some(&3), &2), Ok(true));
        assert_eq!(try_greater_or_equal(Some(&2), &2), Ok(true));
        assert_eq!(try_equal_to(Some(&2), &3), Ok(false));
    }

    #[test]
    fn test_try_variants_missing() {
        assert_eq!(
            try_between::<i32>(None, &0, &10),
            Err(CompareError::MissingValue {
                operation: "between"
            })
        );
        assert_eq!(
            try_between_with::<i32>(None, &0, &10, Inclusion::INCLUSIVE),
            Err(CompareError::missing("between"))
        );
        assert_eq!(
            try_clamp::<i32>(None, 0, 10),
            Err(CompareError::missing("clamp"))
        );
        assert_eq!(
            try_less_than::<i32>(None, &0),
            Err(CompareError::missing("less_than"))
        );
        assert_eq!(
            try_less_or_equal::<i32>(None, &0),
            Err(CompareError::missing("less_or_equal"))
        );
        assert_eq!(
            try_greater_than::<i32>(None, &0),
            Err(CompareError::missing("greater_than"))
        );
        assert_eq!(
            try_greater_or_equal::<i32>(None, &0),
            Err(CompareError::missing("greater_or_equal"))
        );
        assert_eq!(
            try_equal_to::<i32>(None, &0),
            Err(CompareError::missing("equal_to"))
        );
    }

    #[test]
    fn test_bounds_ext() {
        assert!(5u8.is_between(&1, &9));
        assert!(9u8.is_between_with(&1, &9, Inclusion::UPPER));
        assert_eq!((-4i64).clamp_between(0, 3), 0);
        assert!("x".is_greater_than("a"));
        assert!(2.0f64.is_less_or_equal(&2.0));
        assert!(2.0f64.is_greater_or_equal(&2.0));
        assert!(7.is_equal_to(&7));
    }

    #[test]
    fn test_inclusion_display() {
        assert_eq!(Inclusion::EXCLUSIVE.to_string(), "(lower, upper)");
        assert_eq!(Inclusion::INCLUSIVE.to_string(), "[lower, upper]");
        assert_eq!(Inclusion::LOWER.to_string(), "[lower, upper)");
        assert_eq!(Inclusion::default(), Inclusion::EXCLUSIVE);
    }
}
