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

//! # Add-If-Absent Insertion
//!
//! `AddUnique` gives sequence and set containers a single insertion API that
//! skips items already present. Sequences (`Vec`, `VecDeque`, `SmallVec`)
//! test membership with `PartialEq` and append at the back; sets defer to
//! their own lookup.
//!
//! ## Return polarity
//!
//! [`AddUnique::add_unique`] reports whether the item was **already present**,
//! not whether it was inserted. [`crate::collections::map::MapExt::try_add`]
//! uses the opposite convention and reports whether it **inserted**. Both are
//! kept as-is so existing callers keep their meaning; read the method docs
//! before negating a result.
//!
//! ```rust
//! use cleat_core::collections::unique::AddUnique;
//!
//! let mut tags = vec!["red"];
//! assert!(!tags.add_unique("blue")); // was absent, inserted
//! assert!(tags.add_unique("red"));   // already present, skipped
//! assert_eq!(tags, vec!["red", "blue"]);
//! ```

use smallvec::SmallVec;
use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

/// A container that can insert an item only when it is not yet present.
pub trait AddUnique<T> {
    /// Returns `true` if the container holds an item equal to `item`.
    fn contains_item(&self, item: &T) -> bool;

    /// Inserts `item` unconditionally.
    fn push_item(&mut self, item: T);

    /// Inserts `item` unless an equal item is already present.
    ///
    /// Returns `true` if the item was **already present** (and therefore not
    /// inserted), `false` if it was inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::unique::AddUnique;
    /// use std::collections::HashSet;
    ///
    /// let mut seen = HashSet::new();
    /// assert!(!seen.add_unique(7));
    /// assert!(seen.add_unique(7));
    /// assert_eq!(seen.len(), 1);
    /// ```
    #[inline]
    fn add_unique(&mut self, item: T) -> bool {
        if self.contains_item(&item) {
            true
        } else {
            self.push_item(item);
            false
        }
    }

    /// Calls [`AddUnique::add_unique`] for each of `items`, in order.
    ///
    /// Returns how many items were **already present**. Duplicates within
    /// `items` count too: the first occurrence is inserted, later ones are
    /// reported as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::unique::AddUnique;
    ///
    /// let mut v = vec![1, 2];
    /// assert_eq!(v.add_range_unique([2, 3, 3, 4]), 2);
    /// assert_eq!(v, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    fn add_range_unique<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut present = 0;
        for item in items {
            if self.add_unique(item) {
                present += 1;
            }
        }
        present
    }
}

impl<T> AddUnique<T> for Vec<T>
where
    T: PartialEq,
{
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> AddUnique<T> for VecDeque<T>
where
    T: PartialEq,
{
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T, const N: usize> AddUnique<T> for SmallVec<T, N>
where
    T: PartialEq,
{
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.push(item);
    }
}

impl<T, S> AddUnique<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn add_unique(&mut self, item: T) -> bool {
        // Single lookup: `insert` returns false when the item was present.
        !self.insert(item)
    }
}

impl<T> AddUnique<T> for BTreeSet<T>
where
    T: Ord,
{
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn add_unique(&mut self, item: T) -> bool {
        !self.insert(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_add_unique_twice_keeps_one_occurrence_vec() {
        let mut v: Vec<i32> = Vec::new();
        assert!(!v.add_unique(5));
        assert!(v.add_unique(5));
        assert_eq!(v.iter().filter(|&&x| x == 5).count(), 1);
    }

    #[test]
    fn test_add_unique_preserves_insertion_order() {
        let mut v = vec!["a"];
        v.add_unique("c");
        v.add_unique("b");
        v.add_unique("a");
        assert_eq!(v, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_add_unique_vec_deque() {
        let mut d: VecDeque<char> = VecDeque::from(vec!['x']);
        assert!(d.add_unique('x'));
        assert!(!d.add_unique('y'));
        assert_eq!(d.back(), Some(&'y'));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_add_unique_small_vec() {
        let mut s: SmallVec<u8, 4> = SmallVec::new();
        assert_eq!(s.add_range_unique([1, 2, 1, 3, 2]), 2);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_add_unique_hash_set() {
        let mut set: HashSet<String> = HashSet::new();
        assert!(!set.add_unique("a".to_string()));
        assert!(set.add_unique("a".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_unique_fx_hash_set() {
        let mut set: FxHashSet<u64> = FxHashSet::default();
        assert!(!set.add_unique(1));
        assert!(set.add_unique(1));
        assert_eq!(set.add_range_unique(0..4), 1);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_add_unique_btree_set() {
        let mut set = BTreeSet::from([3, 1]);
        assert!(set.add_unique(1));
        assert!(!set.add_unique(2));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_range_unique_counts_already_present() {
        let mut v = vec![1, 2, 3];
        assert_eq!(v.add_range_unique(vec![3, 4, 1, 5]), 2);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_add_range_unique_counts_duplicates_within_input() {
        let mut v: Vec<i32> = Vec::new();
        assert_eq!(v.add_range_unique([9, 9, 9]), 2);
        assert_eq!(v, vec![9]);
    }

    #[test]
    fn test_add_range_unique_empty_input() {
        let mut v = vec![1];
        assert_eq!(v.add_range_unique(std::iter::empty()), 0);
        assert_eq!(v, vec![1]);
    }
}
