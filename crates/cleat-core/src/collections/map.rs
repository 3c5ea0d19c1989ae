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

//! # Map Helpers
//!
//! Lookup-or-insert, insert-if-absent and last-write-wins merging for
//! `HashMap` (with any hasher, including `rustc_hash::FxBuildHasher`) and
//! `BTreeMap`.
//!
//! ## Merging
//!
//! [`merge_maps`] consumes its inputs. With a single input the same map is
//! handed back without copying; because it was moved in, the caller holds
//! the only handle to it and no aliasing can leak. [`merge_map_refs`] works
//! on borrowed inputs and always returns a freshly cloned map.
//!
//! Both return `None` for an empty input list rather than an empty map, so
//! "nothing to merge" stays distinguishable from "merged into nothing".
//!
//! ```rust
//! use cleat_core::collections::map::merge_maps;
//! use std::collections::BTreeMap;
//!
//! let a = BTreeMap::from([("a", 1), ("b", 2)]);
//! let b = BTreeMap::from([("b", 3), ("c", 4)]);
//! let merged = merge_maps([a, b]).unwrap();
//! assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]));
//! ```

use std::{
    collections::{BTreeMap, HashMap, btree_map, hash_map},
    hash::{BuildHasher, Hash},
};

/// Extension methods for key-value maps.
pub trait MapExt<K, V> {
    /// Returns the value stored under `key`, inserting `default` first if the
    /// key is absent.
    ///
    /// The insertion on a miss is a visible side effect: the map grows even
    /// though the call reads like a lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::map::MapExt;
    /// use std::collections::HashMap;
    ///
    /// let mut m: HashMap<&str, i32> = HashMap::new();
    /// assert_eq!(*m.get_or_add("missing", 5), 5);
    /// assert_eq!(*m.get_or_add("missing", 9), 5);
    /// assert_eq!(m.len(), 1);
    /// ```
    fn get_or_add(&mut self, key: K, default: V) -> &mut V;

    /// Like [`MapExt::get_or_add`], but only builds the default on a miss.
    fn get_or_add_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V;

    /// Returns a clone of the value stored under `key`, or `fallback` if the
    /// key is absent. Never inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::map::MapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let m = BTreeMap::from([(1, "one")]);
    /// assert_eq!(m.get_or(&1, "none"), "one");
    /// assert_eq!(m.get_or(&2, "none"), "none");
    /// assert_eq!(m.len(), 1);
    /// ```
    fn get_or(&self, key: &K, fallback: V) -> V
    where
        V: Clone;

    /// Inserts `value` under `key` only if the key is absent.
    ///
    /// Returns `true` if the value **was inserted**. Note this is the opposite
    /// convention from [`crate::collections::unique::AddUnique::add_unique`],
    /// which reports whether the item was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::map::MapExt;
    /// use std::collections::HashMap;
    ///
    /// let mut m = HashMap::new();
    /// assert!(m.try_add("k", 1));
    /// assert!(!m.try_add("k", 2));
    /// assert_eq!(m["k"], 1);
    /// ```
    fn try_add(&mut self, key: K, value: V) -> bool;

    /// Copies every entry of every source into `self`, in order, overwriting
    /// existing keys. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::collections::map::MapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let mut target = BTreeMap::from([("a", 1), ("b", 1)]);
    /// target
    ///     .merge_from([BTreeMap::from([("b", 2)]), BTreeMap::from([("b", 3), ("c", 3)])])
    ///     .merge_from([BTreeMap::from([("d", 4)])]);
    /// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 3), ("c", 3), ("d", 4)]));
    /// ```
    fn merge_from<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (K, V)>;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn get_or_add(&mut self, key: K, default: V) -> &mut V {
        self.entry(key).or_insert(default)
    }

    #[inline]
    fn get_or_add_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entry(key).or_insert_with(default)
    }

    #[inline]
    fn get_or(&self, key: &K, fallback: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(fallback)
    }

    #[inline]
    fn try_add(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            hash_map::Entry::Occupied(_) => false,
        }
    }

    fn merge_from<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (K, V)>,
    {
        for source in sources {
            self.extend(source);
        }
        self
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    #[inline]
    fn get_or_add(&mut self, key: K, default: V) -> &mut V {
        self.entry(key).or_insert(default)
    }

    #[inline]
    fn get_or_add_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entry(key).or_insert_with(default)
    }

    #[inline]
    fn get_or(&self, key: &K, fallback: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(fallback)
    }

    #[inline]
    fn try_add(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    fn merge_from<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (K, V)>,
    {
        for source in sources {
            self.extend(source);
        }
        self
    }
}

/// Merges owned maps with last-write-wins semantics.
///
/// Returns `None` if `maps` is empty. Otherwise the first map is used as the
/// seed and every later map's entries are written into it in order, so on a
/// key collision the value from the later map wins.
///
/// A single input is returned as-is, without copying.
///
/// Only key/value maps ([`MapExt`] implementors) are accepted, so a list of
/// `Vec`s cannot be folded into a concatenation by accident.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::collections::map::merge_maps;
/// use std::collections::HashMap;
///
/// let none: Option<HashMap<u8, u8>> = merge_maps(Vec::new());
/// assert!(none.is_none());
///
/// let one = merge_maps([HashMap::from([("a", 1)])]).unwrap();
/// assert_eq!(one, HashMap::from([("a", 1)]));
/// ```
///
/// Sequences are not maps and are rejected at compile time:
///
/// ```compile_fail
/// # use cleat_core::collections::map::merge_maps;
/// let concatenated = merge_maps([vec![1], vec![1]]);
/// ```
pub fn merge_maps<M, I, K, V>(maps: I) -> Option<M>
where
    I: IntoIterator<Item = M>,
    M: MapExt<K, V> + IntoIterator<Item = (K, V)> + Extend<(K, V)>,
{
    let mut maps = maps.into_iter();
    let mut merged = maps.next()?;
    let mut merged_count = 1usize;
    for map in maps {
        merged.extend(map);
        merged_count += 1;
    }
    tracing::trace!(inputs = merged_count, "merged maps");
    Some(merged)
}

/// Merges borrowed maps with last-write-wins semantics into a fresh map.
///
/// Unlike [`merge_maps`] the result never shares storage with an input, even
/// when exactly one map is given.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::collections::map::merge_map_refs;
/// use std::collections::BTreeMap;
///
/// let a = BTreeMap::from([("a", 1), ("b", 2)]);
/// let b = BTreeMap::from([("b", 3), ("c", 4)]);
/// let merged = merge_map_refs(&[&a, &b]).unwrap();
/// assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// assert_eq!(a.len(), 2); // inputs untouched
/// ```
pub fn merge_map_refs<'a, M, K, V>(maps: &[&'a M]) -> Option<M>
where
    M: Clone + Extend<(K, V)>,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    let (&first, rest) = maps.split_first()?;
    let mut merged = first.clone();
    for &map in rest {
        merged.extend(map.into_iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    tracing::trace!(inputs = maps.len(), "merged borrowed maps");
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn hm(entries: &[(&'static str, i32)]) -> HashMap<&'static str, i32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_merge_maps_empty_is_none() {
        let maps: Vec<HashMap<&str, i32>> = Vec::new();
        assert!(merge_maps(maps).is_none());
    }

    #[test]
    fn test_merge_maps_single_is_identity() {
        let merged = merge_maps(vec![hm(&[("a", 1)])]).unwrap();
        assert_eq!(merged, hm(&[("a", 1)]));
    }

    #[test]
    fn test_merge_maps_last_write_wins() {
        let merged = merge_maps(vec![
            hm(&[("a", 1), ("b", 2)]),
            hm(&[("b", 3), ("c", 4)]),
        ])
        .unwrap();
        assert_eq!(merged, hm(&[("a", 1), ("b", 3), ("c", 4)]));
    }

    #[test]
    fn test_merge_maps_three_inputs_in_order() {
        let merged = merge_maps(vec![
            BTreeMap::from([(1, 'a')]),
            BTreeMap::from([(1, 'b'), (2, 'b')]),
            BTreeMap::from([(2, 'c')]),
        ])
        .unwrap();
        assert_eq!(merged, BTreeMap::from([(1, 'b'), (2, 'c')]));
    }

    #[test]
    fn test_merge_maps_fx_hash_map() {
        let mut a: FxHashMap<u32, u32> = FxHashMap::default();
        a.insert(1, 10);
        let mut b: FxHashMap<u32, u32> = FxHashMap::default();
        b.insert(1, 11);
        b.insert(2, 20);
        let merged = merge_maps([a, b]).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&1], 11);
        assert_eq!(merged[&2], 20);
    }

    #[test]
    fn test_merge_map_refs() {
        let a = hm(&[("a", 1), ("b", 2)]);
        let b = hm(&[("b", 3), ("c", 4)]);
        assert_eq!(merge_map_refs(&[&a, &b]), Some(hm(&[("a", 1), ("b", 3), ("c", 4)])));
        assert_eq!(a, hm(&[("a", 1), ("b", 2)]));
        assert_eq!(b, hm(&[("b", 3), ("c", 4)]));
    }

    #[test]
    fn test_merge_map_refs_single_is_a_copy() {
        let a = hm(&[("a", 1)]);
        let mut merged = merge_map_refs(&[&a]).unwrap();
        merged.insert("z", 26);
        assert_eq!(a.len(), 1);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_map_refs_empty_is_none() {
        let maps: [&BTreeMap<i32, i32>; 0] = [];
        assert!(merge_map_refs(&maps).is_none());
    }

    #[test]
    fn test_merge_from_overwrites_and_chains() {
        let mut target = hm(&[("a", 1), ("b", 1)]);
        let len = target
            .merge_from([hm(&[("b", 2), ("c", 2)])])
            .merge_from([hm(&[("c", 3)]), hm(&[("d", 4)])])
            .len();
        assert_eq!(len, 4);
        assert_eq!(target, hm(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]));
    }

    #[test]
    fn test_merge_from_no_sources() {
        let mut target = hm(&[("a", 1)]);
        target.merge_from(Vec::<HashMap<&str, i32>>::new());
        assert_eq!(target, hm(&[("a", 1)]));
    }

    #[test]
    fn test_get_or_add_inserts_on_miss() {
        let mut m: HashMap<String, i32> = HashMap::new();
        assert_eq!(*m.get_or_add("missing".to_string(), 5), 5);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("missing"), Some(&5));

        assert_eq!(*m.get_or_add("missing".to_string(), 7), 5);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_get_or_add_returns_mutable_slot() {
        let mut m: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
        m.get_or_add("evens", Vec::new()).push(2);
        m.get_or_add("evens", Vec::new()).push(4);
        assert_eq!(m["evens"], vec![2, 4]);
    }

    #[test]
    fn test_get_or_add_with_is_lazy() {
        let mut m = hm(&[("a", 1)]);
        let mut calls = 0;
        m.get_or_add_with("a", || {
            calls += 1;
            0
        });
        assert_eq!(calls, 0);
        assert_eq!(*m.get_or_add_with("b", || 2), 2);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_get_or_never_inserts() {
        let m = hm(&[("a", 1)]);
        assert_eq!(m.get_or(&"a", 0), 1);
        assert_eq!(m.get_or(&"b", 0), 0);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_try_add() {
        let mut m: HashMap<&str, &str> = HashMap::new();
        assert!(m.try_add("k", "first"));
        assert_eq!(m.len(), 1);
        assert!(!m.try_add("k", "second"));
        assert_eq!(m.len(), 1);
        assert_eq!(m["k"], "first");
    }

    #[test]
    fn test_try_add_btree() {
        let mut m = BTreeMap::new();
        assert!(m.try_add(1, 'a'));
        assert!(!m.try_add(1, 'b'));
        assert_eq!(m.get(&1), Some(&'a'));
    }
}
