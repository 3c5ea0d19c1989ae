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

//! # Collection Helpers
//!
//! Insertion and merge helpers for standard, `smallvec` and `rustc_hash`
//! containers.
//!
//! ## Submodules
//!
//! - `unique`: `AddUnique`, insert-if-absent for `Vec`, `VecDeque`,
//!   `SmallVec`, `HashSet` and `BTreeSet`.
//! - `map`: `MapExt` (`get_or_add`, `get_or`, `try_add`, `merge_from`) for
//!   `HashMap` and `BTreeMap`, and the `merge_maps` / `merge_map_refs`
//!   last-write-wins mergers.
//!
//! ## Return conventions
//!
//! `AddUnique::add_unique` answers "was it already there?" while
//! `MapExt::try_add` answers "did I insert it?". The two conventions are
//! intentionally left as they are; check which one you are calling.

pub mod map;
pub mod unique;
