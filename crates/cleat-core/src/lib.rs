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

//! # Cleat Core
//!
//! Small, dependency-light helpers that keep turning up in application code:
//! ordering predicates and clamping, insert-if-absent and merge helpers for
//! collections, and locale-independent conversion of loosely typed values.
//!
//! ## Modules
//!
//! - `cmp`: `between` with configurable bound inclusion, a clamp that never
//!   panics, relational predicates, and `try_*` variants for values that may
//!   be missing.
//! - `collections`: `AddUnique` for sequences and sets, `MapExt` for maps,
//!   and last-write-wins map merging.
//! - `convert`: the `Scalar` value type, a configurable `Converter`, a strict
//!   `try_cast_to` and a failure-masking `cast_to`.
//! - `error`: `CompareError` and `ConversionError`.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (masked conversion failures at `debug`,
//! merges at `trace`) and never installs a subscriber itself.

#![forbid(unsafe_code)]

pub mod cmp;
pub mod collections;
pub mod convert;
pub mod error;
