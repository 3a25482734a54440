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

//! # Strongly Typed Point Indices (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying a position in a
//! `PointSet`. Points are identified positionally (their index in the input
//! sequence), and that index is part of the search output, so it deserves a
//! distinct type rather than a raw `usize` that could be mixed up with
//! counters or sizes elsewhere in the pipeline.

/// A strongly typed index into a `PointSet`.
///
/// Index `i` refers to the `i`-th point in input order (0-based). The wrapper
/// is `#[repr(transparent)]` over `usize` and compiles down to no overhead.
///
/// # Examples
///
/// ```rust
/// use tetra_model::index::PointIndex;
///
/// let i = PointIndex::new(3);
/// assert_eq!(i.get(), 3);
/// assert_eq!(format!("{}", i), "PointIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointIndex(usize);

impl PointIndex {
    /// Creates a new `PointIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PointIndex({})", self.0)
    }
}

impl std::fmt::Display for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PointIndex({})", self.0)
    }
}

impl From<usize> for PointIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<PointIndex> for usize {
    fn from(index: PointIndex) -> Self {
        index.0
    }
}
