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

//! Lexicographic enumeration of 4-element index subsets.
//!
//! `QuadCombinations` yields every subset `[i0, i1, i2, i3]` with
//! `i0 < i1 < i2 < i3 < n`, in lexicographic order: subsets are ordered by
//! their first differing index, ascending. This ordering is part of the
//! search contract: the incumbent keeps the *first* minimum it sees, so the
//! enumeration order decides tie-breaks and must stay stable.
//!
//! The leading index can be restricted to a subrange, which the parallel
//! pass uses to stripe the search space: concatenating the stripes in order
//! reproduces the full lexicographic sequence exactly.

use tetra_model::index::PointIndex;

/// The fixed subset size: a tetrahedron has four vertices.
pub const QUAD: usize = 4;

/// An iterator over 4-element index combinations in lexicographic order.
#[derive(Debug, Clone)]
pub struct QuadCombinations {
    n: usize,
    /// Exclusive upper bound for the leading index `i0`.
    leading_end: usize,
    /// The next combination to yield.
    current: [usize; QUAD],
    exhausted: bool,
}

impl QuadCombinations {
    /// Creates an iterator over all 4-subsets of `0..n`.
    ///
    /// Yields nothing if `n < 4`.
    #[inline]
    pub fn new(n: usize) -> Self {
        Self::with_leading_range(n, 0, n.saturating_sub(QUAD - 1))
    }

    /// Creates an iterator over the 4-subsets whose leading index lies in
    /// `leading_start..leading_end`.
    ///
    /// The bounds are clamped to the valid leading range `0..n-3`. Yields
    /// nothing if the clamped range is empty or `n < 4`.
    pub fn with_leading_range(n: usize, leading_start: usize, leading_end: usize) -> Self {
        let max_leading = n.saturating_sub(QUAD - 1);
        let start = leading_start.min(max_leading);
        let end = leading_end.min(max_leading);

        let exhausted = n < QUAD || start >= end;
        let current = [start, start + 1, start + 2, start + 3];

        Self {
            n,
            leading_end: end,
            current,
            exhausted,
        }
    }

    /// Advances `self.current` to the lexicographic successor.
    ///
    /// Marks the iterator exhausted when no successor exists within the
    /// leading range.
    fn advance(&mut self) {
        let mut slot = QUAD;
        while slot > 0 {
            slot -= 1;
            let max = if slot == 0 {
                self.leading_end - 1
            } else {
                self.n - QUAD + slot
            };

            if self.current[slot] < max {
                self.current[slot] += 1;
                for next in slot + 1..QUAD {
                    self.current[next] = self.current[next - 1] + 1;
                }
                return;
            }
        }
        self.exhausted = true;
    }
}

impl Iterator for QuadCombinations {
    type Item = [PointIndex; QUAD];

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let out = self.current.map(PointIndex::new);
        self.advance();
        Some(out)
    }
}
