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

//! Incumbent management for the exhaustive search.
//!
//! `Incumbent` tracks the best candidate seen so far. Absence of a best is
//! an explicit `None` rather than a numeric sentinel, so no genuine volume
//! can ever collide with an "empty" marker. Replacement uses strict
//! less-than comparison: the first candidate achieving the minimum volume in
//! enumeration order is retained, and later ties never overwrite it. That
//! rule is relied on for reproducible output and must not be relaxed to
//! less-than-or-equal.

use crate::combinations::QUAD;
use num_traits::{PrimInt, Signed};
use tetra_model::index::PointIndex;

/// A qualifying tetrahedron: four ascending point indices, the volume they
/// enclose, and their label sum (always equal to the search target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T> {
    indices: [PointIndex; QUAD],
    volume: f64,
    label_sum: T,
}

impl<T> Candidate<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Candidate`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the indices are not strictly ascending or
    /// the volume is negative.
    pub fn new(indices: [PointIndex; QUAD], volume: f64, label_sum: T) -> Self {
        debug_assert!(
            indices.windows(2).all(|pair| pair[0] < pair[1]),
            "called `Candidate::new` with indices not strictly ascending: {:?}",
            indices
        );
        debug_assert!(
            volume >= 0.0,
            "called `Candidate::new` with negative volume: {}",
            volume
        );

        Self {
            indices,
            volume,
            label_sum,
        }
    }

    /// Returns the four point indices, ascending.
    #[inline]
    pub fn indices(&self) -> [PointIndex; QUAD] {
        self.indices
    }

    /// Returns the enclosed volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the sum of the four point labels.
    #[inline]
    pub fn label_sum(&self) -> T {
        self.label_sum
    }
}

impl<T> std::fmt::Display for Candidate<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}) volume={} label_sum={}",
            self.indices[0].get(),
            self.indices[1].get(),
            self.indices[2].get(),
            self.indices[3].get(),
            self.volume,
            self.label_sum
        )
    }
}

/// Best-so-far tracking with strict improvement semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Incumbent<T> {
    best: Option<Candidate<T>>,
}

impl<T> Incumbent<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty `Incumbent`.
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Offers a candidate; installs it only if it strictly improves on the
    /// current best (or no best exists yet). Returns `true` if installed.
    ///
    /// Equal volumes are rejected so that the earliest candidate in
    /// enumeration order survives.
    pub fn offer(&mut self, candidate: Candidate<T>) -> bool {
        match &self.best {
            Some(best) if candidate.volume() >= best.volume() => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }

    /// Returns the current best candidate, if any.
    #[inline]
    pub fn best(&self) -> Option<&Candidate<T>> {
        self.best.as_ref()
    }

    /// Consumes the incumbent and returns the best candidate, if any.
    #[inline]
    pub fn into_best(self) -> Option<Candidate<T>> {
        self.best
    }

    /// Returns `true` if no candidate has been installed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }
}
