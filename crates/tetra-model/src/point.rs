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

//! Labeled 3D points and the immutable point sequence searched over.
//!
//! A `Point` couples double-precision coordinates with an integer label. The
//! label takes no part in any geometric computation; it only feeds the
//! label-sum constraint applied during the search. `PointSet` is built once
//! by the loader (or by tests) and is read-only for the rest of execution.

use crate::index::PointIndex;
use num_traits::{PrimInt, Signed};

/// An immutable labeled point in 3D space.
///
/// Identity is positional: two points with identical coordinates are still
/// distinct entries in the `PointSet`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    x: f64,
    y: f64,
    z: f64,
    label: T,
}

impl<T> Point<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Point`.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, label: T) -> Self {
        Self { x, y, z, label }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z coordinate.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the integer label attached to this point.
    #[inline]
    pub fn label(&self) -> T {
        self.label
    }

    /// Returns the coordinates as an array, label excluded.
    #[inline]
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> std::fmt::Display for Point<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.label)
    }
}

/// An ordered, immutable sequence of labeled points.
///
/// Indexed `0..N-1` in input order via `PointIndex`. Constructed once and
/// never mutated thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<T> {
    points: Vec<Point<T>>,
}

impl<T> PointSet<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `PointSet` from the given points, in input order.
    #[inline]
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: PointIndex) -> &Point<T> {
        let i = index.get();
        debug_assert!(
            i < self.points.len(),
            "called `PointSet::get` with point index out of bounds: the len is {} but the index is {}",
            self.points.len(),
            i
        );

        &self.points[i]
    }

    /// Returns a slice of all points in input order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }
}
