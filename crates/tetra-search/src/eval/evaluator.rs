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

use num_traits::{PrimInt, Signed};
use tetra_model::point::Point;

/// A strategy for scoring a candidate tetrahedron.
///
/// `VolumeEvaluator` decouples the search engine from the geometric
/// objective. The engine calls `evaluate` once per label-qualifying subset
/// (never for subsets that fail the label-sum filter), so a counting
/// wrapper around an evaluator observes exactly the qualifying subsets.
///
/// The evaluator must be a pure function of the four points: no error
/// conditions, no side effects beyond interior mutation of the evaluator
/// itself (e.g., counters), and the same inputs must yield the same value.
pub trait VolumeEvaluator<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the volume evaluator.
    fn name(&self) -> &str;

    /// Evaluates the volume of the tetrahedron spanned by the four points.
    ///
    /// `p1` is the apex by convention: implementations build their vectors
    /// from `p1` to the other three vertices. Labels are ignored here.
    ///
    /// Returns a non-negative value; exactly zero when the points are
    /// coplanar (including coinciding vertices).
    fn evaluate(&mut self, p1: &Point<T>, p2: &Point<T>, p3: &Point<T>, p4: &Point<T>) -> f64;
}

impl<T> std::fmt::Debug for dyn VolumeEvaluator<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VolumeEvaluator({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn VolumeEvaluator<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VolumeEvaluator({})", self.name())
    }
}
