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

//! The scalar-triple-product volume evaluator.
//!
//! Computes the tetrahedron volume as `|AD · (AB × AC)| / 6` with `p1` as
//! the apex: `AB = p2 − p1`, `AC = p3 − p1`, `AD = p4 − p1`, all
//! component-wise on the coordinates. Double precision throughout, no
//! rounding or clamping beyond natural floating-point arithmetic.

use crate::eval::evaluator::VolumeEvaluator;
use num_traits::{PrimInt, Signed};
use tetra_model::point::Point;

/// The reference volume objective.
///
/// Stateless; `Clone`/`Copy` so the parallel pass can hand each worker its
/// own instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripleProductEvaluator;

impl TripleProductEvaluator {
    /// Creates a new `TripleProductEvaluator`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> VolumeEvaluator<T> for TripleProductEvaluator
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "TripleProductEvaluator"
    }

    #[inline]
    fn evaluate(&mut self, p1: &Point<T>, p2: &Point<T>, p3: &Point<T>, p4: &Point<T>) -> f64 {
        // Vectors from the apex p1 to the other three vertices.
        let ab = [p2.x() - p1.x(), p2.y() - p1.y(), p2.z() - p1.z()];
        let ac = [p3.x() - p1.x(), p3.y() - p1.y(), p3.z() - p1.z()];
        let ad = [p4.x() - p1.x(), p4.y() - p1.y(), p4.z() - p1.z()];

        // Cross product AB x AC by determinant expansion.
        let cross = [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ];

        // Scalar triple product AD . (AB x AC); its magnitude is six times
        // the enclosed volume.
        let triple = ad[0] * cross[0] + ad[1] * cross[1] + ad[2] * cross[2];

        triple.abs() / 6.0
    }
}
