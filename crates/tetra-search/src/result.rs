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

use crate::{combinations::QUAD, incumbent::Candidate, stats::SearchStatistics};
use num_traits::{PrimInt, Signed};
use tetra_model::index::PointIndex;

/// Result of the search after the pass completes.
///
/// The pass is exhaustive, so a found candidate is always proven optimal and
/// an empty result is always proven infeasible; there is no "feasible but
/// unproven" state.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<T> {
    /// The minimum-volume qualifying tetrahedron.
    Optimal(Candidate<T>),
    /// No 4-subset's labels sum to the target (or fewer than 4 points).
    Infeasible,
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Optimal(candidate) => {
                write!(f, "Optimal({})", candidate)
            }
            SearchResult::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// The search result bundled with run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(result: SearchResult<T>, statistics: SearchStatistics) -> Self {
        Self { result, statistics }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SearchResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SearchResult::Infeasible)
    }

    /// Returns the winning indices in ascending order, if a tetrahedron was
    /// found.
    #[inline]
    pub fn best_indices(&self) -> Option<[PointIndex; QUAD]> {
        match &self.result {
            SearchResult::Optimal(candidate) => Some(candidate.indices()),
            SearchResult::Infeasible => None,
        }
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(a: usize, b: usize, c: usize, d: usize) -> [PointIndex; QUAD] {
        [
            PointIndex::new(a),
            PointIndex::new(b),
            PointIndex::new(c),
            PointIndex::new(d),
        ]
    }

    #[test]
    fn test_optimal_outcome_accessors() {
        let candidate = Candidate::new(quad(0, 3, 4, 6), 0.25, 100i64);
        let outcome = SearchOutcome::new(
            SearchResult::Optimal(candidate),
            SearchStatistics::default(),
        );

        assert!(outcome.is_optimal());
        assert!(!outcome.is_infeasible());
        assert_eq!(outcome.best_indices(), Some(quad(0, 3, 4, 6)));
    }

    #[test]
    fn test_infeasible_outcome_accessors() {
        let outcome: SearchOutcome<i64> =
            SearchOutcome::new(SearchResult::Infeasible, SearchStatistics::default());

        assert!(!outcome.is_optimal());
        assert!(outcome.is_infeasible());
        assert_eq!(outcome.best_indices(), None);
    }

    #[test]
    fn test_display_formats() {
        let infeasible: SearchResult<i64> = SearchResult::Infeasible;
        assert_eq!(format!("{}", infeasible), "Infeasible");

        let optimal = SearchResult::Optimal(Candidate::new(quad(0, 1, 2, 3), 1.5, 100i64));
        assert_eq!(
            format!("{}", optimal),
            "Optimal((0, 1, 2, 3) volume=1.5 label_sum=100)"
        );
    }
}
