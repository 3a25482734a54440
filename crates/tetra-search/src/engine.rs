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

//! The sequential exhaustive search engine and its reference semantics.
//!
//! The engine enumerates every 4-subset of point indices in lexicographic
//! order, filters on the label sum, evaluates the volume of qualifying
//! subsets, and keeps the first minimum-volume candidate. It is a single
//! deterministic pass with no interruption points and no partial results:
//! `O(C(N, 4))` subsets, `O(1)` auxiliary space.
//!
//! The label-sum filter runs before any volume work. The short-circuit is
//! correctness-neutral but performance-relevant: volume evaluation is the
//! expensive step, and typical instances qualify only a small fraction of
//! subsets. No pruning beyond this filter is performed, so evaluator
//! call-counts are exactly the number of qualifying subsets.

use crate::{
    combinations::QuadCombinations,
    eval::evaluator::VolumeEvaluator,
    incumbent::{Candidate, Incumbent},
    monitor::SearchMonitor,
    result::{SearchOutcome, SearchResult},
    stats::SearchStatistics,
};
use num_traits::{PrimInt, Signed};
use tetra_model::point::PointSet;

/// The exhaustive minimum-volume tetrahedron search.
///
/// The engine is reusable: each call to `solve` resets its statistics and
/// runs a fresh pass. Searching the same point set and target twice yields
/// identical outcomes.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSearch {
    statistics: SearchStatistics,
}

impl ExhaustiveSearch {
    /// Creates a new `ExhaustiveSearch`.
    #[inline]
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::default(),
        }
    }

    /// Returns the statistics of the most recent pass.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Runs the full pass and returns the outcome.
    ///
    /// Fewer than four points, or no subset whose labels sum to
    /// `target_sum`, yields `SearchResult::Infeasible`; neither is an
    /// error.
    pub fn solve<T, E, M>(
        &mut self,
        points: &PointSet<T>,
        target_sum: T,
        evaluator: &mut E,
        monitor: &mut M,
    ) -> SearchOutcome<T>
    where
        T: PrimInt + Signed,
        E: VolumeEvaluator<T>,
        M: SearchMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        self.statistics = SearchStatistics::default();
        monitor.on_enter_search(points, target_sum);

        let mut incumbent = Incumbent::new();

        for quad in QuadCombinations::new(points.len()) {
            self.statistics.on_subset_enumerated();
            monitor.on_subset(&self.statistics);

            let [i0, i1, i2, i3] = quad;
            let p1 = points.get(i0);
            let p2 = points.get(i1);
            let p3 = points.get(i2);
            let p4 = points.get(i3);

            let label_sum = p1.label() + p2.label() + p3.label() + p4.label();
            if label_sum != target_sum {
                continue;
            }
            self.statistics.on_label_match();

            let volume = evaluator.evaluate(p1, p2, p3, p4);
            self.statistics.on_volume_evaluation();

            if incumbent.offer(Candidate::new(quad, volume, label_sum)) {
                self.statistics.on_incumbent_update();
                if let Some(best) = incumbent.best() {
                    monitor.on_new_incumbent(best, &self.statistics);
                }
            }
        }

        self.statistics.set_total_time(start_time.elapsed());
        monitor.on_exit_search(&self.statistics);

        let result = match incumbent.into_best() {
            Some(candidate) => SearchResult::Optimal(candidate),
            None => SearchResult::Infeasible,
        };

        SearchOutcome::new(result, self.statistics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eval::triple_product::TripleProductEvaluator, monitor::NoOpMonitor};
    use tetra_model::point::Point;

    /// Wraps an evaluator and counts how often it is consulted.
    struct CountingEvaluator {
        inner: TripleProductEvaluator,
        calls: u64,
    }

    impl CountingEvaluator {
        fn new() -> Self {
            Self {
                inner: TripleProductEvaluator::new(),
                calls: 0,
            }
        }
    }

    impl VolumeEvaluator<i64> for CountingEvaluator {
        fn name(&self) -> &str {
            "CountingEvaluator"
        }

        fn evaluate(
            &mut self,
            p1: &Point<i64>,
            p2: &Point<i64>,
            p3: &Point<i64>,
            p4: &Point<i64>,
        ) -> f64 {
            self.calls += 1;
            self.inner.evaluate(p1, p2, p3, p4)
        }
    }

    fn solve(points: &PointSet<i64>, target: i64) -> SearchOutcome<i64> {
        ExhaustiveSearch::new().solve(
            points,
            target,
            &mut TripleProductEvaluator::new(),
            &mut NoOpMonitor::new(),
        )
    }

    fn indices(outcome: &SearchOutcome<i64>) -> Option<[usize; 4]> {
        outcome.best_indices().map(|q| q.map(|i| i.get()))
    }

    /// Seven points where only indices {0, 3, 4, 6} have labels summing
    /// to 100.
    fn unique_sum_instance() -> PointSet<i64> {
        PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 10),
            Point::new(5.0, 5.0, 5.0, 1),
            Point::new(-5.0, 2.0, 8.0, 1),
            Point::new(1.0, 0.0, 0.0, 20),
            Point::new(0.0, 1.0, 0.0, 30),
            Point::new(9.0, -4.0, 2.0, 1),
            Point::new(0.0, 0.0, 1.0, 40),
        ])
    }

    #[test]
    fn test_fewer_than_four_points_is_infeasible() {
        for n in 0..4 {
            let points = PointSet::new(
                (0..n)
                    .map(|i| Point::new(i as f64, 0.0, 0.0, 25i64))
                    .collect(),
            );
            let outcome = solve(&points, 100);
            assert!(outcome.is_infeasible());
            assert_eq!(outcome.statistics().subsets_enumerated, 0);
        }
    }

    #[test]
    fn test_no_matching_label_sum_is_infeasible() {
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 1i64),
            Point::new(1.0, 0.0, 0.0, 2),
            Point::new(0.0, 1.0, 0.0, 3),
            Point::new(0.0, 0.0, 1.0, 4),
            Point::new(1.0, 1.0, 1.0, 5),
        ]);

        let outcome = solve(&points, 100);
        assert!(outcome.is_infeasible());
        // Every subset was enumerated; none qualified for evaluation.
        assert_eq!(outcome.statistics().subsets_enumerated, 5);
        assert_eq!(outcome.statistics().volume_evaluations, 0);
    }

    #[test]
    fn test_finds_the_unique_qualifying_subset() {
        let outcome = solve(&unique_sum_instance(), 100);
        assert_eq!(indices(&outcome), Some([0, 3, 4, 6]));
        assert_eq!(outcome.statistics().volume_evaluations, 1);
    }

    #[test]
    fn test_minimum_volume_wins_among_qualifiers() {
        // Labels make every 4-subset qualify; geometry decides. The last
        // point is pulled close to the base plane of the first three, so
        // the subset {0, 1, 2, 5} has the smallest volume.
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 25i64),
            Point::new(1.0, 0.0, 0.0, 25),
            Point::new(0.0, 1.0, 0.0, 25),
            Point::new(0.0, 0.0, 4.0, 25),
            Point::new(3.0, 3.0, 3.0, 25),
            Point::new(0.2, 0.2, 0.001, 25),
        ]);

        let outcome = solve(&points, 100);
        assert_eq!(indices(&outcome), Some([0, 1, 2, 5]));
    }

    #[test]
    fn test_tie_break_keeps_first_in_enumeration_order() {
        // Subsets {0,1,2,3} and {0,1,2,4} are the only qualifiers and have
        // mirror-image geometry with identical volume 1/6. The first in
        // lexicographic order must win.
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 10i64),
            Point::new(1.0, 0.0, 0.0, 20),
            Point::new(0.0, 1.0, 0.0, 30),
            Point::new(0.0, 0.0, 1.0, 40),
            Point::new(0.0, 0.0, -1.0, 40),
        ]);

        let outcome = solve(&points, 100);
        assert_eq!(indices(&outcome), Some([0, 1, 2, 3]));
        assert_eq!(outcome.statistics().volume_evaluations, 2);
        assert_eq!(outcome.statistics().incumbent_updates, 1);
    }

    #[test]
    fn test_volume_is_only_evaluated_for_qualifying_subsets() {
        let points = unique_sum_instance();
        let mut engine = ExhaustiveSearch::new();
        let mut evaluator = CountingEvaluator::new();

        let outcome = engine.solve(&points, 100, &mut evaluator, &mut NoOpMonitor::new());

        // C(7, 4) = 35 subsets, exactly one qualifying.
        assert_eq!(outcome.statistics().subsets_enumerated, 35);
        assert_eq!(outcome.statistics().label_matches, 1);
        assert_eq!(evaluator.calls, 1);
        assert_eq!(outcome.statistics().volume_evaluations, evaluator.calls);
    }

    #[test]
    fn test_search_is_deterministic() {
        let points = unique_sum_instance();
        let mut engine = ExhaustiveSearch::new();
        let mut evaluator = TripleProductEvaluator::new();

        let first = engine.solve(&points, 100, &mut evaluator, &mut NoOpMonitor::new());
        let second = engine.solve(&points, 100, &mut evaluator, &mut NoOpMonitor::new());

        // Wall-clock time differs between runs; everything else must not.
        assert_eq!(first.result(), second.result());
        assert_eq!(
            first.statistics().subsets_enumerated,
            second.statistics().subsets_enumerated
        );
        assert_eq!(
            first.statistics().volume_evaluations,
            second.statistics().volume_evaluations
        );
        assert_eq!(
            first.statistics().incumbent_updates,
            second.statistics().incumbent_updates
        );
    }

    #[test]
    fn test_degenerate_zero_volume_can_win() {
        // Four coplanar qualifying points enclose zero volume and must
        // still beat a proper tetrahedron.
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 25i64),
            Point::new(1.0, 0.0, 0.0, 25),
            Point::new(0.0, 1.0, 0.0, 25),
            Point::new(0.0, 0.0, 1.0, 25),
            Point::new(2.0, 3.0, 0.0, 25),
        ]);

        // {0, 1, 2, 4} lies in the z = 0 plane.
        let outcome = solve(&points, 100);
        assert_eq!(indices(&outcome), Some([0, 1, 2, 4]));
        match outcome.result() {
            SearchResult::Optimal(candidate) => assert_eq!(candidate.volume(), 0.0),
            SearchResult::Infeasible => panic!("expected an optimal candidate"),
        }
    }

    #[test]
    fn test_candidate_label_sum_equals_target() {
        let outcome = solve(&unique_sum_instance(), 100);
        match outcome.result() {
            SearchResult::Optimal(candidate) => assert_eq!(candidate.label_sum(), 100),
            SearchResult::Infeasible => panic!("expected an optimal candidate"),
        }
    }

    #[test]
    fn test_best_indices_are_ascending() {
        let outcome = solve(&unique_sum_instance(), 100);
        let quad = outcome.best_indices().expect("candidate expected");
        for pair in quad.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
