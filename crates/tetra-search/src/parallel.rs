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

//! # Striped Parallel Search
//!
//! An optional multi-threaded pass over the same search space. The leading
//! index range is split into contiguous stripes, one worker per stripe,
//! spawned with `std::thread::scope`. Each worker keeps a local incumbent
//! over its stripe; local bests are merged in stripe order with the same
//! strict less-than rule the sequential engine uses.
//!
//! ## Determinism
//!
//! Stripes are contiguous, so concatenating them in order reproduces the
//! sequential enumeration order exactly. Merging local bests in that same
//! order with strict less-than comparison therefore yields the identical
//! winner, including tie-breaks: among equal minima, the one from the
//! earliest stripe, i.e. first in global enumeration order, survives.
//!
//! The sequential `engine::ExhaustiveSearch` remains the reference
//! semantics; this pass is a performance option, not a requirement. Counter
//! totals match the sequential pass except `incumbent_updates`, which is the
//! sum of per-worker local updates and depends on the striping.

use crate::{
    combinations::QuadCombinations,
    eval::evaluator::VolumeEvaluator,
    incumbent::{Candidate, Incumbent},
    result::{SearchOutcome, SearchResult},
    stats::SearchStatistics,
};
use num_traits::{PrimInt, Signed};
use tetra_model::point::PointSet;

/// A parallel exhaustive search over striped leading-index ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelSearch {
    num_workers: usize,
}

impl ParallelSearch {
    /// Creates a new `ParallelSearch` with the given worker count.
    ///
    /// A worker count of zero is treated as one.
    #[inline]
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }

    /// Returns the configured worker count.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Runs the striped pass and returns the outcome.
    ///
    /// Each worker receives its own clone of `evaluator`. The result is
    /// bit-identical to the sequential engine's result for the same input.
    pub fn solve<T, E>(
        &self,
        points: &PointSet<T>,
        target_sum: T,
        evaluator: &E,
    ) -> SearchOutcome<T>
    where
        T: PrimInt + Signed + Send + Sync,
        E: VolumeEvaluator<T> + Clone + Send,
    {
        let start_time = std::time::Instant::now();

        let stripes = stripe_ranges(points.len(), self.num_workers);
        let mut locals = Vec::with_capacity(stripes.len());

        std::thread::scope(|scope| {
            let handles: Vec<_> = stripes
                .iter()
                .map(|&(start, end)| {
                    let mut evaluator = evaluator.clone();
                    scope.spawn(move || {
                        search_stripe(points, target_sum, &mut evaluator, start, end)
                    })
                })
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(local) => locals.push(local),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        // Merge in stripe order: strict less-than keeps the earliest stripe
        // among equal minima, matching sequential tie-break semantics.
        let mut incumbent = Incumbent::new();
        let mut statistics = SearchStatistics::default();
        for (local_incumbent, local_stats) in locals {
            statistics.absorb_counters(&local_stats);
            if let Some(candidate) = local_incumbent.into_best() {
                incumbent.offer(candidate);
            }
        }

        statistics.set_total_time(start_time.elapsed());

        let result = match incumbent.into_best() {
            Some(candidate) => SearchResult::Optimal(candidate),
            None => SearchResult::Infeasible,
        };

        SearchOutcome::new(result, statistics)
    }
}

/// Splits the leading-index range `0..n-3` into at most `workers` contiguous
/// stripes of near-equal width.
fn stripe_ranges(n: usize, workers: usize) -> Vec<(usize, usize)> {
    let leading = n.saturating_sub(3);
    if leading == 0 {
        return Vec::new();
    }

    let workers = workers.min(leading);
    let chunk = leading.div_ceil(workers);

    (0..workers)
        .map(|w| (w * chunk, ((w + 1) * chunk).min(leading)))
        .filter(|(start, end)| start < end)
        .collect()
}

/// The per-worker inner loop: the sequential filter-then-evaluate pass
/// restricted to one leading-index stripe.
fn search_stripe<T, E>(
    points: &PointSet<T>,
    target_sum: T,
    evaluator: &mut E,
    leading_start: usize,
    leading_end: usize,
) -> (Incumbent<T>, SearchStatistics)
where
    T: PrimInt + Signed,
    E: VolumeEvaluator<T>,
{
    let mut incumbent = Incumbent::new();
    let mut statistics = SearchStatistics::default();

    for quad in QuadCombinations::with_leading_range(points.len(), leading_start, leading_end) {
        statistics.on_subset_enumerated();

        let [i0, i1, i2, i3] = quad;
        let p1 = points.get(i0);
        let p2 = points.get(i1);
        let p3 = points.get(i2);
        let p4 = points.get(i3);

        let label_sum = p1.label() + p2.label() + p3.label() + p4.label();
        if label_sum != target_sum {
            continue;
        }
        statistics.on_label_match();

        let volume = evaluator.evaluate(p1, p2, p3, p4);
        statistics.on_volume_evaluation();

        if incumbent.offer(Candidate::new(quad, volume, label_sum)) {
            statistics.on_incumbent_update();
        }
    }

    (incumbent, statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::ExhaustiveSearch, eval::triple_product::TripleProductEvaluator,
        monitor::NoOpMonitor,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use tetra_model::point::Point;

    fn random_instance(n: usize, seed: u64) -> PointSet<i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        PointSet::new(
            (0..n)
                .map(|_| {
                    Point::new(
                        rng.gen_range(-50.0..50.0),
                        rng.gen_range(-50.0..50.0),
                        rng.gen_range(-50.0..50.0),
                        rng.gen_range(10..40),
                    )
                })
                .collect(),
        )
    }

    fn sequential(points: &PointSet<i64>, target: i64) -> SearchOutcome<i64> {
        ExhaustiveSearch::new().solve(
            points,
            target,
            &mut TripleProductEvaluator::new(),
            &mut NoOpMonitor::new(),
        )
    }

    #[test]
    fn test_stripe_ranges_cover_leading_indices_exactly_once() {
        for n in [4usize, 5, 9, 20] {
            for workers in 1..6 {
                let stripes = stripe_ranges(n, workers);
                let covered: Vec<usize> =
                    stripes.iter().flat_map(|&(s, e)| s..e).collect();
                let expected: Vec<usize> = (0..n - 3).collect();
                assert_eq!(covered, expected, "n={n} workers={workers}");
            }
        }
    }

    #[test]
    fn test_stripe_ranges_empty_for_small_sets() {
        for n in 0..4 {
            assert!(stripe_ranges(n, 4).is_empty());
        }
    }

    #[test]
    fn test_too_few_points_is_infeasible() {
        let points = random_instance(3, 1);
        let outcome = ParallelSearch::new(4).solve(&points, 100, &TripleProductEvaluator::new());
        assert!(outcome.is_infeasible());
    }

    #[test]
    fn test_matches_sequential_result() {
        for seed in 0..4 {
            let points = random_instance(14, seed);
            let expected = sequential(&points, 100);

            for workers in 1..5 {
                let outcome = ParallelSearch::new(workers).solve(
                    &points,
                    100,
                    &TripleProductEvaluator::new(),
                );

                assert_eq!(outcome.result(), expected.result());
                assert_eq!(
                    outcome.statistics().subsets_enumerated,
                    expected.statistics().subsets_enumerated
                );
                assert_eq!(
                    outcome.statistics().volume_evaluations,
                    expected.statistics().volume_evaluations
                );
            }
        }
    }

    #[test]
    fn test_tie_break_matches_sequential() {
        // Mirror-image qualifying subsets with identical volume; the first
        // in global enumeration order must win regardless of striping.
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0, 0.0, 10i64),
            Point::new(1.0, 0.0, 0.0, 20),
            Point::new(0.0, 1.0, 0.0, 30),
            Point::new(0.0, 0.0, 1.0, 40),
            Point::new(0.0, 0.0, -1.0, 40),
        ]);

        let expected = sequential(&points, 100);
        for workers in 1..5 {
            let outcome =
                ParallelSearch::new(workers).solve(&points, 100, &TripleProductEvaluator::new());
            assert_eq!(outcome.result(), expected.result());
        }
    }

    #[test]
    fn test_zero_workers_is_clamped_to_one() {
        assert_eq!(ParallelSearch::new(0).num_workers(), 1);
    }
}
