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

//! Observational monitors for the exhaustive search.
//!
//! Monitors watch the search; they cannot steer or abort it. The engine is a
//! single deterministic pass with no interruption points, so the monitor
//! interface deliberately has no command channel back into the loop.
//!
//! `LogMonitor` prints a periodic progress table. It throttles clock reads
//! with a subset-count mask so the hot loop only checks the time every
//! `clock_check_mask + 1` subsets.

use crate::{incumbent::Candidate, stats::SearchStatistics};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};
use tetra_model::point::PointSet;

/// Observer interface for search progress.
pub trait SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before enumeration starts.
    fn on_enter_search(&mut self, points: &PointSet<T>, target_sum: T);

    /// Called after each enumerated subset, including filtered ones.
    fn on_subset(&mut self, stats: &SearchStatistics);

    /// Called when a candidate strictly improves on the incumbent.
    fn on_new_incumbent(&mut self, candidate: &Candidate<T>, stats: &SearchStatistics);

    /// Called once after enumeration finishes.
    fn on_exit_search(&mut self, stats: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that observes nothing. Zero overhead in the hot loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    /// Creates a new `NoOpMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _: &PointSet<T>, _: T) {}

    #[inline(always)]
    fn on_subset(&mut self, _: &SearchStatistics) {}

    #[inline(always)]
    fn on_new_incumbent(&mut self, _: &Candidate<T>, _: &SearchStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _: &SearchStatistics) {}
}

/// A monitor that prints a progress table at a fixed time interval.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_volume: Option<f64>,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    ///
    /// `clock_check_mask` must be a power of two minus one; the clock is
    /// only consulted when `subsets_enumerated & mask == 0`.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        debug_assert!(
            (clock_check_mask & (clock_check_mask + 1)) == 0,
            "called `LogMonitor::new` with a mask that is not 2^k - 1: {}",
            clock_check_mask
        );

        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_volume: None,
        }
    }

    /// Returns the best volume observed so far, if any.
    #[inline]
    pub fn best_volume(&self) -> Option<f64> {
        self.best_volume
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<16} | {:<14} | {:<16} | {:<10}",
            "Elapsed", "Subsets", "Matches", "Best Volume", "Updates"
        );
        println!("{}", "-".repeat(76));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_str = match self.best_volume {
            Some(v) => format!("{:.6}", v),
            None => "Inf".to_string(),
        };
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<16} | {:<14} | {:<16} | {:<10}",
            elapsed_field,
            stats.subsets_enumerated,
            stats.label_matches,
            best_str,
            stats.incumbent_updates
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, points: &PointSet<T>, target_sum: T) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_volume = None; // Reset
        println!(
            "Searching {} points for label sum {}",
            points.len(),
            target_sum
        );
        self.print_header();
    }

    fn on_subset(&mut self, stats: &SearchStatistics) {
        if (stats.subsets_enumerated & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(stats);
        }
    }

    fn on_new_incumbent(&mut self, candidate: &Candidate<T>, _stats: &SearchStatistics) {
        self.best_volume = Some(candidate.volume());
    }

    fn on_exit_search(&mut self, _stats: &SearchStatistics) {
        println!("{}", "-".repeat(76));
        println!("Search finished.");
    }
}
