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

use std::time::Duration;

/// Statistics collected during the execution of the exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total 4-subsets enumerated.
    pub subsets_enumerated: u64,
    /// Subsets whose label sum matched the target.
    pub label_matches: u64,
    /// Volume evaluations performed. Equals `label_matches` for the
    /// reference engine: the filter short-circuits before any volume work.
    pub volume_evaluations: u64,
    /// Times a candidate strictly improved on the incumbent.
    pub incumbent_updates: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_subset_enumerated(&mut self) {
        self.subsets_enumerated = self.subsets_enumerated.saturating_add(1);
    }

    #[inline]
    pub fn on_label_match(&mut self) {
        self.label_matches = self.label_matches.saturating_add(1);
    }

    #[inline]
    pub fn on_volume_evaluation(&mut self) {
        self.volume_evaluations = self.volume_evaluations.saturating_add(1);
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Folds the counters of another statistics block into this one.
    ///
    /// Used by the parallel pass to combine per-worker counters. Timing is
    /// not merged; the caller sets the wall-clock total itself.
    pub fn absorb_counters(&mut self, other: &SearchStatistics) {
        self.subsets_enumerated = self.subsets_enumerated.saturating_add(other.subsets_enumerated);
        self.label_matches = self.label_matches.saturating_add(other.label_matches);
        self.volume_evaluations = self
            .volume_evaluations
            .saturating_add(other.volume_evaluations);
        self.incumbent_updates = self.incumbent_updates.saturating_add(other.incumbent_updates);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tetra Search Statistics:")?;
        writeln!(f, "  Subsets enumerated:   {}", self.subsets_enumerated)?;
        writeln!(f, "  Label matches:        {}", self.label_matches)?;
        writeln!(f, "  Volume evaluations:   {}", self.volume_evaluations)?;
        writeln!(f, "  Incumbent updates:    {}", self.incumbent_updates)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
