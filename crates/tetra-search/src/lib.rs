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

//! Tetra-Search: exhaustive minimum-volume tetrahedron search
//!
//! High-level crate that implements a deterministic, modular exhaustive
//! search for the minimum-volume tetrahedron whose four vertex labels sum to
//! a target value. The crate separates enumeration, evaluation, monitoring,
//! and incumbent handling so each can be tested and swapped without touching
//! the core loop.
//!
//! Core flow
//! - Provide a `tetra_model::point::PointSet<T>` and a target label sum.
//! - Choose a `eval::VolumeEvaluator` (the geometric objective).
//! - Optionally attach a `monitor::SearchMonitor` for progress output.
//! - Run `engine::ExhaustiveSearch` directly, or `parallel::ParallelSearch`
//!   for a striped multi-threaded pass with identical results.
//!
//! Design highlights
//! - Separation of concerns: the combination generator enumerates, the
//!   evaluator prices, the incumbent decides, monitors observe.
//! - Filter before evaluating: the label-sum check runs before any volume
//!   work, so non-qualifying subsets cost four additions and a compare.
//! - Deterministic: lexicographic enumeration plus strict less-than
//!   incumbent replacement makes ties reproducible (first minimum wins).
//!
//! Module map
//! - `combinations`: lexicographic 4-subset index generator.
//! - `engine`: the sequential search engine (the reference semantics).
//! - `eval`: volume objective interface and the triple-product evaluator.
//! - `incumbent`: best-so-far tracking with strict improvement.
//! - `monitor`: observational search monitors (no-op, periodic log).
//! - `parallel`: striped parallel pass with deterministic merge.
//! - `result`: search outcomes (optimal candidate or proven infeasible).
//! - `stats`: lightweight counters/timing.

pub mod combinations;
pub mod engine;
pub mod eval;
pub mod incumbent;
pub mod monitor;
pub mod parallel;
pub mod result;
pub mod stats;
