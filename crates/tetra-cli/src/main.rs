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

//! Command line front end for the tetra search engine.
//!
//! Loads a point instance from a file, runs the exhaustive search, and
//! prints the winning indices as `(i0, i1, i2, i3)` in input order, or
//! `no qualifying tetrahedron` for an empty result. Errors go to stderr
//! with a nonzero exit code.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tetra_model::loader::{PointLoader, PointLoaderError};
use tetra_model::point::PointSet;
use tetra_search::engine::ExhaustiveSearch;
use tetra_search::eval::triple_product::TripleProductEvaluator;
use tetra_search::monitor::{LogMonitor, NoOpMonitor};
use tetra_search::parallel::ParallelSearch;
use tetra_search::result::{SearchOutcome, SearchResult};

#[derive(Parser, Debug)]
#[command(name = "tetra")]
#[command(
    about = "Find the minimum-volume tetrahedron whose four vertex labels sum to a target value"
)]
struct Args {
    /// Input file with one point per line: x, y, z, label
    input: PathBuf,

    /// Required sum of the four point labels
    #[arg(long, default_value_t = 100)]
    target: i64,

    /// Worker threads for the search (1 runs the sequential reference pass)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Suppress progress output and statistics
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PointLoaderError> {
    let points: PointSet<i64> = PointLoader::new().from_path(&args.input)?;
    let mut evaluator = TripleProductEvaluator::new();

    let outcome: SearchOutcome<i64> = if args.threads > 1 {
        ParallelSearch::new(args.threads).solve(&points, args.target, &evaluator)
    } else {
        let mut engine = ExhaustiveSearch::new();
        if args.quiet {
            engine.solve(&points, args.target, &mut evaluator, &mut NoOpMonitor::new())
        } else {
            engine.solve(&points, args.target, &mut evaluator, &mut LogMonitor::default())
        }
    };

    match outcome.result() {
        SearchResult::Optimal(candidate) => {
            let [i0, i1, i2, i3] = candidate.indices();
            println!("({}, {}, {}, {})", i0.get(), i1.get(), i2.get(), i3.get());
        }
        SearchResult::Infeasible => println!("no qualifying tetrahedron"),
    }

    if !args.quiet {
        println!();
        print!("{}", outcome.statistics());
    }

    Ok(())
}
