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

//! # Tetra Model
//!
//! **The core domain model for the tetra minimum-volume tetrahedron search.**
//!
//! This crate defines the data structures shared between the problem
//! definition (a text file of labeled 3D points) and the search engine
//! (`tetra_search`).
//!
//! ## Architecture
//!
//! The crate keeps construction and searching strictly separate:
//!
//! * **`index`**: A strongly-typed `PointIndex` wrapper so positions in the
//!   point sequence cannot be confused with other integer quantities.
//! * **`point`**: The immutable `Point` record (three coordinates plus an
//!   integer label) and the `PointSet` built once from input and read-only
//!   thereafter.
//! * **`loader`**: The `PointLoader`, which sanitizes and parses the line
//!   based input format into a validated `PointSet`.
//!
//! ## Design Philosophy
//!
//! 1.  **Positional identity**: Points are identified by their index in the
//!     input sequence. Coinciding coordinates are never merged.
//! 2.  **Immutability**: A `PointSet` is constructed once and never mutated,
//!     so searches over it are trivially race-free and reproducible.
//! 3.  **Fail-Fast**: The loader rejects malformed lines immediately instead
//!     of skipping them; a silently dropped point would change the answer.

pub mod index;
pub mod loader;
pub mod point;
