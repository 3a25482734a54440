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

//! Point instance loader for the minimum-volume tetrahedron search.
//!
//! This module turns line-based text streams into a validated `PointSet`.
//! Each line encodes one point as four comma-separated numeric fields: three
//! coordinates and one integer label. Lines may carry arbitrary decorative
//! characters (parentheses, brackets, whitespace, prose); everything that is
//! not a digit, comma, period, or hyphen is stripped before parsing.
//!
//! The `PointLoader` emphasizes clarity and robustness. A line that does not
//! yield exactly four fields after sanitization is rejected with an error
//! naming the line, and a field that does not parse as a number is rejected
//! with the offending token. Bad lines are never skipped silently: a dropped
//! point would shift every later index and change the search answer.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//! Labels may be written in float form (`25.0`); they are truncated to the
//! integer label type, matching the field's float-truncating semantics.

use crate::point::{Point, PointSet};
use num_traits::{PrimInt, Signed};
use regex::Regex;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    sync::OnceLock,
};

/// The number of comma-separated fields a sanitized line must yield.
const FIELDS_PER_POINT: usize = 4;

/// Characters that survive sanitization: digits, commas, periods, hyphens.
fn decoration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^0-9.,-]").expect("decoration pattern is a valid regex")
    })
}

/// The error type for the point loading process.
#[derive(Debug)]
pub enum PointLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A line did not yield exactly four numeric fields after sanitization.
    MalformedLine(MalformedLineError),
    /// A field could not be parsed into the expected numeric type.
    Parse(ParseFieldError),
}

/// Details about a line with the wrong number of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLineError {
    /// The 1-based line number in the input.
    pub line_number: usize,
    /// The number of comma-separated fields found after sanitization.
    pub fields_found: usize,
}

impl std::fmt::Display for MalformedLineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {} yielded {} numeric fields after sanitization, expected {}",
            self.line_number, self.fields_found, FIELDS_PER_POINT
        )
    }
}

impl std::error::Error for MalformedLineError {}

/// Details about a failed field parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    /// The 1-based line number in the input.
    pub line_number: usize,
    /// The string field that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "f64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {}: could not parse field '{}' as type {}",
            self.line_number, self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseFieldError {}

impl std::fmt::Display for PointLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedLine(e) => write!(f, "Malformed input: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PointLoaderError {}

impl From<std::io::Error> for PointLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MalformedLineError> for PointLoaderError {
    fn from(e: MalformedLineError) -> Self {
        Self::MalformedLine(e)
    }
}

impl From<ParseFieldError> for PointLoaderError {
    fn from(e: ParseFieldError) -> Self {
        Self::Parse(e)
    }
}

/// A configurable loader for point instances.
///
/// The format this parser expects is one point per line:
///
/// ```raw
/// (x, y, z, n)
/// ```
///
/// where `x`, `y`, `z` are floating point coordinates and `n` is the integer
/// label. Decorations such as parentheses, brackets, and whitespace are
/// stripped; only digits, commas, periods, and hyphens participate in
/// parsing.
///
/// # Configuration
/// * `skip_blank_lines`: If true, lines that are empty after sanitization are
///   ignored instead of rejected. Off by default; the reference format has no
///   blank lines, and a blank line usually indicates a broken input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointLoader {
    skip_blank_lines: bool,
}

impl Default for PointLoader {
    fn default() -> Self {
        Self {
            skip_blank_lines: false,
        }
    }
}

impl PointLoader {
    /// Creates a new `PointLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether lines that sanitize to nothing are skipped.
    #[inline]
    pub fn skip_blank_lines(mut self, yes: bool) -> Self {
        self.skip_blank_lines = yes;
        self
    }

    /// Loads a point set from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<PointSet<T>, PointLoaderError>
    where
        T: PrimInt + Signed,
        R: BufRead,
    {
        let mut points = Vec::new();

        for (line_index, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;

            let sanitized = decoration_pattern().replace_all(&line, "");
            if sanitized.is_empty() && self.skip_blank_lines {
                continue;
            }

            points.push(parse_point(&sanitized, line_number)?);
        }

        Ok(PointSet::new(points))
    }

    /// Loads a point set from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<PointSet<T>, PointLoaderError>
    where
        T: PrimInt + Signed,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a point set from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<PointSet<T>, PointLoaderError>
    where
        T: PrimInt + Signed,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a point set from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<PointSet<T>, PointLoaderError>
    where
        T: PrimInt + Signed,
    {
        self.from_reader(s.as_bytes())
    }
}

/// Parses one sanitized line into a point.
///
/// The line must split into exactly four comma-separated fields: three `f64`
/// coordinates and one label. Labels are parsed as `f64` first so that float
/// formatted integers (`25.0`) are accepted, then truncated to `T`.
fn parse_point<T>(sanitized: &str, line_number: usize) -> Result<Point<T>, PointLoaderError>
where
    T: PrimInt + Signed,
{
    let fields: Vec<&str> = sanitized.split(',').collect();
    if fields.len() != FIELDS_PER_POINT {
        return Err(MalformedLineError {
            line_number,
            fields_found: fields.len(),
        }
        .into());
    }

    let x = parse_coordinate(fields[0], line_number)?;
    let y = parse_coordinate(fields[1], line_number)?;
    let z = parse_coordinate(fields[2], line_number)?;
    let label = parse_label::<T>(fields[3], line_number)?;

    Ok(Point::new(x, y, z, label))
}

fn parse_coordinate(token: &str, line_number: usize) -> Result<f64, ParseFieldError> {
    token.parse::<f64>().map_err(|_| ParseFieldError {
        line_number,
        token: token.to_owned(),
        type_name: "f64",
    })
}

fn parse_label<T>(token: &str, line_number: usize) -> Result<T, ParseFieldError>
where
    T: PrimInt + Signed,
{
    let value = token.parse::<f64>().map_err(|_| ParseFieldError {
        line_number,
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })?;

    num_traits::cast(value.trunc()).ok_or_else(|| ParseFieldError {
        line_number,
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PointIndex;

    const DECORATED_INSTANCE: &str = "\
(12.0, 0.0, 0.0, 10)
[ -3.5, 7.25, 1.0, 25 ]
point: 0.0, -1.0, 4.5, 65.0
";

    #[test]
    fn test_loads_and_strips_decorations() {
        let set: PointSet<i64> = PointLoader::new()
            .from_str(DECORATED_INSTANCE)
            .expect("instance should load");

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(PointIndex::new(0)).coords(), [12.0, 0.0, 0.0]);
        assert_eq!(set.get(PointIndex::new(0)).label(), 10);
        assert_eq!(set.get(PointIndex::new(1)).coords(), [-3.5, 7.25, 1.0]);
        assert_eq!(set.get(PointIndex::new(1)).label(), 25);
        // Float-formatted labels are truncated to the integer type.
        assert_eq!(set.get(PointIndex::new(2)).label(), 65);
    }

    #[test]
    fn test_label_float_truncation() {
        let set: PointSet<i64> = PointLoader::new()
            .from_str("0.0, 0.0, 0.0, 12.9\n")
            .expect("instance should load");
        assert_eq!(set.get(PointIndex::new(0)).label(), 12);
    }

    #[test]
    fn test_three_fields_is_malformed() {
        let res: Result<PointSet<i64>, _> = PointLoader::new().from_str("1.0, 2.0, 3.0\n");

        match res {
            Err(PointLoaderError::MalformedLine(e)) => {
                assert_eq!(e.line_number, 1);
                assert_eq!(e.fields_found, 3);
            }
            _ => panic!("Expected MalformedLine error"),
        }
    }

    #[test]
    fn test_five_fields_is_malformed() {
        let res: Result<PointSet<i64>, _> =
            PointLoader::new().from_str("1.0, 2.0, 3.0, 4, 5\n");

        assert!(matches!(res, Err(PointLoaderError::MalformedLine(_))));
    }

    #[test]
    fn test_unparseable_field_reports_token_and_line() {
        // The second line sanitizes to "1.0,2.0,3..0,4"; the third field is
        // not a valid number.
        let data = "0.0, 0.0, 0.0, 1\n1.0, 2.0, 3..0, 4\n";
        let res: Result<PointSet<i64>, _> = PointLoader::new().from_str(data);

        match res {
            Err(PointLoaderError::Parse(e)) => {
                assert_eq!(e.line_number, 2);
                assert_eq!(e.token, "3..0");
                assert_eq!(e.type_name, "f64");
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_blank_line_is_rejected_by_default() {
        let data = "1.0, 2.0, 3.0, 4\n\n5.0, 6.0, 7.0, 8\n";
        let res: Result<PointSet<i64>, _> = PointLoader::new().from_str(data);

        match res {
            Err(PointLoaderError::MalformedLine(e)) => {
                assert_eq!(e.line_number, 2);
                assert_eq!(e.fields_found, 1);
            }
            _ => panic!("Expected MalformedLine error for blank line"),
        }
    }

    #[test]
    fn test_blank_lines_can_be_skipped() {
        let data = "1.0, 2.0, 3.0, 4\n   --- \n5.0, 6.0, 7.0, 8\n";
        // The separator line sanitizes to "---", which is not blank, so it
        // must still be rejected even when blank lines are skipped.
        let res: Result<PointSet<i64>, _> =
            PointLoader::new().skip_blank_lines(true).from_str(data);
        assert!(matches!(res, Err(PointLoaderError::MalformedLine(_))));

        let data = "1.0, 2.0, 3.0, 4\n()\n5.0, 6.0, 7.0, 8\n";
        let set: PointSet<i64> = PointLoader::new()
            .skip_blank_lines(true)
            .from_str(data)
            .expect("blank line should be skipped");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(PointIndex::new(1)).label(), 8);
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let res: Result<PointSet<i64>, _> =
            PointLoader::new().from_path("/definitely/not/a/real/file.txt");
        assert!(matches!(res, Err(PointLoaderError::Io(_))));
    }

    #[test]
    fn test_negative_coordinates_and_labels() {
        let set: PointSet<i64> = PointLoader::new()
            .from_str("-1.5, -2.5, -3.5, -10\n")
            .expect("instance should load");

        let p = set.get(PointIndex::new(0));
        assert_eq!(p.coords(), [-1.5, -2.5, -3.5]);
        assert_eq!(p.label(), -10);
    }
}
