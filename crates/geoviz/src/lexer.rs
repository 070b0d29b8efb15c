//! Line classification and the shared coordinate tokenizer.
//!
//! Grammar accepted by every parser
//! - A significant line starts with an ASCII digit or `(`; everything else
//!   (labels, timings, blank lines) is skipped.
//! - Coordinates are separated by any mix of whitespace, `,`, `(`, `)`; the
//!   DCEL arrow `->` is a separator as well.

use crate::error::{Error, Result};
use crate::types::{Point, Scalar};

/// Whether a line carries coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    Geometric,
    NonGeometric,
}

/// Classify one line by its first character only.
pub fn classify(line: &str) -> LineClass {
    match line.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '(' => LineClass::Geometric,
        _ => LineClass::NonGeometric,
    }
}

/// Split a line into raw coordinate tokens.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|t| !t.is_empty() && *t != "->")
}

/// All tokens of `line` as numbers. `lineno` is 1-based and only used for errors.
pub fn numeric_tokens(line: &str, lineno: usize) -> Result<Vec<Scalar>> {
    tokens(line)
        .map(|t| {
            Scalar::parse(t)
                .ok_or_else(|| Error::parse(lineno, format!("non-numeric token `{t}`"), line))
        })
        .collect()
}

/// Group an even-length number list into points.
pub(crate) fn pairs(nums: &[Scalar]) -> Vec<Point> {
    nums.chunks_exact(2)
        .map(|c| Point { x: c[0], y: c[1] })
        .collect()
}
