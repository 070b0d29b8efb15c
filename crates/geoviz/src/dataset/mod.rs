//! Dataset files: a count header followed by one coordinate pair per line.
//!
//! ```text
//! 3
//! -12 40
//! 7 7
//! 100 -3
//! ```
//!
//! The same layout carries generated point sets, original polygons overlaid on
//! hull/triangulation views, and (with four numbers per line) raw segment
//! dumps overlaid on DCEL views.

pub mod flip;
pub mod rand;

pub use flip::flip_orientation;

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::lexer::numeric_tokens;
use crate::types::{Point, Scalar, Segment};
use self::rand::PointSet;

/// Parse a requested point count. Must be a positive integer.
pub fn parse_count(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err(Error::Input("point count must be positive".into())),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::Input(format!(
            "point count must be a positive integer, got {:?}",
            text.trim()
        ))),
    }
}

/// Count from the first token of a header line.
pub(crate) fn header_count(line: &str) -> Result<usize> {
    line.split_whitespace()
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| Error::parse(1, "expected a point count", line))
}

/// Read the header and exactly `N` body rows of `width` numbers each.
fn read_rows<R: BufRead>(reader: R, width: usize) -> Result<Vec<Vec<Scalar>>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(Error::parse(1, "missing count header", "")),
    };
    let n = header_count(&header)?;
    // The header is untrusted; a short body is reported below.
    let mut rows = Vec::with_capacity(n.min(4096));
    for i in 0..n {
        let lineno = i + 2;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::parse(
                    lineno,
                    format!("header announces {n} rows, found {i}"),
                    "",
                ))
            }
        };
        let nums = numeric_tokens(&line, lineno)?;
        if nums.len() < width {
            return Err(Error::parse(
                lineno,
                format!("expected {width} numbers, found {}", nums.len()),
                &line,
            ));
        }
        rows.push(nums);
    }
    Ok(rows)
}

/// Read a dataset file into its points, in file order.
pub fn read_dataset<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    Ok(read_rows(reader, 2)?
        .into_iter()
        .map(|r| Point::new(r[0], r[1]))
        .collect())
}

/// Read a segment dump: count header, then `x1 y1 x2 y2` per line.
pub fn read_segments<R: BufRead>(reader: R) -> Result<Vec<Segment>> {
    Ok(read_rows(reader, 4)?
        .into_iter()
        .map(|r| Segment {
            a: Point::new(r[0], r[1]),
            b: Point::new(r[2], r[3]),
        })
        .collect())
}

/// Write points in dataset layout.
pub fn write_points<W: Write>(mut w: W, points: &[Point]) -> std::io::Result<()> {
    writeln!(w, "{}", points.len())?;
    for p in points {
        writeln!(w, "{} {}", p.x, p.y)?;
    }
    w.flush()
}

/// Replace `path` with `body` through a sibling temp file, so an interrupted
/// write leaves the old contents in place.
pub(crate) fn write_atomic(path: &Path, body: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(body).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

/// Persist a generated set as `<dir>/<N>.txt`, overwriting any earlier file
/// for the same `N`.
pub fn write_dataset(dir: &Path, set: &PointSet) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let path = dir.join(format!("{}.txt", set.len()));
    let mut body = Vec::new();
    write_points(&mut body, set.points()).map_err(|e| Error::io(&path, e))?;
    write_atomic(&path, &body)?;
    tracing::info!(path = %path.display(), points = set.len(), "dataset written");
    Ok(path)
}
