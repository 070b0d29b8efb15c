//! In-place winding toggle for polygon dataset files.
//!
//! The count header is kept verbatim and the `N` body lines it announces are
//! reversed. Lines after the body (trailing blanks, notes) stay where they
//! are. Each line is copied as-is; only the order changes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use super::{header_count, write_atomic};
use crate::error::{Error, Result};

/// Reverse the body of `text`. Every output line ends with `\n`.
pub fn reverse_body(text: &str) -> Result<String> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing count header", ""))?;
    let n = header_count(header)?;
    let rest: Vec<&str> = lines.collect();
    let (body, tail) = rest.split_at(n.min(rest.len()));
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(header);
    out.push('\n');
    for line in body.iter().rev().chain(tail) {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Toggle CCW↔CW for the polygon stored at `path`.
///
/// The new contents go to a temp file that replaces `path` on success, so a
/// failed write never truncates the original.
pub fn flip_orientation(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::io(path, std::io::Error::new(ErrorKind::NotFound, "file does not exist"))
        } else {
            Error::io(path, e)
        }
    })?;
    let flipped = reverse_body(&text)?;
    write_atomic(path, flipped.as_bytes())?;
    info!(path = %path.display(), "orientation flipped");
    Ok(())
}
