//! Result parsers for upstream algorithm output.
//!
//! Each parser makes one forward pass over a `BufRead`, owns its own
//! accumulator and aborts on the first malformed significant line. Line
//! numbers in errors are 1-based.
//!
//! - `hull`: one `(x, y)` per line, in hull order.
//! - `dcel`: `HEdge: (x, y) -> (x, y)` records grouped by `Face` delimiters.
//! - `triangulation`: three `(x, y)` pairs per line.

mod dcel;
mod hull;
mod triangulation;

pub use dcel::{parse_dcel, FaceAccumulator, HalfEdge};
pub use hull::parse_hull;
pub use triangulation::parse_triangulation;

use crate::error::Result;
use std::io::BufRead;

/// Feed every line of `reader` to `f` with its 1-based number.
pub(crate) fn for_each_line<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        f(idx + 1, &line)?;
    }
    Ok(())
}
