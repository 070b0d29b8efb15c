use std::io::BufRead;

use tracing::debug;

use super::for_each_line;
use crate::error::{Error, Result};
use crate::lexer::{classify, numeric_tokens, LineClass};
use crate::types::{Point, Polygon};

/// Parse a hull listing into a polygon, keeping the upstream vertex order.
///
/// Each significant line must start with two numbers; trailing numbers are
/// ignored.
pub fn parse_hull<R: BufRead>(reader: R) -> Result<Polygon> {
    let mut vertices = Vec::new();
    for_each_line(reader, |lineno, line| {
        if classify(line) == LineClass::NonGeometric {
            debug!(line = lineno, text = line, "skipped");
            return Ok(());
        }
        let nums = numeric_tokens(line, lineno)?;
        if nums.len() < 2 {
            return Err(Error::parse(lineno, "expected an (x, y) pair", line));
        }
        vertices.push(Point {
            x: nums[0],
            y: nums[1],
        });
        Ok(())
    })?;
    debug!(vertices = vertices.len(), "hull parsed");
    Ok(Polygon::new(vertices))
}
