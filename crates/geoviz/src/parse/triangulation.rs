use std::io::BufRead;

use tracing::debug;

use super::for_each_line;
use crate::error::{Error, Result};
use crate::lexer::{classify, numeric_tokens, pairs, LineClass};
use crate::types::Triangle;

/// Parse one triangle per significant line. Lines are independent.
pub fn parse_triangulation<R: BufRead>(reader: R) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();
    for_each_line(reader, |lineno, line| {
        if classify(line) == LineClass::NonGeometric {
            debug!(line = lineno, text = line, "skipped");
            return Ok(());
        }
        let nums = numeric_tokens(line, lineno)?;
        if nums.len() != 6 {
            return Err(Error::parse(
                lineno,
                format!("expected 3 coordinate pairs, found {} numbers", nums.len()),
                line,
            ));
        }
        let p = pairs(&nums);
        triangles.push(Triangle::new(p[0], p[1], p[2]));
        Ok(())
    })?;
    debug!(triangles = triangles.len(), "triangulation parsed");
    Ok(triangles)
}
