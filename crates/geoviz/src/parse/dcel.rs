//! DCEL dump reader: a two-symbol state machine.
//!
//! Symbols
//! - `HEdge ...` record: push its origin onto the pending face.
//! - `Face ...` delimiter: emit the pending face if non-empty, else no-op.
//! - end of stream: emit the pending face if non-empty.
//!
//! Only origins form the boundary. The destination of each record is parsed
//! (so malformed records are still rejected) but not stored: the closing edge
//! is implied by the polygon being cyclic.

use std::io::BufRead;

use tracing::{debug, trace};

use super::for_each_line;
use crate::cfg::{FACE_MARKER, HEDGE_MARKER};
use crate::error::{Error, Result};
use crate::lexer::numeric_tokens;
use crate::types::{Face, Point};

/// One directed record from the dump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
    pub origin: Point,
    pub dest: Point,
}

impl HalfEdge {
    /// Parse the part after the `HEdge` marker: `: (x, y) -> (x, y)`.
    fn parse(body: &str, lineno: usize, line: &str) -> Result<HalfEdge> {
        let nums = numeric_tokens(body.trim_start_matches(':'), lineno)?;
        if nums.len() != 4 {
            return Err(Error::parse(
                lineno,
                format!("expected origin -> destination, found {} numbers", nums.len()),
                line,
            ));
        }
        Ok(HalfEdge {
            origin: Point {
                x: nums[0],
                y: nums[1],
            },
            dest: Point {
                x: nums[2],
                y: nums[3],
            },
        })
    }
}

/// Pending-edge accumulator plus the faces emitted so far.
#[derive(Debug, Default)]
pub struct FaceAccumulator {
    pending: Vec<Point>,
    faces: Vec<Face>,
}

impl FaceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_edge(&mut self, edge: HalfEdge) {
        trace!(origin = %edge.origin, dest = %edge.dest, "half-edge");
        self.pending.push(edge.origin);
    }

    /// Close the pending face. Returns whether a face was emitted.
    pub fn delimit(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let vertices = std::mem::take(&mut self.pending);
        self.faces.push(Face::new(vertices));
        true
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flush a trailing face and return everything emitted.
    pub fn finish(mut self) -> Vec<Face> {
        self.delimit();
        self.faces
    }
}

/// Parse a DCEL dump into faces in order of appearance.
pub fn parse_dcel<R: BufRead>(reader: R) -> Result<Vec<Face>> {
    let mut acc = FaceAccumulator::new();
    for_each_line(reader, |lineno, line| {
        if line.starts_with(FACE_MARKER) {
            if !acc.delimit() {
                debug!(line = lineno, "delimiter with no pending edges");
            }
        } else if let Some(body) = line.strip_prefix(HEDGE_MARKER) {
            acc.push_edge(HalfEdge::parse(body, lineno, line)?);
        } else {
            debug!(line = lineno, text = line, "skipped");
        }
        Ok(())
    })?;
    let faces = acc.finish();
    debug!(faces = faces.len(), "dcel parsed");
    Ok(faces)
}
