//! Ingestion and dataset tooling for computational-geometry outputs.
//!
//! Purpose
//! - Turn loosely formatted, line-oriented algorithm output (convex hulls,
//!   DCEL half-edge dumps, triangulations) into typed geometric collections.
//! - Generate synthetic point datasets with exactly `N` unique coordinate pairs.
//! - Hand the collections to an explicit, caller-owned render context.
//!
//! Nothing here computes geometry. Hulls, subdivisions and triangulations are
//! produced upstream; this crate only reads, rewrites and draws them.
//!
//! Layout
//! - `lexer`: line classification and the shared coordinate tokenizer.
//! - `parse`: hull, DCEL and triangulation result parsers.
//! - `dataset`: count-then-coordinates files (read, write, generate, flip).
//! - `render`: `Figure` render context and the SVG backend.

pub mod cfg;
pub mod dataset;
pub mod error;
pub mod lexer;
pub mod parse;
pub mod render;
pub mod types;

pub use error::{Error, Result};
pub use types::{Point, Polygon, Scalar, Segment, Triangle};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dataset::rand::{Domain, GeneratorCfg, PointSet, PointSetGenerator, SamplerKind};
    pub use crate::dataset::{flip_orientation, read_dataset, read_segments, write_dataset};
    pub use crate::error::{Error, Result};
    pub use crate::lexer::{classify, LineClass};
    pub use crate::parse::{parse_dcel, parse_hull, parse_triangulation};
    pub use crate::render::{Figure, RenderCfg};
    pub use crate::types::{Face, Point, Polygon, Scalar, Segment, Triangle};
}
