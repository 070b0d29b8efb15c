//! Fixed defaults shared across parsers, the generator and the renderer.
//!
//! Policy
//! - Defaults are plain constants. Anything a caller needs to vary lives in a
//!   config struct (`GeneratorCfg`, `RenderCfg`) instead.

/// Prefix of a DCEL half-edge record line, e.g. `HEdge: (0, 0) -> (1, 0)`.
pub const HEDGE_MARKER: &str = "HEdge";
/// Prefix of a DCEL face delimiter line, e.g. `Face Id: 3, Rep: ...`.
pub const FACE_MARKER: &str = "Face";

/// Directory (relative to the working directory) that receives generated datasets.
pub const DATASET_DIR: &str = "datasets";

/// Point clouds at or above this size are drawn with the smallest marker.
pub const DENSE_POINTS: usize = 500;
/// Point clouds below this size are drawn with the largest marker.
pub const SPARSE_POINTS: usize = 100;
pub const DENSE_MARKER: f64 = 2.0;
pub const DEFAULT_MARKER: f64 = 20.0;
pub const SPARSE_MARKER: f64 = 35.0;

/// Standard deviation (coordinate units) of the normal fallback sampler.
pub const NORMAL_STD_DEV: f64 = 1000.0;
/// Attempt ceiling multiplier: `ATTEMPT_FACTOR * cap * (ln(cap) + 1)`.
pub(crate) const ATTEMPT_FACTOR: f64 = 16.0;
/// Upper bound on up-front allocation for generated point sets.
pub(crate) const PREALLOC_LIMIT: usize = 1 << 20;

/// Marker size for an overlay point cloud of `n` points.
pub fn marker_size(n: usize) -> f64 {
    if n >= DENSE_POINTS {
        DENSE_MARKER
    } else if n < SPARSE_POINTS {
        SPARSE_MARKER
    } else {
        DEFAULT_MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_size_tiers() {
        assert_eq!(marker_size(0), SPARSE_MARKER);
        assert_eq!(marker_size(99), SPARSE_MARKER);
        assert_eq!(marker_size(100), DEFAULT_MARKER);
        assert_eq!(marker_size(499), DEFAULT_MARKER);
        assert_eq!(marker_size(500), DENSE_MARKER);
        assert_eq!(marker_size(100_000), DENSE_MARKER);
    }
}
