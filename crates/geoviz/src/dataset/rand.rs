//! Unique random point sets.
//!
//! Model
//! - Coordinates are lattice draws `k ∈ [min, max]` scaled by `1/scale`, so
//!   integer and fractional datasets share one policy.
//! - Each axis is drawn uniformly. If the value was already used on that axis,
//!   it is redrawn once with the fallback sampler chosen at construction. The
//!   per-axis sets only spread the distribution; uniqueness is enforced on
//!   the (x, y) pair.
//! - Sampling stops at `N` unique pairs or at the attempt ceiling, whichever
//!   comes first. Requests larger than the lattice fail before sampling.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use tracing::{debug, info};

use crate::cfg::{ATTEMPT_FACTOR, NORMAL_STD_DEV, PREALLOC_LIMIT};
use crate::error::{Error, Result};
use crate::types::{Point, Scalar};

/// Coordinate lattice: draws in `[min, max]`, coordinate = draw / scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub min: i64,
    pub max: i64,
    pub scale: u32,
}

impl Domain {
    /// Integer coordinates in ±1e5.
    pub const INTEGER: Domain = Domain {
        min: -100_000,
        max: 100_000,
        scale: 1,
    };
    /// Three-decimal coordinates in ±1e5.
    pub const FRACTIONAL: Domain = Domain {
        min: -100_000_000,
        max: 100_000_000,
        scale: 1000,
    };

    fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::Input(format!(
                "empty domain [{}, {}]",
                self.min, self.max
            )));
        }
        if self.scale == 0 {
            return Err(Error::Input("domain scale must be positive".into()));
        }
        Ok(())
    }

    /// Number of distinct values per axis.
    pub fn width(&self) -> u128 {
        (self.max as i128 - self.min as i128 + 1).max(0) as u128
    }

    /// Number of distinct (x, y) pairs.
    pub fn capacity(&self) -> u128 {
        let w = self.width();
        w.saturating_mul(w)
    }

    /// Typed coordinate for lattice value `k`.
    pub fn coord(&self, k: i64) -> Scalar {
        if self.scale == 1 {
            Scalar::Int(k)
        } else {
            Scalar::Real(k as f64 / self.scale as f64)
        }
    }

    fn clamp(&self, k: i64) -> i64 {
        k.clamp(self.min, self.max)
    }
}

/// Which sampler redraws a coordinate that collided on its axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SamplerKind {
    Uniform,
    /// Normal around 0 with `std_dev` in coordinate units, snapped to the lattice.
    Normal { std_dev: f64 },
}

impl Default for SamplerKind {
    fn default() -> Self {
        SamplerKind::Normal {
            std_dev: NORMAL_STD_DEV,
        }
    }
}

/// Draw one lattice value inside the domain.
pub trait CoordSampler {
    fn draw(&self, rng: &mut StdRng, domain: &Domain) -> i64;
}

/// Uniform over `[min, max]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformSampler;

impl CoordSampler for UniformSampler {
    fn draw(&self, rng: &mut StdRng, domain: &Domain) -> i64 {
        rng.gen_range(domain.min..=domain.max)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NormalSampler {
    dist: Normal<f64>,
}

impl NormalSampler {
    pub fn new(std_dev: f64) -> Result<Self> {
        let dist = Normal::new(0.0, std_dev)
            .map_err(|e| Error::Input(format!("normal sampler std_dev {std_dev}: {e}")))?;
        Ok(Self { dist })
    }
}

impl CoordSampler for NormalSampler {
    fn draw(&self, rng: &mut StdRng, domain: &Domain) -> i64 {
        let v = self.dist.sample(rng) * domain.scale as f64;
        // `as` saturates for out-of-range floats; clamp brings it back in.
        domain.clamp(v.round() as i64)
    }
}

/// Generator configuration.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GeneratorCfg {
    pub domain: Domain,
    pub sampler: SamplerKind,
    /// Fixed seed for reproducible sets; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Overrides the capacity-derived attempt ceiling.
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorCfg {
    fn default() -> Self {
        Self {
            domain: Domain::INTEGER,
            sampler: SamplerKind::default(),
            seed: None,
            max_attempts: None,
        }
    }
}

/// `N` unique points in insertion order.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

pub struct PointSetGenerator {
    cfg: GeneratorCfg,
    rng: StdRng,
    primary: UniformSampler,
    fallback: Box<dyn CoordSampler>,
}

impl PointSetGenerator {
    pub fn new(cfg: GeneratorCfg) -> Result<Self> {
        cfg.domain.validate()?;
        let fallback: Box<dyn CoordSampler> = match cfg.sampler {
            SamplerKind::Uniform => Box::new(UniformSampler),
            SamplerKind::Normal { std_dev } => Box::new(NormalSampler::new(std_dev)?),
        };
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            cfg,
            rng,
            primary: UniformSampler,
            fallback,
        })
    }

    pub fn cfg(&self) -> &GeneratorCfg {
        &self.cfg
    }

    /// Attempt ceiling for the configured domain.
    pub fn attempt_ceiling(&self) -> u64 {
        if let Some(n) = self.cfg.max_attempts {
            return n;
        }
        let cap = self.cfg.domain.capacity() as f64;
        let bound = ATTEMPT_FACTOR * cap * (cap.ln() + 1.0);
        if bound >= u64::MAX as f64 {
            u64::MAX
        } else {
            (bound.ceil() as u64).max(1)
        }
    }

    /// Draw one axis value, redrawing once with the fallback on collision.
    fn draw_axis(&mut self, used: &mut HashSet<i64>, resamples: &mut u64) -> i64 {
        let domain = self.cfg.domain;
        let mut k = self.primary.draw(&mut self.rng, &domain);
        if used.contains(&k) {
            *resamples += 1;
            k = self.fallback.draw(&mut self.rng, &domain);
        }
        used.insert(k);
        k
    }

    /// Produce exactly `n` unique points.
    pub fn generate(&mut self, n: usize) -> Result<PointSet> {
        if n == 0 {
            return Err(Error::Input("point count must be positive".into()));
        }
        let domain = self.cfg.domain;
        let capacity = domain.capacity();
        if n as u128 > capacity {
            return Err(Error::Capacity {
                requested: n,
                detail: format!("domain holds only {capacity} distinct pairs"),
            });
        }
        let ceiling = self.attempt_ceiling();

        // Grow past this on demand; `n` may be close to the domain capacity.
        let prealloc = n.min(PREALLOC_LIMIT);
        let mut seen: HashSet<(i64, i64)> = HashSet::with_capacity(prealloc);
        let mut used_x: HashSet<i64> = HashSet::new();
        let mut used_y: HashSet<i64> = HashSet::new();
        let mut points = Vec::with_capacity(prealloc);
        let mut attempts: u64 = 0;
        let mut resamples: u64 = 0;
        while points.len() < n {
            if attempts >= ceiling {
                return Err(Error::Capacity {
                    requested: n,
                    detail: format!(
                        "gave up after {attempts} attempts with {} points placed",
                        points.len()
                    ),
                });
            }
            attempts += 1;
            let x = self.draw_axis(&mut used_x, &mut resamples);
            let y = self.draw_axis(&mut used_y, &mut resamples);
            if seen.insert((x, y)) {
                points.push(Point::new(domain.coord(x), domain.coord(y)));
            }
        }
        debug!(attempts, resamples, "sampling finished");
        info!(points = n, scale = domain.scale, "point set generated");
        Ok(PointSet { points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny(min: i64, max: i64) -> GeneratorCfg {
        GeneratorCfg {
            domain: Domain { min, max, scale: 1 },
            sampler: SamplerKind::Uniform,
            seed: Some(7),
            max_attempts: None,
        }
    }

    fn assert_unique(set: &PointSet) {
        let mut keys = HashSet::new();
        for p in set.points() {
            let key = (p.x.as_f64().to_bits(), p.y.as_f64().to_bits());
            assert!(keys.insert(key), "duplicate point {p}");
        }
    }

    #[test]
    fn exact_count_and_unique() {
        let mut gen = PointSetGenerator::new(GeneratorCfg {
            seed: Some(42),
            ..Default::default()
        })
        .unwrap();
        let set = gen.generate(1000).unwrap();
        assert_eq!(set.len(), 1000);
        assert_unique(&set);
        for p in set.points() {
            assert!(p.x.is_int() && p.y.is_int());
            assert!((-100_000.0..=100_000.0).contains(&p.x.as_f64()));
        }
    }

    #[test]
    fn fills_a_small_domain_completely() {
        // 4x4 lattice, every pair requested.
        let mut gen = PointSetGenerator::new(tiny(0, 3)).unwrap();
        let set = gen.generate(16).unwrap();
        assert_eq!(set.len(), 16);
        assert_unique(&set);
    }

    #[test]
    fn normal_fallback_stays_in_domain() {
        let mut gen = PointSetGenerator::new(GeneratorCfg {
            domain: Domain {
                min: -5,
                max: 5,
                scale: 1,
            },
            sampler: SamplerKind::Normal { std_dev: 3.0 },
            seed: Some(3),
            max_attempts: None,
        })
        .unwrap();
        let set = gen.generate(60).unwrap();
        assert_unique(&set);
        for p in set.points() {
            assert!((-5.0..=5.0).contains(&p.x.as_f64()));
            assert!((-5.0..=5.0).contains(&p.y.as_f64()));
        }
    }

    #[test]
    fn fractional_domain_yields_decimals() {
        let mut gen = PointSetGenerator::new(GeneratorCfg {
            domain: Domain::FRACTIONAL,
            seed: Some(11),
            ..Default::default()
        })
        .unwrap();
        let set = gen.generate(50).unwrap();
        assert_unique(&set);
        assert!(set.points().iter().all(|p| !p.x.is_int() && !p.y.is_int()));
    }

    #[test]
    fn same_seed_same_set() {
        let a = PointSetGenerator::new(tiny(-50, 50)).unwrap().generate(30).unwrap();
        let b = PointSetGenerator::new(tiny(-50, 50)).unwrap().generate(30).unwrap();
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn over_capacity_fails_fast() {
        let mut gen = PointSetGenerator::new(tiny(0, 1)).unwrap();
        let err = gen.generate(5).unwrap_err();
        assert!(matches!(err, Error::Capacity { requested: 5, .. }), "{err:?}");
    }

    #[test]
    fn attempt_ceiling_stops_the_loop() {
        let mut cfg = tiny(0, 9);
        cfg.max_attempts = Some(3);
        let mut gen = PointSetGenerator::new(cfg).unwrap();
        let err = gen.generate(100).unwrap_err();
        assert!(matches!(err, Error::Capacity { .. }), "{err:?}");
    }

    #[test]
    fn huge_request_within_capacity_does_not_preallocate() {
        let mut gen = PointSetGenerator::new(GeneratorCfg {
            seed: Some(1),
            max_attempts: Some(10),
            ..Default::default()
        })
        .unwrap();
        let err = gen.generate(40_000_000_000).unwrap_err();
        assert!(
            matches!(err, Error::Capacity { requested: 40_000_000_000, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn rejects_zero_and_bad_domains() {
        let mut gen = PointSetGenerator::new(tiny(0, 3)).unwrap();
        assert!(matches!(gen.generate(0), Err(Error::Input(_))));
        assert!(matches!(
            PointSetGenerator::new(tiny(3, 0)),
            Err(Error::Input(_))
        ));
        let mut cfg = tiny(0, 3);
        cfg.sampler = SamplerKind::Normal { std_dev: -1.0 };
        assert!(matches!(PointSetGenerator::new(cfg), Err(Error::Input(_))));
    }

    #[test]
    fn capacity_saturates_on_wide_domains() {
        let d = Domain {
            min: i64::MIN,
            max: i64::MAX,
            scale: 1,
        };
        assert_eq!(d.width(), 1u128 << 64);
        assert_eq!(d.capacity(), u128::MAX);
    }
}
