//! Explicit render context.
//!
//! A `Figure` is an ordinary value owned by the caller: parsed collections are
//! added as layers, and the finished figure is handed to a backend. There is
//! no process-wide figure state.

mod svg;
mod views;

pub use views::{draw_dcel, draw_hull, draw_triangulation};

use std::path::Path;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::types::{Point, Polygon, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(214, 39, 40);
    pub const BLUE: Rgb = Rgb(31, 119, 180);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Drawable primitive in world coordinates.
#[derive(Clone, Debug)]
pub enum Layer {
    Scatter {
        points: Vec<Vector2<f64>>,
        size: f64,
        color: Rgb,
        label: Option<String>,
    },
    Polygon {
        vertices: Vec<Vector2<f64>>,
        stroke: Rgb,
        fill: Option<Rgb>,
        width: f64,
        label: Option<String>,
    },
    Segment {
        a: Vector2<f64>,
        b: Vector2<f64>,
        color: Rgb,
        width: f64,
        dashed: bool,
    },
}

impl Layer {
    fn points(&self) -> Box<dyn Iterator<Item = &Vector2<f64>> + '_> {
        match self {
            Layer::Scatter { points, .. } => Box::new(points.iter()),
            Layer::Polygon { vertices, .. } => Box::new(vertices.iter()),
            Layer::Segment { a, b, .. } => Box::new([a, b].into_iter()),
        }
    }

    fn legend(&self) -> Option<(&str, Rgb)> {
        match self {
            Layer::Scatter { label, color, .. } => label.as_deref().map(|l| (l, *color)),
            Layer::Polygon {
                label,
                stroke,
                fill,
                ..
            } => label.as_deref().map(|l| (l, fill.unwrap_or(*stroke))),
            Layer::Segment { .. } => None,
        }
    }
}

/// Canvas settings for the SVG backend.
#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 60.0,
        }
    }
}

/// A labeled, legended 2-D chart under construction.
#[derive(Clone, Debug)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    layers: Vec<Layer>,
    rng: StdRng,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "X axis".into(),
            y_label: "Y axis".into(),
            layers: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the seed used for per-face colours.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn random_color(&mut self) -> Rgb {
        Rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }

    pub fn scatter(&mut self, points: &[Point], size: f64, label: Option<&str>) {
        self.layers.push(Layer::Scatter {
            points: points.iter().map(|p| p.to_vec2()).collect(),
            size,
            color: Rgb::BLUE,
            label: label.map(str::to_string),
        });
    }

    pub fn outline(&mut self, poly: &Polygon, stroke: Rgb, width: f64, label: Option<&str>) {
        self.layers.push(Layer::Polygon {
            vertices: poly.vertices.iter().map(|p| p.to_vec2()).collect(),
            stroke,
            fill: None,
            width,
            label: label.map(str::to_string),
        });
    }

    /// Filled polygon in a fresh random colour.
    pub fn filled(&mut self, poly: &Polygon) {
        let color = self.random_color();
        self.layers.push(Layer::Polygon {
            vertices: poly.vertices.iter().map(|p| p.to_vec2()).collect(),
            stroke: color,
            fill: Some(color),
            width: 1.0,
            label: None,
        });
    }

    pub fn dashed_segment(&mut self, seg: &Segment, color: Rgb, width: f64) {
        self.layers.push(Layer::Segment {
            a: seg.a.to_vec2(),
            b: seg.b.to_vec2(),
            color,
            width,
            dashed: true,
        });
    }

    /// Axis-aligned bounds over every layer, `None` for an empty figure.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let mut it = self.layers.iter().flat_map(|l| l.points());
        let first = *it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))))
    }

    pub fn legend(&self) -> Vec<(&str, Rgb)> {
        self.layers.iter().filter_map(Layer::legend).collect()
    }

    pub fn to_svg(&self, cfg: &RenderCfg) -> String {
        svg::render(self, cfg)
    }

    pub fn save_svg(&self, path: &Path, cfg: &RenderCfg) -> Result<()> {
        std::fs::write(path, self.to_svg(cfg)).map_err(|e| Error::io(path, e))
    }
}
