//! Geometric value types produced by the parsers and the generator.
//!
//! - `Scalar`: one coordinate, keeping the integer/decimal distinction of its
//!   source text so integer datasets are written back as integers.
//! - `Point`, `Polygon`, `Triangle`, `Segment`: plain containers; no
//!   validity checks beyond what the parsers enforce.

use nalgebra::Vector2;
use std::fmt;

/// A coordinate as read from text or drawn by the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Real(f64),
}

impl Scalar {
    /// Parse one numeric token. Integers stay integers; anything else must be
    /// a finite decimal.
    pub fn parse(token: &str) -> Option<Scalar> {
        if let Ok(i) = token.parse::<i64>() {
            return Some(Scalar::Int(i));
        }
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Scalar::Real(v)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Real(v) => v,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Real(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(i) => write!(f, "{i}"),
            // Keep a decimal point so the value reads back as `Real`.
            Scalar::Real(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Scalar::Real(v) => write!(f, "{v}"),
        }
    }
}

/// A 2-D point with source-typed coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    pub fn int(x: i64, y: i64) -> Self {
        Self::new(Scalar::Int(x), Scalar::Int(y))
    }

    pub fn real(x: f64, y: f64) -> Self {
        Self::new(Scalar::Real(x), Scalar::Real(y))
    }

    /// Floating-point view used by the renderer.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered, cyclic vertex sequence. The closing edge back to the first vertex
/// is implicit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Same boundary with the opposite winding.
    pub fn reversed(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }

    /// Twice the signed area (shoelace). Positive for counterclockwise winding.
    pub fn signed_area2(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        (0..n)
            .map(|i| {
                let p = self.vertices[i].to_vec2();
                let q = self.vertices[(i + 1) % n].to_vec2();
                p.x * q.y - q.x * p.y
            })
            .sum()
    }
}

/// A DCEL face: the boundary assembled from consecutive half-edge origins.
pub type Face = Polygon;

/// Exactly three vertices, one per parsed triangulation line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices.to_vec())
    }
}

/// A raw reference segment from a segment dump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}
