//! Drawing routines for the three result kinds. Each draws into a
//! caller-owned `Figure`.

use super::{Figure, Rgb};
use crate::cfg::marker_size;
use crate::types::{Face, Point, Polygon, Segment, Triangle};

/// Hull outline, optionally over the original point cloud.
pub fn draw_hull(fig: &mut Figure, hull: &Polygon, cloud: Option<&[Point]>) {
    fig.title = "Computed Convex Hull".into();
    fig.outline(hull, Rgb::RED, 1.5, Some("Convex hull"));
    if let Some(points) = cloud {
        fig.scatter(points, marker_size(points.len()), Some("All points"));
    }
}

/// One randomly coloured patch per face, with dashed reference segments.
pub fn draw_dcel(fig: &mut Figure, faces: &[Face], segments: Option<&[Segment]>) {
    fig.title = "DCEL Faces".into();
    for face in faces {
        fig.filled(face);
    }
    for seg in segments.unwrap_or_default() {
        fig.dashed_segment(seg, Rgb::RED, 2.0);
    }
}

/// One randomly coloured patch per triangle, with the original outline on top.
pub fn draw_triangulation(fig: &mut Figure, triangles: &[Triangle], outline: Option<&Polygon>) {
    fig.title = "Triangulation".into();
    for tri in triangles {
        fig.filled(&tri.to_polygon());
    }
    if let Some(poly) = outline {
        fig.outline(poly, Rgb::RED, 3.0, Some("Original polygon"));
    }
}

#[cfg(test)]
mod tests {
    use super::super::Layer;
    use super::*;

    #[test]
    fn hull_view_sizes_markers_by_density() {
        let hull = Polygon::new(vec![Point::int(0, 0), Point::int(2, 0), Point::int(1, 2)]);
        let cloud: Vec<Point> = (0..600).map(|i| Point::int(i, i)).collect();
        let mut fig = Figure::new("");
        draw_hull(&mut fig, &hull, Some(cloud.as_slice()));
        assert_eq!(fig.title, "Computed Convex Hull");
        match &fig.layers()[1] {
            Layer::Scatter { size, points, .. } => {
                assert_eq!(*size, 2.0);
                assert_eq!(points.len(), 600);
            }
            other => panic!("unexpected layer {other:?}"),
        }
    }

    #[test]
    fn dcel_view_has_patch_per_face_and_dashed_overlay() {
        let face = Polygon::new(vec![Point::int(0, 0), Point::int(1, 0), Point::int(0, 1)]);
        let seg = Segment {
            a: Point::int(0, 0),
            b: Point::int(1, 0),
        };
        let mut fig = Figure::new("").with_seed(5);
        draw_dcel(&mut fig, &[face.clone(), face], Some(&[seg][..]));
        assert_eq!(fig.layers().len(), 3);
        assert!(matches!(fig.layers()[2], Layer::Segment { dashed: true, .. }));
    }

    #[test]
    fn triangulation_view_puts_outline_last() {
        let t = Triangle::new(Point::int(0, 0), Point::int(1, 0), Point::int(0, 1));
        let mut fig = Figure::new("");
        draw_triangulation(&mut fig, &[t], Some(&t.to_polygon()));
        assert_eq!(fig.layers().len(), 2);
        assert!(matches!(fig.layers()[1], Layer::Polygon { fill: None, .. }));
    }
}
