//! Minimal SVG backend: equal-aspect world→canvas map, y axis up.

use nalgebra::Vector2;

use super::{Figure, Layer, RenderCfg};

/// World→canvas affine map with uniform scale.
struct View {
    lo: Vector2<f64>,
    scale: f64,
    origin: Vector2<f64>,
    height: f64,
}

impl View {
    fn fit(fig: &Figure, cfg: &RenderCfg) -> View {
        let (lo, hi) = fig
            .bounds()
            .unwrap_or((Vector2::zeros(), Vector2::new(1.0, 1.0)));
        let span = (hi - lo).map(|d| d.max(1e-9));
        let avail = Vector2::new(cfg.width, cfg.height).add_scalar(-2.0 * cfg.margin);
        let scale = (avail.x / span.x).min(avail.y / span.y);
        // Centre the drawing in the available box.
        let used = span * scale;
        let origin = Vector2::new(cfg.margin, cfg.margin) + (avail - used) * 0.5;
        View {
            lo,
            scale,
            origin,
            height: cfg.height,
        }
    }

    fn map(&self, p: &Vector2<f64>) -> Vector2<f64> {
        let q = self.origin + (p - self.lo) * self.scale;
        Vector2::new(q.x, self.height - q.y)
    }
}

fn path_points(view: &View, pts: &[Vector2<f64>]) -> String {
    pts.iter()
        .map(|p| {
            let q = view.map(p);
            format!("{:.2},{:.2}", q.x, q.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(super) fn render(fig: &Figure, cfg: &RenderCfg) -> String {
    let view = View::fit(fig, cfg);
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n",
        w = cfg.width,
        h = cfg.height
    );
    for layer in fig.layers() {
        match layer {
            Layer::Scatter {
                points,
                size,
                color,
                ..
            } => {
                // Marker size is an area, as in common plotting APIs.
                let r = size.sqrt() / 2.0;
                for p in points {
                    let q = view.map(p);
                    out.push_str(&format!(
                        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{r:.2}\" fill=\"{}\"/>\n",
                        q.x,
                        q.y,
                        color.hex()
                    ));
                }
            }
            Layer::Polygon {
                vertices,
                stroke,
                fill,
                width,
                ..
            } => {
                let fill = fill.map_or_else(|| "none".to_string(), |c| c.hex());
                out.push_str(&format!(
                    "<polygon points=\"{}\" fill=\"{fill}\" fill-opacity=\"0.8\" stroke=\"{}\" stroke-width=\"{width}\"/>\n",
                    path_points(&view, vertices),
                    stroke.hex()
                ));
            }
            Layer::Segment {
                a,
                b,
                color,
                width,
                dashed,
            } => {
                let (qa, qb) = (view.map(a), view.map(b));
                let dash = if *dashed { " stroke-dasharray=\"6 4\"" } else { "" };
                out.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{width}\"{dash}/>\n",
                    qa.x,
                    qa.y,
                    qb.x,
                    qb.y,
                    color.hex()
                ));
            }
        }
    }

    let mid_x = cfg.width / 2.0;
    out.push_str(&format!(
        "<text x=\"{mid_x}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"18\">{}</text>\n",
        cfg.margin / 2.0,
        escape(&fig.title)
    ));
    out.push_str(&format!(
        "<text x=\"{mid_x}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\">{}</text>\n",
        cfg.height - cfg.margin / 4.0,
        escape(&fig.x_label)
    ));
    out.push_str(&format!(
        "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"13\" transform=\"rotate(-90 {x:.1} {y:.1})\">{}</text>\n",
        escape(&fig.y_label),
        x = cfg.margin / 3.0,
        y = cfg.height / 2.0
    ));
    for (i, (label, color)) in fig.legend().into_iter().enumerate() {
        let y = cfg.margin + 18.0 * i as f64;
        out.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" fill=\"{}\"/>\n\
             <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">{}</text>\n",
            cfg.width - cfg.margin - 110.0,
            y - 10.0,
            color.hex(),
            cfg.width - cfg.margin - 92.0,
            y,
            escape(label)
        ));
    }
    out.push_str("</svg>\n");
    out
}
