// File: crates/calcplot-core/src/curve.rs
// Summary: Turns ordered samples into a screen polyline, straight or Catmull-Rom smoothed.

use std::str::FromStr;

use thiserror::Error;

use crate::scale::CoordinateMapper;
use crate::types::{Point, Vertex};

/// Parameter samples per spline segment (`t = 0, 0.05, ..., 1`).
pub const SEGMENT_SAMPLES: usize = 21;
/// Fewest points a spline is drawn through; below this the curve is straight.
pub const SPLINE_MIN_POINTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Linear,
    Spline,
}

impl RenderMode {
    /// The mode actually used for `n` points.
    pub fn effective(self, n: usize) -> Self {
        match self {
            RenderMode::Spline if n >= SPLINE_MIN_POINTS => RenderMode::Spline,
            _ => RenderMode::Linear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Linear => "linear",
            RenderMode::Spline => "spline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown render mode '{0}'")]
pub struct UnknownRenderMode(pub String);

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("linear") {
            Ok(RenderMode::Linear)
        } else if s.eq_ignore_ascii_case("spline") {
            Ok(RenderMode::Spline)
        } else {
            Err(UnknownRenderMode(s.to_string()))
        }
    }
}

/// Cubic Catmull-Rom through `p1` (t = 0) and `p2` (t = 1).
pub fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let basis = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    Point::new(basis(p0.x, p1.x, p2.x, p3.x), basis(p0.y, p1.y, p2.y, p3.y))
}

/// Copy of `points` stably sorted by x.
pub fn sorted_by_x(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x));
    pts
}

/// Data-space curve for `mode`: the sorted points themselves, or the spline sampled
/// `SEGMENT_SAMPLES` times per segment with the ends duplicated as phantom controls.
pub fn trace(points: &[Point], mode: RenderMode) -> Vec<Point> {
    let sorted = sorted_by_x(points);
    match mode.effective(sorted.len()) {
        RenderMode::Linear => sorted,
        RenderMode::Spline => {
            let mut ctrl = Vec::with_capacity(sorted.len() + 2);
            ctrl.push(sorted[0]);
            ctrl.extend_from_slice(&sorted);
            ctrl.push(sorted[sorted.len() - 1]);
            let mut out = Vec::with_capacity((ctrl.len() - 3) * SEGMENT_SAMPLES);
            for w in ctrl.windows(4) {
                for i in 0..SEGMENT_SAMPLES {
                    let t = i as f64 / (SEGMENT_SAMPLES - 1) as f64;
                    out.push(catmull_rom(w[0], w[1], w[2], w[3], t));
                }
            }
            out
        }
    }
}

/// Screen-space polyline for `points`.
pub fn render(points: &[Point], mode: RenderMode, mapper: &CoordinateMapper) -> Vec<Vertex> {
    trace(points, mode).into_iter().map(|p| mapper.to_screen(p)).collect()
}

/// Vertices `render` produces for `n` points.
pub fn vertex_count(n: usize, mode: RenderMode) -> usize {
    match mode.effective(n) {
        RenderMode::Linear => n,
        RenderMode::Spline => (n - 1) * SEGMENT_SAMPLES,
    }
}
