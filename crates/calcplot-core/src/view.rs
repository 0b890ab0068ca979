// File: crates/calcplot-core/src/view.rs
// Summary: Data bounding box for a plot: commanded x range plus the sampled y extent.

use crate::axis::Axis;
use crate::scale::MIN_SPAN;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// X from the requested range, y from the data. `None` when there are no finite y values.
    pub fn from_points(points: &[Point], x_min: f64, x_max: f64) -> Option<Self> {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            if p.y.is_finite() {
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
            }
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max }.widened())
    }

    /// Degenerate spans become `[min, min + 1]`.
    pub fn widened(self) -> Self {
        let mut b = self;
        if !((b.x_max - b.x_min).abs() >= MIN_SPAN) { b.x_max = b.x_min + 1.0; }
        if !((b.y_max - b.y_min).abs() >= MIN_SPAN) { b.y_max = b.y_min + 1.0; }
        b
    }

    /// Both spans are representable; `-1e308..1e308` is not.
    pub fn has_finite_spans(&self) -> bool {
        (self.x_max - self.x_min).is_finite() && (self.y_max - self.y_min).is_finite()
    }

    pub fn x_axis(&self) -> Axis {
        Axis::x(self.x_min, self.x_max)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::y(self.y_min, self.y_max)
    }
}
