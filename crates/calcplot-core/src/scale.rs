// File: crates/calcplot-core/src/scale.rs
// Summary: Affine data <-> pixel transform for the plot area, with y flipped for screen rows.

use crate::types::{Point, Vertex, Viewport};
use crate::view::DataBounds;

/// Spans narrower than this are widened to one unit.
pub const MIN_SPAN: f64 = 1e-9;

/// Maps data space into the padded plot area of a viewport and back.
///
/// Columns run `padding..width-padding` left to right; rows run
/// `height-padding..padding` as y increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub viewport: Viewport,
    pub bounds: DataBounds,
}

impl CoordinateMapper {
    /// Build for `bounds` on a resolved `viewport`. Degenerate spans are widened to `[min, min + 1]`.
    pub fn new(viewport: Viewport, bounds: DataBounds) -> Self {
        Self { viewport: viewport.resolve(), bounds: bounds.widened() }
    }

    fn plot_width(&self) -> f64 {
        self.viewport.width - 2.0 * self.viewport.padding
    }

    fn plot_height(&self) -> f64 {
        self.viewport.height - 2.0 * self.viewport.padding
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f64 {
        let b = &self.bounds;
        self.viewport.padding + (x - b.x_min) / (b.x_max - b.x_min) * self.plot_width()
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f64 {
        let b = &self.bounds;
        self.viewport.height - self.viewport.padding - (y - b.y_min) / (b.y_max - b.y_min) * self.plot_height()
    }

    #[inline]
    pub fn from_px_x(&self, px: f64) -> f64 {
        let b = &self.bounds;
        b.x_min + (px - self.viewport.padding) / self.plot_width() * (b.x_max - b.x_min)
    }

    #[inline]
    pub fn from_px_y(&self, py: f64) -> f64 {
        let b = &self.bounds;
        b.y_min + (self.viewport.height - self.viewport.padding - py) / self.plot_height() * (b.y_max - b.y_min)
    }

    pub fn to_screen(&self, p: Point) -> Vertex {
        Vertex::new(self.to_px_x(p.x), self.to_px_y(p.y))
    }

    pub fn to_data(&self, v: Vertex) -> Point {
        Point::new(self.from_px_x(v.x), self.from_px_y(v.y))
    }
}
