// File: crates/calcplot-core/src/types.rs
// Summary: Shared types and constants (points, viewport sizes, padding, loop guards).

/// Default surface width in pixels, used while the real viewport is degenerate.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: f64 = 500.0;
/// Shorter default height for compact plot panes.
pub const COMPACT_HEIGHT: f64 = 400.0;
/// Padding between the surface edge and the plot area, in pixels.
pub const DEFAULT_PADDING: f64 = 50.0;
/// Any viewport dimension below this is replaced by its default.
pub const MIN_VIEWPORT: f64 = 50.0;

/// Tolerance used when comparing an accumulated coordinate against a range end.
pub const EPSILON: f64 = 1e-12;
/// Iteration cap for plain sampling.
pub const SAMPLE_GUARD: usize = 100_000;
/// Iteration cap for derivative sampling.
pub const DERIVATIVE_GUARD: usize = 200_000;
/// Iteration cap for tick enumeration.
pub const TICK_GUARD: usize = 10_000;
/// Approximate number of labelled ticks per axis.
pub const TARGET_TICKS: usize = 8;
/// Tick mark length in pixels.
pub const TICK_LENGTH: f64 = 8.0;

/// A sample in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A position in screen space: `x` is the pixel column, `y` the pixel row (growing downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface dimensions.
/// Contract: after `resolve`, width and height are at least `MIN_VIEWPORT`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Compact pane preset (800x400).
    pub const fn compact() -> Self {
        Self::new(DEFAULT_WIDTH, COMPACT_HEIGHT, DEFAULT_PADDING)
    }

    /// Replace degenerate dimensions (before layout, or NaN) with the defaults.
    pub fn resolve(&self) -> Self {
        self.resolve_with(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn resolve_with(&self, fallback_width: f64, fallback_height: f64) -> Self {
        let width = if self.width >= MIN_VIEWPORT { self.width } else { fallback_width };
        let height = if self.height >= MIN_VIEWPORT { self.height } else { fallback_height };
        let padding = if self.padding.is_finite() && self.padding >= 0.0 { self.padding } else { DEFAULT_PADDING };
        Self { width, height, padding }
    }

    /// Left/top edge of the plot area.
    pub fn plot_min(&self) -> f64 { self.padding }
    /// Right edge of the plot area.
    pub fn plot_right(&self) -> f64 { self.width - self.padding }
    /// Bottom edge of the plot area.
    pub fn plot_bottom(&self) -> f64 { self.height - self.padding }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_PADDING)
    }
}
