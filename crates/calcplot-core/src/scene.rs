// File: crates/calcplot-core/src/scene.rs
// Summary: Renderer-agnostic primitive list for one plot (curve, zero axes, ticks, labels).

use tracing::trace;

use crate::axis::Axis;
use crate::curve::{self, RenderMode};
use crate::error::{PlotError, PlotResult};
use crate::scale::CoordinateMapper;
use crate::types::{Point, Vertex, Viewport, TICK_LENGTH};
use crate::view::DataBounds;

/// A straight line in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vertex,
    pub to: Vertex,
}

impl Segment {
    pub const fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }
}

/// Where a label's position sits relative to its text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the top-centre of the text (x tick labels).
    TopCenter,
    /// Position is the middle of the right edge (y tick labels).
    MiddleRight,
    /// Position is the top-left corner (axis captions).
    TopLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Vertex,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub mark: Segment,
    pub label: Label,
}

/// Everything a surface needs to draw one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub mapper: CoordinateMapper,
    pub mode: RenderMode,
    pub curve: Vec<Vertex>,
    /// Vertical line at x = 0, when 0 is inside the x range.
    pub zero_x: Option<Segment>,
    /// Horizontal line at y = 0, when 0 is inside the y range.
    pub zero_y: Option<Segment>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub axis_labels: Vec<Label>,
}

impl Scene {
    /// Lay out `points` over the x range `[x_min, x_max]`; the y range comes from the data.
    pub fn build(
        points: &[Point],
        x_min: f64,
        x_max: f64,
        mode: RenderMode,
        viewport: Viewport,
    ) -> PlotResult<Self> {
        let usable: Vec<Point> = points.iter().copied().filter(|p| p.x.is_finite() && p.y.is_finite()).collect();
        if usable.len() < points.len() {
            trace!(skipped = points.len() - usable.len(), "skipping non-finite samples");
        }
        if usable.len() < 2 {
            return Err(PlotError::InsufficientData { needed: 2, got: usable.len() });
        }
        let bounds = DataBounds::from_points(&usable, x_min, x_max)
            .ok_or(PlotError::InsufficientData { needed: 2, got: 0 })?;
        if !bounds.has_finite_spans() {
            return Err(PlotError::invalid_input("Values too large to plot."));
        }
        let mapper = CoordinateMapper::new(viewport, bounds);
        let curve = curve::render(&usable, mode, &mapper);
        Ok(Self::assemble(mapper, mode.effective(usable.len()), curve))
    }

    fn assemble(mapper: CoordinateMapper, mode: RenderMode, curve: Vec<Vertex>) -> Self {
        let vp = mapper.viewport;
        let b = mapper.bounds;
        let (left, right) = (vp.plot_min(), vp.plot_right());
        let (top, bottom) = (vp.plot_min(), vp.plot_bottom());

        let x_axis = b.x_axis();
        let y_axis = b.y_axis();

        let zero_x = x_axis.contains_zero().then(|| {
            let px = mapper.to_px_x(0.0);
            Segment::new(Vertex::new(px, top), Vertex::new(px, bottom))
        });
        let zero_y = y_axis.contains_zero().then(|| {
            let py = mapper.to_px_y(0.0);
            Segment::new(Vertex::new(left, py), Vertex::new(right, py))
        });

        let x_ticks = x_ticks(&x_axis, &mapper, bottom);
        let y_ticks = y_ticks(&y_axis, &mapper, left);

        let axis_labels = vec![
            Label { text: x_axis.label.clone(), at: Vertex::new(right + 20.0, bottom - 10.0), anchor: Anchor::TopLeft },
            Label { text: y_axis.label.clone(), at: Vertex::new(left - 20.0, top - 30.0), anchor: Anchor::TopLeft },
        ];

        Self { mapper, mode, curve, zero_x, zero_y, x_ticks, y_ticks, axis_labels }
    }

    pub fn viewport(&self) -> Viewport {
        self.mapper.viewport
    }

    pub fn bounds(&self) -> DataBounds {
        self.mapper.bounds
    }
}

fn x_ticks(axis: &Axis, mapper: &CoordinateMapper, base: f64) -> Vec<Tick> {
    axis.labelled_ticks()
        .into_iter()
        .map(|(value, text)| {
            let px = mapper.to_px_x(value);
            Tick {
                value,
                mark: Segment::new(Vertex::new(px, base), Vertex::new(px, base - TICK_LENGTH)),
                label: Label { text, at: Vertex::new(px, base + 4.0), anchor: Anchor::TopCenter },
            }
        })
        .collect()
}

fn y_ticks(axis: &Axis, mapper: &CoordinateMapper, base: f64) -> Vec<Tick> {
    axis.labelled_ticks()
        .into_iter()
        .map(|(value, text)| {
            let py = mapper.to_px_y(value);
            Tick {
                value,
                mark: Segment::new(Vertex::new(base, py), Vertex::new(base + TICK_LENGTH, py)),
                label: Label { text, at: Vertex::new(base - 6.0, py), anchor: Anchor::MiddleRight },
            }
        })
        .collect()
}
