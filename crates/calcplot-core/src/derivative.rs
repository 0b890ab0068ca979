// File: crates/calcplot-core/src/derivative.rs
// Summary: Central-difference derivatives (point and range) and tangent-line construction.

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::evaluator::{parse_value, Evaluator};
use crate::sampler::{finish_run, SampleRange, SampleRun, StopReason};
use crate::types::Point;

/// Derivatives smaller than this in magnitude are reported as exactly zero.
pub const NOISE_FLOOR: f64 = 1e-12;
/// Smallest difference step ever used.
pub const MIN_STEP: f64 = 1e-5;

/// Difference step for differentiating across `[x_min, x_max]`.
pub fn range_step(x_min: f64, x_max: f64) -> f64 {
    MIN_STEP.max((x_max - x_min).abs() * 1e-6)
}

/// Difference step for differentiating at a single point.
pub fn point_step(x0: f64) -> f64 {
    MIN_STEP.max(x0.abs() * 1e-6 + 1e-6)
}

/// Snap values within the noise floor to `0.0`, which also removes `-0.0`.
#[inline]
pub fn snap_noise(d: f64) -> f64 {
    if d.abs() < NOISE_FLOOR { 0.0 } else { d }
}

/// `(f(x+h) - f(x-h)) / 2h` for `f = expr`. An evaluator error at either end is
/// tagged with that end's x; non-numeric text aborts at `x`.
pub fn central_difference<E: Evaluator + ?Sized>(
    evaluator: &mut E,
    expr: &str,
    x: f64,
    h: f64,
) -> PlotResult<f64> {
    let ahead = x + h;
    let behind = x - h;
    let y_ahead = evaluator.evaluate_at_x(expr, ahead).map_err(|e| PlotError::evaluation_at(e, ahead))?;
    let y_behind = evaluator.evaluate_at_x(expr, behind).map_err(|e| PlotError::evaluation_at(e, behind))?;
    let (Some(yp), Some(ym)) = (parse_value(&y_ahead), parse_value(&y_behind)) else {
        let text = if parse_value(&y_ahead).is_none() { y_ahead } else { y_behind };
        return Err(PlotError::NonNumeric { x, text });
    };
    Ok(snap_noise((yp - ym) / (2.0 * h)))
}

/// Central difference at every x of the range, with the derivative guard.
pub fn derivative_samples<E: Evaluator + ?Sized>(
    evaluator: &mut E,
    expr: &str,
    range: SampleRange,
    guard: usize,
) -> PlotResult<SampleRun> {
    let h = range_step(range.x_min, range.x_max);
    debug!(h, "differentiating over range");
    let mut walk = range.walk(guard);
    let mut points = Vec::new();
    for x in walk.by_ref() {
        let d = central_difference(evaluator, expr, x, h)?;
        points.push(Point::new(x, d));
    }
    let stop = walk.stop_reason().unwrap_or(StopReason::RangeExhausted);
    finish_run(points, stop, 0, guard)
}

/// Endpoints of the tangent segment through `(x0, y0)` spanning `x0 ± |half_width|`.
pub fn tangent_line(x0: f64, y0: f64, slope: f64, half_width: f64) -> (Point, Point) {
    let xl = x0 - half_width.abs();
    let xr = x0 + half_width.abs();
    (
        Point::new(xl, y0 + slope * (xl - x0)),
        Point::new(xr, y0 + slope * (xr - x0)),
    )
}

/// A tangent evaluated against a live evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub x0: f64,
    pub y0: f64,
    pub slope: f64,
    pub left: Point,
    pub right: Point,
}

impl Tangent {
    /// Evaluate `expr` at `x0`, differentiate there, and extrapolate linearly.
    pub fn at<E: Evaluator + ?Sized>(
        evaluator: &mut E,
        expr: &str,
        x0: f64,
        half_width: f64,
    ) -> PlotResult<Self> {
        let text = evaluator.evaluate_at_x(expr, x0).map_err(|e| PlotError::evaluation_at(e, x0))?;
        let y0 = parse_value(&text).ok_or(PlotError::NonNumeric { x: x0, text })?;
        let slope = central_difference(evaluator, expr, x0, point_step(x0))?;
        let (left, right) = tangent_line(x0, y0, slope, half_width);
        Ok(Self { x0, y0, slope, left, right })
    }

    /// Slope rounded to three decimals, never negative zero.
    pub fn display_slope(&self) -> f64 {
        ((self.slope * 1000.0).round() / 1000.0) + 0.0
    }
}
