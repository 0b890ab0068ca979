// File: crates/calcplot-core/src/sampler.rs
// Summary: Guarded x-range walk and evaluator-driven sampling into ordered point sequences.

use tracing::{debug, trace, warn};

use crate::error::{PlotError, PlotResult};
use crate::evaluator::{parse_value, Evaluator};
use crate::types::{Point, EPSILON};

/// Why a walk stopped yielding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The next x would exceed `x_max + EPSILON`.
    RangeExhausted,
    /// The iteration cap was reached while x was still inside the range.
    GuardExhausted,
}

/// Validated sampling interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    pub x_min: f64,
    pub x_max: f64,
    pub step: f64,
}

impl SampleRange {
    /// Contract: `step > 0`, `x_max > x_min`, all finite, and the span itself finite.
    pub fn new(x_min: f64, x_max: f64, step: f64) -> PlotResult<Self> {
        let range = Self { x_min, x_max, step };
        let finite = x_min.is_finite() && x_max.is_finite() && step.is_finite() && range.span().is_finite();
        if !finite || step <= 0.0 || x_max <= x_min {
            return Err(PlotError::InvalidRange { x_min, x_max, step });
        }
        Ok(range)
    }

    pub fn walk(&self, guard: usize) -> XWalk {
        XWalk::new(*self, guard)
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.x_max - self.x_min
    }
}

/// Lazily yields `x_min, x_min + step, ...` and stops past `x_max + EPSILON` or after `guard` items.
///
/// Positions are computed as `x_min + i * step` rather than by repeated addition,
/// so long walks do not drift.
#[derive(Clone, Debug)]
pub struct XWalk {
    range: SampleRange,
    guard: usize,
    index: usize,
    stop: Option<StopReason>,
}

impl XWalk {
    pub fn new(range: SampleRange, guard: usize) -> Self {
        Self { range, guard, index: 0, stop: None }
    }

    /// `None` while the walk can still yield.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Number of positions yielded so far.
    pub fn yielded(&self) -> usize {
        self.index
    }

    fn x_at(&self) -> f64 {
        self.range.x_min + self.index as f64 * self.range.step
    }
}

impl Iterator for XWalk {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.stop.is_some() {
            return None;
        }
        let x = self.x_at();
        if x > self.range.x_max + EPSILON {
            self.stop = Some(StopReason::RangeExhausted);
            return None;
        }
        if self.index >= self.guard {
            self.stop = Some(StopReason::GuardExhausted);
            return None;
        }
        self.index += 1;
        Some(x)
    }
}

/// Result of a sampling pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRun {
    /// Ordered by increasing x.
    pub points: Vec<Point>,
    pub stop: StopReason,
    /// Samples whose text did not parse as a number.
    pub dropped: usize,
}

impl SampleRun {
    pub fn truncated(&self) -> bool {
        self.stop == StopReason::GuardExhausted
    }
}

/// Evaluate `expr` at every x of the walk. The first evaluator error aborts the whole run,
/// tagged with its x; non-numeric results are dropped. Fewer than two points is a failure.
pub fn sample<E: Evaluator + ?Sized>(
    evaluator: &mut E,
    expr: &str,
    range: SampleRange,
    guard: usize,
) -> PlotResult<SampleRun> {
    let mut walk = range.walk(guard);
    let mut points = Vec::new();
    let mut dropped = 0usize;
    for x in walk.by_ref() {
        let text = evaluator.evaluate_at_x(expr, x).map_err(|e| {
            debug!(x, error = %e, "sampling aborted");
            PlotError::evaluation_at(e, x)
        })?;
        match parse_value(&text) {
            Some(y) => points.push(Point::new(x, y)),
            None => {
                trace!(x, text = %text, "dropping non-numeric sample");
                dropped += 1;
            }
        }
    }
    let stop = walk.stop_reason().unwrap_or(StopReason::RangeExhausted);
    finish_run(points, stop, dropped, guard)
}

pub(crate) fn finish_run(
    points: Vec<Point>,
    stop: StopReason,
    dropped: usize,
    guard: usize,
) -> PlotResult<SampleRun> {
    if stop == StopReason::GuardExhausted {
        warn!(guard, kept = points.len(), "iteration guard reached; result truncated");
    }
    if points.len() < 2 {
        return Err(PlotError::InsufficientData { needed: 2, got: points.len() });
    }
    debug!(points = points.len(), dropped, ?stop, "sampling finished");
    Ok(SampleRun { points, stop, dropped })
}
