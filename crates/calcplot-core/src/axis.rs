// File: crates/calcplot-core/src/axis.rs
// Summary: Axis model and "nice" 1-2-5 tick planning shared by both axes.

use crate::text::format_tick_label;
use crate::types::{EPSILON, TARGET_TICKS, TICK_GUARD};

/// Tick increment from `{1, 2, 5, 10} x 10^n` giving roughly `target_ticks` ticks over `range`.
/// Degenerate ranges (non-positive, NaN, infinite) give `1.0`.
pub fn nice_step(range: f64, target_ticks: usize) -> f64 {
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }
    let raw = range / target_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.max(1e-12).log10().floor());
    let mantissa = raw / magnitude;
    let factor = if mantissa < 1.5 {
        1.0
    } else if mantissa < 3.0 {
        2.0
    } else if mantissa < 7.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Smallest multiple of `step` that is `>= min`.
pub fn first_tick(min: f64, step: f64) -> f64 {
    (min / step).ceil() * step
}

/// Tick layout for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPlan {
    pub step: f64,
    pub start_tick: f64,
}

impl AxisPlan {
    pub fn for_range(min: f64, max: f64) -> Self {
        Self::with_target(min, max, TARGET_TICKS)
    }

    pub fn with_target(min: f64, max: f64, target_ticks: usize) -> Self {
        let step = nice_step(max - min, target_ticks);
        Self { step, start_tick: first_tick(min, step) }
    }

    /// Tick values from `start_tick` while `<= max + EPSILON`, at most `TICK_GUARD` of them.
    pub fn ticks(&self, max: f64) -> Vec<f64> {
        let mut out = Vec::new();
        let mut v = self.start_tick;
        while v <= max + EPSILON && out.len() < TICK_GUARD {
            out.push(v);
            v += self.step;
        }
        out
    }
}

/// One plotted axis: its caption and the data interval it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn x(min: f64, max: f64) -> Self {
        Self::new("X", min, max)
    }

    pub fn y(min: f64, max: f64) -> Self {
        Self::new("Y", min, max)
    }

    pub fn plan(&self) -> AxisPlan {
        AxisPlan::for_range(self.min, self.max)
    }

    /// Tick values paired with their labels.
    pub fn labelled_ticks(&self) -> Vec<(f64, String)> {
        self.plan()
            .ticks(self.max)
            .into_iter()
            .map(|v| (v, format_tick_label(v)))
            .collect()
    }

    /// Whether the zero gridline for this axis is drawn.
    pub fn contains_zero(&self) -> bool {
        self.min <= 0.0 && 0.0 <= self.max
    }
}
