// File: crates/calcplot-core/src/evaluator.rs
// Summary: Boundary to the external expression evaluator (tagged results, plot-buffer side channel).

use crate::curve::RenderMode;
use crate::error::{EvalError, EvalErrorKind};
use crate::types::Point;

/// What every evaluator call produces: the formatted value, or a classified failure.
pub type EvalResult = Result<String, EvalError>;

/// A dataset staged by the evaluator itself (e.g. by an interpreter-level plotting builtin).
#[derive(Clone, Debug, PartialEq)]
pub struct PlotBuffer {
    pub points: Vec<Point>,
    pub mode: RenderMode,
    /// Requested x range as (min, max).
    pub range: (f64, f64),
}

/// The expression evaluator this crate drives. It owns the variable/function
/// environment, which persists between calls until `reset_state`.
pub trait Evaluator {
    /// Execute one statement against the persistent environment.
    fn evaluate(&mut self, statement: &str) -> EvalResult;

    /// Evaluate `expr` with `x` bound as the evaluation variable.
    fn evaluate_at_x(&mut self, expr: &str, x: f64) -> EvalResult;

    /// Drop every user-defined variable and function.
    fn reset_state(&mut self);

    /// Dataset staged by the last call, if any. Evaluators without plotting builtins keep the default.
    fn plot_buffer(&self) -> Option<PlotBuffer> {
        None
    }

    fn has_plot_data(&self) -> bool {
        self.plot_buffer().is_some()
    }

    fn clear_plot_data(&mut self) {}
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&mut self, statement: &str) -> EvalResult { (**self).evaluate(statement) }
    fn evaluate_at_x(&mut self, expr: &str, x: f64) -> EvalResult { (**self).evaluate_at_x(expr, x) }
    fn reset_state(&mut self) { (**self).reset_state() }
    fn plot_buffer(&self) -> Option<PlotBuffer> { (**self).plot_buffer() }
    fn has_plot_data(&self) -> bool { (**self).has_plot_data() }
    fn clear_plot_data(&mut self) { (**self).clear_plot_data() }
}

/// Classify the output of an evaluator that reports failures in-band, as text starting
/// with `Lexer`, `Parser`, `Runtime` or `Error`. Anything else is a success.
pub fn classify_output(text: impl Into<String>) -> EvalResult {
    let text = text.into();
    let kind = if text.starts_with("Lexer") {
        Some(EvalErrorKind::Lexer)
    } else if text.starts_with("Parser") {
        Some(EvalErrorKind::Parser)
    } else if text.starts_with("Runtime") {
        Some(EvalErrorKind::Runtime)
    } else if text.starts_with("Error") {
        Some(EvalErrorKind::Generic)
    } else {
        None
    };
    match kind {
        Some(kind) => Err(EvalError::new(kind, text)),
        None => Ok(text),
    }
}

/// Parse an evaluator's success text as a number (surrounding whitespace allowed).
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
