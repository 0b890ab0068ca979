// File: crates/calcplot-core/src/error.rs
// Summary: Error taxonomy for commands, and the tagged evaluator failure type.

use std::fmt;

use thiserror::Error;

use crate::text::format_decimal;

/// Failure category reported by the expression evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    Lexer,
    Parser,
    Runtime,
    Generic,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvalErrorKind::Lexer => "lexer",
            EvalErrorKind::Parser => "parser",
            EvalErrorKind::Runtime => "runtime",
            EvalErrorKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// A classified evaluator failure. `message` is the evaluator's full text, shown as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
    pub fn lexer(message: impl Into<String>) -> Self { Self::new(EvalErrorKind::Lexer, message) }
    pub fn parser(message: impl Into<String>) -> Self { Self::new(EvalErrorKind::Parser, message) }
    pub fn runtime(message: impl Into<String>) -> Self { Self::new(EvalErrorKind::Runtime, message) }
    pub fn generic(message: impl Into<String>) -> Self { Self::new(EvalErrorKind::Generic, message) }
}

/// Formats an x coordinate the way messages show it (`At x=0.333: ...`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtX(pub f64);

impl fmt::Display for AtX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_decimal(self.0))
    }
}

/// Everything that can abort a command. Each variant renders as one user-facing message.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlotError {
    /// A numeric field is missing or unparsable, or the input text is empty.
    #[error("{0}")]
    InvalidInput(String),
    /// `step > 0` and `x_max > x_min` do not both hold.
    #[error("Ensure: Step > 0 and Xmax > Xmin.")]
    InvalidRange { x_min: f64, x_max: f64, step: f64 },
    /// A replayed definition failed before the command's own work started.
    #[error("Setup error: {0}")]
    Setup(EvalError),
    /// The evaluator failed; `x` is the coordinate being evaluated, when there was one.
    #[error("{}", evaluation_message(.error, .x))]
    Evaluation { error: EvalError, x: Option<f64> },
    /// The evaluator succeeded but its text is not a number, where a number is required.
    #[error("Numeric error at x={}: {text}", at_x(.x))]
    NonNumeric { x: f64, text: String },
    /// Too few usable samples to draw.
    #[error("Not enough points to plot.")]
    InsufficientData { needed: usize, got: usize },
}

fn at_x(x: &f64) -> AtX {
    AtX(*x)
}

fn evaluation_message(error: &EvalError, x: &Option<f64>) -> String {
    match x {
        Some(x) => format!("At x={}: {}", AtX(*x), error),
        None => error.to_string(),
    }
}

impl PlotError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PlotError::InvalidInput(message.into())
    }

    pub fn evaluation_at(error: EvalError, x: f64) -> Self {
        PlotError::Evaluation { error, x: Some(x) }
    }

    /// The underlying evaluator failure, if this error wraps one.
    pub fn eval_error(&self) -> Option<&EvalError> {
        match self {
            PlotError::Setup(e) | PlotError::Evaluation { error: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<EvalError> for PlotError {
    fn from(error: EvalError) -> Self {
        PlotError::Evaluation { error, x: None }
    }
}

pub type PlotResult<T> = Result<T, PlotError>;
