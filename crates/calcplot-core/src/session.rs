// File: crates/calcplot-core/src/session.rs
// Summary: Explicitly owned evaluator session plus its options; all commands run through it.

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::evaluator::Evaluator;
use crate::types::{Viewport, DERIVATIVE_GUARD, SAMPLE_GUARD};

/// Per-session settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOptions {
    pub viewport: Viewport,
    /// Iteration cap for plain sampling.
    pub sample_guard: usize,
    /// Iteration cap for derivative sampling.
    pub derivative_guard: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { viewport: Viewport::default(), sample_guard: SAMPLE_GUARD, derivative_guard: DERIVATIVE_GUARD }
    }
}

/// Owns the evaluator, and with it the variable/function environment. Holding `&mut Session`
/// is what serialises the reset-then-evaluate sequences of a command.
pub struct Session<E: Evaluator> {
    pub(crate) evaluator: E,
    pub(crate) options: SessionOptions,
}

impl<E: Evaluator> Session<E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_options(evaluator, SessionOptions::default())
    }

    pub fn with_options(evaluator: E, options: SessionOptions) -> Self {
        Self { evaluator, options }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SessionOptions {
        &mut self.options
    }

    /// Track the presentation surface size; degenerate sizes resolve to the defaults at render time.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.options.viewport = viewport;
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }

    pub fn into_evaluator(self) -> E {
        self.evaluator
    }

    /// Reset the environment, then run each statement in order. The first failure aborts as a setup error.
    pub fn replay_setup(&mut self, statements: &[&str]) -> PlotResult<()> {
        self.evaluator.reset_state();
        for (i, stmt) in statements.iter().enumerate() {
            debug!(index = i, statement = %stmt, "replaying setup");
            self.evaluator.evaluate(stmt).map_err(PlotError::Setup)?;
        }
        Ok(())
    }
}

/// Split raw input on newlines and `;` into trimmed, non-empty statements.
pub fn statements(input: &str) -> Vec<&str> {
    input
        .split(['\n', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
