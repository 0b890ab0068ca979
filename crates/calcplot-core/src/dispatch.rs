// File: crates/calcplot-core/src/dispatch.rs
// Summary: User commands: field validation, setup replay, evaluator calls, and the outcome to present.

use std::fmt;

use tracing::{debug, warn};

use crate::curve::RenderMode;
use crate::derivative::{derivative_samples, Tangent};
use crate::error::{PlotError, PlotResult};
use crate::evaluator::Evaluator;
use crate::sampler::{sample, SampleRange, SampleRun};
use crate::scene::Scene;
use crate::session::{statements, Session};
use crate::text::{format_argument, format_decimal};

/// Expression the calculus commands work on; the input must define it.
pub const Y_OF_X: &str = "y(x)";
/// Integration step used when the step field is unusable.
pub const DEFAULT_INTEGRATION_STEP: f64 = 0.1;
/// Tangent half-width used when the step field is unusable.
pub const DEFAULT_TANGENT_HALF_WIDTH: f64 = 1.0;

/// The user action, before its fields are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Evaluate,
    Plot,
    Derivative,
    Tangent,
    Integrate,
    RootBisect,
    RootNewton,
    RootSecant,
}

/// Raw numeric input fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub x_min: String,
    pub x_max: String,
    pub step: String,
    pub a: String,
    pub b: String,
    pub x0: String,
}

/// Strict locale-invariant number parsing: surrounding whitespace only, finite values only.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A validated command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Run the input as-is against the persistent environment.
    Evaluate { input: String },
    /// Sample the last statement over the range, after replaying the others.
    Plot { input: String, range: SampleRange },
    /// Plot the central-difference derivative of `y(x)`.
    Derivative { input: String, range: SampleRange },
    /// Tangent to `y(x)` at `x0`.
    Tangent { input: String, x0: f64, half_width: f64 },
    /// `integrate(a, b, n)` with `n` derived from `step`.
    Integrate { input: String, a: f64, b: f64, step: f64 },
    RootBisect { input: String, a: f64, b: f64 },
    RootNewton { input: String, x0: f64 },
    RootSecant { input: String, x0: f64, x1: f64 },
}

fn range_from(fields: &Fields) -> PlotResult<SampleRange> {
    let (Some(x_min), Some(x_max), Some(step)) =
        (parse_number(&fields.x_min), parse_number(&fields.x_max), parse_number(&fields.step))
    else {
        return Err(PlotError::invalid_input("Invalid range values. Use numbers for Xmin, Xmax, and Step."));
    };
    SampleRange::new(x_min, x_max, step)
}

fn require(text: &str, message: &str) -> PlotResult<f64> {
    parse_number(text).ok_or_else(|| PlotError::invalid_input(message))
}

impl Command {
    /// Validate `fields` for `action`. Nothing reaches the evaluator on failure.
    pub fn from_fields(action: Action, input: &str, fields: &Fields) -> PlotResult<Self> {
        let input = input.trim().to_string();
        let cmd = match action {
            Action::Evaluate => Command::Evaluate { input },
            Action::Plot => Command::Plot { input, range: range_from(fields)? },
            Action::Derivative => Command::Derivative { input, range: range_from(fields)? },
            Action::Tangent => {
                let x0 = require(&fields.x0, "Enter x0")?;
                let half_width = parse_number(&fields.step).unwrap_or(DEFAULT_TANGENT_HALF_WIDTH);
                Command::Tangent { input, x0, half_width }
            }
            Action::Integrate => {
                let (Some(a), Some(b)) = (parse_number(&fields.a), parse_number(&fields.b)) else {
                    return Err(PlotError::invalid_input("Enter a and b"));
                };
                let step = parse_number(&fields.step).filter(|s| *s > 0.0).unwrap_or(DEFAULT_INTEGRATION_STEP);
                Command::Integrate { input, a, b, step }
            }
            Action::RootBisect => {
                let (Some(a), Some(b)) = (parse_number(&fields.a), parse_number(&fields.b)) else {
                    return Err(PlotError::invalid_input("Enter a and b for bracketing"));
                };
                Command::RootBisect { input, a, b }
            }
            Action::RootNewton => Command::RootNewton { input, x0: require(&fields.x0, "Enter x0")? },
            Action::RootSecant => {
                let (Some(x0), Some(x1)) = (parse_number(&fields.a), parse_number(&fields.b)) else {
                    return Err(PlotError::invalid_input("Enter x0 and x1"));
                };
                Command::RootSecant { input, x0, x1 }
            }
        };
        Ok(cmd)
    }

    pub fn action(&self) -> Action {
        match self {
            Command::Evaluate { .. } => Action::Evaluate,
            Command::Plot { .. } => Action::Plot,
            Command::Derivative { .. } => Action::Derivative,
            Command::Tangent { .. } => Action::Tangent,
            Command::Integrate { .. } => Action::Integrate,
            Command::RootBisect { .. } => Action::RootBisect,
            Command::RootNewton { .. } => Action::RootNewton,
            Command::RootSecant { .. } => Action::RootSecant,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Command::Evaluate { input }
            | Command::Plot { input, .. }
            | Command::Derivative { input, .. }
            | Command::Tangent { input, .. }
            | Command::Integrate { input, .. }
            | Command::RootBisect { input, .. }
            | Command::RootNewton { input, .. }
            | Command::RootSecant { input, .. } => input,
        }
    }

    /// Commands whose result is not spatial. The surface clears any plot before running them.
    pub fn is_scalar_only(&self) -> bool {
        matches!(self, Command::Integrate { .. } | Command::RootBisect { .. } | Command::RootNewton { .. })
    }

    /// Number of integration subintervals: `max(1, ceil(|b - a| / step))`.
    pub fn subintervals(a: f64, b: f64, step: f64) -> usize {
        ((b - a).abs() / step).ceil().max(1.0) as usize
    }
}

/// Text result of a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// Evaluator text from an evaluate command.
    Value(String),
    Integral(String),
    Root(String),
    DerivativePlotted,
    TangentSlope(f64),
}

impl Summary {
    /// Verbatim evaluator text, where the summary carries one.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Summary::Value(t) | Summary::Integral(t) | Summary::Root(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Value(t) => f.write_str(t),
            Summary::Integral(t) => write!(f, "∫ y(x) dx ≈ {t}"),
            Summary::Root(t) => write!(f, "Root ≈ {t}"),
            Summary::DerivativePlotted => f.write_str("Derivative plotted"),
            Summary::TangentSlope(m) => write!(f, "Tangent slope m={}", format_decimal(*m)),
        }
    }
}

/// What the surface should do with its current plot.
#[derive(Clone, Debug, PartialEq)]
pub enum Canvas {
    Unchanged,
    Cleared,
    Plot(Scene),
}

/// Non-fatal conditions worth showing next to a result.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// Sampling hit its iteration cap before the end of the range; the plot is truncated.
    GuardExceeded { guard: usize, kept: usize, last_x: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::GuardExceeded { guard, kept, last_x } => write!(
                f,
                "Stopped after {guard} evaluations at x={}; plotted {kept} points.",
                format_decimal(*last_x)
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub summary: Option<Summary>,
    pub canvas: Canvas,
    pub warnings: Vec<Warning>,
}

impl Outcome {
    fn text(summary: Summary, canvas: Canvas) -> Self {
        Self { summary: Some(summary), canvas, warnings: Vec::new() }
    }

    pub fn scene(&self) -> Option<&Scene> {
        match &self.canvas {
            Canvas::Plot(s) => Some(s),
            _ => None,
        }
    }
}

fn guard_warnings(run: &SampleRun, guard: usize) -> Vec<Warning> {
    match (run.truncated(), run.points.last()) {
        (true, Some(last)) => vec![Warning::GuardExceeded { guard, kept: run.points.len(), last_x: last.x }],
        _ => Vec::new(),
    }
}

impl<E: Evaluator> Session<E> {
    /// Run one command to completion. Any error aborts it with nothing drawn and no result.
    pub fn run(&mut self, command: &Command) -> PlotResult<Outcome> {
        debug!(action = ?command.action(), "running command");
        let outcome = match command {
            Command::Evaluate { input } => self.run_evaluate(input),
            Command::Plot { input, range } => self.run_plot(input, *range),
            Command::Derivative { input, range } => self.run_derivative(input, *range),
            Command::Tangent { input, x0, half_width } => self.run_tangent(input, *x0, *half_width),
            Command::Integrate { input, a, b, step } => {
                let n = Command::subintervals(*a, *b, *step);
                let call = format!("integrate({}, {}, {})", format_argument(*a), format_argument(*b), n);
                self.run_scalar(input, &call).map(|t| Outcome::text(Summary::Integral(t), Canvas::Cleared))
            }
            Command::RootBisect { input, a, b } => {
                let call = format!("root_bisect({}, {})", format_argument(*a), format_argument(*b));
                self.run_scalar(input, &call).map(|t| Outcome::text(Summary::Root(t), Canvas::Cleared))
            }
            Command::RootNewton { input, x0 } => {
                let call = format!("root_newton({})", format_argument(*x0));
                self.run_scalar(input, &call).map(|t| Outcome::text(Summary::Root(t), Canvas::Cleared))
            }
            Command::RootSecant { input, x0, x1 } => {
                let call = format!("root_secant({}, {})", format_argument(*x0), format_argument(*x1));
                self.run_scalar(input, &call).map(|t| Outcome::text(Summary::Root(t), Canvas::Unchanged))
            }
        };
        if let Err(e) = &outcome {
            debug!(error = %e, "command failed");
        }
        outcome
    }

    /// Parse and run in one step.
    pub fn dispatch(&mut self, action: Action, input: &str, fields: &Fields) -> PlotResult<Outcome> {
        let command = Command::from_fields(action, input, fields)?;
        self.run(&command)
    }

    fn run_evaluate(&mut self, input: &str) -> PlotResult<Outcome> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PlotError::invalid_input("Please enter an expression."));
        }
        let text = self.evaluator.evaluate(input)?;
        let canvas = self.consume_plot_buffer();
        Ok(Outcome::text(Summary::Value(text), canvas))
    }

    /// Draw and discard whatever the evaluator staged. Failures here never fail the command.
    fn consume_plot_buffer(&mut self) -> Canvas {
        if !self.evaluator.has_plot_data() {
            return Canvas::Unchanged;
        }
        let canvas = match self.evaluator.plot_buffer() {
            Some(buf) if buf.points.len() >= 2 => {
                let (lo, hi) = buf.range;
                match Scene::build(&buf.points, lo, hi, buf.mode, self.options.viewport) {
                    Ok(scene) => Canvas::Plot(scene),
                    Err(e) => {
                        warn!(error = %e, "discarding evaluator plot buffer");
                        Canvas::Unchanged
                    }
                }
            }
            _ => Canvas::Unchanged,
        };
        self.evaluator.clear_plot_data();
        canvas
    }

    fn run_plot(&mut self, input: &str, range: SampleRange) -> PlotResult<Outcome> {
        if input.trim().is_empty() {
            return Err(PlotError::invalid_input("Enter definitions and a final expression in x to plot."));
        }
        let stmts = statements(input);
        let Some((expr, setup)) = stmts.split_last() else {
            return Err(PlotError::invalid_input("Nothing to plot."));
        };
        self.replay_setup(setup)?;
        let guard = self.options.sample_guard;
        let run = sample(&mut self.evaluator, expr, range, guard)?;
        let scene = Scene::build(&run.points, range.x_min, range.x_max, RenderMode::Linear, self.options.viewport)?;
        Ok(Outcome { summary: None, canvas: Canvas::Plot(scene), warnings: guard_warnings(&run, guard) })
    }

    /// Replay every statement so `y(x)` is defined.
    fn prepare_y(&mut self, input: &str) -> PlotResult<()> {
        if input.trim().is_empty() {
            return Err(PlotError::invalid_input("Enter definitions including y(x)."));
        }
        let stmts = statements(input);
        if stmts.is_empty() {
            return Err(PlotError::invalid_input("Nothing to evaluate."));
        }
        self.replay_setup(&stmts)
    }

    fn run_derivative(&mut self, input: &str, range: SampleRange) -> PlotResult<Outcome> {
        self.prepare_y(input)?;
        let guard = self.options.derivative_guard;
        let run = derivative_samples(&mut self.evaluator, Y_OF_X, range, guard)?;
        let scene = Scene::build(&run.points, range.x_min, range.x_max, RenderMode::Linear, self.options.viewport)?;
        Ok(Outcome {
            summary: Some(Summary::DerivativePlotted),
            canvas: Canvas::Plot(scene),
            warnings: guard_warnings(&run, guard),
        })
    }

    fn run_tangent(&mut self, input: &str, x0: f64, half_width: f64) -> PlotResult<Outcome> {
        self.prepare_y(input)?;
        let tangent = Tangent::at(&mut self.evaluator, Y_OF_X, x0, half_width)?;
        debug!(x0, y0 = tangent.y0, slope = tangent.slope, "tangent");
        let pts = [tangent.left, tangent.right];
        let scene = Scene::build(&pts, tangent.left.x, tangent.right.x, RenderMode::Linear, self.options.viewport)?;
        Ok(Outcome::text(Summary::TangentSlope(tangent.display_slope()), Canvas::Plot(scene)))
    }

    fn run_scalar(&mut self, input: &str, call: &str) -> PlotResult<String> {
        self.prepare_y(input)?;
        debug!(call, "scalar evaluator call");
        Ok(self.evaluator.evaluate(call)?)
    }
}
