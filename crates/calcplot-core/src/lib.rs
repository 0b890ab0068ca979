// File: crates/calcplot-core/src/lib.rs
// Summary: Core library entry point; numerical sampling, axis planning and plot geometry
// driven by an external expression evaluator.

pub mod axis;
pub mod curve;
pub mod derivative;
pub mod dispatch;
pub mod error;
pub mod evaluator;
pub mod sampler;
pub mod scale;
pub mod scene;
pub mod session;
pub mod text;
pub mod types;
pub mod view;

pub use axis::{nice_step, first_tick, Axis, AxisPlan};
pub use curve::RenderMode;
pub use derivative::{central_difference, tangent_line, Tangent};
pub use dispatch::{Action, Canvas, Command, Fields, Outcome, Summary, Warning};
pub use error::{EvalError, EvalErrorKind, PlotError, PlotResult};
pub use evaluator::{classify_output, EvalResult, Evaluator, PlotBuffer};
pub use sampler::{sample, SampleRange, SampleRun, StopReason, XWalk};
pub use scale::CoordinateMapper;
pub use scene::Scene;
pub use session::{Session, SessionOptions};
pub use types::{Point, Vertex, Viewport};
pub use view::DataBounds;
