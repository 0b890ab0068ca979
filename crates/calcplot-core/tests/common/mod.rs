// File: crates/calcplot-core/tests/common/mod.rs
// Purpose: Scripted evaluator for integration tests. Definitions are registered up front as
// Rust closures keyed by their statement text; every call is recorded.

#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use calcplot_core::{EvalError, EvalResult, Evaluator, PlotBuffer};

type Body = Rc<dyn Fn(f64) -> EvalResult>;

#[derive(Default)]
pub struct ScriptEvaluator {
    /// statement text -> body installed as `y(x)` when that statement runs
    definitions: HashMap<String, Body>,
    /// expression text -> body used by `evaluate_at_x`
    expressions: HashMap<String, Body>,
    /// statement text -> forced failure
    failures: HashMap<String, EvalError>,
    y: Option<Body>,
    staged: Option<PlotBuffer>,
    pub calls: Vec<String>,
    pub resets: usize,
}

fn numeric(f: impl Fn(f64) -> f64 + 'static) -> Body {
    Rc::new(move |x| {
        let v = f(x);
        if v.is_finite() {
            Ok(format!("{v}"))
        } else {
            Err(EvalError::runtime("Runtime error: division by zero"))
        }
    })
}

impl ScriptEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running `stmt` defines `y(x)` as `f`.
    pub fn define(mut self, stmt: &str, f: impl Fn(f64) -> f64 + 'static) -> Self {
        self.definitions.insert(stmt.to_string(), numeric(f));
        self
    }

    /// Like `define`, with full control over the evaluator's answer.
    pub fn define_raw(mut self, stmt: &str, f: impl Fn(f64) -> EvalResult + 'static) -> Self {
        self.definitions.insert(stmt.to_string(), Rc::new(f));
        self
    }

    /// `evaluate_at_x(expr, x)` returns `f(x)`.
    pub fn expression(mut self, expr: &str, f: impl Fn(f64) -> f64 + 'static) -> Self {
        self.expressions.insert(expr.to_string(), numeric(f));
        self
    }

    pub fn expression_raw(mut self, expr: &str, f: impl Fn(f64) -> EvalResult + 'static) -> Self {
        self.expressions.insert(expr.to_string(), Rc::new(f));
        self
    }

    pub fn fail_on(mut self, stmt: &str, error: EvalError) -> Self {
        self.failures.insert(stmt.to_string(), error);
        self
    }

    pub fn stage_plot(&mut self, buffer: PlotBuffer) {
        self.staged = Some(buffer);
    }

    pub fn plot_buffer_is_empty(&self) -> bool {
        self.staged.is_none()
    }

    pub fn has_y(&self) -> bool {
        self.y.is_some()
    }

    /// Calls whose text starts with `prefix`.
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.calls.iter().filter(|c| c.starts_with(prefix)).map(String::as_str).collect()
    }

    fn y_at(&self, x: f64) -> Result<f64, EvalError> {
        let y = self.y.as_ref().ok_or_else(|| EvalError::runtime("Runtime error: undefined function y"))?;
        let text = y(x)?;
        text.parse::<f64>().map_err(|_| EvalError::runtime(format!("Runtime error: y({x}) is not a number")))
    }

    fn args(call: &str, name: &str) -> Option<Vec<f64>> {
        let inner = call.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')?;
        inner.split(',').map(|a| a.trim().parse::<f64>().ok()).collect()
    }

    fn integrate(&self, a: f64, b: f64, n: usize) -> Result<f64, EvalError> {
        let h = (b - a) / n as f64;
        let mut sum = 0.5 * (self.y_at(a)? + self.y_at(b)?);
        for i in 1..n {
            sum += self.y_at(a + i as f64 * h)?;
        }
        Ok(sum * h)
    }

    fn bisect(&self, mut a: f64, mut b: f64) -> Result<f64, EvalError> {
        let mut fa = self.y_at(a)?;
        if fa * self.y_at(b)? > 0.0 {
            return Err(EvalError::runtime("Runtime error: root not bracketed"));
        }
        for _ in 0..100 {
            let m = 0.5 * (a + b);
            let fm = self.y_at(m)?;
            if fa * fm <= 0.0 { b = m; } else { a = m; fa = fm; }
        }
        Ok(0.5 * (a + b))
    }

    fn newton(&self, mut x: f64) -> Result<f64, EvalError> {
        for _ in 0..50 {
            let h = 1e-6;
            let d = (self.y_at(x + h)? - self.y_at(x - h)?) / (2.0 * h);
            if d == 0.0 {
                return Err(EvalError::runtime("Runtime error: zero derivative"));
            }
            x -= self.y_at(x)? / d;
        }
        Ok(x)
    }

    fn secant(&self, mut x0: f64, mut x1: f64) -> Result<f64, EvalError> {
        for _ in 0..50 {
            let (f0, f1) = (self.y_at(x0)?, self.y_at(x1)?);
            if f1 == f0 {
                break;
            }
            let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
            x0 = x1;
            x1 = x2;
        }
        Ok(x1)
    }
}

impl Evaluator for ScriptEvaluator {
    fn evaluate(&mut self, statement: &str) -> EvalResult {
        self.calls.push(statement.to_string());
        if let Some(e) = self.failures.get(statement) {
            return Err(e.clone());
        }
        if let Some(body) = self.definitions.get(statement) {
            self.y = Some(body.clone());
            return Ok(statement.to_string());
        }
        let fmt = |v: f64| format!("{v}");
        if let Some(v) = Self::args(statement, "integrate") {
            return self.integrate(v[0], v[1], v[2] as usize).map(fmt);
        }
        if let Some(v) = Self::args(statement, "root_bisect") {
            return self.bisect(v[0], v[1]).map(fmt);
        }
        if let Some(v) = Self::args(statement, "root_newton") {
            return self.newton(v[0]).map(fmt);
        }
        if let Some(v) = Self::args(statement, "root_secant") {
            return self.secant(v[0], v[1]).map(fmt);
        }
        if statement == "y(x)" {
            return Ok("y(x)".to_string());
        }
        match statement.parse::<f64>() {
            Ok(v) => Ok(fmt(v)),
            Err(_) => Err(EvalError::parser(format!("Parser error: unexpected '{statement}'"))),
        }
    }

    fn evaluate_at_x(&mut self, expr: &str, x: f64) -> EvalResult {
        if let Some(body) = self.expressions.get(expr) {
            return body(x);
        }
        if expr == "y(x)" {
            return match &self.y {
                Some(y) => y(x),
                None => Err(EvalError::runtime("Runtime error: undefined function y")),
            };
        }
        Err(EvalError::parser(format!("Parser error: unexpected '{expr}'")))
    }

    fn reset_state(&mut self) {
        self.resets += 1;
        self.y = None;
    }

    fn plot_buffer(&self) -> Option<PlotBuffer> {
        self.staged.clone()
    }

    fn clear_plot_data(&mut self) {
        self.staged = None;
    }
}
