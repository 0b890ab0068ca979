use calcplot_core::evaluator::{EvalResult, Evaluator};
use calcplot_core::sampler::{sample, SampleRange};
use calcplot_core::derivative::derivative_samples;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

/// Evaluates a fixed native function; stands in for an interpreter with negligible overhead.
struct NativeEvaluator;

impl Evaluator for NativeEvaluator {
    fn evaluate(&mut self, statement: &str) -> EvalResult {
        Ok(statement.to_string())
    }
    fn evaluate_at_x(&mut self, _expr: &str, x: f64) -> EvalResult {
        Ok(format!("{}", (x * 0.01).sin() * 10.0 + x * 0.0001))
    }
    fn reset_state(&mut self) {}
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &n in &[10_000usize, 100_000usize] {
        let range = SampleRange::new(0.0, n as f64, 1.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("plain_n{n}")), &range, |b, r| {
            b.iter(|| black_box(sample(&mut NativeEvaluator, "f(x)", *r, 200_000).unwrap()));
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("derivative_n{n}")), &range, |b, r| {
            b.iter(|| black_box(derivative_samples(&mut NativeEvaluator, "f(x)", *r, 200_000).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
