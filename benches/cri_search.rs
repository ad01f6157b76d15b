use criterion::{criterion_group, criterion_main, Criterion};

use tuition_ceiling::fee::{FeeEvaluator, PricingMode};

fn criterion_benchmark(c: &mut Criterion) {
    let evaluator = FeeEvaluator::default();

    // sanity check
    let evaluation = evaluator
        .find_minimal_sessions(PricingMode::PerMinute, 200, 4.0)
        .unwrap();
    assert_eq!(4, evaluation.sessions_per_week);

    c.bench_function("cri_search_first_hit", |b| {
        b.iter(|| evaluator.find_minimal_sessions(PricingMode::PerMinute, 999, 4.5));
    });
    c.bench_function("cri_search_exhausted", |b| {
        b.iter(|| evaluator.find_minimal_sessions(PricingMode::PerMinute, 1, 4.0));
    });
    c.bench_function("cri_sweep", |b| {
        b.iter(|| evaluator.sweep(PricingMode::PerHour, 15_000, 4.3));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
