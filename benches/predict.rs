//! A benchmark for the predictor and the rule engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sleepcoach::dataset::TRAINING_SET;
use sleepcoach::interventions::evaluate;
use sleepcoach::regression::fit;
use sleepcoach::{assess, FeatureVector, Predictor};

fn sweep_inputs(predictor: &Predictor) {
    let mut v = FeatureVector::default();
    for caffeine in (0..=300).step_by(10) {
        for noise in (30..=80).step_by(5) {
            v.caffeine_mg = caffeine as f64;
            v.noise_db = noise as f64;
            black_box(predictor.predict(&v));
        }
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let predictor = Predictor::new().unwrap();
    let v = FeatureVector::new(300.0, 0.0, 26.0, 70.0, 85.0);

    c.bench_function("fit", |b| b.iter(|| fit(black_box(&TRAINING_SET))));
    c.bench_function("predict", |b| {
        b.iter(|| predictor.predict(black_box(&v)))
    });
    c.bench_function("evaluate", |b| b.iter(|| evaluate(black_box(&v), 5.0)));
    c.bench_function("assess", |b| {
        b.iter(|| assess(&predictor, black_box(&v)))
    });
    c.bench_function("sweep inputs", |b| b.iter(|| sweep_inputs(&predictor)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
