use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snow_mask::config::NDSI_THRESHOLD;
use snow_mask::processing::indices::NDSI;
use snow_mask::processing::ThresholdClassifier;

/// Synthetic green/SWIR reflectances for a square scene
fn synthetic_bands(side: usize) -> (Vec<f32>, Vec<f32>) {
    let n = side * side;
    let green = (0..n).map(|i| 0.05 + (i % 100) as f32 / 110.0).collect();
    let swir = (0..n).map(|i| 0.02 + (i % 37) as f32 / 90.0).collect();
    (green, swir)
}

/// Benchmark the core NDSI classification in isolation
fn benchmark_classification(c: &mut Criterion) {
    let side = 1024;
    let (green, swir) = synthetic_bands(side);
    let classifier = ThresholdClassifier::new(NDSI::default(), NDSI_THRESHOLD);

    c.bench_function("ndsi_classify_sequential", |b| {
        b.iter(|| classifier.classify(black_box(&green), black_box(&swir), side, side))
    });

    c.bench_function("ndsi_classify_parallel", |b| {
        b.iter(|| classifier.classify_parallel(black_box(&green), black_box(&swir), side, side))
    });
}

criterion_group!(benches, benchmark_classification);
criterion_main!(benches);
