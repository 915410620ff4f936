//! Criterion benchmarks for simulation ticks.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use grit_bench::{reference_scene, stress_scene};
use grit_rules::WaterVariant;

/// Benchmark: one tick of the 75x75 reference scene, per water variant.
fn bench_step_reference(c: &mut Criterion) {
    for variant in [WaterVariant::MirrorSand, WaterVariant::Pooling, WaterVariant::Drift] {
        let name = format!("step_75x75_{variant:?}").to_lowercase();
        c.bench_function(&name, |b| {
            b.iter_batched(
                || reference_scene(42, variant).unwrap(),
                |mut sandbox| black_box(sandbox.step()),
                BatchSize::SmallInput,
            );
        });
    }
}

/// Benchmark: a settled reference scene, where most cells take the
/// stability check instead of moving.
fn bench_step_settled(c: &mut Criterion) {
    let mut sandbox = reference_scene(42, WaterVariant::default()).unwrap();
    sandbox.step_n(200);

    c.bench_function("step_75x75_settled", |b| {
        b.iter(|| black_box(sandbox.step()));
    });
}

/// Benchmark: 10 ticks of the 300x300 stress scene.
fn bench_step_stress(c: &mut Criterion) {
    c.bench_function("step_300x300_x10", |b| {
        b.iter_batched(
            || stress_scene(42, WaterVariant::default()).unwrap(),
            |mut sandbox| black_box(sandbox.step_n(10)),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_settled,
    bench_step_stress
);
criterion_main!(benches);
