//! Criterion benchmarks for brush painting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grit_core::Material;
use grit_engine::{paint, BrushShape};
use grit_space::Grid;

/// Benchmark: a circle and a square stroke at the largest picker radius.
fn bench_paint_max_radius(c: &mut Criterion) {
    let mut grid = Grid::new(75, 75).unwrap();
    for shape in [BrushShape::Square, BrushShape::Circle] {
        c.bench_function(&format!("paint_{shape}_r10"), |b| {
            b.iter(|| black_box(paint(&mut grid, shape, (37, 37), 10, Material::Sand)));
        });
    }
}

/// Benchmark: a stroke along the whole top edge, half off the grid.
fn bench_paint_edge_sweep(c: &mut Criterion) {
    let mut grid = Grid::new(75, 75).unwrap();
    c.bench_function("paint_edge_sweep", |b| {
        b.iter(|| {
            for x in -5..80 {
                black_box(paint(&mut grid, BrushShape::Circle, (x, 0), 5, Material::Water));
            }
        });
    });
}

/// Benchmark: an enormous radius is clamped to one pass over the grid.
fn bench_paint_huge_radius(c: &mut Criterion) {
    let mut grid = Grid::new(75, 75).unwrap();
    c.bench_function("paint_huge_radius", |b| {
        b.iter(|| black_box(paint(&mut grid, BrushShape::Circle, (37, 37), u32::MAX, Material::Rock)));
    });
}

criterion_group!(
    benches,
    bench_paint_max_radius,
    bench_paint_edge_sweep,
    bench_paint_huge_radius
);
criterion_main!(benches);
