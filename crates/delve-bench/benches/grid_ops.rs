//! Criterion micro-benchmarks for grid generation.

use criterion::{criterion_group, criterion_main, Criterion};
use delve_core::Vector;
use delve_grid::{apply_boundary, generate_grid};
use delve_test_utils::LinkCell;
use delve_world::{Cell, World, WorldConfig};
use std::hint::black_box;

/// Benchmark: generate and link a 100x100 grid of bare cells.
fn bench_generate_stub_10k(c: &mut Criterion) {
    c.bench_function("generate_stub_10k", |b| {
        b.iter(|| {
            let cells = generate_grid(100, 100, LinkCell::at).unwrap();
            black_box(cells);
        });
    });
}

/// Benchmark: boundary pass over a 100x100 grid.
fn bench_boundary_10k(c: &mut Criterion) {
    let mut cells: Vec<LinkCell> = generate_grid(100, 100, LinkCell::at).unwrap();
    c.bench_function("boundary_10k", |b| {
        b.iter(|| black_box(apply_boundary(&mut cells, |p| p.marked = !p.marked)));
    });
}

/// Benchmark: full world generation (cells, links, fence) at 100x100.
fn bench_generate_world_10k(c: &mut Criterion) {
    let config = WorldConfig::new(100, 100).with_seed(9);
    c.bench_function("generate_world_10k", |b| {
        b.iter(|| {
            let world = World::generate(&config, |pos: Vector, _| Cell::floor(pos), |c| {
                c.passable = false;
            })
            .unwrap();
            black_box(world);
        });
    });
}

criterion_group!(
    benches,
    bench_generate_stub_10k,
    bench_boundary_10k,
    bench_generate_world_10k
);
criterion_main!(benches);
