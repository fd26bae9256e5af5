//! Criterion micro-benchmarks for delta-clock scheduling.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use delve_clock::DeltaClock;
use std::hint::black_box;

/// Deterministic delays in `1..=64`.
fn delays(n: u64) -> Vec<u64> {
    (0..n)
        .map(|i| 1 + (i.wrapping_mul(6364136223846793007) >> 58))
        .collect()
}

/// Benchmark: schedule 10K keys over at most 64 distinct moments.
fn bench_schedule_10k(c: &mut Criterion) {
    let ds = delays(10_000);
    c.bench_function("schedule_10k", |b| {
        b.iter(|| {
            let mut clock = DeltaClock::new();
            for (k, &d) in ds.iter().enumerate() {
                clock.schedule(k, d);
            }
            black_box(clock.len());
        });
    });
}

/// Benchmark: drain a 10K-key clock one advance at a time.
fn bench_drain_10k(c: &mut Criterion) {
    let ds = delays(10_000);
    c.bench_function("drain_10k", |b| {
        b.iter_batched(
            || {
                let mut clock = DeltaClock::new();
                for (k, &d) in ds.iter().enumerate() {
                    clock.schedule(k, d);
                }
                clock
            },
            |mut clock| {
                while !clock.is_empty() {
                    black_box(clock.advance());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: reschedule every key once (unschedule + reinsert).
fn bench_reschedule_10k(c: &mut Criterion) {
    let ds = delays(10_000);
    let mut clock = DeltaClock::new();
    for (k, &d) in ds.iter().enumerate() {
        clock.schedule(k, d);
    }
    c.bench_function("reschedule_10k", |b| {
        b.iter(|| {
            for (k, &d) in ds.iter().enumerate().rev() {
                clock.schedule(k, d);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_schedule_10k,
    bench_drain_10k,
    bench_reschedule_10k
);
criterion_main!(benches);
