//! Criterion micro-benchmarks for arena allocation, growth, and the
//! split-then-solve path built on top of it.

use std::hint::black_box;

use cairn_arena::{Arena, ArenaVec};
use cairn_bench::{depth_report, request_sizes};
use cairn_input::split_str;
use cairn_puzzles::{Day, PuzzleRegistry};
use cairn_test_utils::samples;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: 10K mixed-size byte allocations into a pre-grown arena.
fn bench_alloc_mixed_10k(c: &mut Criterion) {
    let sizes = request_sizes(10_000, 4096, 42);
    let mut arena = Arena::new(1 << 20).unwrap();

    c.bench_function("alloc_mixed_10k", |b| {
        b.iter(|| {
            for &size in &sizes {
                black_box(arena.alloc(size).unwrap().as_ptr());
            }
            arena.reset();
        });
    });
}

/// Benchmark: the same workload starting from a 64-byte head region, so
/// every iteration pays for region growth.
fn bench_alloc_with_growth(c: &mut Criterion) {
    let sizes = request_sizes(10_000, 4096, 42);

    c.bench_function("alloc_with_growth", |b| {
        b.iter(|| {
            let arena = Arena::new(64).unwrap();
            for &size in &sizes {
                black_box(arena.alloc(size).unwrap().as_ptr());
            }
            black_box(arena.region_count());
        });
    });
}

/// Benchmark: push 100K integers, growing by realloc-and-copy.
fn bench_vec_push_100k(c: &mut Criterion) {
    let mut arena = Arena::new(1024).unwrap();

    c.bench_function("arena_vec_push_100k", |b| {
        b.iter(|| {
            {
                let mut values = ArenaVec::new_in(&arena);
                for i in 0..100_000u64 {
                    values.push(i);
                }
                black_box(values.len());
            }
            arena.reset();
        });
    });
}

/// Benchmark: split a 10K-line report into arena-owned tokens.
fn bench_split_lines_10k(c: &mut Criterion) {
    let report = depth_report(10_000, 3);
    let mut arena = Arena::new(1024).unwrap();

    c.bench_function("split_lines_10k", |b| {
        b.iter(|| {
            let lines = split_str(&arena, &report, "\n").unwrap();
            black_box(lines.len());
            arena.reset();
        });
    });
}

/// Benchmark: solve every sample, resetting one arena between days.
fn bench_solve_samples(c: &mut Criterion) {
    let registry = PuzzleRegistry::with_all();
    let mut arena = Arena::new(1024).unwrap();

    c.bench_function("solve_samples", |b| {
        b.iter(|| {
            for sample in samples::ALL {
                let answers = registry.solve(Day(sample.day), &arena, sample.input).unwrap();
                black_box(answers);
                arena.reset();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_mixed_10k,
    bench_alloc_with_growth,
    bench_vec_push_100k,
    bench_split_lines_10k,
    bench_solve_samples
);
criterion_main!(benches);
