//! Benchmarks for line and word alignment.
//!
//! Run with: cargo bench --bench align_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use diff_checker::diff::{align_words, split_words, DiffEngine};
use std::hint::black_box;

/// Generate a text of `lines` lines of loosely structured key/value data.
fn generate_text(prefix: &str, lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{prefix}_key-{i}: \"value {}\", count: {}", i % 7, i % 13))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate two texts where every `stride`-th line differs by one word.
fn generate_text_pair(lines: usize, stride: usize) -> (String, String) {
    let a = generate_text("item", lines);
    let b = a
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == 0 {
                line.replacen("value", "changed", 1)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    (a, b)
}

fn bench_split_words(c: &mut Criterion) {
    let line = "\"name\": \"diff-checker\", \"version\": \"0.1.0\", \"tags\": [cli, text_diff]";

    c.bench_function("split_words", |b| {
        b.iter(|| black_box(split_words(black_box(line))))
    });
}

fn bench_align_words(c: &mut Criterion) {
    let line_a = "the quick brown fox jumps over the lazy dog, again and again";
    let line_b = "the quick red fox leaps over the lazy cat, again and again";

    c.bench_function("align_words", |b| {
        b.iter(|| black_box(align_words(black_box(line_a), black_box(line_b))))
    });
}

fn bench_identical(c: &mut Criterion) {
    let text = generate_text("item", 500);
    let engine = DiffEngine::new();

    c.bench_function("diff_500_identical_lines", |b| {
        b.iter(|| black_box(engine.diff(black_box(&text), black_box(&text))))
    });
}

fn bench_diff_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_scaling");
    let engine = DiffEngine::new();

    for size in [50, 100, 250, 500] {
        let (a, b) = generate_text_pair(size, 10);

        group.bench_with_input(BenchmarkId::new("similar_lines", size), &size, |bench, _| {
            bench.iter(|| black_box(engine.diff(black_box(&a), black_box(&b))))
        });
    }

    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint");
    let engine = DiffEngine::new();

    // Nothing matches, so every line of A scans all of B.
    for size in [50, 100, 200] {
        let a = generate_text("left", size);
        let b = (0..size)
            .map(|i| format!("line{i}"))
            .collect::<Vec<_>>()
            .join("\n");

        group.bench_with_input(BenchmarkId::new("no_matches", size), &size, |bench, _| {
            bench.iter(|| black_box(engine.diff(black_box(&a), black_box(&b))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_split_words,
    bench_align_words,
    bench_identical,
    bench_diff_scaling,
    bench_disjoint
);
criterion_main!(benches);
