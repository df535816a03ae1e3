use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mismatch_window::render::render;
use mismatch_window::window::{find_best_window_with, Strategy};

fn make_sequence(len: usize, seed: u32) -> Vec<char> {
    let bases = ['A', 'C', 'G', 'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = seed;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

/// 与 `a` 相同，但每 `every` 个位置引入一个错配
fn with_mismatches(a: &[char], every: usize) -> Vec<char> {
    a.iter()
        .enumerate()
        .map(|(i, &c)| if i % every == every - 1 { if c == 'N' { 'A' } else { 'N' } } else { c })
        .collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_window");
    for len in [64usize, 256] {
        let a = make_sequence(len, 42);
        let b = with_mismatches(&a, 7);
        for (name, strategy) in [("exhaustive", Strategy::Exhaustive), ("sliding", Strategy::Sliding)] {
            group.bench_with_input(BenchmarkId::new(name, len), &len, |bench, _| {
                bench.iter(|| black_box(find_best_window_with(black_box(&a[..]), black_box(&b[..]), 3, strategy)));
            });
        }
    }
    group.finish();
}

fn bench_sliding_large(c: &mut Criterion) {
    let a = make_sequence(100_000, 7);
    let b = make_sequence(100_000, 8);

    c.bench_function("sliding_100k_random", |bench| {
        bench.iter(|| black_box(find_best_window_with(black_box(&a[..]), black_box(&b[..]), 10, Strategy::Sliding)));
    });
}

fn bench_render(c: &mut Criterion) {
    let a = make_sequence(10_000, 42);
    let b = with_mismatches(&a, 97);
    let best = find_best_window_with(&a, &b, 50, Strategy::Sliding).unwrap();

    c.bench_function("render_best_window_10k", |bench| {
        bench.iter(|| black_box(render(black_box(&a), black_box(&b), best)));
    });
}

criterion_group!(benches, bench_engines, bench_sliding_large, bench_render);
criterion_main!(benches);
