// Comparing reduction implementations: for loop, iterator fold, and
// rayon partitioned reduce over the same data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use functional_pipelines::pipeline::{par_reduce, reduce};

fn sum_loop(data: &[i64]) -> i64 {
    let mut sum = 0;
    for &x in data {
        sum += x;
    }
    sum
}

fn sum_reduce(data: &[i64]) -> i64 {
    reduce(data.iter().copied(), 0, |acc, x| acc + x)
}

fn sum_par_reduce(data: &[i64]) -> i64 {
    par_reduce(data, || 0, |acc, &x| acc + x, |a, b| a + b)
}

fn benchmark_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_reductions");

    let data: Vec<i64> = (0..100_000).collect();

    group.bench_with_input(BenchmarkId::new("loop", data.len()), &data, |b, data| {
        b.iter(|| sum_loop(black_box(data)))
    });

    group.bench_with_input(BenchmarkId::new("reduce", data.len()), &data, |b, data| {
        b.iter(|| sum_reduce(black_box(data)))
    });

    group.bench_with_input(
        BenchmarkId::new("par_reduce", data.len()),
        &data,
        |b, data| b.iter(|| sum_par_reduce(black_box(data))),
    );

    group.finish();
}

criterion_group!(benches, benchmark_reductions);
criterion_main!(benches);
