use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use densemat::{Element, Matrix, multiply};
use std::hint::black_box;

fn filled<T: Element>(size: usize) -> Matrix<T> {
    let data = (0..size * size)
        .map(|i| T::from_f64((i % 10) as f64))
        .collect();
    Matrix::from_vec(size, size, data).expect("square buffer")
}

fn bench_multiply<T: Element>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for size in [32, 64, 128] {
        let a = filled::<T>(size);
        let b = filled::<T>(size);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).expect("square shapes"));
        });
    }
    group.finish();
}

fn naive_multiply(c: &mut Criterion) {
    bench_multiply::<f64>(c, "naive_ijk_f64");
    bench_multiply::<f32>(c, "naive_ijk_f32");
    bench_multiply::<i64>(c, "naive_ijk_i64");
}

criterion_group!(benches, naive_multiply);
criterion_main!(benches);
