use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use seqalgo::prelude::*;
use std::hint::black_box;

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort u64");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("seqalgo::sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("seqalgo::stable_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| stable_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("heap (make_heap + sort_heap)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                make_heap(black_box(&mut data));
                sort_heap(&mut data);
            },
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Selection u64");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("seqalgo::nth_element (median)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| nth_element(black_box(&mut data), count / 2),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::select_nth_unstable (median)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                data.select_nth_unstable(count / 2);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("seqalgo::partial_sort (top 100)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| partial_sort(black_box(&mut data), 100),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("seqalgo::partial_sort_copy (top 100)", |b| {
        let mut top = vec![0u64; 100];
        b.iter(|| partial_sort_copy(black_box(input.iter().copied()), &mut top))
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_selection);
criterion_main!(benches);
