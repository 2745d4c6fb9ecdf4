//! Benchmarks for NestKV collection operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nestkv::collection::{Backend, BackendKind, Collection};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn keys(n: usize) -> Vec<String> {
    // Spread keys so insertion order is not sorted
    (0..n)
        .map(|i| format!("key{:08}", (i * 7_919) % n))
        .collect()
}

fn filled(kind: BackendKind, keys: &[String]) -> Collection<u64> {
    let mut collection: Collection<u64> = Collection::new(kind);
    for (i, key) in keys.iter().enumerate() {
        let _ = collection.insert(key.clone(), i as u64);
    }
    collection
}

fn insert_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let keys = keys(size);
        for kind in [BackendKind::Ordered, BackendKind::Unordered] {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &keys, |b, keys| {
                b.iter(|| filled(kind, black_box(keys)))
            });
        }
    }
    group.finish();
}

fn get_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let keys = keys(size);
        for kind in [BackendKind::Ordered, BackendKind::Unordered] {
            let collection = filled(kind, &keys);
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &keys, |b, keys| {
                b.iter(|| {
                    for key in keys.iter().step_by(97) {
                        black_box(collection.get(key).ok());
                    }
                })
            });
        }
    }
    group.finish();
}

fn range_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_range");
    for size in SIZES {
        let keys = keys(size);
        for kind in [BackendKind::Ordered, BackendKind::Unordered] {
            let collection = filled(kind, &keys);
            group.bench_function(BenchmarkId::new(kind.as_str(), size), |b| {
                b.iter(|| black_box(collection.get_range("key00000100", "key00000200")))
            });
        }
    }
    group.finish();
}

fn remove_benchmarks(c: &mut Criterion) {
    let keys = keys(10_000);
    c.bench_function("remove/avl/10000", |b| {
        b.iter_batched(
            || filled(BackendKind::Ordered, &keys),
            |mut collection| {
                for key in &keys {
                    let _ = collection.remove(key);
                }
                collection
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    insert_benchmarks,
    get_benchmarks,
    range_benchmarks,
    remove_benchmarks
);
criterion_main!(benches);
