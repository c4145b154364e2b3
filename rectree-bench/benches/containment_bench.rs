//! Containment index benchmarks against a brute-force baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectree::{LinearScanStore, Rect, RectIndex, RectStore, RectTree};
use rectree_bench::data_gen::{clustered_rects, query_windows, scattered_rects};

fn populate_tree(rects: &[Rect]) -> RectTree<u64> {
    let mut tree = RectTree::new();
    for (i, rect) in rects.iter().enumerate() {
        tree.add(i as u64, *rect);
    }
    tree
}

fn populate_linear(rects: &[Rect]) -> LinearScanStore<u64> {
    let mut store = LinearScanStore::new();
    for (i, rect) in rects.iter().enumerate() {
        store.add(i as u64, *rect);
    }
    store
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containment/Insert");

    for size in [100, 1_000, 10_000].iter() {
        let rects = scattered_rects(*size, 100_000, 500);

        group.bench_with_input(BenchmarkId::new("rtree", size), &rects, |b, rects| {
            b.iter_with_setup(RectTree::<u64>::new, |mut tree| {
                for (i, rect) in rects.iter().enumerate() {
                    tree.add(i as u64, *rect);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &rects, |b, rects| {
            b.iter_with_setup(LinearScanStore::<u64>::new, |mut store| {
                for (i, rect) in rects.iter().enumerate() {
                    store.add(i as u64, *rect);
                }
                black_box(store.len())
            });
        });
    }

    group.finish();
}

fn bench_query_scattered(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containment/Query Scattered");

    for size in [100, 1_000, 10_000].iter() {
        let rects = scattered_rects(*size, 100_000, 500);
        let queries = query_windows(100, 100_000, 5_000);
        let tree = populate_tree(&rects);
        let linear = populate_linear(&rects);

        group.bench_with_input(BenchmarkId::new("rtree", size), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in queries {
                    hits += tree.find_all_inside(query).len();
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in queries {
                    hits += linear.find_all_inside(query).len();
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn bench_query_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containment/Query Clustered");

    for size in [1_000, 10_000].iter() {
        let rects = clustered_rects(size / 100, 100, 100_000, 200);
        let queries = query_windows(100, 100_000, 1_000);
        let tree = populate_tree(&rects);
        let linear = populate_linear(&rects);

        group.bench_with_input(BenchmarkId::new("rtree", size), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in queries {
                    hits += tree.find_all_inside(query).len();
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in queries {
                    hits += linear.find_all_inside(query).len();
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containment/Churn");

    for size in [1_000, 10_000].iter() {
        let rects = scattered_rects(*size, 100_000, 500);
        let fresh = scattered_rects(100, 100_000, 500);

        group.bench_with_input(BenchmarkId::new("rtree", size), &rects, |b, rects| {
            b.iter_with_setup(
                || populate_tree(rects),
                |mut tree| {
                    // Remove and replace a slice of the live keys.
                    for key in 0..100u64 {
                        tree.remove(&key);
                    }
                    for (i, rect) in fresh.iter().enumerate() {
                        tree.add(1_000_000 + i as u64, *rect);
                    }
                    black_box(tree.len())
                },
            );
        });
    }

    group.finish();
}

fn bench_locked_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("Containment/Locked Query");

    for size in [1_000, 10_000].iter() {
        let rects = scattered_rects(*size, 100_000, 500);
        let queries = query_windows(100, 100_000, 5_000);
        let index: RectIndex<u64> = RectIndex::new();
        for (i, rect) in rects.iter().enumerate() {
            index.add(i as u64, *rect);
        }

        group.bench_with_input(BenchmarkId::new("rtree", size), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in queries {
                    hits += index.find_all_inside(query).len();
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query_scattered,
    bench_query_clustered,
    bench_churn,
    bench_locked_query
);
criterion_main!(benches);
