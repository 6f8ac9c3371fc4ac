//! 静的ディスパッチと動的ディスパッチのパフォーマンス比較ベンチマーク
//!
//! 同じ乱数列から作った2種類のコレクションで `sum_all` を測定

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dispatch_bench::factories::{
    DynamicCollection, DynamicShapeFactory, StaticCollection, StaticShapeFactory,
};
use dispatch_bench::sum_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn draws(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.gen()).collect()
}

/// sum_all のベンチマーク
fn benchmark_sum_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sum All");
    group.measurement_time(Duration::from_secs(10));

    for n in [10_000usize, 1_000_000] {
        let values = draws(n);
        let dynamic = match DynamicCollection::from_draws(&DynamicShapeFactory, &values) {
            Ok(collection) => collection,
            Err(e) => panic!("Benchmark failed: {e}"),
        };
        let fixed = match StaticCollection::from_draws(&StaticShapeFactory, &values) {
            Ok(collection) => collection,
            Err(e) => panic!("Benchmark failed: {e}"),
        };

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("dynamic", n), &dynamic, |b, collection| {
            b.iter(|| std::hint::black_box(sum_all(collection.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("static", n), &fixed, |b, collection| {
            b.iter(|| std::hint::black_box(sum_all(collection.as_slice())))
        });
    }

    group.finish();
}

/// 構築フェーズのベンチマーク
fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construction");
    let values = draws(100_000);

    group.bench_function("dynamic", |b| {
        b.iter(|| {
            std::hint::black_box(DynamicCollection::from_draws(&DynamicShapeFactory, &values))
        })
    });

    group.bench_function("static", |b| {
        b.iter(|| std::hint::black_box(StaticCollection::from_draws(&StaticShapeFactory, &values)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sum_all,
    benchmark_construction
);
criterion_main!(benches);
