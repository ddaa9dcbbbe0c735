//! Benchmarks for temperature aggregation
//!
//! Run with: cargo bench

use climate_api::query::aggregate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_values(count: usize) -> Vec<f64> {
    (0..count).map(|i| 55.0 + (i % 30) as f64).collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    // roughly one year and the full Hawaii dataset
    for size in [2_000, 20_000] {
        let values = create_test_values(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("aggregate_{}", size), |b| {
            b.iter(|| aggregate(black_box(&values)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
