//! Benchmarks for the Sorta signup store
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sorta::store::{JsonFileBackend, SignupBackend, SignupRecord, SignupStore};
use tempfile::tempdir;

fn create_test_records(count: usize) -> Vec<SignupRecord> {
    (0..count)
        .map(|i| SignupRecord::new(format!("user{}@example.com", i)))
        .collect()
}

/// Write records straight through the backend, skipping per-record adds
fn seed_store(dir: &std::path::Path, count: usize) -> SignupStore {
    let backend = JsonFileBackend::new(dir);
    backend.save(&create_test_records(count)).unwrap();
    SignupStore::new(Box::new(JsonFileBackend::new(dir)))
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    group.bench_function("add_sequential", |b| {
        b.iter_custom(|iters| {
            let dir = tempdir().unwrap();
            let store = SignupStore::open_json(dir.path());

            let start = std::time::Instant::now();

            for i in 0..iters {
                store
                    .add(black_box(&format!("user{}@example.com", i)))
                    .unwrap();
            }

            start.elapsed()
        });
    });

    group.bench_function("duplicate_check_1000", |b| {
        let dir = tempdir().unwrap();
        let store = seed_store(dir.path(), 1000);

        // Worst case: the duplicate sits at the end of the scan
        b.iter(|| store.add(black_box("user999@example.com")).unwrap());
    });

    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv");

    for size in [100, 1000, 10000] {
        let dir = tempdir().unwrap();
        let store = seed_store(dir.path(), size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("to_csv_{}", size), |b| {
            b.iter(|| store.to_csv().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_csv);
criterion_main!(benches);
