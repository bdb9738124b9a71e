use criterion::{black_box, criterion_group, criterion_main, Criterion};
use medpredict_engine::{
    core::{HealthCheck, PredictionResult},
    store::{RecordStore, SqliteBackend},
    MemoryBackend,
};
use std::sync::Arc;

fn check(i: usize) -> HealthCheck {
    HealthCheck::new(vec![format!("Symptom {}", i)], vec![PredictionResult::general_consultation()])
}

async fn setup_store() -> RecordStore {
    let backend = SqliteBackend::new(":memory:").await.unwrap();
    let store = RecordStore::new(Arc::new(backend));

    // Populate with test data
    for i in 0..100 {
        store.append_health_check(&check(i)).await.unwrap();
    }

    store
}

fn bench_history_read(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = runtime.block_on(setup_store());

    c.bench_function("sqlite_get_health_checks_100", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(store.get_health_checks().await.unwrap())
        });
    });

    c.bench_function("sqlite_get_profile_miss", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(store.get_profile().await.unwrap())
        });
    });
}

fn bench_append(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("memory_append_health_check", |b| {
        b.to_async(&runtime).iter(|| async {
            let store = RecordStore::new(Arc::new(MemoryBackend::new()));
            black_box(store.append_health_check(&check(1)).await.unwrap())
        });
    });
}

fn bench_health_check_serialization(c: &mut Criterion) {
    let check = check(7);

    c.bench_function("health_check_to_json", |b| {
        b.iter(|| black_box(serde_json::to_string(&check).unwrap()));
    });

    let json = serde_json::to_string(&check).unwrap();
    c.bench_function("health_check_from_json", |b| {
        b.iter(|| black_box(serde_json::from_str::<HealthCheck>(&json).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_history_read,
    bench_append,
    bench_health_check_serialization
);
criterion_main!(benches);
