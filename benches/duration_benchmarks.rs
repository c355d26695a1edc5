//! Performance benchmarks for the Leave Duration Engine.
//!
//! This benchmark suite covers the core computation and the HTTP endpoint:
//! - Single-day estimate against the loaded calendar
//! - Multi-week ranges, to see how cost scales with days spanned
//! - A batch of 100 `/duration` requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_duration_engine::api::{AppState, DurationRequest, create_router};
use leave_duration_engine::calculation::compute_duration;
use leave_duration_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use chrono::{Duration, NaiveDate};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a request starting on a Monday and spanning `days` calendar days.
fn create_request_spanning(days: i64) -> DurationRequest {
    let start = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
    let end = start + Duration::days(days - 1);
    DurationRequest {
        start: format!("{} 08:00", start),
        end: format!("{} 17:00", end),
        calendar: None,
    }
}

/// Benchmark: Core computation for a single day.
fn bench_compute_single_day(c: &mut Criterion) {
    let state = create_test_state();
    let calendar = state.config().calendar_covering(2026, 2026);

    c.bench_function("compute_single_day", |b| {
        b.iter(|| {
            black_box(compute_duration(
                black_box("2026-10-09 08:30"),
                black_box("2026-10-09 15:45"),
                &calendar,
            ))
        })
    });
}

/// Benchmark: Single /duration request.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::to_string(&create_request_spanning(1)).unwrap();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/duration")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 requests with varying spans.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| serde_json::to_string(&create_request_spanning(1 + i % 30)).unwrap())
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/duration")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Range length, to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let state = create_test_state();
    let calendar = state.config().calendar_covering(2026, 2026);

    let mut group = c.benchmark_group("scaling");

    for days in [1i64, 7, 30, 90].iter() {
        let request = create_request_spanning(*days);

        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(compute_duration(&request.start, &request.end, &calendar)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_single_day,
    bench_single_request,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
