//! Performance benchmarks for the trip expense engine.
//!
//! Covers the pure calculation, route CSV import, saved-row export, and the
//! `/calculate` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use trip_expense::api::{AppState, CalculationRequest, create_router};
use trip_expense::calculation::calculate_expenses;
use trip_expense::config::{ConfigLoader, ExpenseConfig};
use trip_expense::interchange::parse_routes_csv;
use trip_expense::ledger::TripLedger;
use trip_expense::models::{ExpenseRates, Leg, Lodging, TrainingMode, TripInputs, TripPeriod};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a commute trip of `days` days with one leg pair and lodging per night.
fn create_trip(days: i64) -> TripInputs {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let end = start + chrono::Duration::days(days - 1);
    TripInputs {
        period: TripPeriod::new(start.to_string(), end.to_string()),
        mode: TrainingMode::Commute,
        shared_vehicle_days: days / 3,
        meals_provided: days,
        legs: vec![Leg::new("광주-서울", 1), Leg::new("서울-광주", 1)],
        lodgings: (0..days - 1)
            .map(|night| {
                Lodging::new(
                    (start + chrono::Duration::days(night)).to_string(),
                    55_000,
                )
            })
            .collect(),
    }
}

/// Builds a route CSV with `rows` data lines and thousands separators.
fn create_route_csv(rows: usize) -> String {
    let mut csv = String::from("\u{FEFF}route,cost\r\n");
    for i in 0..rows {
        csv.push_str(&format!("노선-{:04},{},{:03}\r\n", i, 10 + i % 90, i % 1000));
    }
    csv
}

/// Benchmark: Single trip calculation without HTTP.
fn bench_calculate_expenses(c: &mut Criterion) {
    let routes = ExpenseConfig::default_routes();
    let rates = ExpenseRates::default();
    let inputs = create_trip(5);

    c.bench_function("calculate_expenses", |b| {
        b.iter(|| black_box(calculate_expenses(black_box(&inputs), &routes, &rates)))
    });
}

/// Benchmark: Route CSV import at several table sizes.
fn bench_route_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_import");

    for rows in [10usize, 100, 1000].iter() {
        let csv = create_route_csv(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &csv, |b, csv| {
            b.iter(|| black_box(parse_routes_csv(black_box(csv))))
        });
    }

    group.finish();
}

/// Benchmark: Export of a ledger with 100 saved rows.
fn bench_export(c: &mut Criterion) {
    let mut ledger = TripLedger::default();
    for i in 0..100 {
        ledger.set_inputs(create_trip(1 + i % 10));
        ledger.save().expect("benchmark trip has a valid period");
    }

    c.bench_function("export_100_rows", |b| b.iter(|| black_box(ledger.export_csv())));
}

/// Benchmark: POST /calculate through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = CalculationRequest {
        trip: create_trip(14),
        ..CalculationRequest::default()
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

criterion_group!(
    benches,
    bench_calculate_expenses,
    bench_route_import,
    bench_export,
    bench_calculate_endpoint,
);
criterion_main!(benches);
