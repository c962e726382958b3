//! Performance benchmarks for the worked-time engine.
//!
//! Covers the hot paths of a period calculation:
//! - Single day hours and night overlap
//! - One week through the full pipeline
//! - A month and a full year of entries
//! - JSON decoding and encoding around a calculation
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use jardinerie_engine::calculation::{daily_hours, night_hours, process_entries};
use jardinerie_engine::config::{ConfigLoader, EngineConfig};
use jardinerie_engine::models::{ContractBase, DayEntry};

fn load_config() -> EngineConfig {
    ConfigLoader::load("./config/idcc_1760")
        .expect("Failed to load config")
        .into_config()
}

/// Builds `days` consecutive entries from Monday 2024-01-01, with Sundays off
/// and one late shift a week.
fn create_entries(days: i64) -> Vec<DayEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .map(|offset| {
            let date = start + Duration::days(offset);
            match offset % 7 {
                6 => DayEntry::day_off(date),
                4 => DayEntry::new(date, "14:00", "23:30", 30),
                _ => DayEntry::new(date, "08:30", "17:00", 45),
            }
        })
        .collect()
}

/// Benchmark: Hours and night overlap for one entry.
fn bench_single_day(c: &mut Criterion) {
    let config = load_config();
    let window = config.limits().night_window.clone();
    let entry = DayEntry::new(
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        "22:00",
        "06:00",
        30,
    );

    c.bench_function("daily_hours", |b| b.iter(|| daily_hours(black_box(&entry))));
    c.bench_function("night_hours", |b| {
        b.iter(|| night_hours(black_box(&entry), black_box(&window)))
    });
}

/// Benchmark: One week through the full pipeline.
fn bench_week(c: &mut Criterion) {
    let config = load_config();
    let entries = create_entries(7);
    let rate = Some(Decimal::new(1350, 2));

    c.bench_function("week_35h", |b| {
        b.iter(|| {
            process_entries(
                black_box(&entries),
                rate,
                ContractBase::Hours35,
                black_box(&config),
            )
        })
    });
}

/// Benchmark: A full year of entries on a 39h contract.
fn bench_year(c: &mut Criterion) {
    let config = load_config();
    let entries = create_entries(366);
    let rate = Some(Decimal::new(1350, 2));

    let mut group = c.benchmark_group("year_processing");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.sample_size(20);

    group.bench_function("year_39h", |b| {
        b.iter(|| {
            process_entries(
                black_box(&entries),
                rate,
                ContractBase::Hours39,
                black_box(&config),
            )
        })
    });

    group.finish();
}

/// Benchmark: JSON in, calculation, JSON out.
fn bench_json_round_trip(c: &mut Criterion) {
    let config = load_config();
    let body = serde_json::to_string(&create_entries(31)).unwrap();

    c.bench_function("json_month", |b| {
        b.iter(|| {
            let entries: Vec<DayEntry> = serde_json::from_str(black_box(&body)).unwrap();
            let result = process_entries(
                &entries,
                Some(Decimal::new(1350, 2)),
                ContractBase::Hours35,
                &config,
            );
            black_box(serde_json::to_string(&result).unwrap())
        })
    });
}

/// Benchmark: Various period lengths to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("scaling");

    for days in [7i64, 14, 31, 92, 366].iter() {
        let entries = create_entries(*days);

        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::new("days", days), &entries, |b, entries| {
            b.iter(|| process_entries(black_box(entries), None, ContractBase::Hours35, &config))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_day,
    bench_week,
    bench_year,
    bench_json_round_trip,
    bench_scaling,
);
criterion_main!(benches);
