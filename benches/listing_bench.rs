//! Benchmarks for the listing pipeline and series extraction
//!
//! Run with: cargo bench

use covid_dashboard::listing::{filter_by_country, stable_sort, ListingState, SortOrder, SortState};
use covid_dashboard::stats::{CountryStat, HistoricalRecord, Timeline};
use covid_dashboard::timeline::extract_series;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_rows(count: usize) -> Vec<CountryStat> {
    (0..count)
        .map(|i| {
            CountryStat::new(format!("Country {:03}", (i * 37) % count))
                .with("cases", ((i * 7919) % 100_000) as f64)
                .with("deaths", ((i * 104_729) % 5_000) as f64)
                .with_text("date", format!("{:02}-{:02}-2021", i % 28 + 1, i % 12 + 1))
        })
        .collect()
}

fn create_test_history(countries: usize, days: usize) -> Vec<HistoricalRecord> {
    (0..countries)
        .map(|c| {
            let start = NaiveDate::from_ymd_opt(2020, 1, 22).unwrap_or_default();
            let mut timeline = Timeline::default();
            for d in 0..days {
                let label = (start + Duration::days(d as i64)).format("%-m/%-d/%y").to_string();
                timeline.cases.insert(label.clone(), (c * d) as f64);
                timeline.deaths.insert(label.clone(), d as f64);
                timeline.recovered.insert(label, 0.0);
            }
            HistoricalRecord::new(format!("Country {:03}", c), timeline)
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [200, 2000] {
        let rows = create_test_rows(size);
        group.throughput(Throughput::Elements(size as u64));

        for field in ["country", "cases", "date"] {
            let sort = SortState::new(field, SortOrder::Desc);
            group.bench_function(format!("{}_{}", field, size), |b| {
                b.iter(|| stable_sort(black_box(&rows), sort.comparator()))
            });
        }
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let rows = create_test_rows(200);

    c.bench_function("filter_200", |b| {
        b.iter(|| filter_by_country(black_box(&rows), black_box("y 1")))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("search_keystrokes_200", |b| {
        let mut state = ListingState::new(SortState::new("cases", SortOrder::Desc));
        state.replace(create_test_rows(200));

        b.iter(|| {
            for search in ["c", "co", "cou", "coun", ""] {
                state.set_search(black_box(search));
            }
            state.displayed_count()
        });
    });

    group.bench_function("header_clicks_200", |b| {
        let mut state = ListingState::new(SortState::default());
        state.replace(create_test_rows(200));

        b.iter(|| {
            state.request_sort(black_box("cases"));
            state.request_sort(black_box("deaths"));
        });
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let history = create_test_history(200, 300);

    c.bench_function("extract_series_200x300", |b| {
        b.iter(|| extract_series(black_box(&history), black_box("Country 100")))
    });
}

criterion_group!(benches, bench_sort, bench_filter, bench_pipeline, bench_extract);
criterion_main!(benches);
