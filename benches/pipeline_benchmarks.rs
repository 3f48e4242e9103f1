//! Benchmarks for the campaign table pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use insights_core::CampaignRow;
use insights_data::{campaign_fixture, generate};
use insights_table::{SortDirection, SortField, StatusFilter, TableView, filter_rows, sort_rows};
use std::hint::black_box;

/// Fixture rows repeated to a larger table
fn scaled_rows(copies: usize) -> Vec<CampaignRow> {
    let base = campaign_fixture();
    (0..copies)
        .flat_map(|copy| {
            base.iter().map(move |row| CampaignRow {
                id: format!("{copy}-{}", row.id),
                ..row.clone()
            })
        })
        .collect()
}

/// Benchmark snapshot generation
fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_snapshot", |b| b.iter(|| black_box(generate())));
}

/// Benchmark filtering with realistic queries
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let rows = campaign_fixture();

    for query in ["", "ads", "Black", "paused", "no such campaign"] {
        group.bench_with_input(BenchmarkId::new("query", query), query, |b, query| {
            b.iter(|| filter_rows(&rows, black_box(query), StatusFilter::All).len());
        });
    }

    group.finish();
}

/// Benchmark sorting by text and numeric columns
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for copies in [1, 20] {
        let rows = scaled_rows(copies);
        group.throughput(Throughput::Elements(rows.len() as u64));

        for field in [SortField::Campaign, SortField::Spend, SortField::Status] {
            group.bench_with_input(
                BenchmarkId::new(field.as_str(), rows.len()),
                &rows,
                |b, rows| {
                    b.iter(|| {
                        let mut refs: Vec<&CampaignRow> = rows.iter().collect();
                        sort_rows(&mut refs, field, SortDirection::Descending);
                        refs.len()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark a full page projection
fn bench_project(c: &mut Criterion) {
    let mut view = TableView::new(scaled_rows(20), 15, 5);
    view.set_search("ads");
    view.toggle_sort(SortField::Ctr);

    c.bench_function("project_page", |b| b.iter(|| black_box(view.project()).total_filtered));
}

criterion_group!(benches, bench_generate, bench_filter, bench_sort, bench_project);
criterion_main!(benches);
