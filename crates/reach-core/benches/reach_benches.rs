//! Criterion benchmarks for reach-core.
//!
//! Covers: single stage evaluation and full series construction in both modes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use reach_core::{new_views, reach_series, total_reach};

fn bench_new_views(c: &mut Criterion) {
    let views = Decimal::new(242_040, 2); // 2420.40

    c.bench_function("new_views_truncated", |b| {
        b.iter(|| new_views(black_box(views), black_box(false)))
    });
    c.bench_function("new_views_proportional", |b| {
        b.iter(|| new_views(black_box(views), black_box(true)))
    });
}

fn bench_total_reach(c: &mut Criterion) {
    // Large enough that all four share generations run.
    let investment = Decimal::new(8_224, 2); // 82.24

    c.bench_function("total_reach_truncated", |b| {
        b.iter(|| total_reach(black_box(investment), black_box(false)))
    });
    c.bench_function("total_reach_proportional", |b| {
        b.iter(|| total_reach(black_box(investment), black_box(true)))
    });
}

fn bench_reach_series(c: &mut Criterion) {
    let investment = Decimal::from(6542);

    c.bench_function("reach_series", |b| {
        b.iter(|| reach_series(black_box(investment), black_box(true)))
    });
}

criterion_group!(benches, bench_new_views, bench_total_reach, bench_reach_series);
criterion_main!(benches);
