use bazi_ephem::AnalyticSun;
use bazi_search::{CrossingConfig, find_crossing, month_boundaries, solar_terms, year_start};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const JAN_1_2024: f64 = 2_460_310.5;

fn crossing_bench(c: &mut Criterion) {
    let cfg = CrossingConfig::default();
    c.bench_function("find_crossing_lichun", |b| {
        b.iter(|| find_crossing(&AnalyticSun, black_box(315.0), black_box(JAN_1_2024), &cfg))
    });

    let coarse = CrossingConfig::new(5.0, 1.0);
    c.bench_function("find_crossing_coarse", |b| {
        b.iter(|| find_crossing(&AnalyticSun, black_box(315.0), black_box(JAN_1_2024), &coarse))
    });
}

fn boundary_bench(c: &mut Criterion) {
    let cfg = CrossingConfig::default();
    let start = year_start(&AnalyticSun, 2024, &cfg).expect("lichun 2024");

    c.bench_function("month_boundaries", |b| {
        b.iter(|| month_boundaries(&AnalyticSun, black_box(start), &cfg))
    });

    let bounds = month_boundaries(&AnalyticSun, start, &cfg).expect("boundaries 2024");
    c.bench_function("solar_terms", |b| {
        b.iter(|| solar_terms(&AnalyticSun, black_box(&bounds), &cfg))
    });
}

criterion_group!(benches, crossing_bench, boundary_bench);
criterion_main!(benches);
