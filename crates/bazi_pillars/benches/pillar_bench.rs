use bazi_pillars::{
    Calibration, ElementVector, FourPillars, day_pillar, hour_pillar, month_pillar, year_pillar,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn derive(jdn: i64, cal: &Calibration) -> FourPillars {
    let year = year_pillar(2024, cal);
    let day = day_pillar(jdn, cal);
    FourPillars {
        year,
        month: month_pillar(year.stem(), 3),
        day,
        hour: hour_pillar(14, day.stem()),
    }
}

fn pillar_bench(c: &mut Criterion) {
    let cal = Calibration::default();
    c.bench_function("four_pillars", |b| {
        b.iter(|| derive(black_box(2_460_351), &cal))
    });

    let fp = derive(2_460_351, &cal);
    c.bench_function("element_vector", |b| {
        b.iter(|| ElementVector::from_pillars(black_box(&fp)))
    });
}

criterion_group!(benches, pillar_bench);
criterion_main!(benches);
