use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shoresquad::{
    synthetic_observations, ConditionCategory, ForecastNormalizer, SuitabilityScore,
    WeatherObservation,
};

fn bench_scoring(c: &mut Criterion) {
    let observation =
        WeatherObservation::new("Thundery Showers", 24.0, 33.0, "10-20").with_rainfall(12.4);
    c.bench_function("classify", |b| {
        b.iter(|| ConditionCategory::classify(black_box("Partly Cloudy (Day)")))
    });
    c.bench_function("score_observation", |b| {
        b.iter(|| SuitabilityScore::for_observation(black_box(&observation)))
    });

    let reference = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap_or_default();
    let set = synthetic_observations(reference);
    let normalizer = ForecastNormalizer::default();
    c.bench_function("normalize_week", |b| {
        b.iter(|| normalizer.normalize_set(black_box(&set), reference))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
