use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonia_core::{AspectCalculator, AspectCatalog, ChartPoint, PointKind};

fn synthetic_chart(owner: &str, count: usize) -> Vec<ChartPoint> {
    (0..count)
        .map(|i| {
            ChartPoint::new(
                format!("point_{}", i),
                owner,
                (i as f64) * 33.0,
                0.1 + (i as f64) * 0.35,
                PointKind::Planet,
            )
        })
        .collect()
}

fn bench_aspect_between(c: &mut Criterion) {
    let catalog = AspectCatalog::default();
    let calculator = AspectCalculator::new(&catalog);
    let sun = ChartPoint::new("Sun", "natal", 100.0, 1.0, PointKind::Planet);
    let moon = ChartPoint::new("Moon", "natal", 102.0, 13.0, PointKind::Planet);

    c.bench_function("aspect_between", |b| {
        b.iter(|| calculator.aspect_between(black_box(&sun), black_box(&moon)))
    });
}

fn bench_single_chart(c: &mut Criterion) {
    let catalog = AspectCatalog::default();
    let calculator = AspectCalculator::new(&catalog);
    let points = synthetic_chart("natal", 11);

    c.bench_function("single_chart_11_points", |b| {
        b.iter(|| calculator.single_chart(black_box(&points)))
    });
}

fn bench_dual_chart(c: &mut Criterion) {
    let catalog = AspectCatalog::default();
    let calculator = AspectCalculator::new(&catalog);
    let natal = synthetic_chart("natal", 11);
    let transit = synthetic_chart("transit", 11);

    c.bench_function("dual_chart_11x11", |b| {
        b.iter(|| calculator.dual_chart(black_box(&natal), black_box(&transit)))
    });
}

criterion_group!(benches, bench_aspect_between, bench_single_chart, bench_dual_chart);
criterion_main!(benches);
