use criterion::{Criterion, criterion_group, criterion_main};
use portal_charts::api::{ChartEngine, ChartEngineConfig};
use portal_charts::core::{
    LINE_HEADROOM_RATIO, PlotLayout, SeriesPoint, Viewport, project_trend_segments, value_ceiling,
};
use portal_charts::finance::LoanTerms;
use portal_charts::render::NullRenderer;
use std::hint::black_box;

fn bench_monthly_installment(c: &mut Criterion) {
    let terms = LoanTerms::new(800_000.0, 9.0, 60).expect("valid terms");

    c.bench_function("monthly_installment", |b| {
        b.iter(|| black_box(terms).breakdown())
    });
}

fn bench_trend_projection_10k(c: &mut Criterion) {
    let points: Vec<SeriesPoint> = (0..10_000)
        .map(|i| SeriesPoint::new(format!("p{i}"), 100.0 + (i as f64 * 0.37).sin() * 40.0 + i as f64 * 0.01))
        .collect();
    let layout = PlotLayout::compute(Viewport::new(1920, 1080), 50.0);
    let ceiling = value_ceiling(&points, LINE_HEADROOM_RATIO).expect("positive ceiling");

    c.bench_function("trend_projection_10k", |b| {
        b.iter(|| {
            let _ = project_trend_segments(black_box(&points), black_box(layout), black_box(ceiling));
        })
    });
}

fn bench_bar_frame_build(c: &mut Criterion) {
    let points: Vec<SeriesPoint> = (0..64)
        .map(|i| SeriesPoint::new(format!("cat{i}"), 1_000.0 + i as f64 * 137.0))
        .collect();
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(points);
    engine.set_title("Sales by Category");

    c.bench_function("bar_frame_build_64", |b| {
        b.iter(|| {
            let frame = engine.build_bar_frame();
            black_box(frame.rects.len())
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_installment,
    bench_trend_projection_10k,
    bench_bar_frame_build
);
criterion_main!(benches);
