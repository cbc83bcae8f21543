use chrono::{NaiveDate, NaiveDateTime};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timetable_chart::api::{
    ChartLayout, RenderStyle, TimetableChart, TimetableConfig, UpdateOptions, build_axes_frame,
};
use timetable_chart::core::{Appointment, ZoomLevel, compute_resource_domain};
use timetable_chart::render::NullRenderer;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid instant")
}

fn appointments(count: usize) -> Vec<Appointment> {
    (0..count)
        .map(|i| Appointment::with_resource_names([format!("room-{}", i % 50), format!("staff-{i}")]))
        .collect()
}

fn bench_month_layout(c: &mut Criterion) {
    let config = TimetableConfig::new(1920, 1080).with_zoom(ZoomLevel::Month);
    c.bench_function("month_layout_1920", |b| {
        b.iter(|| {
            let _ = ChartLayout::compute(black_box(&config), &[], reference()).expect("layout");
        })
    });
}

fn bench_resource_domain_5k(c: &mut Criterion) {
    let data = appointments(5_000);
    c.bench_function("resource_domain_5k", |b| {
        b.iter(|| {
            let _ = compute_resource_domain(black_box(&data), 900.0).expect("resource scale");
        })
    });
}

fn bench_week_frame(c: &mut Criterion) {
    let config = TimetableConfig::new(1920, 1080).with_zoom(ZoomLevel::Week);
    let data = appointments(200);
    let layout = ChartLayout::compute(&config, &data, reference()).expect("layout");
    let style = RenderStyle::default();
    c.bench_function("week_axes_frame_200", |b| {
        b.iter(|| {
            let _ = build_axes_frame(black_box(&layout), &style);
        })
    });
}

fn bench_engine_zoom_cycle(c: &mut Criterion) {
    let data = appointments(200);
    let mut chart = TimetableChart::with_reference_time(
        NullRenderer::default(),
        TimetableConfig::new(1280, 720),
        Some(reference()),
    )
    .expect("chart init");

    c.bench_function("engine_zoom_cycle_200", |b| {
        b.iter(|| {
            for zoom in ZoomLevel::ALL {
                chart
                    .update(black_box(&data), UpdateOptions::new().with_zoom(zoom))
                    .expect("update");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_month_layout,
    bench_resource_domain_5k,
    bench_week_frame,
    bench_engine_zoom_cycle
);
criterion_main!(benches);
