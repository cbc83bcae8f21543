use chrono::{NaiveDate, NaiveDateTime};
use timetable_chart::api::{
    LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, TimetableChart, TimetableConfig, UpdateOptions,
};
use timetable_chart::core::{Appointment, DomainEnd, SubAxis, ZoomLevel};
use timetable_chart::render::NullRenderer;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid instant")
}

fn week_chart() -> TimetableChart<NullRenderer> {
    let mut chart = TimetableChart::with_reference_time(
        NullRenderer::default(),
        TimetableConfig::default().with_zoom(ZoomLevel::Week),
        Some(reference()),
    )
    .expect("chart init");
    chart
        .update(
            &[Appointment::with_resource_names(["Alice", "Bob"])],
            UpdateOptions::new(),
        )
        .expect("update");
    chart
}

#[test]
fn snapshot_describes_week_layout() {
    let snapshot = week_chart().snapshot();

    assert_eq!(snapshot.schema_version, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(snapshot.zoom, ZoomLevel::Week);
    assert_eq!(snapshot.reference, "2026-10-16T12:00:00");
    assert_eq!(snapshot.domain_start, "2026-10-12T00:00:00");
    assert_eq!(snapshot.domain_end, "2026-10-19T00:00:00");
    assert_eq!(snapshot.domain_end_bound, DomainEnd::Exclusive);
    assert_eq!(snapshot.covered_days, 7);
    assert_eq!(snapshot.drawable_width, 370.0);
    assert_eq!(snapshot.drawable_height, 120.0);

    let axes: Vec<SubAxis> = snapshot.sub_axes.iter().map(|axis| axis.axis).collect();
    assert_eq!(axes, vec![SubAxis::Month, SubAxis::Day, SubAxis::Hour]);
    assert_eq!(snapshot.sub_axes[0].ticks[0].at, "2026-10-18T00:00:00");

    let names: Vec<&str> = snapshot.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(snapshot.resources[1].offset, 60.0);
}

#[test]
fn snapshot_json_round_trips() {
    let chart = week_chart();
    let json = chart.snapshot_json_pretty().expect("serialize");
    assert!(json.contains("\"zoom\": \"week\""));

    let parsed = LayoutSnapshot::from_json_str(&json).expect("parse");
    assert_eq!(parsed, chart.snapshot());
}

#[test]
fn unknown_schema_version_is_rejected() {
    let mut snapshot = week_chart().snapshot();
    snapshot.schema_version = LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 + 1;
    let json = snapshot.to_json_pretty().expect("serialize");

    let err = LayoutSnapshot::from_json_str(&json).expect_err("future schema");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}
