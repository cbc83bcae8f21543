use timetable_chart::api::{
    AxisTickDensity, ConfigOverrides, DEFAULT_AXIS_HEIGHT, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    TimetableConfig, UpdateOptions,
};
use timetable_chart::core::{Margin, Viewport, ZoomLevel};
use timetable_chart::ChartError;

#[test]
fn defaults_match_documented_values() {
    let config = TimetableConfig::default();
    assert_eq!(config.width, DEFAULT_WIDTH);
    assert_eq!(config.height, DEFAULT_HEIGHT);
    assert_eq!(config.margin, Margin::new(15.0, 30.0, 35.0, 150.0));
    assert_eq!(config.zoom, ZoomLevel::Month);
    assert_eq!(config.axis.height, DEFAULT_AXIS_HEIGHT);
    assert_eq!(config.axis.ticks, AxisTickDensity::default());
    assert_eq!(config.axis.ticks.for_zoom(ZoomLevel::Day), 1000.0);
    assert_eq!(config.axis.ticks.for_zoom(ZoomLevel::Week), 600.0);
    assert_eq!(config.axis.ticks.for_zoom(ZoomLevel::Month), 120.0);
    config.validate().expect("defaults are valid");
}

#[test]
fn empty_json_yields_defaults() {
    let config = TimetableConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, TimetableConfig::default());
}

#[test]
fn partial_json_merges_nested_fields() {
    let config = TimetableConfig::from_json_str(
        r#"{"width": 800, "zoom": "Week", "margin": {"left": 120}, "axis": {"ticks": {"day": 500}}}"#,
    )
    .expect("parse");

    assert_eq!(config.width, 800);
    assert_eq!(config.height, DEFAULT_HEIGHT);
    assert_eq!(config.zoom, ZoomLevel::Week);
    assert_eq!(config.margin, Margin::new(15.0, 30.0, 35.0, 120.0));
    assert_eq!(config.axis.height, DEFAULT_AXIS_HEIGHT);
    assert_eq!(config.axis.ticks.day, 500.0);
    assert_eq!(config.axis.ticks.month, 120.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = TimetableConfig::new(640, 300)
        .with_zoom(ZoomLevel::Day)
        .with_target("#timetable");
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"day\""));
    assert_eq!(TimetableConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn unknown_zoom_in_json_is_rejected() {
    let err = TimetableConfig::from_json_str(r#"{"zoom": "year"}"#).expect_err("bad zoom");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn zoom_parses_case_insensitively() {
    assert_eq!(" Week ".parse::<ZoomLevel>().expect("parse"), ZoomLevel::Week);
    let err = "fortnight".parse::<ZoomLevel>().expect_err("unknown");
    assert!(matches!(err, ChartError::InvalidZoomLevel(ref value) if value == "fortnight"));
}

#[test]
fn overrides_apply_over_defaults() {
    let config = TimetableConfig::from_overrides(ConfigOverrides {
        height: Some(400),
        axis_height: Some(60.0),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.width, DEFAULT_WIDTH);
    assert_eq!(config.height, 400);
    assert_eq!(config.axis.height, 60.0);
}

#[test]
fn update_options_keep_omitted_fields() {
    let base = TimetableConfig::new(700, 250).with_zoom(ZoomLevel::Week);

    let merged = UpdateOptions::new().with_width(900).apply_to(&base);
    assert_eq!(merged.width, 900);
    assert_eq!(merged.height, 250);
    assert_eq!(merged.zoom, ZoomLevel::Week);

    let merged = UpdateOptions::new()
        .with_viewport(Viewport::new(320, 200))
        .with_zoom(ZoomLevel::Day)
        .apply_to(&base);
    assert_eq!(merged.viewport(), Viewport::new(320, 200));
    assert_eq!(merged.zoom, ZoomLevel::Day);
    assert_eq!(merged.margin, base.margin);
}

#[test]
fn invalid_configs_are_rejected() {
    let narrow = TimetableConfig::new(150, 170);
    assert!(matches!(
        narrow.validate(),
        Err(ChartError::InvalidViewport {
            width: 150,
            height: 170
        })
    ));

    let negative_margin = TimetableConfig::default().with_margin(Margin::new(-1.0, 0.0, 0.0, 0.0));
    assert!(matches!(
        negative_margin.validate(),
        Err(ChartError::InvalidConfig(_))
    ));

    let mut zero_density = TimetableConfig::default();
    zero_density.axis.ticks.week = 0.0;
    assert!(matches!(
        zero_density.validate(),
        Err(ChartError::InvalidConfig(_))
    ));
}
