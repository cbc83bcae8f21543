use chrono::{NaiveDate, NaiveDateTime, Weekday};
use timetable_chart::api::{ChartLayout, TimetableConfig};
use timetable_chart::core::{
    GridLine, SubAxis, TickFormat, TickInterval, ZoomLevel, compute_time_domain, tick_rules,
};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid instant")
}

fn labels(layout: &ChartLayout, axis: SubAxis) -> Vec<String> {
    layout
        .sub_axis(axis)
        .expect("sub-axis present")
        .ticks
        .iter()
        .map(|tick| tick.label.clone())
        .collect()
}

fn layout_for(zoom: ZoomLevel) -> ChartLayout {
    let config = TimetableConfig::default().with_zoom(zoom);
    ChartLayout::compute(&config, &[], reference()).expect("layout")
}

#[test]
fn month_zoom_rules() {
    let rules = tick_rules(ZoomLevel::Month);
    assert_eq!(
        rules.month.interval,
        TickInterval::Weeks {
            starts_on: Weekday::Mon
        }
    );
    assert_eq!(rules.day.interval, TickInterval::Days { every: 1 });
    assert_eq!(rules.day.format, TickFormat::DayOfMonth);
    assert_eq!(rules.hour.interval, TickInterval::Hours { every: 6 });
    assert_eq!(rules.hour.grid, GridLine::None);
    assert_eq!(rules.hour.format, TickFormat::Blank);
}

#[test]
fn week_zoom_rules() {
    let rules = tick_rules(ZoomLevel::Week);
    assert_eq!(
        rules.month.interval,
        TickInterval::Weeks {
            starts_on: Weekday::Sun
        }
    );
    assert_eq!(rules.day.format, TickFormat::Weekday);
    assert_eq!(rules.hour.format, TickFormat::Hour);
    assert_eq!(rules.hour.grid, GridLine::None);
}

#[test]
fn day_zoom_rules() {
    let rules = tick_rules(ZoomLevel::Day);
    assert_eq!(rules.month.interval, TickInterval::Hours { every: 21 });
    assert_eq!(rules.day.interval, TickInterval::Hours { every: 21 });
    assert_eq!(rules.hour.interval, TickInterval::Hours { every: 1 });
    assert_eq!(rules.hour.format, TickFormat::HourMinute);
    for axis in SubAxis::ALL {
        assert_eq!(rules.get(axis).grid, GridLine::FullHeight);
    }
}

#[test]
fn month_view_ticks() {
    let layout = layout_for(ZoomLevel::Month);

    assert_eq!(
        labels(&layout, SubAxis::Month),
        vec!["October  5", "October 12", "October 19", "October 26"]
    );

    let days = labels(&layout, SubAxis::Day);
    assert_eq!(days.len(), 31);
    assert_eq!(days.first().map(String::as_str), Some("01"));
    assert_eq!(days.last().map(String::as_str), Some("31"));

    let hours = layout.sub_axis(SubAxis::Hour).expect("hour axis");
    assert_eq!(hours.ticks.len(), 30 * 4 + 1);
    assert!(hours.ticks.iter().all(|tick| tick.label.is_empty()));
}

#[test]
fn week_view_ticks() {
    let layout = layout_for(ZoomLevel::Week);

    assert_eq!(labels(&layout, SubAxis::Month), vec!["October 18"]);
    assert_eq!(
        labels(&layout, SubAxis::Day),
        vec![
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
            "Monday"
        ]
    );
    let hours = labels(&layout, SubAxis::Hour);
    assert_eq!(hours.len(), 7 * 4 + 1);
    assert_eq!(&hours[..5], &["00", "06", "12", "18", "00"]);
}

#[test]
fn day_view_ticks() {
    let layout = layout_for(ZoomLevel::Day);

    assert_eq!(labels(&layout, SubAxis::Month), vec!["October 16"]);
    assert_eq!(labels(&layout, SubAxis::Day), vec!["Friday"]);

    let hours = labels(&layout, SubAxis::Hour);
    assert_eq!(hours.len(), 16);
    assert_eq!(hours.first().map(String::as_str), Some("06:00"));
    assert_eq!(hours.last().map(String::as_str), Some("21:00"));
}

#[test]
fn tick_positions_stay_inside_drawable_width() {
    for zoom in ZoomLevel::ALL {
        let layout = layout_for(zoom);
        let width = layout.drawable_width();
        for sub_axis in layout.sub_axes() {
            let mut previous = f64::NEG_INFINITY;
            for tick in &sub_axis.ticks {
                assert!(tick.x >= 0.0 && tick.x <= width, "{zoom}: {}", tick.x);
                assert!(tick.x > previous);
                previous = tick.x;
            }
        }
    }
}

#[test]
fn sub_axes_stack_in_half_axis_rows() {
    let layout = layout_for(ZoomLevel::Week);
    let baselines: Vec<f64> = layout
        .sub_axes()
        .iter()
        .map(|sub_axis| sub_axis.baseline_y)
        .collect();
    assert_eq!(baselines, vec![25.0, 50.0, 75.0]);
}

#[test]
fn week_ticks_start_on_domain_start() {
    let domain = compute_time_domain(ZoomLevel::Week, reference()).expect("domain");
    let ticks = TickInterval::Days { every: 1 }.ticks(domain);
    assert_eq!(ticks.first().copied(), Some(domain.start()));
    assert_eq!(ticks.last().copied(), Some(domain.end()));
}
