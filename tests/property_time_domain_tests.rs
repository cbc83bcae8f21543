use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;
use timetable_chart::api::{ChartLayout, TimetableConfig};
use timetable_chart::core::{
    DomainEnd, ResourceScale, TimeScale, ZoomLevel, compute_time_domain,
};

fn reference_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..(365 * 60), 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).expect("epoch date") + Duration::days(day);
        date.and_hms_opt(hour, minute, 0).expect("valid time")
    })
}

fn zoom_strategy() -> impl Strategy<Value = ZoomLevel> {
    prop_oneof![
        Just(ZoomLevel::Day),
        Just(ZoomLevel::Week),
        Just(ZoomLevel::Month)
    ]
}

proptest! {
    #[test]
    fn week_domain_is_monday_aligned_and_contains_reference(reference in reference_strategy()) {
        let domain = compute_time_domain(ZoomLevel::Week, reference).expect("domain");
        prop_assert_eq!(domain.start().weekday(), Weekday::Mon);
        prop_assert_eq!(domain.span(), Duration::days(7));
        prop_assert!(domain.contains(reference));
    }

    #[test]
    fn month_domain_spans_reference_month(reference in reference_strategy()) {
        let domain = compute_time_domain(ZoomLevel::Month, reference).expect("domain");
        prop_assert_eq!(domain.start().day(), 1);
        prop_assert_eq!(domain.start().month(), reference.month());
        prop_assert_eq!(domain.end().month(), reference.month());
        prop_assert_eq!((domain.end().date() + Duration::days(1)).day(), 1);
        prop_assert_eq!(domain.end_bound(), DomainEnd::Inclusive);
        prop_assert!((28..=31).contains(&domain.covered_days()));
    }

    #[test]
    fn day_domain_is_fifteen_hours_on_reference_date(reference in reference_strategy()) {
        let domain = compute_time_domain(ZoomLevel::Day, reference).expect("domain");
        prop_assert_eq!(domain.start().date(), reference.date());
        prop_assert_eq!(domain.span(), Duration::hours(15));
    }

    #[test]
    fn time_scale_is_monotonic(
        reference in reference_strategy(),
        zoom in zoom_strategy(),
        width in 1.0f64..4_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let domain = compute_time_domain(zoom, reference).expect("domain");
        let scale = TimeScale::new(domain, width).expect("scale");
        let span_minutes = domain.span().num_minutes() as f64;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let t_lo = domain.start() + Duration::minutes((lo * span_minutes) as i64);
        let t_hi = domain.start() + Duration::minutes((hi * span_minutes) as i64);

        let x_lo = scale.time_to_pixel(t_lo).expect("map lo");
        let x_hi = scale.time_to_pixel(t_hi).expect("map hi");
        prop_assert!(x_lo <= x_hi);
        prop_assert!(x_lo >= 0.0 && x_hi <= width.round());
    }

    #[test]
    fn resource_offsets_are_index_proportional(
        count in 1usize..40,
        height in 1.0f64..2_000.0
    ) {
        let names: Vec<String> = (0..count).map(|index| format!("r{}", index % 5)).collect();
        let scale = ResourceScale::from_names(names.iter().map(String::as_str), height)
            .expect("scale");
        prop_assert_eq!(scale.len(), count);
        for (index, entry) in scale.entries().iter().enumerate() {
            let expected = index as f64 * height / count as f64;
            prop_assert!((entry.offset - expected).abs() <= 1e-9);
            prop_assert!(entry.offset < height);
        }
    }

    #[test]
    fn layout_is_deterministic(reference in reference_strategy(), zoom in zoom_strategy()) {
        let config = TimetableConfig::default().with_zoom(zoom);
        let first = ChartLayout::compute(&config, &[], reference).expect("first");
        let second = ChartLayout::compute(&config, &[], reference).expect("second");
        prop_assert_eq!(first, second);
    }
}
