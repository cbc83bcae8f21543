use chrono::NaiveDateTime;
use tracing::trace;

use crate::core::{
    Appointment, Dimensions, ResourceScale, SubAxis, TickRule, TimeScale, ZoomLevel,
    compute_resource_domain, compute_time_domain, tick_rules,
};
use crate::error::ChartResult;

use super::TimetableConfig;

/// One tick of a time sub-axis, in drawable-area coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub instant: NaiveDateTime,
    pub x: f64,
    pub label: String,
}

/// Geometry and ticks of one stacked time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SubAxisLayout {
    pub axis: SubAxis,
    pub rule: TickRule,
    /// Baseline offset below the top margin.
    pub baseline_y: f64,
    pub ticks: Vec<AxisTick>,
}

/// Everything derived from one `(config, data, reference time)` triple.
///
/// Built from scratch on every pass; nothing carries over from the previous
/// layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    dimensions: Dimensions,
    zoom: ZoomLevel,
    reference: NaiveDateTime,
    time_scale: TimeScale,
    resource_scale: ResourceScale,
    sub_axes: Vec<SubAxisLayout>,
    time_origin: (f64, f64),
    resource_origin: (f64, f64),
    tick_density_hint: f64,
}

impl ChartLayout {
    pub fn compute(
        config: &TimetableConfig,
        data: &[Appointment],
        reference: NaiveDateTime,
    ) -> ChartResult<Self> {
        config.validate()?;
        let dimensions = config.dimensions();
        let drawable_width = dimensions.drawable_width();
        let drawable_height = dimensions.drawable_height();

        let domain = compute_time_domain(config.zoom, reference)?;
        let time_scale = TimeScale::new(domain, drawable_width)?;
        let resource_scale = compute_resource_domain(data, drawable_height)?;

        let rules = tick_rules(config.zoom);
        let row_height = config.axis.height / 2.0;
        let mut sub_axes = Vec::with_capacity(SubAxis::ALL.len());
        for axis in SubAxis::ALL {
            let rule = rules.get(axis);
            let ticks = rule
                .interval
                .ticks(domain)
                .into_iter()
                .map(|instant| {
                    Ok(AxisTick {
                        instant,
                        x: time_scale.time_to_pixel(instant)?,
                        label: rule.format.format(instant),
                    })
                })
                .collect::<ChartResult<Vec<_>>>()?;
            trace!(?axis, zoom = %config.zoom, tick_count = ticks.len(), "sub-axis ticks");
            sub_axes.push(SubAxisLayout {
                axis,
                rule,
                baseline_y: row_height * f64::from(axis.row()),
                ticks,
            });
        }
        trace!(resource_count = resource_scale.len(), "resource axis");

        Ok(Self {
            dimensions,
            zoom: config.zoom,
            reference,
            time_scale,
            resource_scale,
            sub_axes,
            time_origin: (config.margin.left, config.margin.top),
            resource_origin: (2.0 * config.axis.height, 2.0 * config.axis.height),
            tick_density_hint: f64::from(config.width) / config.axis.ticks.for_zoom(config.zoom),
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn drawable_width(&self) -> f64 {
        self.dimensions.drawable_width()
    }

    #[must_use]
    pub fn drawable_height(&self) -> f64 {
        self.dimensions.drawable_height()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn resource_scale(&self) -> &ResourceScale {
        &self.resource_scale
    }

    #[must_use]
    pub fn sub_axes(&self) -> &[SubAxisLayout] {
        &self.sub_axes
    }

    #[must_use]
    pub fn sub_axis(&self, axis: SubAxis) -> Option<&SubAxisLayout> {
        self.sub_axes.iter().find(|layout| layout.axis == axis)
    }

    /// Surface position of the time axes' drawable-area origin.
    #[must_use]
    pub fn time_origin(&self) -> (f64, f64) {
        self.time_origin
    }

    /// Surface position of the resource axis origin.
    #[must_use]
    pub fn resource_origin(&self) -> (f64, f64) {
        self.resource_origin
    }

    /// `width / axis.ticks[zoom]`. Reported only; tick placement follows the
    /// per-zoom interval rules.
    #[must_use]
    pub fn tick_density_hint(&self) -> f64 {
        self.tick_density_hint
    }
}
