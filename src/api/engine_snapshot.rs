use serde::{Deserialize, Serialize};

use crate::core::{DomainEnd, GridLine, ResourceEntry, SubAxis, TickFormat, Viewport, ZoomLevel};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartLayout, TimetableChart};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const SNAPSHOT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub at: String,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAxisSnapshot {
    pub axis: SubAxis,
    pub baseline_y: f64,
    pub grid: GridLine,
    pub format: TickFormat,
    pub ticks: Vec<TickSnapshot>,
}

/// Serializable view of a `ChartLayout` for diagnostics and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub schema_version: u32,
    pub zoom: ZoomLevel,
    pub viewport: Viewport,
    pub drawable_width: f64,
    pub drawable_height: f64,
    pub reference: String,
    pub domain_start: String,
    pub domain_end: String,
    pub domain_end_bound: DomainEnd,
    pub covered_days: i64,
    pub tick_density_hint: f64,
    pub sub_axes: Vec<SubAxisSnapshot>,
    pub resources: Vec<ResourceEntry>,
}

impl ChartLayout {
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        let domain = self.time_scale().domain();
        LayoutSnapshot {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            zoom: self.zoom(),
            viewport: self.dimensions().viewport,
            drawable_width: self.drawable_width(),
            drawable_height: self.drawable_height(),
            reference: self.reference().format(SNAPSHOT_TIME_FORMAT).to_string(),
            domain_start: domain.start().format(SNAPSHOT_TIME_FORMAT).to_string(),
            domain_end: domain.end().format(SNAPSHOT_TIME_FORMAT).to_string(),
            domain_end_bound: domain.end_bound(),
            covered_days: domain.covered_days(),
            tick_density_hint: self.tick_density_hint(),
            sub_axes: self
                .sub_axes()
                .iter()
                .map(|sub_axis| SubAxisSnapshot {
                    axis: sub_axis.axis,
                    baseline_y: sub_axis.baseline_y,
                    grid: sub_axis.rule.grid,
                    format: sub_axis.rule.format,
                    ticks: sub_axis
                        .ticks
                        .iter()
                        .map(|tick| TickSnapshot {
                            at: tick.instant.format(SNAPSHOT_TIME_FORMAT).to_string(),
                            x: tick.x,
                            label: tick.label.clone(),
                        })
                        .collect(),
                })
                .collect(),
            resources: self.resource_scale().entries().to_vec(),
        }
    }
}

impl LayoutSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        if snapshot.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}

impl<R: Renderer> TimetableChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.layout().snapshot()
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
