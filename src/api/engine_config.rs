use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, Margin, Viewport, ZoomLevel};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TARGET: &str = "timetable-chart";
pub const DEFAULT_WIDTH: u32 = 550;
pub const DEFAULT_HEIGHT: u32 = 170;
pub const DEFAULT_AXIS_HEIGHT: f64 = 50.0;

/// Per-zoom tick density divisor; `width / density` is the advisory tick hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTickDensity {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

impl Default for AxisTickDensity {
    fn default() -> Self {
        Self {
            day: 1000.0,
            week: 600.0,
            month: 120.0,
        }
    }
}

impl AxisTickDensity {
    #[must_use]
    pub fn for_zoom(self, zoom: ZoomLevel) -> f64 {
        match zoom {
            ZoomLevel::Day => self.day,
            ZoomLevel::Week => self.week,
            ZoomLevel::Month => self.month,
        }
    }

    fn validate(self) -> ChartResult<Self> {
        for zoom in ZoomLevel::ALL {
            let value = self.for_zoom(zoom);
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "axis tick density for `{zoom}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Height budget of the stacked time axes; each sub-axis row is half of it.
    pub height: f64,
    pub ticks: AxisTickDensity,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_AXIS_HEIGHT,
            ticks: AxisTickDensity::default(),
        }
    }
}

/// Chart construction config.
///
/// Every field has a documented default, so a JSON document only needs the
/// keys it wants to change. Nested structs merge field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Locator of the drawing surface the host binds the chart to.
    pub target: String,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub zoom: ZoomLevel,
    pub axis: AxisConfig,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: Margin::default(),
            zoom: ZoomLevel::default(),
            axis: AxisConfig::default(),
        }
    }
}

impl TimetableConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Applies explicit overrides on top of the defaults.
    #[must_use]
    pub fn from_overrides(overrides: ConfigOverrides) -> Self {
        Self::default().merged(overrides)
    }

    /// Applies each `Some` override over the current value.
    #[must_use]
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(target) = overrides.target {
            self.target = target;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(margin) = overrides.margin {
            self.margin = margin;
        }
        if let Some(zoom) = overrides.zoom {
            self.zoom = zoom;
        }
        if let Some(axis_height) = overrides.axis_height {
            self.axis.height = axis_height;
        }
        if let Some(ticks) = overrides.axis_ticks {
            self.axis.ticks = ticks;
        }
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.viewport(), self.margin)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.dimensions().validate()?;
        if !self.axis.height.is_finite() || self.axis.height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "axis height must be finite and > 0".to_owned(),
            ));
        }
        self.axis.ticks.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing keys take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

/// Sparse set of config fields to apply over defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub target: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub margin: Option<Margin>,
    pub zoom: Option<ZoomLevel>,
    pub axis_height: Option<f64>,
    pub axis_ticks: Option<AxisTickDensity>,
}

/// Per-update changes; omitted fields keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOptions {
    pub zoom: Option<ZoomLevel>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl UpdateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = Some(zoom);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_viewport(self, viewport: Viewport) -> Self {
        self.with_width(viewport.width).with_height(viewport.height)
    }

    #[must_use]
    pub fn apply_to(self, config: &TimetableConfig) -> TimetableConfig {
        TimetableConfig {
            zoom: self.zoom.unwrap_or(config.zoom),
            width: self.width.unwrap_or(config.width),
            height: self.height.unwrap_or(config.height),
            ..config.clone()
        }
    }
}
