use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and typography of the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub time_label_color: Color,
    pub time_label_font_size_px: f64,
    /// Gap between a tick line and its label.
    pub tick_padding_px: f64,
    pub resource_label_color: Color,
    pub resource_label_font_size_px: f64,
    pub show_resource_axis_line: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::from_rgb8(0x33, 0x33, 0x33),
            axis_line_width: 1.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.12),
            grid_line_width: 1.0,
            time_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            time_label_font_size_px: 10.0,
            tick_padding_px: 3.0,
            resource_label_color: Color::from_rgb8(0x11, 0x11, 0x11),
            resource_label_font_size_px: 11.0,
            show_resource_axis_line: true,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.axis_line_color,
            self.grid_line_color,
            self.time_label_color,
            self.resource_label_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("axis line width", self.axis_line_width),
            ("grid line width", self.grid_line_width),
            ("time label font size", self.time_label_font_size_px),
            ("resource label font size", self.resource_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.tick_padding_px.is_finite() || self.tick_padding_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "tick padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
