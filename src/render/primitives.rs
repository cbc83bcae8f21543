use crate::error::{ChartError, ChartResult};

/// RGBA color, channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, e.g. `from_rgb8(0x33, 0x33, 0x33)`.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let channel = |value: u8| f64::from(value) / 255.0;
        Self::rgb(channel(red), channel(green), channel(blue))
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels
            .iter()
            .all(|value| value.is_finite() && (0.0..=1.0).contains(value))
        {
            Ok(())
        } else {
            Err(invalid(format!(
                "color channels must be finite and in [0, 1], got {channels:?}"
            )))
        }
    }
}

/// Straight stroke between two surface points.
///
/// Axis baselines are horizontal and tick gridlines vertical; the free
/// form is left for mark layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub const fn horizontal(x1: f64, x2: f64, y: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x1, y, x2, y, stroke_width, color)
    }

    #[must_use]
    pub const fn vertical(x: f64, y1: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x, y1, x, y2, stroke_width, color)
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(invalid(format!(
                "line stroke width must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        self.color.validate()
    }
}

/// Filled box for mark layers (appointment bars, resource bands).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    /// Zero means no border stroke.
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(self, border_width: f64, border_color: Color) -> Self {
        Self {
            border_width,
            border_color,
            ..self
        }
    }

    #[must_use]
    pub const fn with_corner_radius(self, corner_radius: f64) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("rect origin", &[self.x, self.y])?;
        ensure_non_negative("rect size", &[self.width, self.height])?;
        ensure_non_negative("rect border width", &[self.border_width])?;
        ensure_non_negative("rect corner radius", &[self.corner_radius])?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal anchor of a label relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    /// Label ends at `x`; resource names sit left of their axis.
    Right,
}

/// Vertical anchor of a label relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    /// Label sits above `y`; time axis labels clear their baseline this way.
    Bottom,
}

/// One label in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Bottom,
        }
    }

    #[must_use]
    pub fn with_v_align(self, v_align: TextVAlign) -> Self {
        Self { v_align, ..self }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(invalid("text primitive must not be empty".to_owned()));
        }
        ensure_finite("text anchor", &[self.x, self.y])?;
        if !(self.font_size_px.is_finite() && self.font_size_px > 0.0) {
            return Err(invalid(format!(
                "font size must be finite and > 0, got {}",
                self.font_size_px
            )));
        }
        self.color.validate()
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be finite, got {values:?}")))
    }
}

fn ensure_non_negative(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite() && *value >= 0.0) {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be finite and >= 0, got {values:?}")))
    }
}

fn invalid(message: String) -> ChartError {
    ChartError::InvalidData(message)
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn rgb8_maps_to_unit_channels() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.2));
        assert_eq!(color.with_alpha(0.5).alpha, 0.5);
    }

    #[test]
    fn gridline_helpers_are_axis_aligned() {
        let color = Color::rgb(0.0, 0.0, 0.0);
        let grid = LinePrimitive::vertical(10.0, 40.0, 160.0, 1.0, color);
        assert_eq!((grid.x1, grid.x2), (10.0, 10.0));
        let base = LinePrimitive::horizontal(150.0, 520.0, 40.0, 1.0, color);
        assert_eq!((base.y1, base.y2), (40.0, 40.0));
        assert!(LinePrimitive::vertical(f64::NAN, 0.0, 1.0, 1.0, color)
            .validate()
            .is_err());
    }

    #[test]
    fn rect_and_text_validation() {
        let color = Color::rgb(0.2, 0.4, 0.8);
        assert!(RectPrimitive::new(0.0, 0.0, 10.0, 4.0, color).validate().is_ok());
        assert!(RectPrimitive::new(0.0, 0.0, -1.0, 4.0, color).validate().is_err());
        assert!(RectPrimitive::new(0.0, 0.0, 10.0, 4.0, color)
            .with_corner_radius(-2.0)
            .validate()
            .is_err());
        assert!(TextPrimitive::new("", 0.0, 0.0, 10.0, color, TextHAlign::Left)
            .validate()
            .is_err());
    }
}
