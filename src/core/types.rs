use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 15.0,
            right: 30.0,
            bottom: 35.0,
            left: 150.0,
        }
    }
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Surface size plus margins; the drawable area is what scales map into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub viewport: Viewport,
    pub margin: Margin,
}

impl Dimensions {
    #[must_use]
    pub fn new(viewport: Viewport, margin: Margin) -> Self {
        Self { viewport, margin }
    }

    #[must_use]
    pub fn drawable_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn drawable_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margin.top - self.margin.bottom
    }

    /// Rejects surfaces whose margins leave no room to draw.
    pub fn validate(self) -> ChartResult<Self> {
        self.margin.validate()?;
        if !self.viewport.is_valid() || self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(self)
    }
}
