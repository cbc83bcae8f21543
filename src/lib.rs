//! timetable-chart: zoomable timetable chart layout engine.
//!
//! A horizontal time axis (three stacked sub-axes at day, week or month zoom)
//! is crossed with a vertical axis of named resources. Layout is computed
//! from config and data, turned into a backend-agnostic `RenderFrame`, and
//! handed to a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod widget;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{TimetableChart, TimetableConfig, UpdateOptions};
pub use crate::core::{Appointment, Resource, ZoomLevel};
pub use error::{ChartError, ChartResult};
pub use widget::{TimetableWidget, WidgetEvent};
