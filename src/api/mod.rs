mod engine;
mod engine_config;
mod engine_snapshot;
mod layout;
mod render_frame_builder;
mod render_style;

pub use engine::TimetableChart;
pub use engine_config::{
    AxisConfig, AxisTickDensity, ConfigOverrides, DEFAULT_AXIS_HEIGHT, DEFAULT_HEIGHT,
    DEFAULT_TARGET, DEFAULT_WIDTH, TimetableConfig, UpdateOptions,
};
pub use engine_snapshot::{
    LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, SubAxisSnapshot, TickSnapshot,
};
pub use layout::{AxisTick, ChartLayout, SubAxisLayout};
pub use render_frame_builder::build_axes_frame;
pub use render_style::RenderStyle;
