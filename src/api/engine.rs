use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::core::{Appointment, ZoomLevel};
use crate::error::ChartResult;
use crate::extensions::{MarkContext, MarkLayer, NoMarks};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_axes_frame;
use super::{ChartLayout, RenderStyle, TimetableConfig, UpdateOptions};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Timetable layout engine bound to one renderer.
///
/// The engine retains its config, style and the last derived layout. Every
/// pass recomputes the layout from config, data and the reference time.
pub struct TimetableChart<R: Renderer> {
    renderer: R,
    config: TimetableConfig,
    style: RenderStyle,
    reference_time: Option<NaiveDateTime>,
    mark_layer: Box<dyn MarkLayer>,
    layout: ChartLayout,
}

impl<R: Renderer> TimetableChart<R> {
    /// Validates `config`, runs the first layout pass with no data and renders it.
    pub fn new(renderer: R, config: TimetableConfig) -> ChartResult<Self> {
        Self::with_reference_time(renderer, config, None)
    }

    /// Like `new`, with the reference instant pinned instead of following the clock.
    pub fn with_reference_time(
        renderer: R,
        config: TimetableConfig,
        reference_time: Option<NaiveDateTime>,
    ) -> ChartResult<Self> {
        let reference = reference_time.unwrap_or_else(local_now);
        let layout = ChartLayout::compute(&config, &[], reference)?;
        debug!(
            target_surface = %config.target,
            zoom = %config.zoom,
            width = config.width,
            height = config.height,
            "initialize timetable chart"
        );

        let mut chart = Self {
            renderer,
            config,
            style: RenderStyle::default(),
            reference_time,
            mark_layer: Box::new(NoMarks),
            layout,
        };
        let frame = chart.compose_frame(&chart.layout, &[])?;
        chart.renderer.render(&frame)?;
        Ok(chart)
    }

    /// Applies `options` over the retained config and redraws with `data`.
    ///
    /// The new config and layout are committed only after the frame renders,
    /// so a rejected update leaves the previous state untouched.
    pub fn update(&mut self, data: &[Appointment], options: UpdateOptions) -> ChartResult<()> {
        let next_config = options.apply_to(&self.config);
        let layout = match ChartLayout::compute(&next_config, data, self.reference()) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(
                    zoom = %next_config.zoom,
                    width = next_config.width,
                    height = next_config.height,
                    error = %err,
                    "rejected timetable update"
                );
                return Err(err);
            }
        };
        debug!(
            zoom = %next_config.zoom,
            width = next_config.width,
            height = next_config.height,
            appointments = data.len(),
            resources = layout.resource_scale().len(),
            "update timetable chart"
        );

        let rendered = self
            .compose_frame(&layout, data)
            .and_then(|frame| self.renderer.render(&frame));
        if let Err(err) = rendered {
            warn!(zoom = %next_config.zoom, error = %err, "timetable render failed");
            return Err(err);
        }

        self.config = next_config;
        self.layout = layout;
        Ok(())
    }

    /// Builds the frame for `data` over the current layout without rendering it.
    pub fn build_render_frame(&self, data: &[Appointment]) -> ChartResult<RenderFrame> {
        self.compose_frame(&self.layout, data)
    }

    fn compose_frame(&self, layout: &ChartLayout, data: &[Appointment]) -> ChartResult<RenderFrame> {
        let mut frame = build_axes_frame(layout, &self.style);
        self.mark_layer.build_marks(
            data,
            MarkContext {
                layout,
                style: &self.style,
            },
            &mut frame,
        )?;
        Ok(frame)
    }

    /// Draws the current layout into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        data: &[Appointment],
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(data)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.config.zoom
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    /// Replaces the style; takes effect on the next pass.
    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn reference_time(&self) -> Option<NaiveDateTime> {
        self.reference_time
    }

    /// Pins the reference instant (`None` follows the local clock); takes
    /// effect on the next pass.
    pub fn set_reference_time(&mut self, reference_time: Option<NaiveDateTime>) {
        self.reference_time = reference_time;
    }

    #[must_use]
    pub fn mark_layer_id(&self) -> &str {
        self.mark_layer.id()
    }

    pub fn set_mark_layer(&mut self, layer: Box<dyn MarkLayer>) {
        debug!(layer = layer.id(), "set mark layer");
        self.mark_layer = layer;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn reference(&self) -> NaiveDateTime {
        self.reference_time.unwrap_or_else(local_now)
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
