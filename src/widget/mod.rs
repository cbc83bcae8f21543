//! Container that owns viewport, zoom selection and data for one chart.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::api::{TimetableChart, TimetableConfig, UpdateOptions};
use crate::core::{Appointment, Viewport, ZoomLevel};
use crate::error::ChartResult;
use crate::interaction::{ResizeListener, ResizeSignal};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// External state changes the container reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Resized(Viewport),
    ZoomSelected(ZoomLevel),
    DataLoaded(Vec<Appointment>),
}

/// Owns the chart engine plus the state that drives it.
///
/// Each state change redraws with the full `{data, zoom, width, height}`
/// tuple. State is committed only when the chart accepts the update.
pub struct TimetableWidget<R: Renderer> {
    chart: TimetableChart<R>,
    data: Vec<Appointment>,
    zoom: ZoomLevel,
    viewport: Viewport,
    resize_listener: Option<ResizeListener>,
}

impl<R: Renderer> TimetableWidget<R> {
    /// Constructs the chart engine once, bound to `renderer`.
    pub fn mount(renderer: R, config: TimetableConfig) -> ChartResult<Self> {
        let zoom = config.zoom;
        let viewport = config.viewport();
        let chart = TimetableChart::new(renderer, config)?;
        debug!(%zoom, width = viewport.width, height = viewport.height, "mount timetable widget");
        Ok(Self {
            chart,
            data: Vec::new(),
            zoom,
            viewport,
            resize_listener: None,
        })
    }

    pub fn handle(&mut self, event: WidgetEvent) -> ChartResult<()> {
        match event {
            WidgetEvent::Resized(viewport) => self.resize(viewport.width, viewport.height),
            WidgetEvent::ZoomSelected(zoom) => self.select_zoom(zoom),
            WidgetEvent::DataLoaded(data) => self.set_data(data),
        }
    }

    pub fn select_zoom(&mut self, zoom: ZoomLevel) -> ChartResult<()> {
        self.chart
            .update(&self.data, redraw_options(zoom, self.viewport))?;
        self.zoom = zoom;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        self.chart
            .update(&self.data, redraw_options(self.zoom, viewport))?;
        self.viewport = viewport;
        Ok(())
    }

    pub fn set_data(&mut self, data: Vec<Appointment>) -> ChartResult<()> {
        self.chart
            .update(&data, redraw_options(self.zoom, self.viewport))?;
        self.data = data;
        Ok(())
    }

    /// Forwards `signal` emissions to `widget` until the widget is dropped
    /// or `detach_resize_signal` is called.
    pub fn attach_resize_signal(widget: &Rc<RefCell<Self>>, signal: &ResizeSignal)
    where
        R: 'static,
    {
        let weak = Rc::downgrade(widget);
        let listener = signal.connect(move |viewport| {
            let Some(widget) = weak.upgrade() else {
                return;
            };
            let Ok(mut widget) = widget.try_borrow_mut() else {
                warn!("timetable widget busy, dropping resize");
                return;
            };
            if let Err(err) = widget.resize(viewport.width, viewport.height) {
                warn!(width = viewport.width, height = viewport.height, error = %err, "resize rejected");
            }
        });
        widget.borrow_mut().resize_listener = Some(listener);
    }

    pub fn detach_resize_signal(&mut self) {
        self.resize_listener = None;
    }

    #[must_use]
    pub fn is_listening_for_resize(&self) -> bool {
        self.resize_listener
            .as_ref()
            .is_some_and(ResizeListener::is_connected)
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data(&self) -> &[Appointment] {
        &self.data
    }

    #[must_use]
    pub fn chart(&self) -> &TimetableChart<R> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut TimetableChart<R> {
        &mut self.chart
    }

    /// Draws the current state into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.chart.render_on_cairo_context(context, &self.data)
    }
}

fn redraw_options(zoom: ZoomLevel, viewport: Viewport) -> UpdateOptions {
    UpdateOptions::new().with_zoom(zoom).with_viewport(viewport)
}
