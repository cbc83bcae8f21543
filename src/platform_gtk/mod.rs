//! GTK4 host for `TimetableWidget`: a drawing area plus Day/Week/Month buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::TimetableConfig;
use crate::core::{Appointment, Viewport, ZoomLevel};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ResizeSignal;
use crate::render::CairoRenderer;
use crate::widget::TimetableWidget;

pub type GtkTimetableWidget = TimetableWidget<CairoRenderer>;

/// Owns the GTK widgets and wires their signals into the container.
///
/// Dropping the view disconnects the drawing-area resize handler.
pub struct GtkTimetableView {
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
    widget: Rc<RefCell<GtkTimetableWidget>>,
    resize_signal: ResizeSignal,
    resize_handler: Option<glib::SignalHandlerId>,
}

impl GtkTimetableView {
    pub fn new(config: TimetableConfig) -> ChartResult<Self> {
        let width = surface_extent(config.width)?;
        let height = surface_extent(config.height)?;
        let renderer = CairoRenderer::new(width, height)?;
        let target = config.target.clone();
        let widget = Rc::new(RefCell::new(TimetableWidget::mount(renderer, config)?));

        let resize_signal = ResizeSignal::new();
        TimetableWidget::attach_resize_signal(&widget, &resize_signal);

        let drawing_area = gtk::DrawingArea::builder()
            .content_width(width)
            .content_height(height)
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.set_widget_name(&target);

        let draw_widget = Rc::downgrade(&widget);
        drawing_area.set_draw_func(move |_area, context, _width, _height| {
            let Some(widget) = draw_widget.upgrade() else {
                return;
            };
            let Ok(mut widget) = widget.try_borrow_mut() else {
                return;
            };
            if let Err(err) = widget.render_on_cairo_context(context) {
                warn!(error = %err, "timetable draw failed");
            }
        });

        let signal = resize_signal.clone();
        let resize_handler = drawing_area.connect_resize(move |area, width, height| {
            let width = u32::try_from(width).unwrap_or(0);
            let height = u32::try_from(height).unwrap_or(0);
            signal.emit(Viewport::new(width, height));
            area.queue_draw();
        });

        let controls = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        controls.add_css_class("timetable-controls");
        for zoom in ZoomLevel::ALL {
            let button = gtk::Button::with_label(zoom.label());
            button.add_css_class("timetable-controls-button");
            let click_widget = Rc::downgrade(&widget);
            let area = drawing_area.downgrade();
            button.connect_clicked(move |_| {
                let Some(widget) = click_widget.upgrade() else {
                    return;
                };
                if let Err(err) = widget.borrow_mut().select_zoom(zoom) {
                    warn!(%zoom, error = %err, "zoom selection rejected");
                }
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
            });
            controls.append(&button);
        }

        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.add_css_class("timetable");
        root.append(&drawing_area);
        root.append(&controls);

        Ok(Self {
            root,
            drawing_area,
            widget,
            resize_signal,
            resize_handler: Some(resize_handler),
        })
    }

    /// Top-level GTK widget to embed in a window.
    #[must_use]
    pub fn root(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn widget(&self) -> Rc<RefCell<GtkTimetableWidget>> {
        Rc::clone(&self.widget)
    }

    #[must_use]
    pub fn resize_signal(&self) -> &ResizeSignal {
        &self.resize_signal
    }

    /// Replaces the appointment set and schedules a redraw.
    pub fn set_data(&self, data: Vec<Appointment>) -> ChartResult<()> {
        self.widget.borrow_mut().set_data(data)?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}

impl Drop for GtkTimetableView {
    fn drop(&mut self) {
        if let Some(handler) = self.resize_handler.take() {
            self.drawing_area.disconnect(handler);
        }
        self.widget.borrow_mut().detach_resize_signal();
    }
}

fn surface_extent(value: u32) -> ChartResult<i32> {
    i32::try_from(value)
        .map_err(|_| ChartError::InvalidData(format!("surface extent {value} exceeds i32")))
}
