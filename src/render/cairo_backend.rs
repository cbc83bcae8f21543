use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

/// Primitive counts of the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers able to paint into a context they do not own, such as the one
/// handed to a GTK `DrawingArea` draw function.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo/Pango backend.
///
/// `Renderer::render` paints into an owned offscreen ARGB surface that can be
/// exported with `write_png`. The surface is re-created whenever a frame
/// arrives with a different viewport.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            background: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Color painted under every frame.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("cannot create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("cannot write png `{}`: {err}", path.display()))
        })
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("paint background", err))?;

        // Mark rects go under the axes so gridlines stay visible.
        for rect in &frame.rects {
            draw_rect(context, rect)?;
        }
        for line in &frame.lines {
            draw_line(context, line)?;
        }
        for text in &frame.texts {
            draw_text(context, &self.font_family, text);
        }

        self.last_stats = CairoRenderStats {
            lines_drawn: frame.lines.len(),
            rects_drawn: frame.rects.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let width = surface_extent(frame.viewport.width)?;
        let height = surface_extent(frame.viewport.height)?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }

        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(format!(
            "cairo surface must be at least 1x1, got {width}x{height}"
        )));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| backend_error("create surface", err))
}

fn surface_extent(value: u32) -> ChartResult<i32> {
    i32::try_from(value)
        .map_err(|_| ChartError::InvalidData(format!("surface extent {value} exceeds i32")))
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    rect_path(context, rect);
    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("fill rect", err));
    }
    context
        .fill_preserve()
        .map_err(|err| backend_error("fill rect", err))?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("stroke rect border", err))
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    // Odd-width axis-aligned strokes land on half pixels to stay one pixel wide.
    let nudge = if (line.stroke_width.round() as i64) % 2 == 1 {
        0.5
    } else {
        0.0
    };
    let (dx, dy) = match (line.x1 == line.x2, line.y1 == line.y2) {
        (true, false) => (nudge, 0.0),
        (false, true) => (0.0, nudge),
        _ => (0.0, 0.0),
    };

    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1.floor() + dx, line.y1.floor() + dy);
    context.line_to(line.x2.floor() + dx, line.y2.floor() + dy);
    context
        .stroke()
        .map_err(|err| backend_error("stroke line", err))
}

fn draw_text(context: &Context, font_family: &str, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font = FontDescription::from_string(font_family);
    font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    let y = match text.v_align {
        TextVAlign::Top => text.y,
        TextVAlign::Middle => text.y - height / 2.0,
        TextVAlign::Bottom => text.y - height,
    };

    set_source(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn rect_path(context: &Context, rect: &RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(action: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("cairo failed to {action}: {err}"))
}
