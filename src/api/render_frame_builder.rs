use crate::core::GridLine;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::{ChartLayout, RenderStyle, SubAxisLayout};

/// Builds the axis scene for `layout`. Pure: the same inputs always give the
/// same frame.
#[must_use]
pub fn build_axes_frame(layout: &ChartLayout, style: &RenderStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.dimensions().viewport);
    for sub_axis in layout.sub_axes() {
        append_time_axis(&mut frame, layout, sub_axis, style);
    }
    append_resource_axis(&mut frame, layout, style);
    frame
}

fn append_time_axis(
    frame: &mut RenderFrame,
    layout: &ChartLayout,
    sub_axis: &SubAxisLayout,
    style: &RenderStyle,
) {
    let (origin_x, origin_y) = layout.time_origin();
    let baseline_y = origin_y + sub_axis.baseline_y;
    let right = origin_x + layout.drawable_width();
    let grid_length = match sub_axis.rule.grid {
        GridLine::FullHeight => layout.drawable_height(),
        GridLine::None => 0.0,
    };

    frame.push_line(LinePrimitive::horizontal(
        origin_x,
        right,
        baseline_y,
        style.axis_line_width,
        style.axis_line_color,
    ));
    if grid_length > 0.0 {
        // Outer ticks close the axis into a frame around the plot.
        for x in [origin_x, right] {
            frame.push_line(LinePrimitive::vertical(
                x,
                baseline_y,
                baseline_y + grid_length,
                style.axis_line_width,
                style.axis_line_color,
            ));
        }
    }

    for tick in &sub_axis.ticks {
        let x = origin_x + tick.x;
        if grid_length > 0.0 {
            frame.push_line(LinePrimitive::vertical(
                x,
                baseline_y,
                baseline_y + grid_length,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }
        frame.push_text(
            TextPrimitive::new(
                tick.label.clone(),
                x,
                baseline_y - style.tick_padding_px,
                style.time_label_font_size_px,
                style.time_label_color,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Bottom),
        );
    }
}

fn append_resource_axis(frame: &mut RenderFrame, layout: &ChartLayout, style: &RenderStyle) {
    let entries = layout.resource_scale().entries();
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return;
    };
    let (origin_x, origin_y) = layout.resource_origin();

    if style.show_resource_axis_line && last.offset > first.offset {
        frame.push_line(LinePrimitive::vertical(
            origin_x,
            origin_y + first.offset,
            origin_y + last.offset,
            style.axis_line_width,
            style.axis_line_color,
        ));
    }

    for entry in entries {
        frame.push_text(
            TextPrimitive::new(
                entry.name.clone(),
                origin_x - style.tick_padding_px,
                origin_y + entry.offset,
                style.resource_label_font_size_px,
                style.resource_label_color,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }
}
