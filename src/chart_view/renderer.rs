use crate::data_types::{Color, DimensionKind};
use crate::rendering::{AxisRender, RenderFrame};
use crate::theme::ChartTheme;
use gpui::{
    font, point, px, quad, App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels,
    TextRun, Window,
};

use super::input::SliderGeometry;

const TICK_SIZE: f32 = 6.0;

/// Paints one frame: curves first, then axes with the raised one on top, then
/// the density slider.
pub(crate) fn paint_frame(
    frame: &RenderFrame,
    bounds: Bounds<Pixels>,
    theme: &ChartTheme,
    window: &mut Window,
    cx: &mut App,
) {
    let origin_x = f32::from(bounds.origin.x) + frame.origin.x;
    let origin_y = f32::from(bounds.origin.y) + frame.origin.y;

    for curve in &frame.curves {
        let Some((first, rest)) = curve.points.split_first() else {
            continue;
        };
        let mut builder = PathBuilder::stroke(px(frame.line_width.max(0.5)));
        builder.move_to(point(px(origin_x + first.x), px(origin_y + first.y)));
        for p in rest {
            builder.line_to(point(px(origin_x + p.x), px(origin_y + p.y)));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(curve.color.with_alpha(frame.line_opacity)));
        }
    }

    for axis in frame.axes_paint_order() {
        paint_axis(axis, frame.height, origin_x, origin_y, theme, window, cx);
    }

    paint_slider(frame, bounds, theme, window, cx);
}

fn paint_axis(
    axis: &AxisRender,
    height: f32,
    origin_x: f32,
    origin_y: f32,
    theme: &ChartTheme,
    window: &mut Window,
    cx: &mut App,
) {
    let x = origin_x + axis.x_position;
    let line_color = if axis.raised {
        theme.active_axis_line
    } else {
        theme.axis_line
    };

    paint_rect(window, x - 0.5, origin_y, 1.0, height, line_color);

    // Categorical axes carry labels only, no tick marks.
    let tick_size = match axis.kind {
        DimensionKind::Numerical => TICK_SIZE,
        DimensionKind::Categorical => 0.0,
    };
    for tick in &axis.ticks {
        let y = origin_y + tick.position;
        if tick_size > 0.0 {
            paint_rect(window, x - tick_size, y - 0.5, tick_size, 1.0, line_color);
        }
        paint_text(
            window,
            cx,
            &tick.label,
            theme.axis_label_size,
            theme.axis_label,
            TextAnchor::End,
            x - tick_size - 3.0,
            y - theme.axis_label_size * 0.6,
        );
    }

    paint_text(
        window,
        cx,
        &axis.dimension,
        theme.title_size,
        theme.axis_label,
        TextAnchor::Middle,
        x,
        origin_y - 9.0 - theme.title_size,
    );
}

fn paint_slider(
    frame: &RenderFrame,
    bounds: Bounds<Pixels>,
    theme: &ChartTheme,
    window: &mut Window,
    cx: &mut App,
) {
    let slider = SliderGeometry::for_frame(frame);
    let left = f32::from(bounds.origin.x) + slider.left;
    let top = f32::from(bounds.origin.y) + slider.top;

    paint_rect(window, left, top, slider.width, slider.height, theme.slider_track);
    let filled = slider.width * frame.density as f32 / 100.0;
    paint_rect(window, left, top, filled, slider.height, theme.slider_fill);

    paint_text(
        window,
        cx,
        &format!("{}%", frame.density),
        theme.axis_label_size,
        theme.slider_label,
        TextAnchor::Start,
        left + slider.width + 10.0,
        top + slider.height * 0.5 - theme.axis_label_size * 0.6,
    );
}

fn paint_rect(window: &mut Window, x: f32, y: f32, w: f32, h: f32, color: Color) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let bounds = Bounds::from_corners(point(px(x), px(y)), point(px(x + w), px(y + h)));
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

#[derive(Clone, Copy)]
enum TextAnchor {
    Start,
    Middle,
    End,
}

#[allow(clippy::too_many_arguments)]
fn paint_text(
    window: &mut Window,
    cx: &mut App,
    text: &str,
    size: f32,
    color: Color,
    anchor: TextAnchor,
    x: f32,
    y: f32,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(size), &[run], None);
    let width = f32::from(shaped.width);
    let left = match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width * 0.5,
        TextAnchor::End => x - width,
    };
    let line_height = shaped.ascent + shaped.descent;
    let _ = shaped.paint(point(px(left), px(y)), line_height, window, cx);
}

pub(crate) fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
