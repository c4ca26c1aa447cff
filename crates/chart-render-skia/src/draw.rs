// File: crates/chart-render-skia/src/draw.rs
// Summary: Canvas drawing helpers: grid, axes with labels, title, legend, and styled line plots.

use chart_core::{AxisBounds, DashStyle, LineStyle, Rgb};
use skia_safe as skia;

use crate::raster::linspace;

/// Maps data coordinates into the plot rectangle.
pub(crate) struct Frame {
    pub l: f32,
    pub t: f32,
    pub r: f32,
    pub b: f32,
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl Frame {
    // Inverted ranges keep their sign, so the plot mirrors.
    fn span(b: AxisBounds) -> f64 {
        let s = b.span();
        if s.abs() < 1e-12 { 1e-12 } else { s }
    }

    pub fn sx(&self, x: f64) -> f32 {
        self.l + ((x - self.x.min) / Self::span(self.x)) as f32 * (self.r - self.l)
    }

    pub fn sy(&self, y: f64) -> f32 {
        self.b - ((y - self.y.min) / Self::span(self.y)) as f32 * (self.b - self.t)
    }
}

pub(crate) fn to_color(c: Rgb) -> skia::Color {
    let (r, g, b) = c.to_u8();
    skia::Color::from_argb(255, r, g, b)
}

/// On/off intervals in units of stroke width.
fn dash_intervals(dash: DashStyle) -> &'static [f32] {
    match dash {
        DashStyle::Solid => &[],
        DashStyle::Dash => &[8.0, 4.0],
        DashStyle::Dot => &[1.0, 3.0],
        DashStyle::DashDot => &[8.0, 3.0, 1.0, 3.0],
        DashStyle::DashDotDot => &[8.0, 3.0, 1.0, 3.0, 1.0, 3.0],
        DashStyle::DenseDot => &[1.0, 1.0],
    }
}

pub(crate) fn draw_grid(canvas: &skia::Canvas, f: &Frame) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 225, 225, 230));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(f.l as f64, f.r as f64, 10) {
        canvas.draw_line((x as f32, f.t), (x as f32, f.b), &paint);
    }
    for y in linspace(f.t as f64, f.b as f64, 6) {
        canvas.draw_line((f.l, y as f32), (f.r, y as f32), &paint);
    }
}

pub(crate) fn draw_axes(canvas: &skia::Canvas, f: &Frame) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 60, 60, 70));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((f.l, f.b), (f.r, f.b), &axis_paint);
    canvas.draw_line((f.l, f.t), (f.l, f.b), &axis_paint);
}

pub(crate) fn draw_labels(canvas: &skia::Canvas, f: &Frame, title: &str, x_label: &str, y_label: &str) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(skia::Color::from_argb(255, 20, 20, 30));
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    // Range endpoints under/left of the axes.
    let fmt = |v: f64| format!("{v:.3}");
    canvas.draw_str(fmt(f.x.min), (f.l, f.b + 18.0), &font, &paint_text);
    canvas.draw_str(fmt(f.x.max), (f.r - 48.0, f.b + 18.0), &font, &paint_text);
    canvas.draw_str(fmt(f.y.max), (f.l - 64.0, f.t + 10.0), &font, &paint_text);
    canvas.draw_str(fmt(f.y.min), (f.l - 64.0, f.b), &font, &paint_text);

    canvas.draw_str(x_label, ((f.l + f.r) * 0.5, f.b + 40.0), &font, &paint_text);
    canvas.draw_str(y_label, (f.l - 64.0, (f.t + f.b) * 0.5), &font, &paint_text);

    font.set_size(20.0);
    canvas.draw_str(title, ((f.l + f.r) * 0.5 - 40.0, f.t - 12.0), &font, &paint_text);
}

/// Top-right legend: one row per plot, in plot order, with a stroke sample and the name.
pub(crate) fn draw_legend(canvas: &skia::Canvas, f: &Frame, entries: &[(&str, LineStyle)]) {
    if entries.is_empty() {
        return;
    }
    let mut font = skia::Font::default();
    font.set_size(LEGEND_TEXT_SIZE);

    // Glyph-count estimate keeps the box sized when no system typeface is available.
    let text_w = entries
        .iter()
        .map(|(name, _)| {
            let measured = font.measure_str(name, None).0;
            measured.max(name.chars().count() as f32 * LEGEND_TEXT_SIZE * 0.5)
        })
        .fold(0.0f32, f32::max);
    let (pad, swatch, row_h) = (8.0, 28.0, LEGEND_TEXT_SIZE + 6.0);
    let w = pad * 3.0 + swatch + text_w;
    let h = pad * 2.0 + row_h * entries.len() as f32;
    let rect = skia::Rect::from_xywh(f.r - w - pad, f.t + pad, w, h);

    let mut fill = skia::Paint::default();
    fill.set_color(skia::Color::from_argb(235, 255, 255, 255));
    canvas.draw_rect(rect, &fill);
    let mut border = skia::Paint::default();
    border.set_color(skia::Color::from_argb(255, 160, 160, 170));
    border.set_style(skia::paint::Style::Stroke);
    border.set_anti_alias(true);
    border.set_stroke_width(1.0);
    canvas.draw_rect(rect, &border);

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(skia::Color::from_argb(255, 20, 20, 30));
    paint_text.set_anti_alias(true);
    for (i, (name, style)) in entries.iter().enumerate() {
        let mid = rect.top + pad + row_h * (i as f32 + 0.5);
        let x0 = rect.left + pad;
        canvas.draw_line((x0, mid), (x0 + swatch, mid), &stroke_paint(style));
        canvas.draw_str(name, (x0 + swatch + pad, mid + LEGEND_TEXT_SIZE * 0.35), &font, &paint_text);
    }
}

const LEGEND_TEXT_SIZE: f32 = 20.0;

fn stroke_paint(style: &LineStyle) -> skia::Paint {
    let width = style.width as f32;
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(to_color(style.color));

    let intervals: Vec<f32> = dash_intervals(style.dash).iter().map(|v| v * width.max(1.0)).collect();
    if !intervals.is_empty() {
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    stroke
}

pub(crate) fn draw_line_plot(canvas: &skia::Canvas, f: &Frame, xs: &[f64], ys: &[f64], style: &LineStyle) {
    if xs.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((f.sx(xs[0]), f.sy(ys[0])));
    for (&x, &y) in xs.iter().zip(ys).skip(1) {
        path.line_to((f.sx(x), f.sy(y)));
    }

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(f.l, f.t, f.r, f.b), skia::ClipOp::Intersect, true);
    canvas.draw_path(&path, &stroke_paint(style));
    canvas.restore();
}
