// File: crates/chart-render-skia/src/raster.rs
// Summary: Raster surface settings (size, margins, background) and grid layout helper.

use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 56)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Title, axis labels and legend; off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::WHITE,
            draw_labels: true,
        }
    }
}

/// Plot rectangle in pixels as (left, top, right, bottom).
pub(crate) fn plot_rect(opts: &RasterOptions) -> (f32, f32, f32, f32) {
    let i = opts.insets;
    (
        i.left as f32,
        i.top as f32,
        (opts.width - i.right as i32) as f32,
        (opts.height - i.bottom as i32) as f32,
    )
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
