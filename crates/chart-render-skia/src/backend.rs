// File: crates/chart-render-skia/src/backend.rs
// Summary: `RenderBackend` implementation that rasterizes the chart on a Skia CPU surface.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chart_core::{AxisBounds, AxisId, Column, DashStyle, LineStyle, PlotHandle, RenderBackend, Rgb};
use skia_safe as skia;
use tracing::{debug, error, warn};

use crate::draw::{draw_axes, draw_grid, draw_labels, draw_legend, draw_line_plot, Frame};
use crate::raster::{plot_rect, RasterOptions};

struct Plot {
    name: String,
    x: Arc<Column>,
    y: Vec<f64>,
    style: LineStyle,
}

struct AxisState {
    bounds: AxisBounds,
    label: String,
    /// Fit to data on redraw until a range is set explicitly.
    auto: bool,
}

impl AxisState {
    fn new(min: f64, max: f64) -> Self {
        Self { bounds: AxisBounds::new(min, max), label: String::new(), auto: true }
    }
}

/// Headless Skia renderer. Every `request_redraw` produces a fresh frame that can be
/// encoded as PNG.
pub struct SkiaBackend {
    opts: RasterOptions,
    title: String,
    plots: Vec<Plot>,
    x: AxisState,
    y: AxisState,
    frame: Option<skia::Image>,
    redraws: usize,
}

impl SkiaBackend {
    pub fn new(opts: RasterOptions) -> Self {
        Self {
            opts,
            title: String::new(),
            plots: Vec::new(),
            x: AxisState::new(0.0, 10.0),
            y: AxisState::new(0.0, 1.0),
            frame: None,
            redraws: 0,
        }
    }

    pub fn options(&self) -> &RasterOptions {
        &self.opts
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Put both axes back into fit-to-data mode.
    pub fn enable_autoscale(&mut self) {
        self.x.auto = true;
        self.y.auto = true;
    }

    /// Most recent frame as PNG bytes, rendering one first if none exists.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let image = match &self.frame {
            Some(img) => img.clone(),
            None => self.render_frame()?,
        };
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the most recent frame as a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn plot_mut(&mut self, plot: PlotHandle) -> Option<&mut Plot> {
        let found = self.plots.get_mut(plot.0);
        if found.is_none() {
            warn!(?plot, "style update for unknown plot");
        }
        found
    }

    fn autoscale(&mut self) {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.plots {
            for (&x, &y) in p.x.values.iter().zip(&p.y) {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * 0.02;
        if self.x.auto {
            self.x.bounds = AxisBounds::new(x_min, x_max);
        }
        if self.y.auto {
            self.y.bounds = AxisBounds::new(y_min - ym, y_max + ym);
        }
    }

    fn render_frame(&self) -> Result<skia::Image> {
        let mut surface = skia::surfaces::raster_n32_premul((self.opts.width, self.opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.opts.background);

        let (l, t, r, b) = plot_rect(&self.opts);
        let frame = Frame { l, t, r, b, x: self.x.bounds, y: self.y.bounds };

        draw_grid(canvas, &frame);
        // Later plots are drawn on top.
        for p in &self.plots {
            draw_line_plot(canvas, &frame, &p.x.values, &p.y, &p.style);
        }
        draw_axes(canvas, &frame);
        if self.opts.draw_labels {
            draw_labels(canvas, &frame, &self.title, &self.x.label, &self.y.label);
            let legend: Vec<(&str, LineStyle)> = self.plots.iter().map(|p| (p.name.as_str(), p.style)).collect();
            draw_legend(canvas, &frame, &legend);
        }
        Ok(surface.image_snapshot())
    }
}

impl Default for SkiaBackend {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl RenderBackend for SkiaBackend {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn clear_plots(&mut self) {
        self.plots.clear();
        self.enable_autoscale();
    }

    fn add_line_plot(&mut self, x: Arc<Column>, y: &Column) -> PlotHandle {
        self.plots.push(Plot {
            name: y.name.clone(),
            x,
            y: y.values.clone(),
            style: LineStyle::new(Rgb::new(0.0, 0.0, 0.0), 1.0, DashStyle::Solid),
        });
        PlotHandle(self.plots.len() - 1)
    }

    fn set_plot_color(&mut self, plot: PlotHandle, color: Rgb) {
        if let Some(p) = self.plot_mut(plot) {
            p.style.color = color;
        }
    }

    fn set_plot_width(&mut self, plot: PlotHandle, width: f64) {
        if let Some(p) = self.plot_mut(plot) {
            p.style.width = width;
        }
    }

    fn set_plot_dash(&mut self, plot: PlotHandle, dash: DashStyle) {
        if let Some(p) = self.plot_mut(plot) {
            p.style.dash = dash;
        }
    }

    fn set_axis_label(&mut self, axis: AxisId, label: &str) {
        match axis {
            AxisId::X => self.x.label = label.to_string(),
            AxisId::Y => self.y.label = label.to_string(),
        }
    }

    fn set_axis_range(&mut self, axis: AxisId, bounds: AxisBounds) {
        let a = match axis {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
        };
        a.bounds = bounds;
        a.auto = false;
    }

    fn axis_range(&self, axis: AxisId) -> AxisBounds {
        match axis {
            AxisId::X => self.x.bounds,
            AxisId::Y => self.y.bounds,
        }
    }

    fn request_redraw(&mut self) {
        self.autoscale();
        self.redraws += 1;
        match self.render_frame() {
            Ok(img) => {
                debug!(plots = self.plots.len(), redraw = self.redraws, "rendered frame");
                self.frame = Some(img);
            }
            Err(e) => error!(error = %e, "render failed"),
        }
    }
}
