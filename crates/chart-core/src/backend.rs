// File: crates/chart-core/src/backend.rs
// Summary: Narrow render-backend interface consumed by the chart state, plus a headless
// recording implementation.

use std::sync::Arc;

use crate::axis::{AxisBounds, AxisId};
use crate::series::Column;
use crate::types::{DashStyle, Rgb};

/// Opaque handle to a line plot created by a backend. Handles are only valid until
/// the next `clear_plots`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlotHandle(pub usize);

/// Capabilities the chart state needs from a 2D rendering engine.
///
/// Implementations own their failure reporting: `request_redraw` never returns an
/// error to the caller.
pub trait RenderBackend {
    fn set_title(&mut self, title: &str);
    fn clear_plots(&mut self);
    fn add_line_plot(&mut self, x: Arc<Column>, y: &Column) -> PlotHandle;
    fn set_plot_color(&mut self, plot: PlotHandle, color: Rgb);
    fn set_plot_width(&mut self, plot: PlotHandle, width: f64);
    fn set_plot_dash(&mut self, plot: PlotHandle, dash: DashStyle);
    fn set_axis_label(&mut self, axis: AxisId, label: &str);
    fn set_axis_range(&mut self, axis: AxisId, bounds: AxisBounds);
    fn axis_range(&self, axis: AxisId) -> AxisBounds;
    fn request_redraw(&mut self);
}

/// One call received by a [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    SetTitle(String),
    ClearPlots,
    AddLinePlot { x: String, y: String, samples: usize },
    SetColor(PlotHandle, Rgb),
    SetWidth(PlotHandle, f64),
    SetDash(PlotHandle, DashStyle),
    SetAxisLabel(AxisId, String),
    SetAxisRange(AxisId, AxisBounds),
    Redraw,
}

/// Backend that renders nothing and records every call. Axis ranges read back
/// exactly what was last written.
#[derive(Clone, Debug)]
pub struct RecordingBackend {
    pub calls: Vec<BackendCall>,
    plots: usize,
    x_range: AxisBounds,
    y_range: AxisBounds,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            plots: 0,
            x_range: AxisBounds::new(0.0, 10.0),
            y_range: AxisBounds::new(0.0, 1.0),
        }
    }

    pub fn redraw_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, BackendCall::Redraw)).count()
    }

    pub fn plot_count(&self) -> usize {
        self.plots
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for RecordingBackend {
    fn set_title(&mut self, title: &str) {
        self.calls.push(BackendCall::SetTitle(title.to_string()));
    }

    fn clear_plots(&mut self) {
        self.plots = 0;
        self.calls.push(BackendCall::ClearPlots);
    }

    fn add_line_plot(&mut self, x: Arc<Column>, y: &Column) -> PlotHandle {
        let handle = PlotHandle(self.plots);
        self.plots += 1;
        self.calls.push(BackendCall::AddLinePlot {
            x: x.name.clone(),
            y: y.name.clone(),
            samples: y.len(),
        });
        handle
    }

    fn set_plot_color(&mut self, plot: PlotHandle, color: Rgb) {
        self.calls.push(BackendCall::SetColor(plot, color));
    }

    fn set_plot_width(&mut self, plot: PlotHandle, width: f64) {
        self.calls.push(BackendCall::SetWidth(plot, width));
    }

    fn set_plot_dash(&mut self, plot: PlotHandle, dash: DashStyle) {
        self.calls.push(BackendCall::SetDash(plot, dash));
    }

    fn set_axis_label(&mut self, axis: AxisId, label: &str) {
        self.calls.push(BackendCall::SetAxisLabel(axis, label.to_string()));
    }

    fn set_axis_range(&mut self, axis: AxisId, bounds: AxisBounds) {
        match axis {
            AxisId::X => self.x_range = bounds,
            AxisId::Y => self.y_range = bounds,
        }
        self.calls.push(BackendCall::SetAxisRange(axis, bounds));
    }

    fn axis_range(&self, axis: AxisId) -> AxisBounds {
        match axis {
            AxisId::X => self.x_range,
            AxisId::Y => self.y_range,
        }
    }

    fn request_redraw(&mut self) {
        self.calls.push(BackendCall::Redraw);
    }
}
