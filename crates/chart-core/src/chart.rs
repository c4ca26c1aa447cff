// File: crates/chart-core/src/chart.rs
// Summary: Chart state: series store, axes, title, palette, backend, and observers, kept
// in sync through render-triggering mutators.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::axis::{Axis, AxisId};
use crate::backend::{PlotHandle, RenderBackend};
use crate::error::ChartResult;
use crate::export::{self, Cell};
use crate::observer::RenderObserverRegistry;
use crate::options::Snapshot;
use crate::palette::StylePalette;
use crate::series::{Column, SeriesStore};
use crate::types::{name_or_default, DEFAULT_NAME};

/// Construction-time settings for a [`ChartState`].
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub palette: StylePalette,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: StylePalette::default(),
            title: DEFAULT_NAME.to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }
}

/// Single source of truth for what is currently rendered.
///
/// Every mutator either fully succeeds (state updated, one redraw, observers
/// notified, in that order) or fails without touching state, backend, or
/// observers.
pub struct ChartState<B: RenderBackend> {
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    store: SeriesStore,
    palette: StylePalette,
    plots: Vec<PlotHandle>,
    backend: B,
    observers: RenderObserverRegistry<ChartState<B>>,
}

impl<B: RenderBackend> ChartState<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ChartConfig::default())
    }

    /// Push the initial title and axes to the backend. Nothing is drawn yet.
    pub fn with_config(backend: B, config: ChartConfig) -> Self {
        let mut state = Self {
            title: name_or_default(&config.title),
            x_axis: config.x_axis,
            y_axis: config.y_axis,
            store: SeriesStore::new(),
            palette: config.palette,
            plots: Vec::new(),
            backend,
            observers: RenderObserverRegistry::new(),
        };
        state.push_plots();
        state.backend.set_axis_range(AxisId::X, state.x_axis.bounds());
        state.backend.set_axis_range(AxisId::Y, state.y_axis.bounds());
        state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn series_count(&self) -> usize {
        self.store.series_count()
    }

    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the state and hand back the backend (e.g. to encode a final image).
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Add a callback fired after every successful mutation.
    pub fn register_observer<F>(&mut self, callback: F)
    where
        F: FnMut(&ChartState<B>) -> anyhow::Result<()> + 'static,
    {
        self.observers.register(callback);
    }

    /// Plot a single `y` against `x`. An empty `title` becomes "N/A".
    pub fn set_xy(&mut self, x: Column, y: Column, title: &str) -> ChartResult<()> {
        self.store.load_single(x, y, &self.palette)?;
        self.title = name_or_default(title);
        if let (Some(xc), Some(s)) = (self.store.x_column(), self.store.get(0)) {
            self.x_axis.label = xc.name.clone();
            self.y_axis.label = s.name().to_string();
        }
        self.push_plots();
        self.render();
        self.notify();
        Ok(())
    }

    /// Plot every column of `ys` against the shared `x`.
    pub fn set_multi_xy(&mut self, x: Column, ys: Vec<Column>, title: &str) -> ChartResult<()> {
        self.store.load_multi(x, ys, &self.palette)?;
        self.title = name_or_default(title);
        self.x_axis.label = self.store.x_column().map(|c| c.name.clone()).unwrap_or_default();
        self.y_axis.label.clear();
        self.push_plots();
        self.render();
        self.notify();
        Ok(())
    }

    /// Remove every series, restore the default title and drop the axis labels.
    pub fn clear(&mut self) {
        self.store.clear();
        self.title = DEFAULT_NAME.to_string();
        self.x_axis.label.clear();
        self.y_axis.label.clear();
        self.push_plots();
        self.render();
        self.notify();
    }

    /// Write a validated snapshot back into the chart.
    ///
    /// Axis bounds are written as given. Series options are matched by position:
    /// entry `i` restyles series `i` and palette slot `i mod N`; trailing series
    /// without an entry keep their cosmetics and extra entries are ignored. One
    /// redraw follows all updates.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        if snapshot.axis_x.is_inverted() || snapshot.axis_y.is_inverted() {
            warn!(x = ?snapshot.axis_x, y = ?snapshot.axis_y, "applying inverted axis range");
        }
        self.x_axis.set_bounds(snapshot.axis_x);
        self.y_axis.set_bounds(snapshot.axis_y);
        self.backend.set_axis_range(AxisId::X, snapshot.axis_x);
        self.backend.set_axis_range(AxisId::Y, snapshot.axis_y);

        let n = self.store.series_count().min(snapshot.series_options.len());
        for (i, opt) in snapshot.series_options.iter().take(n).enumerate() {
            let style = opt.to_style();
            if let Some(s) = self.store.get_mut(i) {
                s.style = style;
            }
            self.palette.set_style(i, style);
            let plot = self.plots[i];
            self.backend.set_plot_color(plot, style.color);
            self.backend.set_plot_width(plot, style.width);
            self.backend.set_plot_dash(plot, style.dash);
        }
        debug!(restyled = n, "applied chart options");

        self.render();
        self.notify();
    }

    /// Header row followed by one row per sample; see [`export::extract`].
    pub fn extract(&self) -> Vec<Vec<Cell>> {
        export::extract(&self.store)
    }

    // ---- helpers ----------------------------------------------------------------

    /// Rebuild backend plots from the store.
    fn push_plots(&mut self) {
        self.backend.set_title(&self.title);
        self.backend.clear_plots();
        self.plots.clear();
        for s in self.store.series() {
            let plot = self.backend.add_line_plot(s.x.clone(), &s.y);
            self.backend.set_plot_color(plot, s.style.color);
            self.backend.set_plot_width(plot, s.style.width);
            self.backend.set_plot_dash(plot, s.style.dash);
            self.plots.push(plot);
        }
        self.backend.set_axis_label(AxisId::X, &self.x_axis.label);
        self.backend.set_axis_label(AxisId::Y, &self.y_axis.label);
    }

    /// Redraw, then read back the ranges the backend settled on (it may autoscale).
    fn render(&mut self) {
        self.backend.request_redraw();
        self.x_axis.set_bounds(self.backend.axis_range(AxisId::X));
        self.y_axis.set_bounds(self.backend.axis_range(AxisId::Y));
    }

    /// The registry is moved out while callbacks run and put back even if one panics.
    fn notify(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| observers.notify_all(self)));
        self.observers = observers;
        if let Err(payload) = outcome {
            panic::resume_unwind(payload);
        }
    }
}
