// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports chart state, palette, options protocol,
// observer registry, and import/export helpers.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod error;
pub mod export;
pub mod import;
pub mod observer;
pub mod options;
pub mod palette;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisBounds, AxisId};
pub use backend::{BackendCall, PlotHandle, RecordingBackend, RenderBackend};
pub use chart::{ChartConfig, ChartState};
pub use error::{ChartError, ChartResult};
pub use export::{extract, write_delimited, write_tsv, Cell, ExportOutcome};
pub use observer::RenderObserverRegistry;
pub use options::{capture, validate, RawAxisInput, SeriesOptions, Snapshot};
pub use palette::StylePalette;
pub use series::{Column, Series, SeriesStore};
pub use types::{DashStyle, LineStyle, Rgb, DEFAULT_NAME};
