// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend for chart-core: CPU surface, styled line plots, PNG output.

pub mod backend;
mod draw;
pub mod raster;

pub use backend::SkiaBackend;
pub use raster::{Insets, RasterOptions};
