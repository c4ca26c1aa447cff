// File: crates/chart-core/src/series.rs
// Summary: Column and series model plus the store that owns the plotted series.
// Notes:
// - All series in a store share one X column through an `Arc`, so the store,
//   the exporter, and a render backend can hold it without copying samples.
// - Loads validate every shape before touching the store (replace-or-fail).

use std::sync::Arc;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::palette::StylePalette;
use crate::types::{name_or_default, LineStyle};

/// A named sequence of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    /// Blank names become "N/A".
    pub fn new(name: impl AsRef<str>, values: Vec<f64>) -> Self {
        Self { name: name_or_default(name.as_ref()), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One plotted line: the shared X column, its own Y column, and live cosmetics.
#[derive(Clone, Debug)]
pub struct Series {
    pub x: Arc<Column>,
    pub y: Column,
    pub style: LineStyle,
}

impl Series {
    pub fn name(&self) -> &str {
        &self.y.name
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterate `(x, y)` sample pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.values.iter().copied().zip(self.y.values.iter().copied())
    }
}

/// Ordered plotted series. Order is legend order and z-order (later on top).
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    x: Option<Arc<Column>>,
    series: Vec<Series>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store with one series. Cosmetics come from palette slot 0.
    pub fn load_single(&mut self, x: Column, y: Column, palette: &StylePalette) -> ChartResult<()> {
        check_shape(&x, &y)?;
        let x = Arc::new(x);
        self.clear();
        self.series.push(Series { x: Arc::clone(&x), y, style: palette.style_for(0) });
        self.x = Some(x);
        debug!(samples = self.row_count(), "loaded single series");
        Ok(())
    }

    /// Replace the store with one series per Y column, styled from palette slot
    /// `index mod N`.
    pub fn load_multi(&mut self, x: Column, ys: Vec<Column>, palette: &StylePalette) -> ChartResult<()> {
        for y in &ys {
            check_shape(&x, y)?;
        }
        let x = Arc::new(x);
        self.clear();
        self.series = ys
            .into_iter()
            .enumerate()
            .map(|(i, y)| Series { x: Arc::clone(&x), y, style: palette.style_for(i) })
            .collect();
        self.x = Some(x);
        debug!(series = self.series.len(), samples = self.row_count(), "loaded multiple series");
        Ok(())
    }

    /// Drop every series and release the shared X column.
    pub fn clear(&mut self) {
        self.series.clear();
        self.x = None;
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.series.get_mut(index)
    }

    pub fn x_column(&self) -> Option<&Arc<Column>> {
        self.x.as_ref()
    }

    /// X column plus one Y column per series, in storage order.
    pub fn column_count(&self) -> usize {
        match self.x {
            Some(_) => 1 + self.series.len(),
            None => 0,
        }
    }

    /// Number of samples in the X column.
    pub fn row_count(&self) -> usize {
        self.x.as_ref().map_or(0, |x| x.len())
    }
}

fn check_shape(x: &Column, y: &Column) -> ChartResult<()> {
    if x.len() != y.len() {
        return Err(ChartError::ShapeMismatch {
            series: y.name.clone(),
            expected: x.len(),
            found: y.len(),
        });
    }
    Ok(())
}
