// File: crates/chart-core/src/export.rs
// Summary: Flatten stored columns into a header + row-major table and write it as
// delimited text.

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ChartResult;
use crate::series::SeriesStore;

/// One table entry: a column name in the header row, a sample value elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

/// Result of an export that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Header plus `rows` value rows were written.
    Written { rows: usize },
    /// Nothing to export; no output was produced.
    Empty,
}

/// Row 0 holds the column names (X first, then each Y in plot order); each further
/// row holds one sample index across all columns. Empty when there are no columns
/// or the X column has no samples.
pub fn extract(store: &SeriesStore) -> Vec<Vec<Cell>> {
    let Some(x) = store.x_column() else { return Vec::new() };
    let n_rows = x.len();
    if n_rows == 0 {
        return Vec::new();
    }

    let columns: Vec<&[f64]> = std::iter::once(x.values.as_slice())
        .chain(store.series().iter().map(|s| s.y.values.as_slice()))
        .collect();

    let mut table: Vec<Vec<Cell>> = Vec::with_capacity(n_rows + 1);
    table.push(
        std::iter::once(x.name.as_str())
            .chain(store.series().iter().map(|s| s.name()))
            .map(Cell::from)
            .collect(),
    );
    for i in 0..n_rows {
        table.push(columns.iter().map(|c| Cell::Number(c[i])).collect());
    }
    table
}

/// Write `table` to `writer`, one record per row, fields separated by `delimiter`.
pub fn write_delimited<W: Write>(table: &[Vec<Cell>], writer: W, delimiter: u8) -> ChartResult<ExportOutcome> {
    if table.is_empty() {
        return Ok(ExportOutcome::Empty);
    }
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);
    for row in table {
        wtr.write_record(row.iter().map(|c| c.to_string()))?;
    }
    wtr.flush()?;
    Ok(ExportOutcome::Written { rows: table.len() - 1 })
}

/// Tab-separated export to `path`. An empty table leaves the filesystem untouched.
pub fn write_tsv(path: impl AsRef<Path>, table: &[Vec<Cell>]) -> ChartResult<ExportOutcome> {
    if table.is_empty() {
        return Ok(ExportOutcome::Empty);
    }
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let outcome = write_delimited(table, std::io::BufWriter::new(file), b'\t')?;
    info!(path = %path.display(), ?outcome, "exported values");
    Ok(outcome)
}
