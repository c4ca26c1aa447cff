// File: crates/chart-core/src/import.rs
// Summary: CSV readers producing columns ready for `ChartState::set_xy` / `set_multi_xy`.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::series::Column;

/// Two columns named "x" and "y" plus a label for the chart title.
#[derive(Clone, Debug, PartialEq)]
pub struct XyData {
    pub x: Column,
    pub y: Column,
    pub label: String,
}

/// Shared X column, any number of Y columns, and a label for the chart title.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnsData {
    pub x: Column,
    pub ys: Vec<Column>,
    pub label: String,
}

/// Read a headerless file of `x, y` lines. The label is the file name.
pub fn read_xy_csv(path: impl AsRef<Path>) -> ChartResult<XyData> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let data = parse_xy(file, &file_label(path))?;
    debug!(path = %path.display(), rows = data.x.len(), "read xy csv");
    Ok(data)
}

/// Parse headerless `x, y` records. Fields are trimmed, anything past the second
/// field is ignored, and a line without two numbers fails with its line number.
pub fn parse_xy<R: Read>(reader: R, label: &str) -> ChartResult<XyData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = line_of(&rec);
        let field = |i: usize| -> ChartResult<f64> {
            let text = rec.get(i).ok_or_else(|| ChartError::Import {
                line,
                message: format!("expected 2 fields, found {}", rec.len()),
            })?;
            parse_number(text, line)
        };
        xs.push(field(0)?);
        ys.push(field(1)?);
    }
    Ok(XyData {
        x: Column::new("x", xs),
        y: Column::new("y", ys),
        label: label.to_string(),
    })
}

/// Read a headered file: first column is X, every further column is a Y series
/// named by its header.
pub fn read_columns_csv(path: impl AsRef<Path>) -> ChartResult<ColumnsData> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let data = parse_columns(file, &file_label(path))?;
    debug!(path = %path.display(), series = data.ys.len(), rows = data.x.len(), "read columns csv");
    Ok(data)
}

pub fn parse_columns<R: Read>(reader: R, label: &str) -> ChartResult<ColumnsData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers.len() < 2 {
        return Err(ChartError::Import {
            line: 1,
            message: format!("expected an X column and at least one Y column, found {}", headers.len()),
        });
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        let rec = rec?;
        let line = line_of(&rec);
        for (col, text) in values.iter_mut().zip(rec.iter()) {
            col.push(parse_number(text, line)?);
        }
    }

    let mut columns = headers.into_iter().zip(values).map(|(h, v)| Column::new(h, v));
    let x = columns.next().unwrap_or_else(|| Column::new("", Vec::new()));
    Ok(ColumnsData { x, ys: columns.collect(), label: label.to_string() })
}

fn parse_number(text: &str, line: usize) -> ChartResult<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ChartError::Import { line, message: format!("not a finite number: '{text}'") }),
    }
}

fn line_of(rec: &csv::StringRecord) -> usize {
    rec.position().map_or(0, |p| p.line() as usize)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
