// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the chart state, options protocol, and import helpers.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A Y column does not have as many samples as the shared X column.
    #[error("shape mismatch for series '{series}': expected {expected} samples, found {found}")]
    ShapeMismatch {
        series: String,
        expected: usize,
        found: usize,
    },

    /// An axis bound entered by the user is not a finite number.
    #[error("invalid value for {field}: '{value}'")]
    InvalidSnapshot { field: &'static str, value: String },

    /// Palette arrays are empty or of different lengths.
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    #[error("line {line}: {message}")]
    Import { line: usize, message: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
