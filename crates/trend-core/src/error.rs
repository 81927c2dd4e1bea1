// File: crates/trend-core/src/error.rs
// Summary: Data loading errors. Any of these aborts chart initialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to read data source")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },

    /// `row` is the 1-based line number with the header as line 1.
    #[error("row {row}: column `{column}` is not a valid number: {value:?}")]
    InvalidNumber { row: u64, column: &'static str, value: String },

    #[error("row {row}: column `{column}` is not a finite number")]
    NonFinite { row: u64, column: &'static str },

    #[error("data source contains no records")]
    Empty,
}
