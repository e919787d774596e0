use thiserror::Error;

use clarus_model::columns;

/// Errors raised while loading transaction data.
///
/// Loading is one-shot and side-effect-free: any of these leaves the caller's
/// previously loaded frame untouched. Absence of qualifying rows is never an
/// error here; empty datasets are handled by the availability predicate in
/// the analytics layer.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("line {line}: cannot parse `{value}` in column {column} as a calendar date")]
    InvalidDate {
        column: String,
        value: String,
        line: usize,
    },
    #[error("line {line}: cannot parse `{value}` in column {column} as a number")]
    InvalidNumber {
        column: String,
        value: String,
        line: usize,
    },
    #[error("dataframe error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// The canonical required-column list, for presenting input documentation to
/// the user alongside a schema failure.
pub fn required_columns() -> &'static [&'static str] {
    &columns::REQUIRED
}
