//! Transaction data ingestion for the Clarus analytics engine.
//!
//! Reads delimited transaction files into a typed polars [`DataFrame`],
//! validating the schema (all nine required columns present) and every date
//! and numeric field up front so downstream analytics never see malformed
//! data. Also provides the content-hash [`LoadCache`] that memoizes the
//! load-and-parse step across interactions, and the CSV exporter that writes
//! a filtered frame back out in the input column layout.
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod cache;
mod csv_table;
mod error;
mod export;
mod frame;
mod polars_utils;

pub use cache::{CacheStats, LoadCache, sha256_hex};
pub use csv_table::{CsvTable, read_csv_headers, read_csv_table, read_csv_table_from_reader};
pub use error::{IngestError, Result, required_columns};
pub use export::{export_csv, export_csv_file};
pub use frame::{
    build_transaction_frame, frame_from_transactions, load_transactions, parse_transaction_date,
};
pub use polars_utils::{
    any_to_bool, any_to_f64, any_to_i64, any_to_string, format_numeric, parse_f64, parse_i64,
};
