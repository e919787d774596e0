//! CSV export of a transaction frame.
//!
//! Writes the nine base columns in canonical order, excluding every derived
//! column, so an exported file satisfies the same input contract it came
//! from: export -> import round-trips the base values.

use std::io;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use clarus_model::columns;

use crate::error::Result;
use crate::polars_utils::any_to_string;

pub fn export_csv<W: io::Write>(frame: &DataFrame, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(columns::REQUIRED)?;

    let mut extracted: Vec<Vec<String>> = Vec::with_capacity(columns::REQUIRED.len());
    for name in columns::REQUIRED {
        let series = frame.column(name)?;
        let mut values = Vec::with_capacity(frame.height());
        for idx in 0..frame.height() {
            values.push(any_to_string(series.get(idx).unwrap_or(AnyValue::Null)));
        }
        extracted.push(values);
    }

    for row_idx in 0..frame.height() {
        let record: Vec<&str> = extracted
            .iter()
            .map(|column| column[row_idx].as_str())
            .collect();
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_csv_file(frame: &DataFrame, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    export_csv(frame, io::BufWriter::new(file))?;
    debug!(path = %path.display(), rows = frame.height(), "exported transactions");
    Ok(path.to_path_buf())
}
