use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;

/// A raw delimited table: one header row plus string cells.
///
/// Cells are trimmed and BOM-stripped; fully blank rows are skipped; short
/// rows are padded to the header width. Everything past this point works with
/// clean rectangular data.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path)?;
    read_csv_table_from_reader(io::BufReader::new(file))
}

pub fn read_csv_table_from_reader<R: io::Read>(reader: R) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_cell).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        let mut padded = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            padded.push(row.get(idx).cloned().unwrap_or_default());
        }
        rows.push(padded);
    }

    Ok(CsvTable { headers, rows })
}

/// Read only the header row, for quick schema checks without a full parse.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(io::BufReader::new(file));
    Ok(reader.headers()?.iter().map(normalize_cell).collect())
}
