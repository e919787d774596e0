//! Typed transaction frame construction.
//!
//! Validates the schema and every date/numeric field while parsing, so the
//! resulting [`DataFrame`] always holds nine well-typed base columns:
//! string identifiers and categoricals, ISO-normalized dates, `Int64`
//! quantities, and `Float64` prices.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use clarus_model::{ServiceType, Transaction, columns};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Accepted input date formats, tried in order. Dates are stored normalized
/// to the first (ISO) form.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a raw date cell, returning None if no accepted format matches.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Read, validate, and type a transaction file in one step.
pub fn load_transactions(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    let frame = build_transaction_frame(&table)?;
    debug!(
        path = %path.display(),
        rows = frame.height(),
        "transactions loaded"
    );
    Ok(frame)
}

/// Build the typed transaction frame from a raw table.
///
/// Fails with [`IngestError::MissingColumns`] naming every absent required
/// column, or with a parse error carrying the offending value and its line
/// number (line 1 is the header row).
pub fn build_transaction_frame(table: &CsvTable) -> Result<DataFrame> {
    let index = validate_schema(&table.headers)?;
    let mut transactions = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        // Data starts on line 2, after the header.
        transactions.push(parse_row(&index, row, row_idx + 2)?);
    }
    frame_from_transactions(&transactions)
}

/// Build the typed frame directly from parsed transactions.
pub fn frame_from_transactions(transactions: &[Transaction]) -> Result<DataFrame> {
    let mut transaction_ids = Vec::with_capacity(transactions.len());
    let mut dates = Vec::with_capacity(transactions.len());
    let mut patient_ids = Vec::with_capacity(transactions.len());
    let mut service_types = Vec::with_capacity(transactions.len());
    let mut categories = Vec::with_capacity(transactions.len());
    let mut quantities = Vec::with_capacity(transactions.len());
    let mut unit_prices = Vec::with_capacity(transactions.len());
    let mut insurance = Vec::with_capacity(transactions.len());
    let mut total_prices = Vec::with_capacity(transactions.len());

    for tx in transactions {
        transaction_ids.push(tx.transaction_id.clone());
        dates.push(tx.date.format("%Y-%m-%d").to_string());
        patient_ids.push(tx.patient_id.clone());
        service_types.push(tx.service_type.as_str().to_string());
        categories.push(tx.medication_category.clone());
        quantities.push(tx.quantity);
        unit_prices.push(tx.unit_price);
        insurance.push(tx.insurance_used.clone());
        total_prices.push(tx.total_price);
    }

    let frame_columns: Vec<Column> = vec![
        Series::new(columns::TRANSACTION_ID.into(), transaction_ids).into(),
        Series::new(columns::DATE.into(), dates).into(),
        Series::new(columns::PATIENT_ID.into(), patient_ids).into(),
        Series::new(columns::SERVICE_TYPE.into(), service_types).into(),
        Series::new(columns::MEDICATION_CATEGORY.into(), categories).into(),
        Series::new(columns::QUANTITY.into(), quantities).into(),
        Series::new(columns::UNIT_PRICE.into(), unit_prices).into(),
        Series::new(columns::INSURANCE_USED.into(), insurance).into(),
        Series::new(columns::TOTAL_PRICE.into(), total_prices).into(),
    ];
    Ok(DataFrame::new(frame_columns)?)
}

/// Check that every required column is present, returning a name -> position
/// map. Matching is exact: the input contract fixes the header spelling.
fn validate_schema(headers: &[String]) -> Result<BTreeMap<&'static str, usize>> {
    let mut index = BTreeMap::new();
    let mut missing = Vec::new();
    for name in columns::REQUIRED {
        match headers.iter().position(|header| header == name) {
            Some(position) => {
                index.insert(name, position);
            }
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { missing });
    }
    Ok(index)
}

fn parse_row(
    index: &BTreeMap<&'static str, usize>,
    row: &[String],
    line: usize,
) -> Result<Transaction> {
    let cell = |name: &str| -> &str {
        index
            .get(name)
            .and_then(|position| row.get(*position))
            .map(String::as_str)
            .unwrap_or("")
    };

    let raw_date = cell(columns::DATE);
    let date = parse_transaction_date(raw_date).ok_or_else(|| IngestError::InvalidDate {
        column: columns::DATE.to_string(),
        value: raw_date.to_string(),
        line,
    })?;

    let quantity = parse_integer(cell(columns::QUANTITY), columns::QUANTITY, line)?;
    let unit_price = parse_number(cell(columns::UNIT_PRICE), columns::UNIT_PRICE, line)?;
    let total_price = parse_number(cell(columns::TOTAL_PRICE), columns::TOTAL_PRICE, line)?;

    if quantity <= 0 {
        warn!(line, quantity, "non-positive quantity in transaction data");
    }
    // TotalPrice is authoritative revenue; a mismatch against the unit math
    // is reported for visibility but never corrected.
    if (quantity as f64 * unit_price - total_price).abs() > 0.01 {
        debug!(
            line,
            quantity,
            unit_price,
            total_price,
            "TotalPrice differs from Quantity * UnitPrice"
        );
    }

    Ok(Transaction {
        transaction_id: cell(columns::TRANSACTION_ID).to_string(),
        date,
        patient_id: cell(columns::PATIENT_ID).to_string(),
        service_type: ServiceType::parse(cell(columns::SERVICE_TYPE)),
        medication_category: cell(columns::MEDICATION_CATEGORY).to_string(),
        quantity,
        unit_price,
        insurance_used: cell(columns::INSURANCE_USED).to_string(),
        total_price,
    })
}

fn parse_integer(raw: &str, column: &str, line: usize) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| IngestError::InvalidNumber {
            column: column.to_string(),
            value: raw.to_string(),
            line,
        })
}

fn parse_number(raw: &str, column: &str, line: usize) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidNumber {
            column: column.to_string(),
            value: raw.to_string(),
            line,
        })
}
