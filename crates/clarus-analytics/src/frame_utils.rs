//! Typed column access over the transaction frame.
//!
//! Aggregators extract whole columns once and loop over plain vectors; these
//! helpers centralize the AnyValue handling and date parsing so every reader
//! treats nulls and formats identically. Filters return new frames; the base
//! table is never mutated.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use clarus_ingest::{any_to_bool, any_to_f64, any_to_i64, any_to_string, parse_transaction_date};
use clarus_model::columns;

pub(crate) fn has_column(frame: &DataFrame, name: &str) -> bool {
    frame.column(name).is_ok()
}

pub(crate) fn string_column(frame: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = frame
        .column(name)
        .with_context(|| format!("column {name} missing from transaction frame"))?;
    let mut values = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let value = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
        values.push(value.trim().to_string());
    }
    Ok(values)
}

pub(crate) fn f64_column(frame: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = frame
        .column(name)
        .with_context(|| format!("column {name} missing from transaction frame"))?;
    let mut values = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value).unwrap_or(0.0));
    }
    Ok(values)
}

pub(crate) fn i64_column(frame: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = frame
        .column(name)
        .with_context(|| format!("column {name} missing from transaction frame"))?;
    let mut values = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_i64(value).unwrap_or(0));
    }
    Ok(values)
}

pub(crate) fn bool_column(frame: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let series = frame.column(name).with_context(|| {
        format!("column {name} missing from transaction frame (frame not normalized?)")
    })?;
    let mut values = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        values.push(any_to_bool(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Extract the `Date` column as parsed calendar dates.
pub(crate) fn date_column(frame: &DataFrame) -> Result<Vec<NaiveDate>> {
    let raw = string_column(frame, columns::DATE)?;
    let mut dates = Vec::with_capacity(raw.len());
    for value in raw {
        match parse_transaction_date(&value) {
            Some(date) => dates.push(date),
            None => bail!("unparseable value `{value}` in {} column", columns::DATE),
        }
    }
    Ok(dates)
}

/// Build a new frame keeping only the rows where `keep` is true.
pub(crate) fn filter_rows(frame: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(frame.filter(&mask)?)
}
