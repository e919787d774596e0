//! Pure date filters over the transaction frame.
//!
//! The month filter selects one calendar month; the date-range filter
//! refines within it. Both return new frames and compose in either order.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;

use clarus_model::MonthKey;

use crate::frame_utils::{date_column, filter_rows};

/// Distinct months present in the data, chronologically sorted.
pub fn months_present(frame: &DataFrame) -> Result<Vec<MonthKey>> {
    let mut months: Vec<MonthKey> = date_column(frame)?
        .into_iter()
        .map(MonthKey::from_date)
        .collect();
    months.sort();
    months.dedup();
    Ok(months)
}

/// The most recent month present in the data, the default filter selection.
pub fn latest_month(frame: &DataFrame) -> Result<Option<MonthKey>> {
    Ok(months_present(frame)?.pop())
}

/// Keep only the rows dated within the given month.
pub fn filter_by_month(frame: &DataFrame, month: MonthKey) -> Result<DataFrame> {
    let keep: Vec<bool> = date_column(frame)?
        .into_iter()
        .map(|date| month.contains(date))
        .collect();
    filter_rows(frame, &keep)
}

/// Keep only the rows dated within `[from, to]`, inclusive on both ends.
pub fn filter_by_date_range(
    frame: &DataFrame,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<DataFrame> {
    let keep: Vec<bool> = date_column(frame)?
        .into_iter()
        .map(|date| date >= from && date <= to)
        .collect();
    filter_rows(frame, &keep)
}

/// Earliest and latest transaction dates, or None for an empty frame.
pub fn date_span(frame: &DataFrame) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let dates = date_column(frame)?;
    let first = dates.iter().min().copied();
    let last = dates.iter().max().copied();
    Ok(first.zip(last))
}
