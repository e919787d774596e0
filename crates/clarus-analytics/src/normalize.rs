//! Record normalizer: derived calendar and classification columns.
//!
//! Pure augmentation of the base frame. The classification flags delegate to
//! the `clarus-model` taxonomy, so `Is_Chronic` and friends can never drift
//! from their defining predicates no matter how the frame is later filtered
//! or re-sliced.

use anyhow::Result;
use polars::prelude::{DataFrame, IntoLazy, NamedFrom, Series, col};
use tracing::debug;

use clarus_model::{MonthKey, QuarterKey, ServiceType, columns, is_chronic};

use crate::frame_utils::{date_column, has_column, string_column};

/// Append the derived columns to a base transaction frame.
///
/// Adds `Month`, `Year`, `Quarter`, `Day_of_Week`, `Month_Name`, `Revenue`
/// (alias of `TotalPrice`), `Is_Prescription`, `Is_Clinical_Service`, and
/// `Is_Chronic`. The input frame is left untouched.
pub fn normalize_transactions(frame: &DataFrame) -> Result<DataFrame> {
    let mut normalized = frame
        .clone()
        .lazy()
        .with_columns([col(columns::TOTAL_PRICE).alias(columns::REVENUE)])
        .collect()?;

    let dates = date_column(&normalized)?;
    let service_types: Vec<ServiceType> = string_column(&normalized, columns::SERVICE_TYPE)?
        .iter()
        .map(|raw| ServiceType::parse(raw))
        .collect();
    let categories = string_column(&normalized, columns::MEDICATION_CATEGORY)?;

    let height = normalized.height();
    let mut months = Vec::with_capacity(height);
    let mut years = Vec::with_capacity(height);
    let mut quarters = Vec::with_capacity(height);
    let mut weekdays = Vec::with_capacity(height);
    let mut month_names = Vec::with_capacity(height);
    let mut prescription_flags = Vec::with_capacity(height);
    let mut clinical_flags = Vec::with_capacity(height);
    let mut chronic_flags = Vec::with_capacity(height);

    for idx in 0..height {
        let date = dates[idx];
        months.push(MonthKey::from_date(date).to_string());
        years.push(i64::from(chrono::Datelike::year(&date)));
        quarters.push(QuarterKey::from_date(date).to_string());
        weekdays.push(date.format("%A").to_string());
        month_names.push(date.format("%B %Y").to_string());
        prescription_flags.push(service_types[idx].is_prescription_class());
        clinical_flags.push(service_types[idx].is_clinical());
        chronic_flags.push(is_chronic(&service_types[idx], &categories[idx]));
    }

    normalized.with_column(Series::new(columns::MONTH.into(), months))?;
    normalized.with_column(Series::new(columns::YEAR.into(), years))?;
    normalized.with_column(Series::new(columns::QUARTER.into(), quarters))?;
    normalized.with_column(Series::new(columns::DAY_OF_WEEK.into(), weekdays))?;
    normalized.with_column(Series::new(columns::MONTH_NAME.into(), month_names))?;
    normalized.with_column(Series::new(
        columns::IS_PRESCRIPTION.into(),
        prescription_flags,
    ))?;
    normalized.with_column(Series::new(
        columns::IS_CLINICAL_SERVICE.into(),
        clinical_flags,
    ))?;
    normalized.with_column(Series::new(columns::IS_CHRONIC.into(), chronic_flags))?;

    debug!(rows = normalized.height(), "transactions normalized");
    Ok(normalized)
}

/// Whether a frame already carries the derived columns.
pub fn is_normalized(frame: &DataFrame) -> bool {
    columns::DERIVED.iter().all(|name| has_column(frame, name))
}
