//! Daily sales trend.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;

use clarus_model::columns;

use crate::frame_utils::{date_column, f64_column};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// One point per calendar date present in the data, sorted by date. The
/// point revenues sum to the total revenue of the input frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySales {
    pub points: Vec<DailyPoint>,
    pub total_revenue: f64,
}

pub fn daily_sales(frame: &DataFrame) -> Result<DailySales> {
    let dates = date_column(frame)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut total_revenue = 0.0;
    for idx in 0..frame.height() {
        *by_date.entry(dates[idx]).or_insert(0.0) += revenue[idx];
        total_revenue += revenue[idx];
    }

    Ok(DailySales {
        points: by_date
            .into_iter()
            .map(|(date, revenue)| DailyPoint { date, revenue })
            .collect(),
        total_revenue,
    })
}
