//! Seasonal condition trends.
//!
//! Restricted to the seasonal categories (Cold & Flu, Allergy, Vaccination),
//! grouped by calendar month across years. Output is ordered January through
//! December regardless of the order data arrives in.

use anyhow::Result;
use chrono::Datelike;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;

use clarus_model::{columns, is_seasonal_category, month_name};

use crate::frame_utils::{date_column, f64_column, string_column};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPoint {
    /// Calendar month, 1-12.
    pub month: u32,
    pub month_name: String,
    pub category: String,
    pub revenue: f64,
    pub transactions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonalTrends {
    pub points: Vec<SeasonalPoint>,
}

pub fn seasonal_trends(frame: &DataFrame) -> Result<SeasonalTrends> {
    let categories = string_column(frame, columns::MEDICATION_CATEGORY)?;
    let dates = date_column(frame)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    // Keyed (month, category): BTreeMap ordering gives Jan -> Dec for free.
    let mut groups: BTreeMap<(u32, String), (f64, usize)> = BTreeMap::new();
    for idx in 0..frame.height() {
        if !is_seasonal_category(&categories[idx]) {
            continue;
        }
        let entry = groups
            .entry((dates[idx].month(), categories[idx].clone()))
            .or_insert((0.0, 0));
        entry.0 += revenue[idx];
        entry.1 += 1;
    }

    Ok(SeasonalTrends {
        points: groups
            .into_iter()
            .map(|((month, category), (revenue, transactions))| SeasonalPoint {
                month,
                month_name: month_name(month).to_string(),
                category,
                revenue,
                transactions,
            })
            .collect(),
    })
}
