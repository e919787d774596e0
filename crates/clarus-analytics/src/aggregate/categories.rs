//! Medication-category revenue and volume ranking.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use clarus_model::columns;

use super::mean;
use crate::frame_utils::{f64_column, i64_column, string_column};

pub const DEFAULT_TOP_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub revenue: f64,
    pub avg_revenue: f64,
    pub quantity: i64,
    pub transactions: usize,
    pub unique_patients: usize,
}

/// Per-category performance, ranked by revenue descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryPerformance {
    pub rows: Vec<CategoryRow>,
}

impl CategoryPerformance {
    /// The top `n` categories by revenue.
    pub fn top(&self, n: usize) -> &[CategoryRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// All categories re-ranked by dispensed quantity.
    pub fn by_volume(&self) -> Vec<&CategoryRow> {
        let mut ranked: Vec<&CategoryRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| a.category.cmp(&b.category))
        });
        ranked
    }
}

#[derive(Default)]
struct CategoryAccumulator {
    revenue: f64,
    quantity: i64,
    transactions: usize,
    patients: BTreeSet<String>,
}

pub fn category_performance(frame: &DataFrame) -> Result<CategoryPerformance> {
    let categories = string_column(frame, columns::MEDICATION_CATEGORY)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;
    let quantity = i64_column(frame, columns::QUANTITY)?;
    let patients = string_column(frame, columns::PATIENT_ID)?;

    let mut groups: BTreeMap<String, CategoryAccumulator> = BTreeMap::new();
    for idx in 0..frame.height() {
        let group = groups.entry(categories[idx].clone()).or_default();
        group.revenue += revenue[idx];
        group.quantity += quantity[idx];
        group.transactions += 1;
        group.patients.insert(patients[idx].clone());
    }

    let mut rows: Vec<CategoryRow> = groups
        .into_iter()
        .map(|(category, group)| CategoryRow {
            category,
            revenue: group.revenue,
            avg_revenue: mean(group.revenue, group.transactions),
            quantity: group.quantity,
            transactions: group.transactions,
            unique_patients: group.patients.len(),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });

    Ok(CategoryPerformance { rows })
}
