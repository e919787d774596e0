//! Refill-compliance estimation for chronic medications.
//!
//! Per (patient, category) over chronic prescription fills, the estimator
//! treats the average dispensed quantity as an implicit days-of-supply per
//! fill and compares the observed refill count against the count that span
//! would predict. This is a deliberate heuristic, not a pharmacological
//! calculation; its arithmetic is kept exactly as the dashboard has always
//! computed it because the output is display-only.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use clarus_model::columns;

use crate::frame_utils::{bool_column, date_column, i64_column, string_column};

/// Compliance rate at or above which a group counts as high-adherence.
pub const HIGH_ADHERENCE_THRESHOLD: f64 = 80.0;

/// Refill history and estimated adherence for one (patient, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefillRecord {
    pub patient_id: String,
    pub category: String,
    pub refill_count: usize,
    pub first_fill: NaiveDate,
    pub last_fill: NaiveDate,
    pub avg_quantity: f64,
    /// Whole days between first and last fill; 0 for a single fill.
    pub days_between: i64,
    /// max(1, days_between / avg_quantity); a zero average quantity is
    /// guarded and also yields 1.
    pub expected_refills: f64,
    /// min(100, refill_count / expected_refills * 100). Always in [0, 100].
    pub compliance_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplianceSummary {
    pub avg_compliance: f64,
    pub high_adherence_count: usize,
    pub total_groups: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCompliance {
    pub category: String,
    pub avg_compliance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplianceAnalysis {
    pub records: Vec<RefillRecord>,
    pub summary: ComplianceSummary,
    /// Mean compliance per chronic category.
    pub by_category: Vec<CategoryCompliance>,
}

struct FillGroup {
    count: usize,
    first: NaiveDate,
    last: NaiveDate,
    quantity_sum: i64,
}

/// Estimate refill adherence over the chronic rows of a normalized frame.
///
/// A patient with exactly one qualifying fill gets expected refills = 1 and
/// therefore compliance = 100: a single fill cannot evidence non-adherence.
/// An empty or chronic-free frame yields an empty, zero-valued analysis.
pub fn estimate_compliance(frame: &DataFrame) -> Result<ComplianceAnalysis> {
    let chronic_flags = bool_column(frame, columns::IS_CHRONIC)?;
    let patients = string_column(frame, columns::PATIENT_ID)?;
    let categories = string_column(frame, columns::MEDICATION_CATEGORY)?;
    let dates = date_column(frame)?;
    let quantities = i64_column(frame, columns::QUANTITY)?;

    let mut groups: BTreeMap<(String, String), FillGroup> = BTreeMap::new();
    for idx in 0..frame.height() {
        if !chronic_flags[idx] {
            continue;
        }
        let key = (patients[idx].clone(), categories[idx].clone());
        match groups.get_mut(&key) {
            Some(group) => {
                group.count += 1;
                group.first = group.first.min(dates[idx]);
                group.last = group.last.max(dates[idx]);
                group.quantity_sum += quantities[idx];
            }
            None => {
                groups.insert(
                    key,
                    FillGroup {
                        count: 1,
                        first: dates[idx],
                        last: dates[idx],
                        quantity_sum: quantities[idx],
                    },
                );
            }
        }
    }

    let mut records = Vec::with_capacity(groups.len());
    for ((patient_id, category), group) in groups {
        let avg_quantity = group.quantity_sum as f64 / group.count as f64;
        let days_between = (group.last - group.first).num_days();
        let expected_refills = if avg_quantity > 0.0 {
            (days_between as f64 / avg_quantity).max(1.0)
        } else {
            1.0
        };
        let compliance_rate = (group.count as f64 / expected_refills * 100.0).min(100.0);
        records.push(RefillRecord {
            patient_id,
            category,
            refill_count: group.count,
            first_fill: group.first,
            last_fill: group.last,
            avg_quantity,
            days_between,
            expected_refills,
            compliance_rate,
        });
    }

    let total_groups = records.len();
    let rate_sum: f64 = records.iter().map(|record| record.compliance_rate).sum();
    let high_adherence_count = records
        .iter()
        .filter(|record| record.compliance_rate >= HIGH_ADHERENCE_THRESHOLD)
        .count();
    let avg_compliance = if total_groups > 0 {
        rate_sum / total_groups as f64
    } else {
        0.0
    };

    let mut category_rates: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in &records {
        let entry = category_rates
            .entry(record.category.clone())
            .or_insert((0.0, 0));
        entry.0 += record.compliance_rate;
        entry.1 += 1;
    }
    let by_category = category_rates
        .into_iter()
        .map(|(category, (sum, count))| CategoryCompliance {
            category,
            avg_compliance: sum / count as f64,
        })
        .collect();

    debug!(
        groups = total_groups,
        high_adherence = high_adherence_count,
        "compliance estimated"
    );

    Ok(ComplianceAnalysis {
        records,
        summary: ComplianceSummary {
            avg_compliance,
            high_adherence_count,
            total_groups,
        },
        by_category,
    })
}
