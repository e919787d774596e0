//! Insurance vs cash-pay breakdown.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;

use clarus_model::columns;

use crate::frame_utils::{f64_column, string_column};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsuranceRow {
    /// The raw categorical value, normally `Yes` or `No`.
    pub insurance_used: String,
    pub revenue: f64,
    pub transactions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInsuranceRow {
    pub service_type: String,
    pub insurance_used: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsuranceBreakdown {
    pub rows: Vec<InsuranceRow>,
    /// Revenue split by (service type, insurance), for the usage-by-service
    /// view.
    pub by_service_type: Vec<ServiceInsuranceRow>,
}

pub fn insurance_breakdown(frame: &DataFrame) -> Result<InsuranceBreakdown> {
    let insurance = string_column(frame, columns::INSURANCE_USED)?;
    let service_types = string_column(frame, columns::SERVICE_TYPE)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    let mut by_service: BTreeMap<(String, String), f64> = BTreeMap::new();
    for idx in 0..frame.height() {
        let entry = totals.entry(insurance[idx].clone()).or_insert((0.0, 0));
        entry.0 += revenue[idx];
        entry.1 += 1;
        *by_service
            .entry((service_types[idx].clone(), insurance[idx].clone()))
            .or_insert(0.0) += revenue[idx];
    }

    Ok(InsuranceBreakdown {
        rows: totals
            .into_iter()
            .map(|(insurance_used, (revenue, transactions))| InsuranceRow {
                insurance_used,
                revenue,
                transactions,
            })
            .collect(),
        by_service_type: by_service
            .into_iter()
            .map(|((service_type, insurance_used), revenue)| ServiceInsuranceRow {
                service_type,
                insurance_used,
                revenue,
            })
            .collect(),
    })
}
