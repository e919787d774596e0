//! Whole-set scalar summaries: pharmacy KPIs and the dataset overview.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeSet;

use clarus_model::columns;

use super::{mean, pct};
use crate::frame_utils::{bool_column, date_column, f64_column, string_column};

/// Pharmacy-specific key performance indicators over the filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PharmacyKpis {
    /// Mean transaction value where the service type is exactly
    /// `Prescription` (clinical services are deliberately excluded here,
    /// unlike the prescription-class revenue mix).
    pub avg_prescription_value: f64,
    /// Share of transactions that are clinical services, in percent.
    pub clinical_service_rate_pct: f64,
    /// Share of transactions paid through insurance, in percent.
    pub insurance_utilization_pct: f64,
    /// Distinct patients with at least one chronic-medication fill.
    pub chronic_patient_count: usize,
}

pub fn pharmacy_kpis(frame: &DataFrame) -> Result<PharmacyKpis> {
    let service_types = string_column(frame, columns::SERVICE_TYPE)?;
    let clinical_flags = bool_column(frame, columns::IS_CLINICAL_SERVICE)?;
    let chronic_flags = bool_column(frame, columns::IS_CHRONIC)?;
    let insurance = string_column(frame, columns::INSURANCE_USED)?;
    let patients = string_column(frame, columns::PATIENT_ID)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    let mut prescription_revenue = 0.0;
    let mut prescription_count = 0usize;
    let mut clinical_count = 0usize;
    let mut insured_count = 0usize;
    let mut chronic_patients: BTreeSet<&str> = BTreeSet::new();
    for idx in 0..frame.height() {
        if service_types[idx] == "Prescription" {
            prescription_revenue += revenue[idx];
            prescription_count += 1;
        }
        if clinical_flags[idx] {
            clinical_count += 1;
        }
        if insurance[idx] == "Yes" {
            insured_count += 1;
        }
        if chronic_flags[idx] {
            chronic_patients.insert(&patients[idx]);
        }
    }

    let total = frame.height();
    Ok(PharmacyKpis {
        avg_prescription_value: mean(prescription_revenue, prescription_count),
        clinical_service_rate_pct: pct(clinical_count as f64, total as f64),
        insurance_utilization_pct: pct(insured_count as f64, total as f64),
        chronic_patient_count: chronic_patients.len(),
    })
}

/// Headline figures for the currently filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetOverview {
    /// Distinct transaction identifiers.
    pub transactions: usize,
    pub total_revenue: f64,
    /// Mean revenue per row, 0 for an empty set.
    pub avg_transaction_value: f64,
    pub unique_patients: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn dataset_overview(frame: &DataFrame) -> Result<DatasetOverview> {
    let transaction_ids = string_column(frame, columns::TRANSACTION_ID)?;
    let patients = string_column(frame, columns::PATIENT_ID)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;
    let dates = date_column(frame)?;

    let total_revenue: f64 = revenue.iter().sum();
    let distinct_transactions: BTreeSet<&str> =
        transaction_ids.iter().map(String::as_str).collect();
    let distinct_patients: BTreeSet<&str> = patients.iter().map(String::as_str).collect();

    Ok(DatasetOverview {
        transactions: distinct_transactions.len(),
        total_revenue,
        avg_transaction_value: mean(total_revenue, frame.height()),
        unique_patients: distinct_patients.len(),
        first_date: dates.iter().min().copied(),
        last_date: dates.iter().max().copied(),
    })
}
