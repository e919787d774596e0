//! Prescription vs OTC revenue mix.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;

use clarus_model::columns;

use super::pct;
use crate::frame_utils::{bool_column, f64_column, string_column};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrescriptionOtcMix {
    /// Revenue from prescription-class services (dispensing and clinical).
    pub prescription_revenue: f64,
    /// Revenue from over-the-counter retail.
    pub otc_revenue: f64,
    /// Share of the combined prescription + OTC revenue, in percent. The two
    /// shares sum to 100 whenever the combined revenue is positive.
    pub prescription_pct: f64,
    pub otc_pct: f64,
    /// Revenue per raw service type, ranked descending.
    pub service_type_revenue: Vec<ServiceTypeRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceTypeRevenue {
    pub service_type: String,
    pub revenue: f64,
}

pub fn prescription_otc_mix(frame: &DataFrame) -> Result<PrescriptionOtcMix> {
    let prescription_flags = bool_column(frame, columns::IS_PRESCRIPTION)?;
    let service_types = string_column(frame, columns::SERVICE_TYPE)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    let mut prescription_revenue = 0.0;
    let mut otc_revenue = 0.0;
    let mut by_service: BTreeMap<String, f64> = BTreeMap::new();
    for idx in 0..frame.height() {
        if prescription_flags[idx] {
            prescription_revenue += revenue[idx];
        }
        if service_types[idx] == "OTC" {
            otc_revenue += revenue[idx];
        }
        *by_service.entry(service_types[idx].clone()).or_insert(0.0) += revenue[idx];
    }

    let combined = prescription_revenue + otc_revenue;
    let mut service_type_revenue: Vec<ServiceTypeRevenue> = by_service
        .into_iter()
        .map(|(service_type, revenue)| ServiceTypeRevenue {
            service_type,
            revenue,
        })
        .collect();
    service_type_revenue.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.service_type.cmp(&b.service_type))
    });

    Ok(PrescriptionOtcMix {
        prescription_revenue,
        otc_revenue,
        prescription_pct: pct(prescription_revenue, combined),
        otc_pct: pct(otc_revenue, combined),
        service_type_revenue,
    })
}
