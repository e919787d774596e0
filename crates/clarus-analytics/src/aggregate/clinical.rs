//! Clinical services uptake.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::BTreeMap;

use clarus_model::columns;

use crate::frame_utils::{bool_column, f64_column, string_column};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalRow {
    pub service_type: String,
    pub revenue: f64,
    pub transactions: usize,
}

/// Revenue and volume per clinical (non-dispensing) service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClinicalServices {
    pub rows: Vec<ClinicalRow>,
}

pub fn clinical_services(frame: &DataFrame) -> Result<ClinicalServices> {
    let clinical_flags = bool_column(frame, columns::IS_CLINICAL_SERVICE)?;
    let service_types = string_column(frame, columns::SERVICE_TYPE)?;
    let revenue = f64_column(frame, columns::TOTAL_PRICE)?;

    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for idx in 0..frame.height() {
        if !clinical_flags[idx] {
            continue;
        }
        let entry = groups.entry(service_types[idx].clone()).or_insert((0.0, 0));
        entry.0 += revenue[idx];
        entry.1 += 1;
    }

    Ok(ClinicalServices {
        rows: groups
            .into_iter()
            .map(|(service_type, (revenue, transactions))| ClinicalRow {
                service_type,
                revenue,
                transactions,
            })
            .collect(),
    })
}
