//! Data-availability predicate: which views have qualifying data.
//!
//! A view is available iff its restricting filter matches at least one row of
//! the (filtered) frame. Presentation layers query this once per filter
//! change and only offer the available views; absence of data is a
//! capability, never an error.

use anyhow::Result;
use polars::prelude::DataFrame;
use std::collections::BTreeSet;

use clarus_model::{ViewId, columns, is_seasonal_category};

use crate::frame_utils::{bool_column, string_column};

pub fn available_views(frame: &DataFrame) -> Result<BTreeSet<ViewId>> {
    let mut views = BTreeSet::new();
    if frame.height() == 0 {
        return Ok(views);
    }

    views.insert(ViewId::DailySales);
    views.insert(ViewId::PrescriptionOtc);
    views.insert(ViewId::TopCategories);

    let chronic_flags = bool_column(frame, columns::IS_CHRONIC)?;
    if chronic_flags.iter().any(|flag| *flag) {
        views.insert(ViewId::Compliance);
    }

    let clinical_flags = bool_column(frame, columns::IS_CLINICAL_SERVICE)?;
    if clinical_flags.iter().any(|flag| *flag) {
        views.insert(ViewId::ClinicalServices);
    }

    let categories = string_column(frame, columns::MEDICATION_CATEGORY)?;
    if categories
        .iter()
        .any(|category| is_seasonal_category(category))
    {
        views.insert(ViewId::Seasonal);
    }

    let insurance = string_column(frame, columns::INSURANCE_USED)?;
    if insurance
        .iter()
        .any(|value| value == "Yes" || value == "No")
    {
        views.insert(ViewId::Insurance);
    }

    Ok(views)
}
