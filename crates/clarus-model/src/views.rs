//! Identifiers for the analytical views the engine can produce.
//!
//! Presentation layers query availability (see `clarus-analytics`) and render
//! only the views with qualifying data; the identifiers decouple "what can be
//! shown" from "how it is shown".

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    DailySales,
    PrescriptionOtc,
    TopCategories,
    Compliance,
    Seasonal,
    Insurance,
    ClinicalServices,
}

impl ViewId {
    pub const ALL: [ViewId; 7] = [
        ViewId::DailySales,
        ViewId::PrescriptionOtc,
        ViewId::TopCategories,
        ViewId::Compliance,
        ViewId::Seasonal,
        ViewId::Insurance,
        ViewId::ClinicalServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailySales => "daily-sales",
            Self::PrescriptionOtc => "prescription-otc",
            Self::TopCategories => "top-categories",
            Self::Compliance => "compliance",
            Self::Seasonal => "seasonal",
            Self::Insurance => "insurance",
            Self::ClinicalServices => "clinical-services",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DailySales => "Daily sales trend",
            Self::PrescriptionOtc => "Prescription vs OTC revenue mix",
            Self::TopCategories => "Top medication categories",
            Self::Compliance => "Patient refill compliance",
            Self::Seasonal => "Seasonal condition trends",
            Self::Insurance => "Insurance vs cash pay",
            Self::ClinicalServices => "Clinical services uptake",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_ids_serialize_as_kebab_case() {
        let json = serde_json::to_string(&ViewId::ClinicalServices).unwrap();
        assert_eq!(json, "\"clinical-services\"");
        assert_eq!(ViewId::DailySales.to_string(), "daily-sales");
    }
}
