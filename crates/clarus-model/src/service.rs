//! Service-type taxonomy and classification predicates.
//!
//! Every boolean flag the normalizer derives (`Is_Prescription`,
//! `Is_Clinical_Service`, `Is_Chronic`) is defined here as a pure function of
//! the service type and medication category, so the flags cannot diverge from
//! their defining predicates anywhere else in the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Medication categories that mark a prescription as chronic-care.
pub const CHRONIC_CATEGORIES: [&str; 3] = ["Cardiovascular", "Diabetes", "Mental Health"];

/// Medication categories with a seasonal demand pattern.
pub const SEASONAL_CATEGORIES: [&str; 3] = ["Cold & Flu", "Allergy", "Vaccination"];

/// The service rendered by a transaction.
///
/// Matching against the known values is exact and case-sensitive, mirroring
/// the input contract; anything else is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Prescription,
    Otc,
    Vaccination,
    Consultation,
    MedicationReview,
    Other(String),
}

impl ServiceType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Prescription" => Self::Prescription,
            "OTC" => Self::Otc,
            "Vaccination" => Self::Vaccination,
            "Consultation" => Self::Consultation,
            "Medication Review" => Self::MedicationReview,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Prescription => "Prescription",
            Self::Otc => "OTC",
            Self::Vaccination => "Vaccination",
            Self::Consultation => "Consultation",
            Self::MedicationReview => "Medication Review",
            Self::Other(raw) => raw,
        }
    }

    /// Prescription-class services: everything a pharmacist dispenses or
    /// performs under professional supervision, as opposed to OTC retail.
    pub fn is_prescription_class(&self) -> bool {
        matches!(
            self,
            Self::Prescription | Self::Vaccination | Self::Consultation | Self::MedicationReview
        )
    }

    /// Clinical (non-dispensing) services.
    pub fn is_clinical(&self) -> bool {
        matches!(
            self,
            Self::Vaccination | Self::Consultation | Self::MedicationReview
        )
    }

    pub fn is_otc(&self) -> bool {
        matches!(self, Self::Otc)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_chronic_category(category: &str) -> bool {
    CHRONIC_CATEGORIES.contains(&category.trim())
}

pub fn is_seasonal_category(category: &str) -> bool {
    SEASONAL_CATEGORIES.contains(&category.trim())
}

/// Chronic-medication predicate: a chronic-care category dispensed as a
/// plain prescription. The service-type gate is deliberate: an OTC sale in a
/// chronic category is not chronic care.
pub fn is_chronic(service_type: &ServiceType, category: &str) -> bool {
    matches!(service_type, ServiceType::Prescription) && is_chronic_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_service_types() {
        assert_eq!(ServiceType::parse("Prescription"), ServiceType::Prescription);
        assert_eq!(ServiceType::parse("OTC"), ServiceType::Otc);
        assert_eq!(
            ServiceType::parse("Medication Review"),
            ServiceType::MedicationReview
        );
        assert_eq!(
            ServiceType::parse("Home Delivery"),
            ServiceType::Other("Home Delivery".to_string())
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            ServiceType::parse("otc"),
            ServiceType::Other("otc".to_string())
        );
    }

    #[test]
    fn prescription_class_covers_clinical_services() {
        assert!(ServiceType::Prescription.is_prescription_class());
        assert!(ServiceType::Vaccination.is_prescription_class());
        assert!(ServiceType::Consultation.is_prescription_class());
        assert!(ServiceType::MedicationReview.is_prescription_class());
        assert!(!ServiceType::Otc.is_prescription_class());
        assert!(!ServiceType::Other("Misc".into()).is_prescription_class());
    }

    #[test]
    fn clinical_excludes_dispensing() {
        assert!(!ServiceType::Prescription.is_clinical());
        assert!(ServiceType::Vaccination.is_clinical());
    }

    #[test]
    fn chronic_requires_prescription_service() {
        assert!(is_chronic(&ServiceType::Prescription, "Cardiovascular"));
        assert!(is_chronic(&ServiceType::Prescription, "Mental Health"));
        // OTC sale in a chronic category is not chronic care
        assert!(!is_chronic(&ServiceType::Otc, "Cardiovascular"));
        // Vaccination is prescription-class but not a plain prescription
        assert!(!is_chronic(&ServiceType::Vaccination, "Cardiovascular"));
        assert!(!is_chronic(&ServiceType::Prescription, "Cold & Flu"));
    }
}
