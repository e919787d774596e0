use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{MonthKey, QuarterKey};
use crate::service::{ServiceType, is_chronic};

/// One fully parsed point-of-sale transaction.
///
/// The classification flags are methods, not fields: they are always derived
/// from the service type and medication category, so a transaction can never
/// carry a flag inconsistent with its own data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub patient_id: String,
    pub service_type: ServiceType,
    pub medication_category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    /// Raw categorical value as read from the input, normally `Yes` or `No`.
    pub insurance_used: String,
}

impl Transaction {
    pub fn is_prescription_class(&self) -> bool {
        self.service_type.is_prescription_class()
    }

    pub fn is_clinical_service(&self) -> bool {
        self.service_type.is_clinical()
    }

    pub fn is_chronic(&self) -> bool {
        is_chronic(&self.service_type, &self.medication_category)
    }

    pub fn uses_insurance(&self) -> bool {
        self.insurance_used.trim() == "Yes"
    }

    /// Revenue attributed to this transaction. The stored total is
    /// authoritative and is not reconciled against quantity times unit price.
    pub fn revenue(&self) -> f64 {
        self.total_price
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub fn quarter_key(&self) -> QuarterKey {
        QuarterKey::from_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            transaction_id: "TX0001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            patient_id: "P001".to_string(),
            service_type: ServiceType::Prescription,
            medication_category: "Diabetes".to_string(),
            quantity: 30,
            unit_price: 1.5,
            total_price: 45.0,
            insurance_used: "Yes".to_string(),
        }
    }

    #[test]
    fn flags_follow_taxonomy() {
        let tx = sample();
        assert!(tx.is_prescription_class());
        assert!(!tx.is_clinical_service());
        assert!(tx.is_chronic());
        assert!(tx.uses_insurance());
    }

    #[test]
    fn otc_in_chronic_category_is_not_chronic() {
        let tx = Transaction {
            service_type: ServiceType::Otc,
            ..sample()
        };
        assert!(!tx.is_chronic());
        assert!(!tx.is_prescription_class());
    }

    #[test]
    fn period_keys_come_from_the_date() {
        let tx = sample();
        assert_eq!(tx.month_key().to_string(), "2024-01");
        assert_eq!(tx.quarter_key().to_string(), "2024-Q1");
    }
}
