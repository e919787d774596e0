//! Column names for the transaction table.
//!
//! The base columns form the input contract: a header row naming all nine,
//! in any order, with extra columns ignored. Derived columns are appended by
//! the normalizer and are always recomputable from the base row; they are
//! excluded from exports.

pub const TRANSACTION_ID: &str = "TransactionID";
pub const DATE: &str = "Date";
pub const PATIENT_ID: &str = "PatientID";
pub const SERVICE_TYPE: &str = "ServiceType";
pub const MEDICATION_CATEGORY: &str = "MedicationCategory";
pub const QUANTITY: &str = "Quantity";
pub const UNIT_PRICE: &str = "UnitPrice";
pub const INSURANCE_USED: &str = "InsuranceUsed";
pub const TOTAL_PRICE: &str = "TotalPrice";

/// Required columns in canonical order. Exports write exactly this layout.
pub const REQUIRED: [&str; 9] = [
    TRANSACTION_ID,
    DATE,
    PATIENT_ID,
    SERVICE_TYPE,
    MEDICATION_CATEGORY,
    QUANTITY,
    UNIT_PRICE,
    INSURANCE_USED,
    TOTAL_PRICE,
];

pub const MONTH: &str = "Month";
pub const YEAR: &str = "Year";
pub const QUARTER: &str = "Quarter";
pub const DAY_OF_WEEK: &str = "Day_of_Week";
pub const MONTH_NAME: &str = "Month_Name";
pub const REVENUE: &str = "Revenue";
pub const IS_PRESCRIPTION: &str = "Is_Prescription";
pub const IS_CLINICAL_SERVICE: &str = "Is_Clinical_Service";
pub const IS_CHRONIC: &str = "Is_Chronic";

/// Columns the normalizer appends. Never exported.
pub const DERIVED: [&str; 9] = [
    MONTH,
    YEAR,
    QUARTER,
    DAY_OF_WEEK,
    MONTH_NAME,
    REVENUE,
    IS_PRESCRIPTION,
    IS_CLINICAL_SERVICE,
    IS_CHRONIC,
];
