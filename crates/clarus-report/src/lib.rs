//! Presentation of analytics results.
//!
//! Renders each summary as a styled terminal table, formats money and counts
//! with thousands separators, and writes the versioned JSON report payload
//! for machine consumers.

mod json;
mod money;
mod tables;

pub use json::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, report_to_json_string, write_analytics_report_json,
};
pub use money::{format_count, format_money, format_pct};
pub use tables::{
    categories_table, clinical_table, compliance_records_table, compliance_summary_table,
    daily_table, insurance_table, kpi_table, mix_table, overview_table, seasonal_table,
};
