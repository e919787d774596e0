//! Analytics derivation layer for pharmacy transaction data.
//!
//! The pipeline is: normalize (append derived calendar and classification
//! columns) -> filter (month, then date range) -> aggregate. Every aggregator
//! is a stateless pure function over the normalized frame; a zero-row frame
//! yields a zero-valued summary, never an error, and every ratio is guarded
//! against a zero denominator. The availability predicate tells presentation
//! layers which views have qualifying data at all.

pub mod aggregate;
mod availability;
mod compliance;
mod filters;
mod frame_utils;
mod normalize;
mod report;

pub use availability::available_views;
pub use compliance::{
    CategoryCompliance, ComplianceAnalysis, ComplianceSummary, HIGH_ADHERENCE_THRESHOLD,
    RefillRecord, estimate_compliance,
};
pub use filters::{
    date_span, filter_by_date_range, filter_by_month, latest_month, months_present,
};
pub use normalize::{is_normalized, normalize_transactions};
pub use report::{AnalysisOptions, AnalysisReport, run_analysis};
