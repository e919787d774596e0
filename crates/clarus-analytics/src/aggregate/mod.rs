//! Aggregators: stateless group-and-summarize functions over the normalized
//! transaction frame.
//!
//! Shared contract: a zero-row frame produces a zero-valued summary, never an
//! error, and every ratio is guarded so a zero denominator yields 0.

mod categories;
mod clinical;
mod daily;
mod insurance;
mod kpi;
mod mix;
mod seasonal;

pub use categories::{
    CategoryPerformance, CategoryRow, DEFAULT_TOP_CATEGORIES, category_performance,
};
pub use clinical::{ClinicalRow, ClinicalServices, clinical_services};
pub use daily::{DailyPoint, DailySales, daily_sales};
pub use insurance::{
    InsuranceBreakdown, InsuranceRow, ServiceInsuranceRow, insurance_breakdown,
};
pub use kpi::{DatasetOverview, PharmacyKpis, dataset_overview, pharmacy_kpis};
pub use mix::{PrescriptionOtcMix, ServiceTypeRevenue, prescription_otc_mix};
pub use seasonal::{SeasonalPoint, SeasonalTrends, seasonal_trends};

/// Percentage of `part` in `total`, 0 when the denominator is 0.
pub(crate) fn pct(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

/// Mean of `sum` over `count` items, 0 when there are none.
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count > 0 { sum / count as f64 } else { 0.0 }
}
