//! Full analysis over a filtered frame: every aggregator, one report.

use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info_span};

use clarus_model::ViewId;

use crate::aggregate::{
    CategoryPerformance, ClinicalServices, DEFAULT_TOP_CATEGORIES, DailySales, DatasetOverview,
    InsuranceBreakdown, PharmacyKpis, PrescriptionOtcMix, SeasonalTrends, category_performance,
    clinical_services, daily_sales, dataset_overview, insurance_breakdown, pharmacy_kpis,
    prescription_otc_mix, seasonal_trends,
};
use crate::availability::available_views;
use crate::compliance::{ComplianceAnalysis, estimate_compliance};

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Ranking depth used when presenting the category tables.
    pub top_categories: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }
}

/// Every aggregator's result over one filtered frame, keyed by view.
///
/// Conditionally shown sections are `None` when the availability predicate
/// says there is no qualifying data for them.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub overview: DatasetOverview,
    pub kpis: PharmacyKpis,
    pub daily_sales: DailySales,
    pub mix: PrescriptionOtcMix,
    pub categories: CategoryPerformance,
    pub insurance: Option<InsuranceBreakdown>,
    pub seasonal: Option<SeasonalTrends>,
    pub clinical: Option<ClinicalServices>,
    pub compliance: Option<ComplianceAnalysis>,
    pub available_views: BTreeSet<ViewId>,
    /// Echo of the requested ranking depth, for renderers.
    pub top_categories: usize,
}

/// Run every aggregator over an already filtered, normalized frame.
pub fn run_analysis(frame: &DataFrame, options: &AnalysisOptions) -> Result<AnalysisReport> {
    let span = info_span!("analyze", rows = frame.height());
    let _guard = span.enter();
    let start = Instant::now();

    let available = available_views(frame)?;
    let report = AnalysisReport {
        overview: dataset_overview(frame)?,
        kpis: pharmacy_kpis(frame)?,
        daily_sales: daily_sales(frame)?,
        mix: prescription_otc_mix(frame)?,
        categories: category_performance(frame)?,
        insurance: available
            .contains(&ViewId::Insurance)
            .then(|| insurance_breakdown(frame))
            .transpose()?,
        seasonal: available
            .contains(&ViewId::Seasonal)
            .then(|| seasonal_trends(frame))
            .transpose()?,
        clinical: available
            .contains(&ViewId::ClinicalServices)
            .then(|| clinical_services(frame))
            .transpose()?,
        compliance: available
            .contains(&ViewId::Compliance)
            .then(|| estimate_compliance(frame))
            .transpose()?,
        available_views: available,
        top_categories: options.top_categories,
    };

    debug!(
        rows = frame.height(),
        views = report.available_views.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(report)
}
