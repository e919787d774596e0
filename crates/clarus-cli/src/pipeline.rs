//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the transaction file through the content-hash cache
//! 2. **Normalize**: append derived calendar and classification columns
//! 3. **Filter**: month selection, then the optional date-range refinement
//! 4. **Analyze**: run every aggregator over the filtered frame
//!
//! Each interaction recomputes everything from the loaded frame; only the
//! load-and-parse step is memoized.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use clarus_analytics::{
    AnalysisOptions, AnalysisReport, filter_by_date_range, filter_by_month, latest_month,
    months_present, normalize_transactions, run_analysis,
};
use clarus_ingest::LoadCache;
use clarus_model::MonthKey;

/// Input for one analysis run.
pub struct PipelineInput<'a> {
    pub file: &'a Path,
    /// Month to analyze; None selects the most recent month in the data.
    pub month: Option<MonthKey>,
    /// Skip month filtering entirely and analyze the whole file.
    pub all: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub top_categories: usize,
}

/// Result of one analysis run.
pub struct PipelineOutput {
    pub report: AnalysisReport,
    /// The filtered frame the report was computed from, for CSV export.
    pub filtered: DataFrame,
    pub selected_month: Option<MonthKey>,
    /// Every month present in the loaded file, chronologically.
    pub months: Vec<MonthKey>,
    pub rows_loaded: usize,
    pub rows_analyzed: usize,
}

pub fn run_pipeline(cache: &mut LoadCache, input: &PipelineInput<'_>) -> Result<PipelineOutput> {
    let pipeline_span = info_span!("pipeline", file = %input.file.display());
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let base = info_span!("load").in_scope(|| -> Result<DataFrame> {
        let start = Instant::now();
        let frame = cache
            .load(input.file)
            .with_context(|| format!("load {}", input.file.display()))?;
        debug!(
            rows = frame.height(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(frame)
    })?;
    let rows_loaded = base.height();

    let normalized = info_span!("normalize").in_scope(|| -> Result<DataFrame> {
        let start = Instant::now();
        let frame = normalize_transactions(&base).context("normalize transactions")?;
        debug!(
            rows = frame.height(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(frame)
    })?;

    let months = months_present(&normalized)?;
    let filter_span = info_span!("filter");
    let filter_guard = filter_span.enter();

    let selected_month = if input.all {
        None
    } else {
        match input.month {
            Some(month) => Some(month),
            None => latest_month(&normalized)?,
        }
    };
    let mut filtered = match selected_month {
        Some(month) => {
            if !months.contains(&month) {
                warn!(month = %month, "selected month has no transactions");
            }
            filter_by_month(&normalized, month)?
        }
        None => normalized,
    };

    if let (Some(from), Some(to)) = (input.from, input.to)
        && from > to
    {
        bail!("date range start {from} is after end {to}");
    }
    if input.from.is_some() || input.to.is_some() {
        let from = input.from.unwrap_or(NaiveDate::MIN);
        let to = input.to.unwrap_or(NaiveDate::MAX);
        filtered = filter_by_date_range(&filtered, from, to)?;
    }
    drop(filter_guard);

    let options = AnalysisOptions {
        top_categories: input.top_categories,
    };
    let report = run_analysis(&filtered, &options)?;

    let month_label = selected_month
        .map(|month| month.to_string())
        .unwrap_or_else(|| "all".to_string());
    info!(
        rows_loaded,
        rows_analyzed = filtered.height(),
        month = %month_label,
        views = report.available_views.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        rows_analyzed: filtered.height(),
        report,
        filtered,
        selected_month,
        months,
        rows_loaded,
    })
}
