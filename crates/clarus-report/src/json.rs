//! Versioned JSON report output for machine consumers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use clarus_analytics::AnalysisReport;

pub const REPORT_SCHEMA: &str = "clarus.analytics.report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    report: &'a AnalysisReport,
}

fn payload(report: &AnalysisReport) -> ReportPayload<'_> {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        report,
    }
}

/// Serialize the report payload to a pretty JSON string.
pub fn report_to_json_string(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&payload(report))?)
}

/// Write `analytics_report.json` into the output directory.
pub fn write_analytics_report_json(output_dir: &Path, report: &AnalysisReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("analytics_report.json");
    let json = report_to_json_string(report)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
