//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};

use clarus_analytics::{available_views, normalize_transactions};
use clarus_ingest::{LoadCache, export_csv_file};
use clarus_model::{MonthKey, ViewId};
use clarus_report::write_analytics_report_json;

use crate::cli::{AnalyzeArgs, ViewsArgs};
use crate::pipeline::{PipelineInput, PipelineOutput, run_pipeline};

/// Everything the analyze command produced, for the summary printer.
pub struct AnalyzeOutcome {
    pub file: PathBuf,
    pub result: PipelineOutput,
    pub json_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let month = args
        .month
        .as_deref()
        .map(MonthKey::parse)
        .transpose()
        .context("parse --month")?;

    let mut cache = LoadCache::new();
    let input = PipelineInput {
        file: &args.file,
        month,
        all: args.all,
        from: args.from,
        to: args.to,
        top_categories: args.top,
    };
    let result = run_pipeline(&mut cache, &input)?;

    let export_path = match &args.export {
        Some(path) => Some(
            export_csv_file(&result.filtered, path)
                .with_context(|| format!("export {}", path.display()))?,
        ),
        None => None,
    };
    let json_path = match &args.output_dir {
        Some(dir) => Some(
            write_analytics_report_json(dir, &result.report)
                .with_context(|| format!("write report into {}", dir.display()))?,
        ),
        None => None,
    };

    Ok(AnalyzeOutcome {
        file: args.file.clone(),
        result,
        json_path,
        export_path,
    })
}

/// Load a file and report which views have qualifying data.
pub fn run_views(args: &ViewsArgs) -> Result<Vec<ViewId>> {
    let mut cache = LoadCache::new();
    let frame = cache
        .load(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    let normalized = normalize_transactions(&frame)?;
    Ok(available_views(&normalized)?.into_iter().collect())
}
