//! Terminal summary printing for the analyze, views, and schema commands.

use std::path::Path;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use clarus_ingest::required_columns;
use clarus_model::ViewId;
use clarus_report::{
    categories_table, clinical_table, compliance_records_table, compliance_summary_table,
    daily_table, insurance_table, kpi_table, mix_table, overview_table, seasonal_table,
};

use crate::commands::AnalyzeOutcome;

pub fn print_analysis(outcome: &AnalyzeOutcome) {
    let report = &outcome.result.report;

    println!("File: {}", outcome.file.display());
    match outcome.result.selected_month {
        Some(month) => println!("Month: {} ({month})", month.label()),
        None => println!("Month: all data"),
    }
    if outcome.result.months.len() > 1 {
        let listing: Vec<String> = outcome
            .result
            .months
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Months in file: {}", listing.join(", "));
    }
    println!(
        "Rows: {} analyzed of {} loaded",
        outcome.result.rows_analyzed, outcome.result.rows_loaded
    );

    section("Performance Overview");
    println!("{}", overview_table(&report.overview));
    section("Pharmacy KPIs");
    println!("{}", kpi_table(&report.kpis));

    if report.available_views.contains(&ViewId::DailySales) {
        section("Daily Sales Trend");
        println!("{}", daily_table(&report.daily_sales));
    }
    if report.available_views.contains(&ViewId::PrescriptionOtc) {
        section("Prescription vs OTC");
        println!("{}", mix_table(&report.mix));
    }
    if report.available_views.contains(&ViewId::TopCategories) {
        section("Top Categories");
        println!("{}", categories_table(&report.categories, report.top_categories));
    }
    if let Some(compliance) = &report.compliance {
        section("Patient Refill Compliance");
        println!("{}", compliance_records_table(compliance));
        println!("{}", compliance_summary_table(compliance));
    }
    if let Some(insurance) = &report.insurance {
        section("Insurance vs Cash Pay");
        println!("{}", insurance_table(insurance));
    }
    if let Some(seasonal) = &report.seasonal {
        section("Seasonal Patterns");
        println!("{}", seasonal_table(seasonal));
    }
    if let Some(clinical) = &report.clinical {
        section("Clinical Services");
        println!("{}", clinical_table(clinical));
    }

    if let Some(path) = &outcome.json_path {
        println!();
        println!("Report: {}", path.display());
    }
    if let Some(path) = &outcome.export_path {
        println!("Export: {}", path.display());
    }
}

pub fn print_views(file: &Path, views: &[ViewId]) {
    println!("Available views for {}:", file.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("View"), header_cell("Description")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for view in ViewId::ALL {
        if views.contains(&view) {
            table.add_row(vec![
                Cell::new(view.as_str())
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                Cell::new(view.description()),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(view.as_str()).fg(Color::DarkGrey),
                Cell::new(format!("{} (no qualifying data)", view.description()))
                    .fg(Color::DarkGrey),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_schema() {
    println!("Required columns (header row, any order, extra columns ignored):");
    for name in required_columns() {
        println!("  - {name}");
    }
    println!();
    println!("Date accepts YYYY-MM-DD (preferred), MM/DD/YYYY, or YYYY/MM/DD.");
    println!("Quantity must be an integer; UnitPrice and TotalPrice must be numeric.");
    println!("InsuranceUsed is Yes or No.");
}

fn section(title: &str) {
    println!();
    println!("{title}:");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
