//! Terminal table renderers for each analytics summary.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clarus_analytics::aggregate::{
    CategoryPerformance, ClinicalServices, DailySales, DatasetOverview, InsuranceBreakdown,
    PharmacyKpis, PrescriptionOtcMix, SeasonalTrends,
};
use clarus_analytics::{ComplianceAnalysis, HIGH_ADHERENCE_THRESHOLD};

use crate::money::{format_count, format_money, format_pct};

pub fn overview_table(overview: &DatasetOverview) -> Table {
    let mut table = new_table(&["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Total Revenue"),
        money_cell(overview.total_revenue),
    ]);
    table.add_row(vec![
        Cell::new("Transactions"),
        count_cell(overview.transactions),
    ]);
    table.add_row(vec![
        Cell::new("Avg Transaction"),
        money_cell(overview.avg_transaction_value),
    ]);
    table.add_row(vec![
        Cell::new("Unique Patients"),
        count_cell(overview.unique_patients),
    ]);
    let span = match (overview.first_date, overview.last_date) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "-".to_string(),
    };
    table.add_row(vec![Cell::new("Date Range"), dim_cell(span)]);
    table
}

pub fn kpi_table(kpis: &PharmacyKpis) -> Table {
    let mut table = new_table(&["Pharmacy KPI", "Value"]);
    table.add_row(vec![
        Cell::new("Avg Prescription Value"),
        money_cell(kpis.avg_prescription_value),
    ]);
    table.add_row(vec![
        Cell::new("Clinical Services Rate"),
        pct_cell(kpis.clinical_service_rate_pct),
    ]);
    table.add_row(vec![
        Cell::new("Insurance Utilization"),
        pct_cell(kpis.insurance_utilization_pct),
    ]);
    table.add_row(vec![
        Cell::new("Chronic Care Patients"),
        count_cell(kpis.chronic_patient_count),
    ]);
    table
}

pub fn mix_table(mix: &PrescriptionOtcMix) -> Table {
    let mut table = new_table(&["Segment", "Revenue", "Share"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Prescription Services"),
        money_cell(mix.prescription_revenue),
        pct_cell(mix.prescription_pct),
    ]);
    table.add_row(vec![
        Cell::new("OTC Products"),
        money_cell(mix.otc_revenue),
        pct_cell(mix.otc_pct),
    ]);
    for row in &mix.service_type_revenue {
        table.add_row(vec![
            dim_cell(format!("  -> {}", row.service_type)),
            money_cell(row.revenue),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn categories_table(categories: &CategoryPerformance, top: usize) -> Table {
    let mut table = new_table(&[
        "Category",
        "Revenue",
        "Avg Revenue",
        "Quantity",
        "Transactions",
        "Patients",
    ]);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in categories.top(top) {
        table.add_row(vec![
            Cell::new(&row.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            money_cell(row.revenue),
            money_cell(row.avg_revenue),
            Cell::new(format_count(row.quantity.max(0) as usize)),
            count_cell(row.transactions),
            count_cell(row.unique_patients),
        ]);
    }
    table
}

pub fn compliance_records_table(analysis: &ComplianceAnalysis) -> Table {
    let mut table = new_table(&[
        "Patient",
        "Category",
        "Refills",
        "First Fill",
        "Last Fill",
        "Days",
        "Expected",
        "Compliance",
    ]);
    for index in 2..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in &analysis.records {
        let compliance = if record.compliance_rate >= HIGH_ADHERENCE_THRESHOLD {
            Cell::new(format_pct(record.compliance_rate)).fg(Color::Green)
        } else {
            Cell::new(format_pct(record.compliance_rate)).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(&record.patient_id),
            Cell::new(&record.category),
            count_cell(record.refill_count),
            Cell::new(record.first_fill.to_string()),
            Cell::new(record.last_fill.to_string()),
            Cell::new(record.days_between),
            Cell::new(format!("{:.1}", record.expected_refills)),
            compliance,
        ]);
    }
    table
}

pub fn compliance_summary_table(analysis: &ComplianceAnalysis) -> Table {
    let mut table = new_table(&["Compliance Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Average Compliance Rate"),
        pct_cell(analysis.summary.avg_compliance),
    ]);
    table.add_row(vec![
        Cell::new("High Adherence Groups"),
        count_cell(analysis.summary.high_adherence_count),
    ]);
    table.add_row(vec![
        Cell::new("Chronic Patient Groups"),
        count_cell(analysis.summary.total_groups),
    ]);
    for category in &analysis.by_category {
        table.add_row(vec![
            dim_cell(format!("  -> {}", category.category)),
            pct_cell(category.avg_compliance),
        ]);
    }
    table
}

pub fn insurance_table(breakdown: &InsuranceBreakdown) -> Table {
    let mut table = new_table(&["Insurance", "Revenue", "Transactions"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &breakdown.rows {
        table.add_row(vec![
            Cell::new(&row.insurance_used),
            money_cell(row.revenue),
            count_cell(row.transactions),
        ]);
    }
    for row in &breakdown.by_service_type {
        table.add_row(vec![
            dim_cell(format!("  {} / {}", row.service_type, row.insurance_used)),
            money_cell(row.revenue),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn seasonal_table(trends: &SeasonalTrends) -> Table {
    let mut table = new_table(&["Month", "Category", "Revenue", "Transactions"]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for point in &trends.points {
        table.add_row(vec![
            Cell::new(&point.month_name),
            Cell::new(&point.category),
            money_cell(point.revenue),
            count_cell(point.transactions),
        ]);
    }
    table
}

pub fn clinical_table(clinical: &ClinicalServices) -> Table {
    let mut table = new_table(&["Service", "Revenue", "Appointments"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &clinical.rows {
        table.add_row(vec![
            Cell::new(&row.service_type),
            money_cell(row.revenue),
            count_cell(row.transactions),
        ]);
    }
    table
}

pub fn daily_table(sales: &DailySales) -> Table {
    let mut table = new_table(&["Date", "Revenue"]);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in &sales.points {
        table.add_row(vec![
            Cell::new(point.date.to_string()),
            money_cell(point.revenue),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        money_cell(sales.total_revenue).add_attribute(Attribute::Bold),
    ]);
    table
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn money_cell(value: f64) -> Cell {
    Cell::new(format_money(value))
}

fn count_cell(value: usize) -> Cell {
    Cell::new(format_count(value))
}

fn pct_cell(value: f64) -> Cell {
    Cell::new(format_pct(value))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
