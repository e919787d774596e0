//! Tests for the JSON report payload.

use chrono::NaiveDate;

use clarus_analytics::{AnalysisOptions, normalize_transactions, run_analysis};
use clarus_ingest::frame_from_transactions;
use clarus_model::{ServiceType, Transaction};
use clarus_report::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, report_to_json_string, write_analytics_report_json,
};

fn sample_report() -> clarus_analytics::AnalysisReport {
    let transactions = vec![
        Transaction {
            transaction_id: "TX001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            patient_id: "P1".to_string(),
            service_type: ServiceType::Prescription,
            medication_category: "Diabetes".to_string(),
            quantity: 30,
            unit_price: 1.5,
            total_price: 45.0,
            insurance_used: "Yes".to_string(),
        },
        Transaction {
            transaction_id: "TX002".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            patient_id: "P2".to_string(),
            service_type: ServiceType::Otc,
            medication_category: "Cold & Flu".to_string(),
            quantity: 2,
            unit_price: 8.0,
            total_price: 16.0,
            insurance_used: "No".to_string(),
        },
    ];
    let frame = frame_from_transactions(&transactions).unwrap();
    let normalized = normalize_transactions(&frame).unwrap();
    run_analysis(&normalized, &AnalysisOptions::default()).unwrap()
}

#[test]
fn payload_carries_schema_and_report_sections() {
    let report = sample_report();
    let json = report_to_json_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["schema"], REPORT_SCHEMA);
    assert_eq!(value["schema_version"], REPORT_SCHEMA_VERSION);
    assert!(value["generated_at"].is_string());

    let report_value = &value["report"];
    assert_eq!(report_value["overview"]["transactions"], 2);
    assert_eq!(report_value["overview"]["total_revenue"], 61.0);
    assert_eq!(report_value["kpis"]["chronic_patient_count"], 1);
    assert_eq!(report_value["mix"]["prescription_revenue"], 45.0);
    assert!(report_value["compliance"]["summary"]["total_groups"].is_number());
    assert!(
        report_value["available_views"]
            .as_array()
            .unwrap()
            .iter()
            .any(|view| view == "compliance")
    );
    // Dates serialize as ISO strings.
    assert_eq!(report_value["daily_sales"]["points"][0]["date"], "2024-01-01");
}

#[test]
fn report_file_lands_in_the_output_directory() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let path = write_analytics_report_json(dir.path(), &report).unwrap();

    assert_eq!(path.file_name().unwrap(), "analytics_report.json");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["schema"], REPORT_SCHEMA);
}
