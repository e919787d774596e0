//! Tests for the record normalizer and its derived columns.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use clarus_analytics::{is_normalized, normalize_transactions};
use clarus_ingest::{any_to_bool, any_to_f64, any_to_string, frame_from_transactions};
use clarus_model::{ServiceType, Transaction, columns};

fn tx(
    date: &str,
    patient: &str,
    service: &str,
    category: &str,
    quantity: i64,
    total: f64,
) -> Transaction {
    Transaction {
        transaction_id: format!("TX-{patient}-{date}"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        patient_id: patient.to_string(),
        service_type: ServiceType::parse(service),
        medication_category: category.to_string(),
        quantity,
        unit_price: if quantity > 0 {
            total / quantity as f64
        } else {
            0.0
        },
        total_price: total,
        insurance_used: "Yes".to_string(),
    }
}

fn normalized(transactions: &[Transaction]) -> DataFrame {
    let frame = frame_from_transactions(transactions).unwrap();
    normalize_transactions(&frame).unwrap()
}

fn strings(frame: &DataFrame, name: &str) -> Vec<String> {
    let series = frame.column(name).unwrap();
    (0..frame.height())
        .map(|idx| any_to_string(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

fn bools(frame: &DataFrame, name: &str) -> Vec<bool> {
    let series = frame.column(name).unwrap();
    (0..frame.height())
        .map(|idx| any_to_bool(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

#[test]
fn normalizer_appends_every_derived_column() {
    let frame = normalized(&[tx(
        "2024-01-15",
        "P1",
        "Prescription",
        "Diabetes",
        30,
        45.0,
    )]);
    assert!(is_normalized(&frame));
    for name in columns::DERIVED {
        assert!(frame.column(name).is_ok(), "missing derived column {name}");
    }
}

#[test]
fn calendar_columns_match_the_date() {
    // 2024-01-15 is a Monday.
    let frame = normalized(&[tx(
        "2024-01-15",
        "P1",
        "Prescription",
        "Diabetes",
        30,
        45.0,
    )]);
    assert_eq!(strings(&frame, columns::MONTH), vec!["2024-01"]);
    assert_eq!(strings(&frame, columns::YEAR), vec!["2024"]);
    assert_eq!(strings(&frame, columns::QUARTER), vec!["2024-Q1"]);
    assert_eq!(strings(&frame, columns::DAY_OF_WEEK), vec!["Monday"]);
    assert_eq!(strings(&frame, columns::MONTH_NAME), vec!["January 2024"]);
}

#[test]
fn revenue_aliases_total_price() {
    let frame = normalized(&[
        tx("2024-01-15", "P1", "Prescription", "Diabetes", 30, 45.0),
        tx("2024-01-16", "P2", "OTC", "Cold & Flu", 2, 16.5),
    ]);
    let revenue = frame.column(columns::REVENUE).unwrap();
    let total = frame.column(columns::TOTAL_PRICE).unwrap();
    for idx in 0..frame.height() {
        assert_eq!(
            any_to_f64(revenue.get(idx).unwrap()),
            any_to_f64(total.get(idx).unwrap())
        );
    }
}

#[test]
fn classification_flags_follow_the_taxonomy() {
    let frame = normalized(&[
        tx("2024-01-01", "P1", "Prescription", "Diabetes", 30, 45.0),
        tx("2024-01-02", "P2", "Vaccination", "Vaccination", 1, 25.0),
        tx("2024-01-03", "P3", "OTC", "Cold & Flu", 2, 16.5),
        tx("2024-01-04", "P4", "Consultation", "Mental Health", 1, 40.0),
    ]);
    assert_eq!(
        bools(&frame, columns::IS_PRESCRIPTION),
        vec![true, true, false, true]
    );
    assert_eq!(
        bools(&frame, columns::IS_CLINICAL_SERVICE),
        vec![false, true, false, true]
    );
    assert_eq!(
        bools(&frame, columns::IS_CHRONIC),
        vec![true, false, false, false]
    );
}

#[test]
fn chronic_always_implies_prescription_flag() {
    let frame = normalized(&[
        tx("2024-01-01", "P1", "Prescription", "Cardiovascular", 30, 45.0),
        tx("2024-01-02", "P1", "OTC", "Cardiovascular", 1, 9.0),
        tx("2024-01-03", "P2", "Prescription", "Allergy", 10, 12.0),
        tx("2024-01-04", "P3", "Medication Review", "Diabetes", 1, 30.0),
    ]);
    let chronic = bools(&frame, columns::IS_CHRONIC);
    let prescription = bools(&frame, columns::IS_PRESCRIPTION);
    for idx in 0..frame.height() {
        if chronic[idx] {
            assert!(prescription[idx], "chronic row {idx} lost the service gate");
        }
    }
}

#[test]
fn otc_sale_in_chronic_category_is_not_flagged_chronic() {
    let frame = normalized(&[tx("2024-01-02", "P1", "OTC", "Cardiovascular", 1, 9.0)]);
    assert_eq!(bools(&frame, columns::IS_CHRONIC), vec![false]);
}

#[test]
fn normalizer_leaves_the_input_frame_untouched() {
    let base = frame_from_transactions(&[tx(
        "2024-01-15",
        "P1",
        "Prescription",
        "Diabetes",
        30,
        45.0,
    )])
    .unwrap();
    let normalized = normalize_transactions(&base).unwrap();
    assert_eq!(base.width(), 9);
    assert_eq!(normalized.width(), 9 + columns::DERIVED.len());
}
