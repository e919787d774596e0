//! Tests for the month and date-range filters.

use chrono::NaiveDate;
use polars::prelude::DataFrame;

use clarus_analytics::{
    date_span, filter_by_date_range, filter_by_month, latest_month, months_present,
    normalize_transactions,
};
use clarus_ingest::frame_from_transactions;
use clarus_model::{MonthKey, ServiceType, Transaction};

fn tx(date: &str, patient: &str) -> Transaction {
    Transaction {
        transaction_id: format!("TX-{patient}-{date}"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        patient_id: patient.to_string(),
        service_type: ServiceType::Prescription,
        medication_category: "Diabetes".to_string(),
        quantity: 30,
        unit_price: 1.0,
        total_price: 30.0,
        insurance_used: "Yes".to_string(),
    }
}

fn frame(dates: &[&str]) -> DataFrame {
    let transactions: Vec<Transaction> = dates
        .iter()
        .enumerate()
        .map(|(idx, date)| tx(date, &format!("P{idx}")))
        .collect();
    let base = frame_from_transactions(&transactions).unwrap();
    normalize_transactions(&base).unwrap()
}

#[test]
fn months_present_is_distinct_and_chronological() {
    let frame = frame(&["2024-01-05", "2023-12-28", "2024-01-20", "2023-11-02"]);
    let months = months_present(&frame).unwrap();
    assert_eq!(
        months,
        vec![
            MonthKey::new(2023, 11),
            MonthKey::new(2023, 12),
            MonthKey::new(2024, 1),
        ]
    );
    assert_eq!(latest_month(&frame).unwrap(), Some(MonthKey::new(2024, 1)));
}

#[test]
fn latest_month_of_empty_frame_is_none() {
    let frame = frame(&[]);
    assert_eq!(latest_month(&frame).unwrap(), None);
    assert_eq!(date_span(&frame).unwrap(), None);
}

#[test]
fn month_filter_keeps_only_that_month() {
    let frame = frame(&["2024-01-05", "2023-12-28", "2024-01-20"]);
    let filtered = filter_by_month(&frame, MonthKey::new(2024, 1)).unwrap();
    assert_eq!(filtered.height(), 2);
    // The base frame is untouched.
    assert_eq!(frame.height(), 3);
}

#[test]
fn date_range_is_inclusive_and_composes_with_the_month_filter() {
    let frame = frame(&["2024-01-05", "2024-01-10", "2024-01-20", "2024-02-01"]);
    let monthly = filter_by_month(&frame, MonthKey::new(2024, 1)).unwrap();
    let refined = filter_by_date_range(
        &monthly,
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    )
    .unwrap();
    assert_eq!(refined.height(), 2);

    let span = date_span(&refined).unwrap().unwrap();
    assert_eq!(span.0, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(span.1, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
}
