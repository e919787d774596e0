//! Integration tests for transaction loading, caching, and export.

use std::io::Write;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use clarus_ingest::{
    IngestError, LoadCache, any_to_string, build_transaction_frame, export_csv, load_transactions,
    read_csv_table_from_reader, required_columns,
};
use clarus_model::columns;

const SAMPLE: &str = "\
TransactionID,Date,PatientID,ServiceType,MedicationCategory,Quantity,UnitPrice,InsuranceUsed,TotalPrice
TX001,2024-01-01,P1,Prescription,Cardiovascular,30,1.5,Yes,45
TX002,2024-01-02,P2,OTC,Cold & Flu,2,8.25,No,16.5
TX003,2024-01-03,P1,Vaccination,Vaccination,1,25,Yes,25
";

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn column_strings(frame: &DataFrame, name: &str) -> Vec<String> {
    let series = frame.column(name).unwrap();
    (0..frame.height())
        .map(|idx| any_to_string(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

#[test]
fn loads_a_valid_file_into_a_typed_frame() {
    let file = write_temp(SAMPLE);
    let frame = load_transactions(file.path()).unwrap();

    assert_eq!(frame.height(), 3);
    assert_eq!(frame.width(), 9);
    assert_eq!(
        column_strings(&frame, columns::DATE),
        vec!["2024-01-01", "2024-01-02", "2024-01-03"]
    );
    assert_eq!(
        column_strings(&frame, columns::QUANTITY),
        vec!["30", "2", "1"]
    );
    assert_eq!(
        column_strings(&frame, columns::TOTAL_PRICE),
        vec!["45", "16.5", "25"]
    );
}

#[test]
fn extra_columns_are_ignored_and_order_is_irrelevant() {
    let data = "\
Notes,TotalPrice,InsuranceUsed,UnitPrice,Quantity,MedicationCategory,ServiceType,PatientID,Date,TransactionID
keep,45,Yes,1.5,30,Diabetes,Prescription,P1,2024-02-01,TX009
";
    let table = read_csv_table_from_reader(data.as_bytes()).unwrap();
    let frame = build_transaction_frame(&table).unwrap();
    assert_eq!(frame.height(), 1);
    assert_eq!(frame.width(), 9);
    assert!(frame.column("Notes").is_err());
    assert_eq!(
        column_strings(&frame, columns::MEDICATION_CATEGORY),
        vec!["Diabetes"]
    );
}

#[test]
fn schema_error_names_every_missing_column() {
    let data = "Date,Quantity\n2024-01-01,3\n";
    let table = read_csv_table_from_reader(data.as_bytes()).unwrap();
    let error = build_transaction_frame(&table).unwrap_err();
    match &error {
        IngestError::MissingColumns { missing } => {
            assert_eq!(missing.len(), 7);
            for name in missing {
                assert!(required_columns().contains(&name.as_str()));
            }
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    let message = error.to_string();
    assert!(message.contains("TransactionID"));
    assert!(message.contains("TotalPrice"));
}

#[test]
fn date_parse_failure_names_the_offending_value_and_line() {
    let data = SAMPLE.replace("2024-01-02", "soon");
    let table = read_csv_table_from_reader(data.as_bytes()).unwrap();
    let error = build_transaction_frame(&table).unwrap_err();
    match &error {
        IngestError::InvalidDate { column, value, line } => {
            assert_eq!(column, "Date");
            assert_eq!(value, "soon");
            assert_eq!(*line, 3);
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
    assert!(error.to_string().contains("soon"));
}

#[test]
fn numeric_parse_failure_names_the_offending_value() {
    let data = SAMPLE.replace("8.25", "eight");
    let table = read_csv_table_from_reader(data.as_bytes()).unwrap();
    let error = build_transaction_frame(&table).unwrap_err();
    match error {
        IngestError::InvalidNumber { column, value, .. } => {
            assert_eq!(column, "UnitPrice");
            assert_eq!(value, "eight");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn slash_dates_are_normalized_to_iso() {
    let data = SAMPLE.replace("2024-01-01", "01/01/2024");
    let table = read_csv_table_from_reader(data.as_bytes()).unwrap();
    let frame = build_transaction_frame(&table).unwrap();
    assert_eq!(column_strings(&frame, columns::DATE)[0], "2024-01-01");
}

#[test]
fn export_round_trips_base_column_values() {
    let file = write_temp(SAMPLE);
    let frame = load_transactions(file.path()).unwrap();

    let mut buffer = Vec::new();
    export_csv(&frame, &mut buffer).unwrap();

    let table = read_csv_table_from_reader(buffer.as_slice()).unwrap();
    assert_eq!(table.headers, columns::REQUIRED);
    let reloaded = build_transaction_frame(&table).unwrap();

    assert_eq!(reloaded.height(), frame.height());
    for name in columns::REQUIRED {
        assert_eq!(
            column_strings(&reloaded, name),
            column_strings(&frame, name),
            "column {name} changed across the round trip"
        );
    }
}

#[test]
fn export_excludes_derived_columns() {
    let file = write_temp(SAMPLE);
    let mut frame = load_transactions(file.path()).unwrap();
    frame
        .with_column(Series::new(
            columns::IS_CHRONIC.into(),
            vec![true, false, false],
        ))
        .unwrap();

    let mut buffer = Vec::new();
    export_csv(&frame, &mut buffer).unwrap();
    let table = read_csv_table_from_reader(buffer.as_slice()).unwrap();
    assert_eq!(table.headers, columns::REQUIRED);
}

#[test]
fn cache_hits_on_identical_bytes_and_misses_on_change() {
    let file = write_temp(SAMPLE);
    let mut cache = LoadCache::new();

    let first = cache.load(file.path()).unwrap();
    let second = cache.load(file.path()).unwrap();
    assert_eq!(first.height(), second.height());
    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.entries, 1);

    // Same content in a different file still hits.
    let copy = write_temp(SAMPLE);
    cache.load(copy.path()).unwrap();
    assert_eq!(cache.stats().hits, 2);

    // Changed content misses and is parsed fresh.
    let changed = write_temp(&SAMPLE.replace("45", "46"));
    cache.load(changed.path()).unwrap();
    let stats = cache.stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.entries, 2);

    cache.clear();
    assert_eq!(cache.stats().entries, 0);
}

#[test]
fn cache_does_not_cache_failed_loads() {
    let broken = write_temp("Date,Quantity\n2024-01-01,3\n");
    let mut cache = LoadCache::new();
    assert!(cache.load(broken.path()).is_err());
    assert_eq!(cache.stats().entries, 0);
}
