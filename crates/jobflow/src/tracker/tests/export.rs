use super::common::*;
use crate::config::ExportConfig;
use crate::tracker::catalog::Stage;
use crate::tracker::export::{export_csv, ExportError, EXPORT_HEADER};

#[test]
fn header_row_is_fixed() {
    let document = export_csv(&[], &ExportConfig::default()).expect("empty export succeeds");
    let mut lines = document.lines();
    assert_eq!(
        lines.next(),
        Some(r#""Company","Position","Location","Application Date","Current Status","Priority","Contact","Email","URL""#)
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn quoted_fields_round_trip_through_a_standard_parser() {
    let tricky = r#"O'Brien, "Big" Co."#;
    let mut app = application("a1", tricky, "Engineer", "", date(2025, 3, 1), Vec::new());
    app.contact_person = "Jane; Doe".to_string();

    let document = export_csv(&[app], &ExportConfig::default()).expect("export succeeds");
    assert!(document.contains(r#""O'Brien, ""Big"" Co.""#));

    let mut reader = csv::Reader::from_reader(document.as_bytes());
    let headers = reader.headers().expect("header row parses").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), EXPORT_HEADER.to_vec());

    let record = reader
        .records()
        .next()
        .expect("one data row")
        .expect("row parses");
    assert_eq!(record.get(0), Some(tricky));
    assert_eq!(record.get(6), Some("Jane; Doe"));
}

#[test]
fn status_column_uses_last_stored_update_or_the_default() {
    let with_history = application(
        "a1",
        "Acme",
        "Engineer",
        "",
        date(2025, 3, 1),
        vec![
            // Stored order wins here even though the timestamps disagree.
            update("u2", Stage::PhoneScreen, day(5)),
            update("u1", Stage::Applied, day(1)),
        ],
    );
    let without_history = application("a2", "Globex", "Analyst", "", date(2025, 3, 2), Vec::new());

    let document =
        export_csv(&[with_history, without_history], &ExportConfig::default()).expect("export");
    let lines: Vec<&str> = document.lines().collect();

    assert!(lines[1].contains(r#""APPLIED""#));
    assert!(lines[2].contains(r#""APPLIED""#));
    assert!(!lines[1].contains("PHONE_SCREEN"));
}

#[test]
fn rows_without_identity_fields_are_skipped() {
    let nameless = application("a1", "", "Engineer", "", date(2025, 3, 1), Vec::new());
    let positionless = application("a2", "Acme", "   ", "", date(2025, 3, 1), Vec::new());
    let complete = application("a3", "Acme", "Engineer", "", date(2025, 3, 1), Vec::new());

    let document = export_csv(&[nameless, positionless, complete], &ExportConfig::default())
        .expect("export succeeds despite skipped rows");

    assert_eq!(document.lines().count(), 2);
}

#[test]
fn optional_fields_render_as_empty_cells() {
    let app = application("a1", "Acme", "Engineer", "", date(2025, 3, 1), Vec::new());
    let document = export_csv(&[app], &ExportConfig::default()).expect("export succeeds");

    let row = document.lines().nth(1).expect("data row present");
    assert!(row.contains(",\"\","));
    assert!(!row.contains("null"));
    assert!(!row.contains("undefined"));
}

#[test]
fn date_column_uses_the_configured_format() {
    let app = application("a1", "Acme", "Engineer", "", date(2025, 3, 7), Vec::new());

    let default_doc = export_csv(std::slice::from_ref(&app), &ExportConfig::default())
        .expect("default export succeeds");
    assert!(default_doc.contains(r#""07/03/2025""#));

    let iso = ExportConfig {
        date_format: "%Y-%m-%d".to_string(),
    };
    let iso_doc = export_csv(&[app], &iso).expect("iso export succeeds");
    assert!(iso_doc.contains(r#""2025-03-07""#));
}

#[test]
fn a_bad_date_format_is_an_error_not_a_panic() {
    let app = application("a1", "Acme", "Engineer", "", date(2025, 3, 7), Vec::new());
    let bad = ExportConfig {
        date_format: "%Q".to_string(),
    };

    let err = export_csv(&[app], &bad).unwrap_err();
    assert!(matches!(err, ExportError::DateFormat(_)));
}
