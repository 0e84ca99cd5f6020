//! Integration tests for full-submission extraction

use std::path::PathBuf;
use thirteenf_parse::filing::{header::ROOT_SECTION, type_block::TEXT_FIELD};
use thirteenf_parse::{
    DateSource, ExtractError, Extractor, FilingDocument, HeaderField, TypeBlockField,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_13f_hr.txt")
}

#[test]
fn test_extract_fixture_holdings() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();

    assert_eq!(extract.holdings.len(), 4);
    assert_eq!(extract.source.as_deref(), Some(fixture_path().as_path()));

    let apple = &extract.holdings[0];
    assert_eq!(apple.issuer_name, "APPLE INC");
    assert_eq!(apple.class_title, "COM");
    assert_eq!(apple.cusip, "037833100");
    assert_eq!(apple.value, Some(1_714_900));
    assert_eq!(apple.shares_or_principal, Some(10_000));
    assert_eq!(apple.vote_sole, Some(10_000));

    let etf = &extract.holdings[1];
    assert_eq!(etf.discretion, "DFND");
    assert_eq!(etf.other_manager, Some(1));
    assert_eq!(etf.vote_shared, Some(3000));

    let warrant = &extract.holdings[3];
    assert_eq!(warrant.class_title, "*W EXP 01/31/2028");
    assert_eq!(warrant.value, None);
    assert_eq!(warrant.vote_shared, None);
}

#[test]
fn test_extract_fixture_diagnostics() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();
    assert_eq!(extract.skipped.len(), 1);
    assert_eq!(extract.skipped[0].row, 3);
    assert_eq!(extract.skipped[0].field, "value");
    assert_eq!(extract.skipped[0].raw, "n/a");
}

#[test]
fn test_extract_fixture_report_date() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();
    assert_eq!(extract.report_date.as_str(), "20240331");
    assert_eq!(extract.report_date.source(), DateSource::PeriodOfReport);
}

#[test]
fn test_extract_fixture_header() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();

    assert!(extract.header.contains(&HeaderField::new(
        ROOT_SECTION,
        "ACCESSION NUMBER",
        "0000950123-24-005678"
    )));
    assert!(extract.header.contains(&HeaderField::new(
        "FILER > FILING VALUES",
        "SEC FILE NUMBER",
        "028-12345"
    )));
    assert!(extract.header.contains(&HeaderField::new(
        "FILER > MAIL ADDRESS",
        "CITY",
        "SALEM"
    )));

    let summary = &extract.summary;
    assert_eq!(summary.filer_name, "EXAMPLE CAPITAL MANAGEMENT LLC");
    assert_eq!(summary.cik, "0001234567");
    assert_eq!(summary.sic, "6282");
    assert_eq!(summary.business_address, "100 MAIN STREET, BOSTON, MA, 02110");
    assert_eq!(summary.former_name_change_date, "20150101");
}

#[test]
fn test_extract_fixture_type_block() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();
    let fields = &extract.type_block;

    assert!(fields.contains(&TypeBlockField::new("submissionType", "13F-HR")));
    assert!(fields.contains(&TypeBlockField::new("periodOfReport", "03-31-2024")));
    assert!(fields.contains(&TypeBlockField::new("Check here if Amendment", "No")));
    assert!(fields.contains(&TypeBlockField::new("Report Type", "13F HOLDINGS REPORT")));
    assert!(fields.contains(&TypeBlockField::new("tableEntryTotal", "4")));
    assert!(fields.iter().all(|f| f.field != "SEQUENCE" && f.field != "XML"));
    assert!(fields.iter().any(|f| f.field == TEXT_FIELD));
}

#[test]
fn test_extract_from_bytes_with_invalid_utf8() {
    let mut bytes = std::fs::read(fixture_path()).unwrap();
    let at = bytes
        .windows(9)
        .position(|w| w == b"APPLE INC")
        .unwrap();
    bytes[at + 1] = 0xFF;

    let extract = Extractor::default()
        .extract(&FilingDocument::from_bytes(&bytes))
        .unwrap();
    assert_eq!(extract.holdings[0].issuer_name, "A\u{FFFD}PLE INC");
    assert!(extract.source.is_none());
}

#[test]
fn test_extract_malformed_table() {
    let text = std::fs::read_to_string(fixture_path())
        .unwrap()
        .replace("</cusip>", "</value>");
    let err = Extractor::default()
        .extract(&FilingDocument::from_text(text))
        .unwrap_err();
    assert!(matches!(err, ExtractError::MalformedTable(_)));
}

#[test]
fn test_extract_missing_file() {
    let err = Extractor::default()
        .extract_path("/no/such/submission.txt")
        .unwrap_err();
    assert!(matches!(err, ExtractError::Io(_)));
}
