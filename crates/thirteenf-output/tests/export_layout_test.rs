//! Integration tests writing extracted filings to disk

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thirteenf_output::{
    ClassAnnotation, ExportError, ExportFormat, Exporter, FilingExport, OutputLayout,
};
use thirteenf_parse::{Extractor, FilingDocument};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../thirteenf-parse/tests/fixtures/sample_13f_hr.txt")
}

/// Copies the fixture under `<dir>/raw_13F_HR/example_capital/`.
fn staged_fixture(dir: &Path) -> PathBuf {
    let issuer_dir = dir.join("raw_13F_HR").join("example_capital");
    fs::create_dir_all(&issuer_dir).unwrap();
    let path = issuer_dir.join("0001234567-24-000001.txt");
    fs::copy(fixture_path(), &path).unwrap();
    path
}

#[test]
fn test_write_csv_sheets() {
    let tmp = TempDir::new().unwrap();
    let source = staged_fixture(tmp.path());
    let extract = Extractor::default().extract_path(&source).unwrap();
    let export = FilingExport::from_extract(&extract);

    let layout = OutputLayout::new(tmp.path().join("out"));
    let written = layout.write_filing(&export, ExportFormat::Csv).unwrap();

    let issuer_dir = tmp.path().join("out").join("example_capital");
    assert_eq!(
        written,
        vec![
            issuer_dir.join("20240331_infotable.csv"),
            issuer_dir.join("20240331_filing_data.csv"),
            issuer_dir.join("20240331_header.csv"),
            issuer_dir.join("20240331_13fhr.csv"),
        ]
    );

    let holdings = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(holdings.lines().count(), 5);
    assert!(holdings.contains("APPLE INC,COM,037833100,1714900,10000,SH,SOLE"));

    let summary = fs::read_to_string(&written[1]).unwrap();
    assert!(summary.starts_with("Field,Value\n"));
    assert!(summary.contains("CIK,0001234567"));
}

#[test]
fn test_write_json_bundle() {
    let tmp = TempDir::new().unwrap();
    let source = staged_fixture(tmp.path());
    let extract = Extractor::default().extract_path(&source).unwrap();
    let export = FilingExport::from_extract(&extract);

    let layout = OutputLayout::new(tmp.path().join("out"));
    let written = layout.write_filing(&export, ExportFormat::PrettyJson).unwrap();
    assert_eq!(
        written,
        vec![tmp.path().join("out/example_capital/20240331.json")]
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(json["report_date"], "20240331");
    assert_eq!(json["report_date_source"], "PeriodOfReport");
    assert_eq!(json["holdings"]["rows"].as_array().unwrap().len(), 4);
    assert_eq!(json["skipped"][0]["raw"], "n/a");
}

#[test]
fn test_skips_empty_sheets() {
    let tmp = TempDir::new().unwrap();
    let text = "<informationTable xmlns=\"http://www.sec.gov/edgar/document/thirteenf/informationtable\">\
                <infoTable><nameOfIssuer>ACME</nameOfIssuer><titleOfClass>COM</titleOfClass>\
                </infoTable></informationTable>\n\
                CONFORMED PERIOD OF REPORT: 20231231";
    let extract = Extractor::default()
        .extract(&FilingDocument::from_text(text))
        .unwrap();
    let export = FilingExport::from_extract(&extract);

    let layout = OutputLayout::new(tmp.path());
    let written = layout.write_filing(&export, ExportFormat::Csv).unwrap();
    assert_eq!(
        written,
        vec![tmp.path().join("unknown_issuer/20231231_infotable.csv")]
    );
}

#[test]
fn test_classified_holdings_csv() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();
    let mut export = FilingExport::from_extract(&extract);
    export.holdings.annotate(|title| ClassAnnotation {
        category: if title.contains("*W") { "Warrant" } else { "Other" }.to_string(),
        title_normalized: title.to_uppercase(),
    });

    let csv = export.holdings.export_to_string(ExportFormat::Csv).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.ends_with(",class_category,class_title_normalized"));
    assert!(csv.lines().last().unwrap().ends_with(",Warrant,*W EXP 01/31/2028"));
}

#[test]
fn test_bundle_rejects_csv() {
    let extract = Extractor::default().extract_path(fixture_path()).unwrap();
    let export = FilingExport::from_extract(&extract);
    let err = export.export_to_string(ExportFormat::Csv).unwrap_err();
    assert!(matches!(err, ExportError::InvalidFormat(_)));
}
