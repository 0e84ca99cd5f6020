//! Export functionality for extracted 13F-HR filings.
//!
//! This module provides CSV and JSON export for holdings tables, header
//! fields, type block fields, filing summaries and whole-filing bundles.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thirteenf_parse::{
    DateSource, FieldCoercionSkipped, FilingExtract, FilingSummary, HeaderField, HoldingRecord,
    TypeBlockField, ValueUnit,
};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Export format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    #[default]
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(serde_json::to_string(value)?),
    }
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Classification attached to a holding on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAnnotation {
    /// Category name
    pub category: String,
    /// Title after warrant normalization
    pub title_normalized: String,
}

/// A holding row with optional classification columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingExport {
    /// Extracted holding.
    #[serde(flatten)]
    pub holding: HoldingRecord,

    /// Category of the class title, when classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_category: Option<String>,

    /// Normalized class title, when classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_title_normalized: Option<String>,
}

impl From<HoldingRecord> for HoldingExport {
    fn from(holding: HoldingRecord) -> Self {
        Self {
            holding,
            class_category: None,
            class_title_normalized: None,
        }
    }
}

fn opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl HoldingExport {
    /// Attaches classification columns.
    pub fn annotate(&mut self, annotation: ClassAnnotation) {
        self.class_category = Some(annotation.category);
        self.class_title_normalized = Some(annotation.title_normalized);
    }

    fn csv_record(&self, classified: bool) -> Vec<String> {
        let h = &self.holding;
        let mut record = vec![
            h.issuer_name.clone(),
            h.class_title.clone(),
            h.cusip.clone(),
            opt(h.value),
            opt(h.shares_or_principal),
            h.shares_type.clone(),
            h.discretion.clone(),
            opt(h.other_manager),
            opt(h.vote_sole),
            opt(h.vote_shared),
            opt(h.vote_none),
        ];
        if classified {
            record.push(self.class_category.clone().unwrap_or_default());
            record.push(self.class_title_normalized.clone().unwrap_or_default());
        }
        record
    }
}

/// Holdings of one filing together with the unit of their value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingTable {
    /// Unit of the value column.
    pub value_unit: ValueUnit,

    /// Rows in document order.
    pub rows: Vec<HoldingExport>,
}

impl HoldingTable {
    /// Builds an unclassified table from extracted records.
    pub fn new(records: &[HoldingRecord], value_unit: ValueUnit) -> Self {
        Self {
            value_unit,
            rows: records.iter().cloned().map(HoldingExport::from).collect(),
        }
    }

    /// Attaches classification columns to every row.
    pub fn annotate<F>(&mut self, classify: F)
    where
        F: Fn(&str) -> ClassAnnotation,
    {
        for row in &mut self.rows {
            let annotation = classify(&row.holding.class_title);
            row.annotate(annotation);
        }
    }

    /// Returns true if any row carries classification columns.
    pub fn is_classified(&self) -> bool {
        self.rows.iter().any(|r| r.class_category.is_some())
    }

    /// CSV column names, in order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec![
            "issuer_name",
            "class_title",
            "cusip",
            self.value_unit.column_name(),
            "shares_or_principal",
            "shares_type",
            "discretion",
            "other_manager",
            "vote_sole",
            "vote_shared",
            "vote_none",
        ];
        if self.is_classified() {
            columns.extend(["class_category", "class_title_normalized"]);
        }
        columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Exporter for HoldingTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => {
                let classified = self.is_classified();
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(self.columns())?;
                for row in &self.rows {
                    wtr.write_record(row.csv_record(classified))?;
                }
                finish_csv(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for Vec<HeaderField> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for field in self {
                    wtr.serialize(field)?;
                }
                finish_csv(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for Vec<TypeBlockField> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for field in self {
                    wtr.serialize(field)?;
                }
                finish_csv(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for FilingSummary {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for row in self.rows() {
                    wtr.serialize(&row)?;
                }
                finish_csv(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

/// Everything extracted from one filing, for single-document export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingExport {
    /// Submission the bundle was extracted from.
    pub source: Option<PathBuf>,

    /// Reporting period as `YYYYMMDD`.
    pub report_date: String,

    /// Where the reporting period was found.
    pub report_date_source: DateSource,

    /// Filer metadata.
    pub summary: FilingSummary,

    /// Holdings table.
    pub holdings: HoldingTable,

    /// SEC-HEADER fields.
    pub header: Vec<HeaderField>,

    /// Legacy type block fields.
    pub type_block: Vec<TypeBlockField>,

    /// Numeric fields dropped during coercion.
    pub skipped: Vec<FieldCoercionSkipped>,
}

impl FilingExport {
    /// Builds an unclassified bundle from an extraction.
    pub fn from_extract(extract: &FilingExtract) -> Self {
        Self {
            source: extract.source.clone(),
            report_date: extract.report_date.as_str().to_string(),
            report_date_source: extract.report_date.source(),
            summary: extract.summary.clone(),
            holdings: HoldingTable::new(&extract.holdings, extract.value_unit),
            header: extract.header.clone(),
            type_block: extract.type_block.clone(),
            skipped: extract.skipped.clone(),
        }
    }
}

impl Exporter for FilingExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => Err(ExportError::InvalidFormat(
                "a filing bundle has several tables; export each sheet to CSV separately"
                    .to_string(),
            )),
            _ => to_json(self, format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(title: &str, value: Option<i64>) -> HoldingRecord {
        HoldingRecord {
            issuer_name: "ACME CORP".to_string(),
            class_title: title.to_string(),
            cusip: "000000000".to_string(),
            value,
            shares_or_principal: Some(100),
            shares_type: "SH".to_string(),
            discretion: "SOLE".to_string(),
            ..HoldingRecord::default()
        }
    }

    #[test]
    fn test_holding_table_csv() {
        let table = HoldingTable::new(&[holding("COM", Some(1234))], ValueUnit::Dollars);
        let csv = table.export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                "issuer_name,class_title,cusip,value_usd,shares_or_principal,shares_type,\
                 discretion,other_manager,vote_sole,vote_shared,vote_none"
            )
        );
        assert_eq!(lines.next(), Some("ACME CORP,COM,000000000,1234,100,SH,SOLE,,,,"));
    }

    #[test]
    fn test_holding_table_thousands_column() {
        let table = HoldingTable::new(&[holding("COM", None)], ValueUnit::ThousandsOfDollars);
        assert_eq!(table.columns()[3], "value_usd_thousands");
        let csv = table.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("ACME CORP,COM,000000000,,100"));
    }

    #[test]
    fn test_annotated_columns() {
        let mut table = HoldingTable::new(&[holding("PFD", Some(1))], ValueUnit::Dollars);
        assert!(!table.is_classified());
        table.annotate(|title| ClassAnnotation {
            category: format!("category of {title}"),
            title_normalized: title.to_lowercase(),
        });
        assert!(table.is_classified());
        assert_eq!(table.columns().len(), 13);

        let csv = table.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.lines().next().unwrap().ends_with("class_category,class_title_normalized"));
        assert!(csv.contains("category of PFD,pfd"));
    }

    #[test]
    fn test_holding_table_json() {
        let table = HoldingTable::new(&[holding("COM", Some(5))], ValueUnit::Dollars);
        let json = table.export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"value_unit\":\"dollars\""));
        assert!(json.contains("\"issuer_name\":\"ACME CORP\""));
        assert!(!json.contains("class_category"));

        let pretty = table.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(pretty.contains("  "));
    }

    #[test]
    fn test_header_fields_csv() {
        let fields = vec![HeaderField::new("FILER > COMPANY DATA", "CENTRAL INDEX KEY", "1")];
        let csv = fields.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "section_path,field,value\nFILER > COMPANY DATA,CENTRAL INDEX KEY,1\n"
        );
    }

    #[test]
    fn test_type_block_csv() {
        let fields = vec![TypeBlockField::new("Check here if Amendment", "Yes")];
        let csv = fields.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(csv, "field,value\nCheck here if Amendment,Yes\n");
    }

    #[test]
    fn test_summary_csv() {
        let summary = FilingSummary {
            cik: "0001234567".to_string(),
            ..FilingSummary::default()
        };
        let csv = summary.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("Field,Value\nAccession_Number,\n"));
        assert!(csv.contains("CIK,0001234567\n"));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
