//! Extraction orchestrator.
//!
//! Runs the component parsers over one submission in a fixed order and
//! bundles the results. The information table is mandatory; header and type
//! block are optional and degrade to empty row sets.

use crate::document::FilingDocument;
use crate::error::{ExtractError, Result};
use crate::filing::{
    FieldCoercionSkipped, FilingSummary, HeaderField, HoldingRecord, ReportDate, TypeBlockField,
    TypeBlockMarkers, locate_header, locate_info_table, locate_type_block, parse_header,
    parse_info_table, parse_type_block, resolve_report_date,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Unit of the information table `value` column.
///
/// Filings for periods before 2023 report thousands of dollars; later
/// filings report whole dollars. The parser never rescales, so the unit is
/// carried alongside the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueUnit {
    /// Whole US dollars
    #[default]
    #[display("dollars")]
    Dollars,
    /// Thousands of US dollars
    #[display("thousands of dollars")]
    ThousandsOfDollars,
}

impl ValueUnit {
    /// Column name used for the value field on export.
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Dollars => "value_usd",
            Self::ThousandsOfDollars => "value_usd_thousands",
        }
    }
}

/// Configuration for an extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Unit attached to the `value` column.
    pub value_unit: ValueUnit,
    /// Markers delimiting the legacy type block.
    pub type_block: TypeBlockMarkers,
}

/// Everything extracted from one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingExtract {
    /// Path the submission was read from, if any
    pub source: Option<PathBuf>,
    /// Resolved reporting period
    pub report_date: ReportDate,
    /// Unit of [`HoldingRecord::value`]
    pub value_unit: ValueUnit,
    /// Information table rows, in document order
    pub holdings: Vec<HoldingRecord>,
    /// Numeric fields dropped during coercion
    pub skipped: Vec<FieldCoercionSkipped>,
    /// SEC-HEADER fields; empty if the block is absent
    pub header: Vec<HeaderField>,
    /// Legacy type block fields; empty if the block is absent
    pub type_block: Vec<TypeBlockField>,
    /// Filer metadata derived from the header
    pub summary: FilingSummary,
}

impl FilingExtract {
    /// Returns true if a SEC-HEADER block was found.
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Returns true if a legacy type block was found.
    pub fn has_type_block(&self) -> bool {
        !self.type_block.is_empty()
    }
}

/// Runs the extraction pipeline over submissions.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor with the given configuration.
    pub const fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts a loaded submission.
    ///
    /// # Errors
    ///
    /// Fails with [`ExtractError::TableNotFound`], [`ExtractError::MalformedTable`]
    /// or [`ExtractError::EmptyTable`] when the information table is missing,
    /// unparseable or has no rows.
    pub fn extract(&self, document: &FilingDocument) -> Result<FilingExtract> {
        let text = document.text();
        let report_date = resolve_report_date(text);

        let xml = locate_info_table(text).ok_or(ExtractError::TableNotFound)?;
        let table = parse_info_table(xml)?;
        if table.rows.is_empty() {
            return Err(ExtractError::EmptyTable);
        }

        let header = locate_header(text).map(parse_header).unwrap_or_default();
        let type_block = match locate_type_block(text, &self.config.type_block) {
            Some(block) => parse_type_block(block),
            None => {
                debug!("submission has no legacy type block");
                Vec::new()
            }
        };
        let summary = FilingSummary::from_header(&header);

        if !table.skipped.is_empty() {
            warn!(
                source = ?document.source(),
                skipped = table.skipped.len(),
                "some numeric fields could not be coerced"
            );
        }
        debug!(
            source = ?document.source(),
            report_date = %report_date,
            holdings = table.rows.len(),
            header_fields = header.len(),
            type_block_fields = type_block.len(),
            "extracted filing"
        );

        Ok(FilingExtract {
            source: document.source().map(Path::to_path_buf),
            report_date,
            value_unit: self.config.value_unit,
            holdings: table.rows,
            skipped: table.skipped,
            header,
            type_block,
            summary,
        })
    }

    /// Reads and extracts a submission file.
    ///
    /// # Errors
    ///
    /// Fails with [`ExtractError::Io`] if the file cannot be read, or as
    /// [`Extractor::extract`] does.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<FilingExtract> {
        let document = FilingDocument::open(path)?;
        self.extract(&document)
    }
}
