//! Structural overview of a single submission.

use std::fmt;
use std::path::PathBuf;
use thirteenf_parse::filing::{
    locate_header, locate_info_table, locate_type_block, parse_header, parse_info_table,
    parse_type_block, resolve_report_date,
};
use thirteenf_parse::{FilingDocument, FilingSummary, ReportDate, TypeBlockMarkers};

/// State of the information table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TableStatus {
    /// No table found.
    Missing,
    /// Table found but not well formed.
    Malformed(String),
    /// Table parsed.
    Parsed {
        /// Holding rows
        rows: usize,
        /// Numeric fields dropped during coercion
        skipped: usize,
    },
}

/// What a submission contains, without failing on missing parts.
#[derive(Debug, Clone)]
pub(crate) struct Inspection {
    /// Submission path.
    pub source: Option<PathBuf>,
    /// Resolved reporting period.
    pub report_date: ReportDate,
    /// Information table state.
    pub table: TableStatus,
    /// SEC-HEADER field count, if the block exists.
    pub header_fields: Option<usize>,
    /// Type block field count, if the block exists.
    pub type_block_fields: Option<usize>,
    /// Filer metadata from the header.
    pub summary: FilingSummary,
}

impl Inspection {
    /// Inspects a decoded submission.
    pub(crate) fn of(document: &FilingDocument) -> Self {
        let text = document.text();

        let table = match locate_info_table(text).map(parse_info_table) {
            None => TableStatus::Missing,
            Some(Err(e)) => TableStatus::Malformed(e.to_string()),
            Some(Ok(parsed)) => TableStatus::Parsed {
                rows: parsed.rows.len(),
                skipped: parsed.skipped.len(),
            },
        };

        let header = locate_header(text).map(parse_header);
        let summary = header
            .as_deref()
            .map(FilingSummary::from_header)
            .unwrap_or_default();

        Self {
            source: document.source().map(PathBuf::from),
            report_date: resolve_report_date(text),
            table,
            header_fields: header.as_ref().map(Vec::len),
            type_block_fields: locate_type_block(text, &TypeBlockMarkers::default())
                .map(|block| parse_type_block(block).len()),
            summary,
        }
    }
}

fn presence(count: Option<usize>) -> String {
    count.map_or_else(
        || "absent".to_string(),
        |n| format!("present ({n} fields)"),
    )
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            writeln!(f, "Source:       {}", source.display())?;
        }
        writeln!(
            f,
            "Report date:  {} ({})",
            self.report_date,
            self.report_date.source()
        )?;
        match &self.table {
            TableStatus::Missing => writeln!(f, "Info table:   absent")?,
            TableStatus::Malformed(reason) => writeln!(f, "Info table:   malformed ({reason})")?,
            TableStatus::Parsed { rows, skipped } => writeln!(
                f,
                "Info table:   {rows} rows, {skipped} skipped numeric field(s)"
            )?,
        }
        writeln!(f, "SEC header:   {}", presence(self.header_fields))?;
        writeln!(f, "Type block:   {}", presence(self.type_block_fields))?;
        if !self.summary.filer_name.is_empty() {
            write!(f, "Filer:        {}", self.summary.filer_name)?;
            if !self.summary.cik.is_empty() {
                write!(f, " (CIK {})", self.summary.cik)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
