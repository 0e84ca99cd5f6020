//! Error types for filing extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that fail a whole filing.
///
/// Absent optional blocks (header, type block) are not errors; they surface
/// as `None` or empty row sets. Per-field coercion problems are reported as
/// [`FieldCoercionSkipped`](crate::filing::info_table::FieldCoercionSkipped)
/// diagnostics and never fail a row.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No information table could be located in the submission
    #[error("information table not found in submission")]
    TableNotFound,

    /// The located information table is not well-formed XML
    #[error("malformed information table: {0}")]
    MalformedTable(String),

    /// The information table parsed but contains no rows
    #[error("information table contains no holdings rows")]
    EmptyTable,

    /// IO error while reading a submission
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        Self::MalformedTable(err.to_string())
    }
}
