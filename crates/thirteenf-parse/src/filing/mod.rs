//! Parsers for the sub-formats embedded in a 13F-HR submission.

pub mod header;
pub mod info_table;
pub mod report_date;
pub mod summary;
pub mod type_block;

pub use header::{HeaderField, locate_header, parse_header};
pub use info_table::{
    FieldCoercionSkipped, HoldingRecord, ParsedTable, extract_info_table, locate_info_table,
    parse_info_table, tolerant_int,
};
pub use report_date::{DateSource, ReportDate, resolve_report_date, resolve_report_date_on};
pub use summary::{FilingSummary, SummaryRow};
pub use type_block::{TypeBlockField, TypeBlockMarkers, locate_type_block, parse_type_block};
