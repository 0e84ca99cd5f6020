#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/thirteenf/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cascade;
pub mod document;
pub mod error;
pub mod extract;
pub mod filing;

pub use document::FilingDocument;
pub use error::{ExtractError, Result};
pub use extract::{ExtractConfig, Extractor, FilingExtract, ValueUnit};
pub use filing::{
    DateSource, FieldCoercionSkipped, FilingSummary, HeaderField, HoldingRecord, ReportDate,
    SummaryRow, TypeBlockField, TypeBlockMarkers,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
