#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/thirteenf/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod layout;

pub use export::{
    ClassAnnotation, ExportError, ExportFormat, Exporter, FilingExport, HoldingExport,
    HoldingTable, Result,
};
pub use layout::{DEFAULT_OUTPUT_DIR, OutputLayout, Sheet, derive_issuer};
