//! Integration of the parse, taxonomy and output crates for the CLI.
//!
//! This module provides the concurrent batch driver, the classification
//! pass applied to exported holdings, and submission inspection.

pub(crate) mod annotate;
pub(crate) mod batch;
pub(crate) mod inspect;
