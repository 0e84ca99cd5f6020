//! Submission text loading.
//!
//! EDGAR complete submission files are nominally ASCII but routinely carry
//! stray Latin-1 bytes and BOMs. Decoding is lossy: malformed sequences are
//! replaced, never fatal.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Raw decoded text of one complete submission file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingDocument {
    text: String,
    source: Option<PathBuf>,
}

impl FilingDocument {
    /// Wraps already decoded text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Decodes raw bytes as UTF-8, replacing malformed sequences.
    ///
    /// A leading byte-order mark is removed.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
        if had_errors {
            warn!(
                bytes = bytes.len(),
                "submission contains malformed UTF-8; replaced invalid sequences"
            );
        }
        Self::from_text(text.into_owned())
    }

    /// Reads and decodes a submission file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`](crate::ExtractError::Io) if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read submission");
        let mut document = Self::from_bytes(&bytes);
        document.source = Some(path.to_path_buf());
        Ok(document)
    }

    /// Decoded submission text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path the document was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl From<String> for FilingDocument {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl AsRef<str> for FilingDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
