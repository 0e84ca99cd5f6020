//! On-disk layout for extracted filings.
//!
//! Output is grouped by issuer under a base directory:
//!
//! ```text
//! <base>/<issuer>/<YYYYMMDD>_infotable.csv
//! <base>/<issuer>/<YYYYMMDD>_filing_data.csv
//! <base>/<issuer>/<YYYYMMDD>_header.csv
//! <base>/<issuer>/<YYYYMMDD>_13fhr.csv
//! <base>/<issuer>/<YYYYMMDD>.json
//! ```

use crate::export::{ExportFormat, Exporter, FilingExport, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory component under which raw submissions are stored per issuer.
pub const RAW_ROOT_MARKER: &str = "raw_13F_HR";

/// Issuer name used when none can be derived from the source path.
pub const UNKNOWN_ISSUER: &str = "unknown_issuer";

/// Default base directory for extracted output.
pub const DEFAULT_OUTPUT_DIR: &str = "data/extracted_13F_HR";

/// Derives the issuer directory name from a submission path.
///
/// The component right after [`RAW_ROOT_MARKER`] wins; otherwise the name of
/// the file's parent directory is used.
///
/// ```
/// use std::path::Path;
/// use thirteenf_output::layout::derive_issuer;
///
/// assert_eq!(derive_issuer(Path::new("data/raw_13F_HR/acme/2024/q1.txt")), "acme");
/// assert_eq!(derive_issuer(Path::new("downloads/acme/q1.txt")), "acme");
/// assert_eq!(derive_issuer(Path::new("q1.txt")), "unknown_issuer");
/// ```
pub fn derive_issuer(path: &Path) -> String {
    let parts: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    if let Some(pos) = parts.iter().position(|p| *p == RAW_ROOT_MARKER)
        && let Some(issuer) = parts.get(pos + 1)
    {
        return (*issuer).to_string();
    }

    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map_or_else(|| UNKNOWN_ISSUER.to_string(), str::to_string)
}

/// One output table of a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    /// Holdings table
    Holdings,
    /// Filer summary rows
    FilingData,
    /// SEC-HEADER fields
    Header,
    /// Legacy type block fields
    TypeBlock,
}

impl Sheet {
    /// All sheets in write order.
    pub const fn all() -> &'static [Self] {
        &[Self::Holdings, Self::FilingData, Self::Header, Self::TypeBlock]
    }

    /// File name suffix following the report date.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Holdings => "infotable",
            Self::FilingData => "filing_data",
            Self::Header => "header",
            Self::TypeBlock => "13fhr",
        }
    }
}

/// Output directory layout rooted at a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    base: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputLayout {
    /// Creates a layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory for the issuer of a submission.
    pub fn issuer_dir(&self, source: Option<&Path>) -> PathBuf {
        let issuer = source.map_or_else(|| UNKNOWN_ISSUER.to_string(), derive_issuer);
        self.base.join(issuer)
    }

    /// Path of one CSV sheet.
    pub fn sheet_path(&self, source: Option<&Path>, report_date: &str, sheet: Sheet) -> PathBuf {
        self.issuer_dir(source)
            .join(format!("{report_date}_{}.csv", sheet.suffix()))
    }

    /// Path of the JSON bundle.
    pub fn bundle_path(&self, source: Option<&Path>, report_date: &str) -> PathBuf {
        self.issuer_dir(source).join(format!("{report_date}.json"))
    }

    /// Writes a filing and returns the paths written.
    ///
    /// CSV output writes one file per non-empty sheet. JSON output writes
    /// the whole bundle to a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot be
    /// serialized or written.
    pub fn write_filing(
        &self,
        filing: &FilingExport,
        format: ExportFormat,
    ) -> Result<Vec<PathBuf>> {
        let source = filing.source.as_deref();
        fs::create_dir_all(self.issuer_dir(source))?;

        if format != ExportFormat::Csv {
            let path = self.bundle_path(source, &filing.report_date);
            filing.export_to_file(&path, format)?;
            debug!(path = %path.display(), "wrote filing bundle");
            return Ok(vec![path]);
        }

        let mut written = Vec::new();
        for &sheet in Sheet::all() {
            let exporter: &dyn Exporter = match sheet {
                Sheet::Holdings if !filing.holdings.is_empty() => &filing.holdings,
                Sheet::FilingData if !filing.summary.is_empty() => &filing.summary,
                Sheet::Header if !filing.header.is_empty() => &filing.header,
                Sheet::TypeBlock if !filing.type_block.is_empty() => &filing.type_block,
                _ => continue,
            };
            let path = self.sheet_path(source, &filing.report_date, sheet);
            exporter.export_to_file(&path, format)?;
            debug!(path = %path.display(), sheet = sheet.suffix(), "wrote sheet");
            written.push(path);
        }
        Ok(written)
    }
}
