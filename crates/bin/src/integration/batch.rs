//! Batch extraction pipeline.
//!
//! Extracts many submissions concurrently. Parsing is synchronous, so each
//! filing runs on tokio's blocking pool and results are gathered through a
//! bounded `buffer_unordered` stream.

use super::annotate::classify_holdings;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thirteenf_output::{ExportError, ExportFormat, FilingExport, OutputLayout};
use thirteenf_parse::{ExtractError, Extractor};
use tracing::{debug, warn};

/// Default number of filings processed at once.
pub(crate) const DEFAULT_CONCURRENCY: usize = 8;

/// Error for one filing of a batch.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BatchError {
    /// Extraction failed.
    #[error("{}: {source}", .path.display())]
    Extract {
        /// Submission path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: ExtractError,
    },
    /// Writing output failed.
    #[error("{}: {source}", .path.display())]
    Export {
        /// Submission path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: ExportError,
    },
    /// The blocking task panicked or was cancelled.
    #[error("{}: extraction task failed: {source}", .path.display())]
    Task {
        /// Submission path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Configuration for batch runs.
#[derive(Debug, Clone)]
pub(crate) struct BatchConfig {
    /// Maximum filings in flight.
    pub concurrency: usize,
    /// Stop at the first failed filing.
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            fail_fast: false,
        }
    }
}

/// Work applied to every filing of a batch.
#[derive(Debug, Clone)]
pub(crate) struct ExtractJob {
    /// Configured extractor.
    pub extractor: Extractor,
    /// Where output is written.
    pub layout: OutputLayout,
    /// Output format.
    pub format: ExportFormat,
    /// Whether to add classification columns.
    pub classify: bool,
}

impl ExtractJob {
    /// Extracts one submission and writes its output.
    pub(crate) fn process(&self, path: &Path) -> Result<Vec<PathBuf>, BatchError> {
        let extract = self
            .extractor
            .extract_path(path)
            .map_err(|source| BatchError::Extract {
                path: path.to_path_buf(),
                source,
            })?;

        let mut export = FilingExport::from_extract(&extract);
        if self.classify {
            classify_holdings(&mut export.holdings);
        }

        self.layout
            .write_filing(&export, self.format)
            .map_err(|source| BatchError::Export {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub(crate) struct BatchReport {
    /// Files written, in completion order.
    pub written: Vec<PathBuf>,
    /// Filings that failed.
    pub failures: Vec<BatchError>,
    /// Filings that completed successfully.
    pub succeeded: usize,
}

impl BatchReport {
    /// Returns true if no filing failed.
    pub(crate) fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs `job` over `inputs` with bounded concurrency.
///
/// With `fail_fast`, the first failure stops the batch. Filings already on
/// the blocking pool still run to completion but their results are dropped.
pub(crate) async fn run_batch(
    inputs: Vec<PathBuf>,
    job: ExtractJob,
    config: &BatchConfig,
    progress: Option<&ProgressBar>,
) -> BatchReport {
    let job = Arc::new(job);
    let concurrency = config.concurrency.max(1);

    if let Some(pb) = progress {
        pb.set_length(inputs.len() as u64);
        pb.set_message(format!(
            "Extracting {} filings ({} concurrent)...",
            inputs.len(),
            concurrency
        ));
    }

    let mut outcomes = stream::iter(inputs)
        .map(|path| {
            let job = Arc::clone(&job);
            async move {
                let task_path = path.clone();
                match tokio::task::spawn_blocking(move || job.process(&task_path)).await {
                    Ok(result) => result,
                    Err(source) => Err(BatchError::Task { path, source }),
                }
            }
        })
        .buffer_unordered(concurrency);

    let mut report = BatchReport::default();
    while let Some(outcome) = outcomes.next().await {
        if let Some(pb) = progress {
            pb.inc(1);
        }
        match outcome {
            Ok(paths) => {
                debug!(files = paths.len(), "filing written");
                report.succeeded += 1;
                report.written.extend(paths);
            }
            Err(e) => {
                if let Some(pb) = progress {
                    pb.suspend(|| warn!("{e}"));
                } else {
                    warn!("{e}");
                }
                report.failures.push(e);
                if config.fail_fast {
                    break;
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FILING: &str = r#"<SEC-HEADER>
CONFORMED PERIOD OF REPORT:	20240630
</SEC-HEADER>
<informationTable xmlns="http://www.sec.gov/edgar/document/thirteenf/informationtable">
  <infoTable>
    <nameOfIssuer>ACME CORP</nameOfIssuer>
    <titleOfClass>COM</titleOfClass>
    <cusip>000000000</cusip>
    <value>100</value>
  </infoTable>
</informationTable>
"#;

    fn job(out: &Path) -> ExtractJob {
        ExtractJob {
            extractor: Extractor::default(),
            layout: OutputLayout::new(out),
            format: ExportFormat::Csv,
            classify: true,
        }
    }

    #[tokio::test]
    async fn test_batch_collects_failures() {
        let tmp = TempDir::new().unwrap();
        let issuer = tmp.path().join("raw_13F_HR").join("acme");
        fs::create_dir_all(&issuer).unwrap();
        let good = issuer.join("good.txt");
        fs::write(&good, FILING).unwrap();
        let missing = issuer.join("missing.txt");

        let report = run_batch(
            vec![good, missing],
            job(&tmp.path().join("out")),
            &BatchConfig::default(),
            None,
        )
        .await;

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(!report.is_success());
        assert!(matches!(report.failures[0], BatchError::Extract { .. }));

        let holdings = tmp.path().join("out/acme/20240630_infotable.csv");
        assert!(report.written.contains(&holdings));
        let csv = fs::read_to_string(holdings).unwrap();
        assert!(csv.lines().next().unwrap().ends_with("class_title_normalized"));
    }

    #[tokio::test]
    async fn test_fail_fast_stops_batch() {
        let tmp = TempDir::new().unwrap();
        let inputs = (0..4)
            .map(|i| tmp.path().join(format!("missing_{i}.txt")))
            .collect();
        let config = BatchConfig {
            concurrency: 1,
            fail_fast: true,
        };

        let report = run_batch(inputs, job(tmp.path()), &config, None).await;
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.succeeded, 0);
    }
}
