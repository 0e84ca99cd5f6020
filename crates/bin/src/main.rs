//! thirteenf CLI binary.
//!
//! Extracts holdings from SEC 13F-HR submissions and classifies their
//! security class titles.

mod integration;

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use integration::batch::{BatchConfig, BatchError, DEFAULT_CONCURRENCY, ExtractJob, run_batch};
use integration::inspect::Inspection;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use thirteenf::taxonomy::{ClassCategory, classify, coarse_category, describe_warrant};
use thirteenf_output::{DEFAULT_OUTPUT_DIR, ExportFormat, OutputLayout};
use thirteenf_parse::{ExtractConfig, ExtractError, Extractor, FilingDocument, ValueUnit};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thirteenf")]
#[command(about = "thirteenf: SEC 13F-HR holdings extraction", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract holdings, header and type block from submissions
    Extract {
        /// Submission text files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Base output directory
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,

        /// Add class category columns to holdings
        #[arg(long)]
        classify: bool,

        /// Unit of the reported value column
        #[arg(long, value_enum, default_value_t = UnitArg::Dollars)]
        value_unit: UnitArg,

        /// Filings processed at once
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,

        /// Stop at the first failed filing
        #[arg(long)]
        fail_fast: bool,
    },

    /// Classify security class titles
    Classify {
        /// Class titles
        #[arg(required = true)]
        titles: Vec<String>,

        /// Show warrant expiry descriptions
        #[arg(long)]
        warrants: bool,

        /// Show the coarse ETF / Warrant bucket
        #[arg(long)]
        coarse: bool,
    },

    /// List class categories in evaluation order
    Categories,

    /// Show what a submission contains
    Inspect {
        /// Submission text file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    PrettyJson,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
            FormatArg::PrettyJson => Self::PrettyJson,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Dollars,
    Thousands,
}

impl From<UnitArg> for ValueUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Dollars => Self::Dollars,
            UnitArg::Thousands => Self::ThousandsOfDollars,
        }
    }
}

/// Top-level CLI error.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Reading or parsing a submission failed.
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
    /// A filing of a fail-fast batch failed.
    #[error(transparent)]
    Filing(#[from] BatchError),
    /// Some filings of a batch failed.
    #[error("{failed} of {total} filings failed")]
    Batch { failed: usize, total: usize },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Extract {
            inputs,
            out_dir,
            format,
            classify,
            value_unit,
            concurrency,
            fail_fast,
        } => {
            let job = ExtractJob {
                extractor: Extractor::new(ExtractConfig {
                    value_unit: value_unit.into(),
                    ..ExtractConfig::default()
                }),
                layout: OutputLayout::new(out_dir),
                format: format.into(),
                classify,
            };
            let config = BatchConfig {
                concurrency,
                fail_fast,
            };
            extract_filings(inputs, job, &config).await?;
        }
        Commands::Classify {
            titles,
            warrants,
            coarse,
        } => classify_titles(&titles, warrants, coarse),
        Commands::Categories => list_categories(),
        Commands::Inspect { input } => inspect_filing(&input)?,
    }

    Ok(())
}

async fn extract_filings(
    inputs: Vec<PathBuf>,
    job: ExtractJob,
    config: &BatchConfig,
) -> Result<(), CliError> {
    let total = inputs.len();

    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = run_batch(inputs, job, config, Some(&pb)).await;
    pb.finish_with_message(format!(
        "Extracted {} of {} filings",
        report.succeeded, total
    ));

    for path in &report.written {
        println!("Written: {}", path.display());
    }

    if report.is_success() {
        return Ok(());
    }
    if config.fail_fast {
        let mut failures = report.failures;
        return Err(failures.remove(0).into());
    }
    for failure in &report.failures {
        eprintln!("Failed: {}", failure);
    }
    Err(CliError::Batch {
        failed: report.failures.len(),
        total,
    })
}

fn classify_titles(titles: &[String], warrants: bool, coarse: bool) {
    for title in titles {
        let mut line = format!("{}\t{}", title, classify(title));
        if warrants {
            line.push('\t');
            line.push_str(&describe_warrant(title));
        }
        if coarse {
            line.push('\t');
            line.push_str(coarse_category(title));
        }
        println!("{}", line);
    }
}

fn list_categories() {
    println!("Class Categories (evaluation order):");
    println!("====================================\n");

    for (i, category) in ClassCategory::all().iter().enumerate() {
        println!("{:2} - {:<44} {}", i + 1, category.name(), category.group());
    }
}

fn inspect_filing(input: &Path) -> Result<(), CliError> {
    let document = FilingDocument::open(input)?;
    print!("{}", Inspection::of(&document));
    Ok(())
}
