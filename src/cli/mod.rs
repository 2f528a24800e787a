//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `rollcheck lookup <roll>` - Look up a result
//! - `rollcheck export <roll>` - Export a record as JSON
//! - `rollcheck fetch` - Re-fetch the dataset and report on it
//! - `rollcheck list` - List dataset contents

mod export;
mod fetch;
mod list;
mod lookup;

pub use export::ExportCommand;
pub use fetch::FetchCommand;
pub use list::ListCommand;
pub use lookup::LookupCommand;

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::source::{create_source, BoxedSource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// rollcheck - look up exam results from a static JSON dataset.
///
/// The dataset maps roll numbers to result records: a pass carrying a GPA,
/// or a referral carrying the subject codes to retake. Results can be
/// rendered as a card, exported as JSON, or listed in bulk.
#[derive(Parser, Debug)]
#[command(name = "rollcheck")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up exam results from a static JSON dataset", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Dataset location (URL or local path), overriding the configured one
    #[arg(short = 'u', long, global = true, value_name = "URL_OR_PATH")]
    pub url: Option<String>,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load settings, honoring an explicit `--config` path.
    pub fn settings(&self) -> CliResult<AppSettings> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Resolve the dataset source from the `--url` flag or settings.
    pub fn resolve_source(&self, settings: &AppSettings) -> CliResult<BoxedSource> {
        let location = self
            .url
            .as_deref()
            .or(settings.dataset_url.as_deref())
            .ok_or_else(|| {
                CliError::Other(
                    "no dataset location configured; pass --url or set dataset_url in settings.json"
                        .to_string(),
                )
            })?;

        let source = create_source(location, Duration::from_millis(settings.timeout_ms))?;
        Ok(source)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the result for a roll number
    #[command(alias = "l")]
    Lookup(LookupCommand),

    /// Export a record as a single-key JSON document
    #[command(alias = "e")]
    Export(ExportCommand),

    /// Re-fetch the dataset, bypassing caches, and report on it
    #[command(alias = "f")]
    Fetch(FetchCommand),

    /// List the dataset contents
    #[command(alias = "ls")]
    List(ListCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Pick the effective output format: explicit flag, then configured default.
fn effective_format(flag: Option<OutputFormat>, settings: &AppSettings) -> OutputFormat {
    flag.unwrap_or_else(|| {
        settings
            .default_output_format
            .parse()
            .unwrap_or_default()
    })
}
