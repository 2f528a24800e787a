//! Fetch subcommand implementation.
//!
//! Handles the `rollcheck fetch` command: force a cache-bypassing re-fetch,
//! validate the body, report record counts, and optionally save a raw copy
//! of the dataset.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::source::parse_dataset;
use crate::store::ResultStore;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Re-fetch the dataset and report on it.
#[derive(Parser, Debug)]
pub struct FetchCommand {
    /// Save a raw copy of the dataset body to this path
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

impl FetchCommand {
    /// Execute the fetch command.
    ///
    /// Unlike the store's load path, an explicit fetch surfaces the failure
    /// to the user instead of silently degrading to an empty store.
    pub async fn execute(&self, cli: &crate::cli::Cli) -> CliResult<()> {
        let settings = cli.settings()?;
        let source = cli.resolve_source(&settings)?;

        let body = source.fetch_raw().await?;
        let records = parse_dataset(&body)?;

        let mut store = ResultStore::new();
        store.replace(records);

        if let Some(path) = &self.output_file {
            fs::write(path, &body)
                .map_err(|e| CliError::Other(format!("failed to write file: {}", e)))?;

            if !cli.quiet {
                output::print_success(&format!("Saved dataset to {}", path.display()));
            }
        }

        if !cli.quiet {
            output::print_info(&format!("{} from {}", store.summary(), source.location()));
        }

        Ok(())
    }
}
