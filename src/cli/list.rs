//! List subcommand implementation.
//!
//! Handles the `rollcheck list` command for dataset summaries.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ResultStore;
use clap::Parser;

/// List the dataset contents.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Maximum number of records to show
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub async fn execute(&self, cli: &crate::cli::Cli) -> CliResult<()> {
        let settings = cli.settings()?;
        let format = super::effective_format(self.output, &settings);
        let source = cli.resolve_source(&settings)?;

        let mut store = ResultStore::new();
        store.ensure_loaded(source.as_ref()).await;

        if store.is_empty() {
            if !cli.quiet {
                output::print_warning("dataset is empty or could not be loaded");
            }
            return Ok(());
        }

        let limit = self.count.unwrap_or(usize::MAX);
        let entries = store.iter().take(limit);

        match format {
            OutputFormat::Plain => output::print_listing(entries, &store)?,
            OutputFormat::Json => println!(
                "{}",
                output::dataset_string(entries).map_err(|e| CliError::Other(e.to_string()))?
            ),
            OutputFormat::Csv => print!("{}", output::to_csv(entries)?),
        }

        Ok(())
    }
}
