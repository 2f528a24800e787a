//! Lookup subcommand implementation.
//!
//! Handles the `rollcheck lookup <roll>` command.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output;
use crate::store::ResultStore;
use crate::types::Roll;
use clap::Parser;

/// Look up the result for a roll number.
#[derive(Parser, Debug)]
pub struct LookupCommand {
    /// Roll number to look up
    #[arg(value_name = "ROLL")]
    pub roll: String,

    /// Output format for the record
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl LookupCommand {
    /// Execute the lookup command.
    ///
    /// A roll absent from the dataset is a normal outcome rendered as a
    /// "no result" card, not an error.
    pub async fn execute(&self, cli: &crate::cli::Cli) -> CliResult<()> {
        let roll: Roll = self.roll.parse()?;

        let settings = cli.settings()?;
        let format = super::effective_format(self.output, &settings);
        let source = cli.resolve_source(&settings)?;

        let mut store = ResultStore::new();
        store.ensure_loaded(source.as_ref()).await;

        if store.is_empty() && !cli.quiet {
            output::print_warning("dataset could not be loaded; no results available");
        }

        match store.lookup(&roll) {
            Some(record) => match format {
                OutputFormat::Plain => output::print_result(&roll, record)?,
                OutputFormat::Json => println!("{}", output::export_string(&roll, record)
                    .map_err(|e| crate::error::CliError::Other(e.to_string()))?),
                OutputFormat::Csv => {
                    print!("{}", output::to_csv(std::iter::once((&roll, record)))?)
                }
            },
            None => match format {
                OutputFormat::Plain => output::print_not_found(&roll)?,
                OutputFormat::Json | OutputFormat::Csv => {
                    output::print_warning(&format!("no result found for roll {}", roll));
                }
            },
        }

        Ok(())
    }
}
