//! Export subcommand implementation.
//!
//! Handles the `rollcheck export <roll>` command: writes the single-key
//! `{ roll: record }` payload to a file, or prints it for piping into a
//! clipboard utility.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ResultStore;
use crate::types::Roll;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Export a record as a single-key JSON document.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Roll number to export
    #[arg(value_name = "ROLL")]
    pub roll: String,

    /// Output file path (defaults to {roll}_result.json)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Print the payload to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub async fn execute(&self, cli: &crate::cli::Cli) -> CliResult<()> {
        let roll: Roll = self.roll.parse()?;

        let settings = cli.settings()?;
        let source = cli.resolve_source(&settings)?;

        let mut store = ResultStore::new();
        store.ensure_loaded(source.as_ref()).await;

        let record = store
            .lookup(&roll)
            .ok_or_else(|| CliError::Other(format!("no result found for roll {}", roll)))?;

        let payload = output::export_string(&roll, record)
            .map_err(|e| CliError::Other(e.to_string()))?;

        if self.stdout {
            println!("{}", payload);
            return Ok(());
        }

        let path = self
            .output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_result.json", roll)));

        fs::write(&path, &payload)
            .map_err(|e| CliError::Other(format!("failed to write file: {}", e)))?;

        if !cli.quiet {
            output::print_success(&format!("Exported roll {} to {}", roll, path.display()));
        }

        Ok(())
    }
}
