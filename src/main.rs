//! rollcheck binary entrypoint.

use clap::Parser;
use rollcheck::cli::{Cli, Commands};
use rollcheck::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Lookup(cmd) => cmd.execute(&cli).await,
        Commands::Export(cmd) => cmd.execute(&cli).await,
        Commands::Fetch(cmd) => cmd.execute(&cli).await,
        Commands::List(cmd) => cmd.execute(&cli).await,
    };

    if let Err(e) = result {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` raises the default
/// level to debug. Diagnostics go to stderr so formatted output stays clean
/// for piping.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "rollcheck=debug"
    } else {
        "rollcheck=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
