use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::sync::{SyncArgs, run_cleanup, run_generate, run_status};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "langsync",
    about = "Keep translation dictionaries embedded in source files in sync with the base language",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert placeholder entries for keys missing from secondary catalogs.
    Generate(SyncArgs),

    /// Remove entries whose keys no longer exist in the base catalog.
    Cleanup(SyncArgs),

    /// Report per-language drift without writing any file.
    Status(SyncArgs),
}

/// Parse arguments from the environment and run.
pub fn run_from_env() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli)
}

/// Dispatch a parsed CLI.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Cleanup(args) => run_cleanup(args),
        Commands::Status(args) => run_status(args),
    }
}

fn init_tracing() {
    // Report lines go to stdout; diagnostics stay on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
