//! Live view CLI.
//!
//! Provides commands for:
//! - `watch`: Connect to a live view server and render page snapshots

mod commands;
mod error;
mod output;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::WatchArgs;
use output::Output;

/// Live view client.
#[derive(Parser)]
#[command(name = "liveview", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a server and render live page snapshots.
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for watch command
    let verbose = matches!(&cli.command, Commands::Watch(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Watch(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
