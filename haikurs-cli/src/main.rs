//! haikurs command-line binary

use std::process;

use clap::Parser;
use haikurs_cli::commands::Commands;

/// Find accidental haiku in article text
#[derive(Debug, Parser)]
#[command(name = "haikurs", about, version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
