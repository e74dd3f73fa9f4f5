//! Glossid command-line interface
//!
//! Experiment driver for bigram rank-distance language identification:
//! corpus preparation, frequency-table export, identification, and the
//! cross-validation and sample-size experiments.

use anyhow::Result;
use clap::Parser;
use glossid_cli::commands::Commands;

/// Bigram rank-distance language identification experiments
#[derive(Debug, Parser)]
#[command(name = "glossid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
