//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod cross_validate;
pub mod identify;
pub mod min_sample;
pub mod prepare;
pub mod table;
pub mod train_curve;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Strip corpus tags and split into training and test files
    Prepare(prepare::PrepareArgs),

    /// Build a bigram frequency table and export it as CSV
    Table(table::TableArgs),

    /// Identify the language of a sample against training corpora
    Identify(identify::IdentifyArgs),

    /// Run k-fold cross-validation for one language
    CrossValidate(cross_validate::CrossValidateArgs),

    /// Probe classification across growing training sample sizes
    TrainCurve(train_curve::TrainCurveArgs),

    /// Home in on the smallest reliably identifiable sample size
    MinSample(min_sample::MinSampleArgs),
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Prepare(args) => args.execute(),
            Commands::Table(args) => args.execute(),
            Commands::Identify(args) => args.execute(),
            Commands::CrossValidate(args) => args.execute(),
            Commands::TrainCurve(args) => args.execute(),
            Commands::MinSample(args) => args.execute(),
        }
    }
}
