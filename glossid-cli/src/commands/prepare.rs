//! Prepare command: tag stripping and corpus splitting

use crate::{corpus_prep, logging};
use anyhow::{bail, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Arguments for the prepare command
#[derive(Debug, Args)]
pub struct PrepareArgs {
    /// Tagged corpus file to strip
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the stripped corpus
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Also split the stripped corpus; fraction of lines for the training side
    #[arg(long, value_name = "FRACTION")]
    pub split: Option<f64>,

    /// Training-side output for --split
    #[arg(long, value_name = "FILE", requires = "split")]
    pub train: Option<PathBuf>,

    /// Test-side output for --split
    #[arg(long, value_name = "FILE", requires = "split")]
    pub test: Option<PathBuf>,

    /// Seed for the split's random line assignment
    #[arg(long, env = "GLOSSID_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PrepareArgs {
    /// Execute the prepare command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        corpus_prep::strip_tags(&self.input, &self.output)?;
        log::info!(
            "stripped {} into {}",
            self.input.display(),
            self.output.display()
        );

        if let Some(fraction) = self.split {
            let (train, test) = match (&self.train, &self.test) {
                (Some(train), Some(test)) => (train, test),
                _ => bail!("--split requires --train and --test"),
            };
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            corpus_prep::split_corpus(fraction, &self.output, train, test, &mut rng)?;
            log::info!(
                "split {} at {} into {} and {}",
                self.output.display(),
                fraction,
                train.display(),
                test.display()
            );
        }
        Ok(())
    }
}
