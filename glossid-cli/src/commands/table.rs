//! Table command: frequency-table export

use crate::{logging, report, training};
use anyhow::{Context, Result};
use clap::Args;
use glossid_core::Corpus;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Corpus file to profile
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Language label recorded on the profile
    #[arg(short, long, value_name = "LANG")]
    pub language: String,

    /// Output CSV file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word budget; omit to profile the whole corpus
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Draw budgeted lines in random order instead of sequentially
    #[arg(long, requires = "words")]
    pub randomized: bool,

    /// Seed for --randomized
    #[arg(long, env = "GLOSSID_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        let corpus = Corpus::from_file(&self.input);
        let profile = training::build_sample(
            &corpus,
            &self.language,
            self.words,
            self.randomized,
            self.seed,
        )?;
        log::info!(
            "{} bigrams over {} words from {}",
            profile.len(),
            profile.word_count(),
            self.input.display()
        );

        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("creating table file {}", path.display()))?;
                report::write_frequency_table(&mut file, &profile)?;
            }
            None => {
                report::write_frequency_table(&mut io::stdout().lock(), &profile)?;
            }
        }
        Ok(())
    }
}
