//! Identify command: classify one sample against training corpora

use crate::report::IdentificationReport;
use crate::training::TrainingSpec;
use crate::{logging, training};
use anyhow::Result;
use clap::Args;
use glossid_core::{classify, label_candidates, Classification, Corpus};
use std::path::PathBuf;

/// Output formats for identification results
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// Candidate distances and the decision, one per line
    Text,
    /// JSON report with candidates ascending by distance
    Json,
}

/// Arguments for the identify command
#[derive(Debug, Args)]
pub struct IdentifyArgs {
    /// Sample file to identify
    #[arg(short, long, value_name = "FILE")]
    pub sample: PathBuf,

    /// Training corpora as LANG=FILE pairs
    #[arg(short = 't', long = "train", value_name = "LANG=FILE", required = true)]
    pub train: Vec<TrainingSpec>,

    /// Word budget for the sample profile
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Randomize budgeted sampling of the sample
    #[arg(long, requires = "words")]
    pub randomized: bool,

    /// Seed for --randomized
    #[arg(long, env = "GLOSSID_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl IdentifyArgs {
    /// Execute the identify command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        let candidates = training::load_profiles(&self.train)?;
        let sample = training::build_sample(
            &Corpus::from_file(&self.sample),
            "sample",
            self.words,
            self.randomized,
            self.seed,
        )?;
        log::info!(
            "sample {} holds {} bigrams over {} words",
            self.sample.display(),
            sample.len(),
            sample.word_count()
        );

        let labels = label_candidates(&sample, &candidates);
        let outcome = classify(&labels);
        let report = IdentificationReport::new(&outcome, &labels);

        match self.format {
            ReportFormat::Text => {
                for candidate in &report.candidates {
                    println!("{:<16} {}", candidate.language, candidate.distance);
                }
                match &outcome {
                    Classification::Identified(language) => println!("identified: {language}"),
                    Classification::Undecided => println!("undecided"),
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
                println!();
            }
        }
        Ok(())
    }
}
