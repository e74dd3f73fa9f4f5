//! Min-sample command: home in on the smallest reliable sample size

use crate::training::TrainingSpec;
use crate::{logging, progress, report, training};
use anyhow::{ensure, Context, Result};
use clap::Args;
use glossid_core::{classify, label_candidates, Corpus, RandomSampler};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the min-sample command
#[derive(Debug, Args)]
pub struct MinSampleArgs {
    /// Test corpus to resample
    #[arg(short, long, value_name = "FILE")]
    pub sample: PathBuf,

    /// Expected language of the sample
    #[arg(short, long, value_name = "LANG")]
    pub language: String,

    /// Training corpora as LANG=FILE pairs, including the expected language
    #[arg(short = 't', long = "train", value_name = "LANG=FILE", required = true)]
    pub train: Vec<TrainingSpec>,

    /// Accuracy that must be maintained while the budget shrinks
    #[arg(long, default_value_t = 0.95, value_name = "FRACTION")]
    pub target: f64,

    /// Trials per probed budget
    #[arg(long, default_value_t = 1000, value_name = "N")]
    pub trials: usize,

    /// Seed for the randomized resampling
    #[arg(long, env = "GLOSSID_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Append one CSV row per comparison to this file
    #[arg(long, value_name = "FILE")]
    pub log_csv: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MinSampleArgs {
    /// Execute the min-sample command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);
        ensure!(
            (0.0..=1.0).contains(&self.target),
            "accuracy target {} outside [0.0, 1.0]",
            self.target
        );
        ensure!(self.trials > 0, "--trials must be at least 1");

        let training = training::load_profiles(&self.train)?;
        let mut sampler = RandomSampler::new(&Corpus::from_file(&self.sample), &self.language, 0)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut writer = match &self.log_csv {
            Some(path) => Some(BufWriter::new(File::create(path).with_context(|| {
                format!("creating min-sample log {}", path.display())
            })?)),
            None => None,
        };

        // Halve the budget while accuracy holds; equal consecutive budgets
        // mean the search cannot move any further.
        let mut current = sampler.total_words();
        let mut reliable = 0;
        while current != reliable {
            sampler.set_budget(current);
            let bar = progress::trial_bar(self.trials as u64, self.quiet);

            let mut correct = 0;
            for _ in 0..self.trials {
                let probe = sampler.resample(&mut rng);
                let labels = label_candidates(&probe, &training);
                if let Some(writer) = writer.as_mut() {
                    for (train, label) in training.iter().zip(&labels) {
                        report::write_comparison_row(writer, &probe, train, label)?;
                    }
                }
                if classify(&labels).language() == Some(self.language.as_str()) {
                    correct += 1;
                }
                bar.inc(1);
            }
            bar.finish_and_clear();

            let accuracy = correct as f64 / self.trials as f64;
            println!(
                "[{}] {current} words: {:.1}% correct",
                self.language,
                accuracy * 100.0
            );
            if accuracy >= self.target {
                reliable = current;
                current /= 2;
            } else {
                break;
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }

        println!(
            "smallest reliable sample for {}: {reliable} words",
            self.language
        );
        Ok(())
    }
}
