//! Train-curve command: classification across growing training sample sizes

use crate::training::TrainingSpec;
use crate::{logging, report, training};
use anyhow::{ensure, Context, Result};
use clap::Args;
use glossid_core::{
    classify, rank_distance, Corpus, DistanceLabel, ProfileBuilder, RandomSampler,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the train-curve command
#[derive(Debug, Args)]
pub struct TrainCurveArgs {
    /// Corpus the growing training samples are drawn from
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Language of the corpus under test
    #[arg(short, long, value_name = "LANG")]
    pub language: String,

    /// Fixed test sample file for the same language
    #[arg(long, value_name = "FILE")]
    pub test: PathBuf,

    /// Fixed other-language training corpora as LANG=FILE pairs
    #[arg(short = 't', long = "train", value_name = "LANG=FILE", required = true)]
    pub train: Vec<TrainingSpec>,

    /// Number of training sizes to probe; also sets the growth step
    #[arg(short, long, default_value_t = 100, value_name = "N")]
    pub runs: usize,

    /// Seed for the randomized training draws
    #[arg(long, env = "GLOSSID_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Append one CSV row per comparison to this file
    #[arg(long, value_name = "FILE")]
    pub log_csv: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TrainCurveArgs {
    /// Execute the train-curve command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);
        ensure!(self.runs > 0, "--runs must be at least 1");

        let test = ProfileBuilder::new(&self.language)
            .build(&Corpus::from_file(&self.test))
            .context("building the fixed test sample")?;
        let others = training::load_profiles(&self.train)?;

        let corpus = Corpus::from_file(&self.input);
        let total_words = corpus.word_count()?;
        let step = total_words / self.runs;
        ensure!(
            step > 0,
            "corpus holds {total_words} words, too few for {} runs",
            self.runs
        );

        let mut writer = match &self.log_csv {
            Some(path) => Some(BufWriter::new(File::create(path).with_context(|| {
                format!("creating train-curve log {}", path.display())
            })?)),
            None => None,
        };

        // The fixed candidates are compared once; only the growing sample's
        // label changes between runs.
        let mut fixed_labels = Vec::with_capacity(others.len());
        for train in &others {
            let label = DistanceLabel::new(train.language(), rank_distance(train, &test));
            if let Some(writer) = writer.as_mut() {
                report::write_comparison_row(writer, &test, train, &label)?;
            }
            fixed_labels.push(label);
        }

        let mut sampler = RandomSampler::new(&corpus, &self.language, step)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut misses = 0;

        for size in (step..step * self.runs).step_by(step) {
            sampler.set_budget(size);
            let train_sample = sampler.resample(&mut rng);
            let label = DistanceLabel::new(
                train_sample.language(),
                rank_distance(&train_sample, &test),
            );
            if let Some(writer) = writer.as_mut() {
                report::write_comparison_row(writer, &test, &train_sample, &label)?;
            }

            let mut labels = fixed_labels.clone();
            labels.push(label);
            let outcome = classify(&labels);
            if outcome.language() != Some(self.language.as_str()) {
                log::warn!(
                    "{} training sample of {} words predicted {}",
                    self.language,
                    train_sample.word_count(),
                    outcome.language().unwrap_or("undecided")
                );
                misses += 1;
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }

        let probed = self.runs - 1;
        println!(
            "{}: {misses}/{probed} training sizes missed (step {step} words)",
            self.language
        );
        Ok(())
    }
}
