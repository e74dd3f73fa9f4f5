//! Cross-validate command: k-fold validation for one language

use crate::training::TrainingSpec;
use crate::{logging, report, training};
use anyhow::{Context, Result};
use clap::Args;
use glossid_core::{classify, fold_pairs, label_candidates, Corpus};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the cross-validate command
#[derive(Debug, Args)]
pub struct CrossValidateArgs {
    /// Corpus to validate
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Language of the validated corpus
    #[arg(short, long, value_name = "LANG")]
    pub language: String,

    /// Other languages' training corpora as LANG=FILE pairs
    #[arg(short = 't', long = "train", value_name = "LANG=FILE", required = true)]
    pub train: Vec<TrainingSpec>,

    /// Number of folds
    #[arg(short = 'k', long, default_value_t = 10, value_name = "N")]
    pub folds: usize,

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

impl CrossValidateArgs {
    /// Execute the cross-validate command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        let others = training::load_profiles(&self.train)?;
        let pairs = fold_pairs(&Corpus::from_file(&self.input), &self.language, self.folds)?;
        let total = pairs.len();

        let mut writer = match &self.log_csv {
            Some(path) => Some(BufWriter::new(File::create(path).with_context(|| {
                format!("creating validation log {}", path.display())
            })?)),
            None => None,
        };

        let mut correct = 0;
        for (fold, pair) in pairs.into_iter().enumerate() {
            let mut candidates = others.clone();
            candidates.push(pair.training);

            let labels = label_candidates(&pair.held_out, &candidates);
            if let Some(writer) = writer.as_mut() {
                for (train, label) in candidates.iter().zip(&labels) {
                    report::write_comparison_row(writer, &pair.held_out, train, label)?;
                }
            }

            let outcome = classify(&labels);
            log::debug!("fold {fold}: {outcome:?}");
            if outcome.language() == Some(self.language.as_str()) {
                correct += 1;
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }

        let rate = 100.0 * correct as f64 / total as f64;
        println!(
            "{}: {correct}/{total} folds correct ({rate:.0}%)",
            self.language
        );
        Ok(())
    }
}
