//! Repeated randomized sampling at a fixed word budget

use crate::builder::scan_randomized;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::profile::Profile;
use rand::Rng;

/// Draws word-bounded random samples from a fixed source
///
/// The source is loaded once; each [`resample`](Self::resample) starts from
/// empty state and draws lines uniformly without replacement against the
/// current budget, with a fresh draw order. Used to probe classification
/// reliability at a given sample size.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    lines: Vec<String>,
    language: String,
    source_id: String,
    budget: usize,
}

impl RandomSampler {
    /// Load the source and fix the sampling budget
    pub fn new(corpus: &Corpus, language: impl Into<String>, budget: usize) -> Result<Self> {
        Ok(Self {
            lines: corpus.read_lines()?,
            language: language.into(),
            source_id: corpus.id(),
            budget,
        })
    }

    /// The current word budget
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Replace the word budget for subsequent draws
    pub fn set_budget(&mut self, budget: usize) {
        self.budget = budget;
    }

    /// Total whitespace-delimited words available in the source
    pub fn total_words(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    /// Lines available in the source
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Draw a fresh randomized bounded profile
    ///
    /// All state accumulated by earlier draws is discarded; the pool
    /// emptying before the budget is reached ends the draw with whatever
    /// accumulated.
    pub fn resample<R: Rng>(&self, rng: &mut R) -> Profile {
        scan_randomized(
            &self.language,
            &self.lines,
            self.source_id.clone(),
            self.budget,
            rng,
        )
    }
}
