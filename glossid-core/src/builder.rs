//! Profile construction under explicit sampling policies

use crate::bigram::Bigram;
use crate::corpus::Corpus;
use crate::error::{CoreError, Result};
use crate::profile::Profile;
use rand::Rng;
use std::collections::HashMap;

/// How a [`ProfileBuilder`] consumes its text source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// Consume the entire source in order
    Unrestricted,
    /// Consume lines in order until the word budget is reached
    WordBounded(usize),
    /// Draw lines uniformly at random without replacement until the word
    /// budget is reached or the source is exhausted
    RandomizedWordBounded(usize),
    /// Skip `skip` leading lines, then consume up to `take` lines
    LineRange {
        /// Leading lines to skip
        skip: usize,
        /// Maximum lines to consume after skipping
        take: usize,
    },
}

/// Builds cleaned, rank-sorted [`Profile`]s from a text source
///
/// One construction pass accumulates bigram counts line by line, then cleans
/// entries below [`CLEAN_THRESHOLD`](crate::profile::CLEAN_THRESHOLD) and
/// rank-sorts the remainder. Ranking happens exactly once, after all
/// accumulation for the pass is complete.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    language: String,
    policy: SamplingPolicy,
}

impl ProfileBuilder {
    /// Create a builder for the given language label
    ///
    /// Sources are consumed unrestricted unless a policy is selected.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            policy: SamplingPolicy::Unrestricted,
        }
    }

    /// Select the sampling policy
    pub fn policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build a profile from the source
    ///
    /// Fails with [`CoreError::RngRequired`] under the randomized policy;
    /// use [`build_with_rng`](Self::build_with_rng) there.
    pub fn build(&self, corpus: &Corpus) -> Result<Profile> {
        if matches!(self.policy, SamplingPolicy::RandomizedWordBounded(_)) {
            return Err(CoreError::RngRequired);
        }
        let lines = corpus.read_lines()?;
        Ok(self.scan_sequential(&lines, corpus.id()))
    }

    /// Build a profile from the source, drawing randomness from `rng`
    ///
    /// The deterministic policies ignore the generator, so this works for
    /// every policy.
    pub fn build_with_rng<R: Rng>(&self, corpus: &Corpus, rng: &mut R) -> Result<Profile> {
        let lines = corpus.read_lines()?;
        if let SamplingPolicy::RandomizedWordBounded(budget) = self.policy {
            Ok(scan_randomized(&self.language, &lines, corpus.id(), budget, rng))
        } else {
            Ok(self.scan_sequential(&lines, corpus.id()))
        }
    }

    fn scan_sequential(&self, lines: &[String], source_id: String) -> Profile {
        match self.policy {
            SamplingPolicy::Unrestricted => {
                scan_range(&self.language, lines, source_id, 0, usize::MAX)
            }
            SamplingPolicy::WordBounded(budget) => {
                let mut accumulator = Accumulator::default();
                for line in lines {
                    if accumulator.scan_line(line, budget) {
                        break;
                    }
                }
                accumulator.finish(&self.language, source_id)
            }
            SamplingPolicy::LineRange { skip, take } => {
                scan_range(&self.language, lines, source_id, skip, take)
            }
            SamplingPolicy::RandomizedWordBounded(_) => {
                unreachable!("randomized policy is routed through build_with_rng")
            }
        }
    }
}

/// Sequential scan over a line range; `take` of `usize::MAX` runs to the end
pub(crate) fn scan_range(
    language: &str,
    lines: &[String],
    source_id: String,
    skip: usize,
    take: usize,
) -> Profile {
    let mut accumulator = Accumulator::default();
    for line in lines.iter().skip(skip) {
        if accumulator.line_count == take {
            break;
        }
        accumulator.scan_line(line, usize::MAX);
    }
    accumulator.finish(language, source_id)
}

/// Randomized word-bounded scan: uniform draws without replacement until the
/// budget is exhausted or the pool empties (normal completion, not an error)
pub(crate) fn scan_randomized<R: Rng>(
    language: &str,
    lines: &[String],
    source_id: String,
    budget: usize,
    rng: &mut R,
) -> Profile {
    let mut accumulator = Accumulator::default();
    let mut pool: Vec<usize> = (0..lines.len()).collect();
    while !pool.is_empty() {
        let drawn = pool.swap_remove(rng.gen_range(0..pool.len()));
        if accumulator.scan_line(&lines[drawn], budget) {
            break;
        }
    }
    accumulator.finish(language, source_id)
}

/// Running state of one construction pass
#[derive(Debug, Default)]
struct Accumulator {
    counts: HashMap<Bigram, u64>,
    word_count: usize,
    line_count: usize,
}

impl Accumulator {
    /// Scan one line into the running counts
    ///
    /// Returns true once the word budget is exhausted and the pass must stop.
    /// The budget-exhausting line is truncated to the words still permitted,
    /// keeping its original spacing, before bigram extraction.
    fn scan_line(&mut self, line: &str, word_budget: usize) -> bool {
        self.line_count += 1;
        let words = line.split_whitespace().count();
        self.word_count += words;

        let mut stop = false;
        let truncated;
        let mut text = line;
        if self.word_count > word_budget {
            let already_counted = self.word_count - words;
            let permitted = word_budget - already_counted;
            self.word_count = word_budget;
            truncated = truncate_to_words(line, permitted);
            text = &truncated;
            stop = true;
        }

        let mut chars = text.chars();
        if let Some(mut previous) = chars.next() {
            for current in chars {
                *self
                    .counts
                    .entry(Bigram::new(previous, current))
                    .or_insert(0) += 1;
                previous = current;
            }
        }
        stop
    }

    fn finish(self, language: &str, source_id: String) -> Profile {
        Profile::from_counts(
            language,
            self.counts,
            self.word_count,
            self.line_count,
            source_id,
        )
    }
}

/// Prefix of `line` ending with its `keep`-th whitespace-delimited word
fn truncate_to_words(line: &str, keep: usize) -> String {
    if keep == 0 {
        return String::new();
    }
    let mut words = 0;
    let mut in_word = false;
    for (index, c) in line.char_indices() {
        if c.is_whitespace() {
            if in_word && words == keep {
                return line[..index].to_string();
            }
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
        }
    }
    line.to_string()
}
