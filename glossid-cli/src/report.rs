//! Result reporting: CSV logs and JSON summaries

use anyhow::Result;
use glossid_core::{Classification, DistanceLabel, Profile};
use serde::Serialize;
use std::io::Write;

/// Quote a CSV field when it carries a delimiter, quote, or line break
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write a profile's frequency table
///
/// One `bigram,count` row per entry, in rank order (descending frequency).
pub fn write_frequency_table<W: Write>(writer: &mut W, profile: &Profile) -> Result<()> {
    for observation in profile.entries() {
        writeln!(
            writer,
            "{},{}",
            escape_csv(&observation.bigram().to_string()),
            observation.count()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Append one comparison row: test size and label, distance, train label and size
pub fn write_comparison_row<W: Write>(
    writer: &mut W,
    test: &Profile,
    train: &Profile,
    label: &DistanceLabel,
) -> Result<()> {
    writeln!(
        writer,
        "{},{},{},{},{}",
        test.word_count(),
        escape_csv(test.language()),
        label.distance(),
        escape_csv(train.language()),
        train.word_count()
    )?;
    Ok(())
}

/// Machine-readable identification report
#[derive(Debug, Serialize)]
pub struct IdentificationReport {
    /// Identified language, absent when undecided
    pub language: Option<String>,
    /// Whether the classifier reached a decision
    pub decided: bool,
    /// Per-candidate distances, ascending
    pub candidates: Vec<CandidateReport>,
}

/// One candidate's entry in an [`IdentificationReport`]
#[derive(Debug, Serialize)]
pub struct CandidateReport {
    /// Candidate language
    pub language: String,
    /// Rank distance from the sample
    pub distance: u64,
}

impl IdentificationReport {
    /// Summarize a classification outcome and its labels
    pub fn new(outcome: &Classification, labels: &[DistanceLabel]) -> Self {
        let mut candidates: Vec<CandidateReport> = labels
            .iter()
            .map(|label| CandidateReport {
                language: label.language().to_string(),
                distance: label.distance(),
            })
            .collect();
        candidates.sort_by_key(|candidate| candidate.distance);

        Self {
            language: outcome.language().map(str::to_string),
            decided: outcome.language().is_some(),
            candidates,
        }
    }
}
