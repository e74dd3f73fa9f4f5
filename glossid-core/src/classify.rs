//! Nearest-profile classification with tie detection

use crate::distance::rank_distance;
use crate::profile::Profile;

/// A candidate language paired with its rank distance from a test sample
///
/// Ephemeral: produced fresh for each comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceLabel {
    language: String,
    distance: u64,
}

impl DistanceLabel {
    /// Label a candidate language with its computed distance
    pub fn new(language: impl Into<String>, distance: u64) -> Self {
        Self {
            language: language.into(),
            distance,
        }
    }

    /// The candidate language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The rank distance for this candidate
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

/// Outcome of classifying a sample against candidate languages
///
/// `Undecided` is a valid result, not a failure: it reports that the two
/// lowest distances were equal and the sample cannot be confidently
/// attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The nearest candidate was strictly closer than every other
    Identified(String),
    /// The two lowest distances were equal, or there were no candidates
    Undecided,
}

impl Classification {
    /// The identified language, if the classifier reached a decision
    pub fn language(&self) -> Option<&str> {
        match self {
            Classification::Identified(language) => Some(language),
            Classification::Undecided => None,
        }
    }
}

/// Pick the nearest candidate, or report a tie
///
/// The first label carrying the minimum distance is the candidate; exactly
/// that occurrence is set aside by index before the second-lowest distance
/// is taken from the remainder, so two candidates sharing a distance tie
/// even when their labels are value-equal. An empty label set is undecided.
pub fn classify(labels: &[DistanceLabel]) -> Classification {
    let mut best: Option<(usize, &DistanceLabel)> = None;
    for (index, label) in labels.iter().enumerate() {
        match best {
            Some((_, lowest)) if lowest.distance() <= label.distance() => {}
            _ => best = Some((index, label)),
        }
    }
    let Some((best_index, lowest)) = best else {
        return Classification::Undecided;
    };

    let second_lowest = labels
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != best_index)
        .map(|(_, label)| label.distance())
        .min();

    match second_lowest {
        Some(distance) if distance == lowest.distance() => Classification::Undecided,
        _ => Classification::Identified(lowest.language().to_string()),
    }
}

/// Compute a distance label for `test` against each training profile
pub fn label_candidates(test: &Profile, training: &[Profile]) -> Vec<DistanceLabel> {
    training
        .iter()
        .map(|train| DistanceLabel::new(train.language(), rank_distance(train, test)))
        .collect()
}

/// Classify `test` by nearest training profile
pub fn identify(test: &Profile, training: &[Profile]) -> Classification {
    classify(&label_candidates(test, training))
}
