//! Cross-validation fold partitioning

use crate::builder::scan_range;
use crate::corpus::Corpus;
use crate::error::{CoreError, Result};
use crate::profile::Profile;

/// One cross-validation fold
#[derive(Debug, Clone)]
pub struct FoldPair {
    /// Merged profile over every line outside the held-out segment
    pub training: Profile,
    /// Profile over the fold's contiguous held-out segment
    pub held_out: Profile,
}

/// Partition `corpus` into `k` contiguous folds
///
/// With `segment` the integer division of the line count by `k`, fold `i`
/// holds out lines `[i*segment, (i+1)*segment)` and trains on the merge of
/// the two flanking ranges. The source is read once; `k` independent
/// train/evaluate trials can then run without reprocessing it.
pub fn fold_pairs(corpus: &Corpus, language: &str, k: usize) -> Result<Vec<FoldPair>> {
    if k == 0 {
        return Err(CoreError::InvalidFoldCount);
    }
    let lines = corpus.read_lines()?;
    let source_id = corpus.id();
    let segment = lines.len() / k;

    let mut pairs = Vec::with_capacity(k);
    for fold in 0..k {
        let start = fold * segment;
        let end = start + segment;
        let head = scan_range(language, &lines, source_id.clone(), 0, start);
        let tail = scan_range(language, &lines, source_id.clone(), end, usize::MAX);
        let held_out = scan_range(language, &lines, source_id.clone(), start, segment);
        pairs.push(FoldPair {
            training: tail.merge(head),
            held_out,
        });
    }
    Ok(pairs)
}
