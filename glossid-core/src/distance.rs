//! Rank-order ("out-of-place") distance between profiles

use crate::profile::Profile;

/// Penalty charged per test entry with no comparable training entry
pub const OUT_OF_PLACE_PENALTY: u64 = 1000;

/// Compute the out-of-place distance from `train` to `test`
///
/// Rank position is treated as a language fingerprint: for each test entry
/// the metric adds how far its rank shifted relative to the training
/// profile, or [`OUT_OF_PLACE_PENALTY`] when the pair is absent from the
/// compared training prefix. Test entries beyond the training profile's
/// depth each cost the same penalty. Lower is statistically closer.
///
/// The measure is asymmetric: `rank_distance(a, b)` need not equal
/// `rank_distance(b, a)` when the profiles differ in size.
pub fn rank_distance(train: &Profile, test: &Profile) -> u64 {
    let mut distance = 0;
    let mut window = test.len();
    if window > train.len() {
        distance += OUT_OF_PLACE_PENALTY * (window - train.len()) as u64;
        window = train.len();
    }

    let train_ranks = &train.entries()[..window];
    for (rank, observed) in test.entries()[..window].iter().enumerate() {
        match train_ranks
            .iter()
            .position(|candidate| candidate == observed)
        {
            Some(train_rank) => distance += rank.abs_diff(train_rank) as u64,
            None => distance += OUT_OF_PLACE_PENALTY,
        }
    }
    distance
}
