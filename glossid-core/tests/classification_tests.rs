//! End-to-end classification tests: distance, folds, and sampling together

use glossid_core::{
    classify, fold_pairs, identify, label_candidates, rank_distance, Bigram, BigramObservation,
    Classification, Corpus, DistanceLabel, Profile, RandomSampler,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn profile(language: &str, entries: &[(&str, u64)]) -> Profile {
    Profile::from_entries(
        language,
        entries
            .iter()
            .map(|(pair, count)| BigramObservation::new(pair.parse().unwrap(), *count))
            .collect(),
    )
}

#[test]
fn worked_example_identifies_the_matching_profile() {
    let a = profile("A", &[("th", 50), ("he", 40), ("in", 10)]);
    let b = profile("B", &[("he", 45), ("th", 30), ("er", 12)]);
    let sample = profile("S", &[("th", 9), ("he", 7)]);

    assert_eq!(rank_distance(&a, &sample), 0);
    assert_eq!(rank_distance(&b, &sample), 2);

    let labels = vec![
        DistanceLabel::new("A", rank_distance(&a, &sample)),
        DistanceLabel::new("B", rank_distance(&b, &sample)),
    ];
    assert_eq!(classify(&labels), Classification::Identified("A".to_string()));
}

#[test]
fn identify_runs_the_whole_pipeline() {
    let a = profile("A", &[("th", 50), ("he", 40), ("in", 10)]);
    let b = profile("B", &[("he", 45), ("th", 30), ("er", 12)]);
    let sample = profile("S", &[("th", 9), ("he", 7)]);

    let outcome = identify(&sample, &[a, b]);
    assert_eq!(outcome.language(), Some("A"));
}

#[test]
fn fold_segments_cover_the_expected_ranges() {
    // Line i carries exactly one bigram that survives cleaning, unique to i.
    let alphabet: Vec<char> = ('a'..='j').collect();
    let lines: Vec<String> = (0..100)
        .map(|i| {
            let first = alphabet[i / 10];
            let second = alphabet[i % 10];
            format!("{first}{second} {first}{second}")
        })
        .collect();
    let corpus = Corpus::from_lines(lines);

    let pairs = fold_pairs(&corpus, "x", 10).unwrap();
    assert_eq!(pairs.len(), 10);

    for (fold, pair) in pairs.iter().enumerate() {
        let held_out: std::collections::HashSet<Bigram> = pair
            .held_out
            .entries()
            .iter()
            .map(|o| o.bigram())
            .collect();
        let expected: std::collections::HashSet<Bigram> = (fold * 10..(fold + 1) * 10)
            .map(|i| Bigram::new(alphabet[i / 10], alphabet[i % 10]))
            .collect();
        assert_eq!(held_out, expected);

        // The training side holds the other ninety, with no overlap.
        assert_eq!(pair.training.len(), 90);
        for observation in pair.training.entries() {
            assert!(!held_out.contains(&observation.bigram()));
        }
        assert_eq!(pair.training.line_count(), 90);
    }
}

#[test]
fn held_out_folds_classify_against_their_own_language() {
    // Two statistically distinct corpora: one dominated by "ab", one by "xy".
    let ab_lines: Vec<String> = (0..40).map(|_| "ababab ababab".to_string()).collect();
    let xy_lines: Vec<String> = (0..40).map(|_| "xyxyxy xyxyxy".to_string()).collect();

    let other = glossid_core::ProfileBuilder::new("xyish")
        .build(&Corpus::from_lines(xy_lines))
        .unwrap();

    let pairs = fold_pairs(&Corpus::from_lines(ab_lines), "abish", 4).unwrap();
    for pair in pairs {
        let candidates = vec![pair.training, other.clone()];
        let outcome = identify(&pair.held_out, &candidates);
        assert_eq!(outcome.language(), Some("abish"));
    }
}

#[test]
fn resampled_probes_classify_reliably_at_generous_budgets() {
    let ab_lines: Vec<String> = (0..30).map(|_| "ababab ababab".to_string()).collect();
    let xy_lines: Vec<String> = (0..30).map(|_| "xyxyxy xyxyxy".to_string()).collect();

    let training = vec![
        glossid_core::ProfileBuilder::new("abish")
            .build(&Corpus::from_lines(ab_lines.clone()))
            .unwrap(),
        glossid_core::ProfileBuilder::new("xyish")
            .build(&Corpus::from_lines(xy_lines))
            .unwrap(),
    ];

    let sampler = RandomSampler::new(&Corpus::from_lines(ab_lines), "abish", 12).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..20 {
        let probe = sampler.resample(&mut rng);
        let labels = label_candidates(&probe, &training);
        assert_eq!(classify(&labels).language(), Some("abish"));
    }
}
