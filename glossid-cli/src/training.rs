//! Training corpus specifications and sample building

use anyhow::{Context, Result};
use glossid_core::{Corpus, Profile, ProfileBuilder, SamplingPolicy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::str::FromStr;

/// A `language=path` pair naming a labeled training corpus
#[derive(Debug, Clone)]
pub struct TrainingSpec {
    /// Language label for profiles built from this corpus
    pub language: String,
    /// Corpus file path
    pub path: PathBuf,
}

impl FromStr for TrainingSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((language, path)) if !language.is_empty() && !path.is_empty() => Ok(Self {
                language: language.to_string(),
                path: PathBuf::from(path),
            }),
            _ => Err(format!("expected LANG=FILE, got {s:?}")),
        }
    }
}

impl TrainingSpec {
    /// Build an unrestricted profile from this corpus
    pub fn load(&self) -> Result<Profile> {
        ProfileBuilder::new(&self.language)
            .build(&Corpus::from_file(&self.path))
            .with_context(|| format!("building training profile for {}", self.language))
    }
}

/// Load profiles for every spec
pub fn load_profiles(specs: &[TrainingSpec]) -> Result<Vec<Profile>> {
    specs.iter().map(TrainingSpec::load).collect()
}

/// Build a sample profile, optionally word-bounded, optionally randomized
pub fn build_sample(
    corpus: &Corpus,
    language: &str,
    words: Option<usize>,
    randomized: bool,
    seed: u64,
) -> Result<Profile> {
    let policy = match (words, randomized) {
        (None, _) => SamplingPolicy::Unrestricted,
        (Some(budget), false) => SamplingPolicy::WordBounded(budget),
        (Some(budget), true) => SamplingPolicy::RandomizedWordBounded(budget),
    };
    let builder = ProfileBuilder::new(language).policy(policy);
    let profile = if randomized {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        builder.build_with_rng(corpus, &mut rng)?
    } else {
        builder.build(corpus)?
    };
    Ok(profile)
}
