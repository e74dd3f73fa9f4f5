//! Character-bigram language identification
//!
//! Identifies the natural language of a text sample by comparing its
//! character-bigram frequency statistics against reference profiles built
//! from labeled corpora, using the classical out-of-place rank distance.
//!
//! A [`Profile`] is a cleaned, rank-sorted bigram frequency table built by a
//! [`ProfileBuilder`] under an explicit [`SamplingPolicy`]. Profiles can be
//! merged, partitioned into cross-validation folds, compared with
//! [`rank_distance`], and classified with [`classify`] or [`identify`].
//!
//! # Example
//! ```
//! use glossid_core::{classify, Classification, Corpus, DistanceLabel, ProfileBuilder};
//!
//! let profile = ProfileBuilder::new("english")
//!     .build(&Corpus::from_text("the cat sat on the mat\nthe dog ate the bone"))?;
//! assert!(profile.entries().iter().all(|o| o.count() >= 2));
//!
//! let labels = vec![
//!     DistanceLabel::new("english", 2),
//!     DistanceLabel::new("german", 9),
//! ];
//! assert_eq!(
//!     classify(&labels),
//!     Classification::Identified("english".to_string())
//! );
//! # Ok::<(), glossid_core::CoreError>(())
//! ```

#![warn(missing_docs)]

pub mod bigram;
pub mod builder;
pub mod classify;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod folds;
pub mod profile;
pub mod sampler;

pub use bigram::{Bigram, BigramObservation};
pub use builder::{ProfileBuilder, SamplingPolicy};
pub use classify::{classify, identify, label_candidates, Classification, DistanceLabel};
pub use corpus::Corpus;
pub use distance::{rank_distance, OUT_OF_PLACE_PENALTY};
pub use error::{CoreError, Result};
pub use folds::{fold_pairs, FoldPair};
pub use profile::{Profile, CLEAN_THRESHOLD};
pub use sampler::RandomSampler;
