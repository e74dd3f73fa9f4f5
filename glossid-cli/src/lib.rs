//! Glossid CLI library
//!
//! Command implementations for the bigram language-identification
//! experiment driver.

pub mod commands;
pub mod corpus_prep;
pub mod logging;
pub mod progress;
pub mod report;
pub mod training;
