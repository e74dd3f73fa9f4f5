//! Line-oriented text sources for profile construction

use crate::error::{CoreError, Result};
use std::fs;
use std::path::PathBuf;

/// A readable text source
///
/// Profiles are built from whole lines; a source is always materialized
/// completely before any comparison or merge touches the resulting profile.
#[derive(Debug, Clone)]
pub enum Corpus {
    /// In-memory text, split on line breaks
    Text(String),
    /// File path, read on demand
    File(PathBuf),
    /// Pre-split lines
    Lines(Vec<String>),
}

impl Corpus {
    /// Create a source from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Corpus::Text(text.into())
    }

    /// Create a source from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Corpus::File(path.into())
    }

    /// Create a source from pre-split lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        Corpus::Lines(lines)
    }

    /// Identifier recorded on profiles built from this source
    pub fn id(&self) -> String {
        match self {
            Corpus::Text(_) => "<text>".to_string(),
            Corpus::File(path) => path.display().to_string(),
            Corpus::Lines(_) => "<lines>".to_string(),
        }
    }

    /// Materialize the source as lines
    ///
    /// Fails with [`CoreError::CorpusUnavailable`] when a file source cannot
    /// be read; there is no retry and no partial result.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            Corpus::Text(text) => Ok(text.lines().map(str::to_string).collect()),
            Corpus::File(path) => {
                let content =
                    fs::read_to_string(path).map_err(|source| CoreError::CorpusUnavailable {
                        path: path.clone(),
                        source,
                    })?;
                Ok(content.lines().map(str::to_string).collect())
            }
            Corpus::Lines(lines) => Ok(lines.clone()),
        }
    }

    /// Number of lines in the source
    pub fn line_count(&self) -> Result<usize> {
        Ok(self.read_lines()?.len())
    }

    /// Number of whitespace-delimited words in the source
    pub fn word_count(&self) -> Result<usize> {
        Ok(self
            .read_lines()?
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum())
    }
}

impl From<String> for Corpus {
    fn from(text: String) -> Self {
        Corpus::Text(text)
    }
}

impl From<PathBuf> for Corpus {
    fn from(path: PathBuf) -> Self {
        Corpus::File(path)
    }
}

impl From<Vec<String>> for Corpus {
    fn from(lines: Vec<String>) -> Self {
        Corpus::Lines(lines)
    }
}
