use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::statistics::StatisticsConfig;
use crate::types::identifiers::StatisticsVersion;

/// One entry of a snapshot.
///
/// Fields are declared count-first so the derived ordering is the snapshot
/// ordering: ascending count, then ordinal word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub count: usize,
    pub word: String,
}

impl WordCount {
    pub fn new(count: usize, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

impl From<WordCount> for (usize, String) {
    fn from(entry: WordCount) -> Self {
        (entry.count, entry.word)
    }
}

impl From<(usize, &str)> for WordCount {
    fn from((count, word): (usize, &str)) -> Self {
        WordCount::new(count, word)
    }
}

/// A one-time, ordered read of the accumulated counts.
///
/// Owns its entries; later additions to the tracker do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsSnapshot {
    entries: Vec<WordCount>,
}

impl StatisticsSnapshot {
    /// Callers must pass entries already in snapshot order.
    pub(crate) fn from_ordered(entries: Vec<WordCount>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[WordCount] {
        &self.entries
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl IntoIterator for StatisticsSnapshot {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatisticsSnapshot {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A snapshot together with the config that produced it and its content hash.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub statistics_version: StatisticsVersion,
    pub config: StatisticsConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub total_words: usize,
    pub distinct_words: usize,
    pub entries: StatisticsSnapshot,
}

impl StatisticsReport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsError {
    #[error("Word must not be null")]
    NullWord,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid max word length: {0}")]
    InvalidMaxWordLength(usize),
}
