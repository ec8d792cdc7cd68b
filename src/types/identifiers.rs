use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Borrow;
use std::fmt;

/// A word after normalization: case-folded and length-bounded.
///
/// The accumulator is keyed by this type, never by raw input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedWord(String);

impl NormalizedWord {
    /// Wrap an already-normalized string. Returns `None` for the empty string,
    /// which is never a valid key.
    pub fn new(normalized: impl Into<String>) -> Option<Self> {
        let normalized = normalized.into();
        if normalized.is_empty() {
            None
        } else {
            Some(NormalizedWord(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for NormalizedWord {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an ordered set of statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsVersion(String);

impl StatisticsVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        StatisticsVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
