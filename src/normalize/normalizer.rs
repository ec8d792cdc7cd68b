use crate::types::identifiers::NormalizedWord;
use crate::types::word_stats::StatisticsError;

/// Outcome of normalizing one raw word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Word(NormalizedWord),
    /// Empty or whitespace-only input. Not an error.
    Ignored,
}

pub trait Normalizer {
    fn normalize(&self, raw: &str) -> Normalized;

    /// Absent input is rejected before any normalization runs.
    fn normalize_raw(&self, raw: Option<&str>) -> Result<Normalized, StatisticsError> {
        match raw {
            Some(raw) => Ok(self.normalize(raw)),
            None => Err(StatisticsError::NullWord),
        }
    }
}

/// v0: Unicode lower-casing followed by truncation to `max_chars` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowercaseNormalizer {
    max_chars: usize,
}

impl LowercaseNormalizer {
    pub const DEFAULT_MAX_CHARS: usize = 10;

    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl Default for LowercaseNormalizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CHARS)
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, raw: &str) -> Normalized {
        // Only the emptiness check looks at whitespace; inner and leading
        // spaces stay part of the word.
        if raw.trim().is_empty() {
            return Normalized::Ignored;
        }

        let mut lowered = raw.to_lowercase();
        truncate_chars(&mut lowered, self.max_chars);

        match NormalizedWord::new(lowered) {
            Some(word) => Normalized::Word(word),
            None => Normalized::Ignored,
        }
    }
}

/// Cut `s` down to at most `max_chars` Unicode scalar values.
fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((byte_idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(byte_idx);
    }
}
