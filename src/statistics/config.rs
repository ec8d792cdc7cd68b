use crate::normalize::LowercaseNormalizer;
use crate::types::word_stats::ConfigError;

// Serializable and comparable, with explicit defaults.
// It is hashed into every report's statistics_version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatisticsConfig {
    pub version: String,
    pub max_word_length: usize,
}

impl StatisticsConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            max_word_length: LowercaseNormalizer::DEFAULT_MAX_CHARS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_word_length == 0 {
            return Err(ConfigError::InvalidMaxWordLength(self.max_word_length));
        }
        Ok(())
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self::v0()
    }
}
