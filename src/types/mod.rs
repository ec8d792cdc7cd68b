pub mod identifiers;
pub mod word_stats;

pub use identifiers::{NormalizedWord, StatisticsVersion};
pub use word_stats::{ConfigError, StatisticsError, StatisticsReport, StatisticsSnapshot, WordCount};
