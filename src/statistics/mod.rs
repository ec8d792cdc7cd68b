pub mod config;
pub mod ordering;
pub mod report;

use std::collections::HashMap;

use crate::normalize::{LowercaseNormalizer, Normalized, Normalizer};
use crate::types::identifiers::NormalizedWord;
use crate::types::word_stats::{ConfigError, StatisticsError, StatisticsReport, StatisticsSnapshot};
pub use config::StatisticsConfig;
pub use ordering::{compare_entries, ordered_entries};
pub use report::{build_report, compute_version};

/// Word-frequency tracker.
///
/// Counts are kept in a hash map keyed by the normalized word; ordering is
/// only computed when a snapshot is requested. Not synchronized: share it
/// across threads only behind external locking.
#[derive(Debug, Clone)]
pub struct WordsStatistics<N = LowercaseNormalizer> {
	config: StatisticsConfig,
	normalizer: N,
	counts: HashMap<NormalizedWord, usize>,
}

impl Default for WordsStatistics<LowercaseNormalizer> {
	fn default() -> Self {
		Self::new(StatisticsConfig::v0(), LowercaseNormalizer::default())
	}
}

impl WordsStatistics<LowercaseNormalizer> {
	pub fn with_config(config: StatisticsConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let normalizer = LowercaseNormalizer::new(config.max_word_length);
		Ok(Self::new(config, normalizer))
	}
}

impl<N> WordsStatistics<N>
where
	N: Normalizer,
{
	/// `config` is recorded in reports as-is; keeping it consistent with
	/// `normalizer` is up to the caller.
	pub fn new(config: StatisticsConfig, normalizer: N) -> Self {
		Self {
			config,
			normalizer,
			counts: HashMap::new(),
		}
	}

	pub fn config(&self) -> &StatisticsConfig {
		&self.config
	}

	/// Count one occurrence of `word`.
	///
	/// `None` is rejected with [`StatisticsError::NullWord`]. Empty and
	/// whitespace-only words are accepted and ignored. Either way the
	/// counts are left untouched.
	pub fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
		let normalized = match self.normalizer.normalize_raw(word) {
			Ok(normalized) => normalized,
			Err(err) => {
				tracing::debug!("Rejected word: {}", err);
				return Err(err);
			}
		};

		match normalized {
			Normalized::Word(key) => {
				*self.counts.entry(key).or_insert(0) += 1;
			}
			Normalized::Ignored => {
				tracing::trace!("Ignored blank word {:?}", word);
			}
		}

		Ok(())
	}

	/// Ordered read of the current counts. Does not mutate the tracker.
	pub fn get_statistics(&self) -> StatisticsSnapshot {
		let entries = ordered_entries(&self.counts);
		tracing::debug!("Statistics snapshot ::> distinct_words: {}", entries.len());
		StatisticsSnapshot::from_ordered(entries)
	}

	pub fn report(&self) -> StatisticsReport {
		let report = build_report(&self.config, self.get_statistics());
		tracing::debug!(
			"Statistics report ::> version: {}, total_words: {}, distinct_words: {}",
			report.statistics_version.as_str(),
			report.total_words,
			report.distinct_words
		);
		report
	}

	/// Count recorded for `word` after normalization. Zero for blank or
	/// unseen words.
	pub fn count(&self, word: &str) -> usize {
		match self.normalizer.normalize(word) {
			Normalized::Word(key) => self.counts.get(&key).copied().unwrap_or(0),
			Normalized::Ignored => 0,
		}
	}

	/// Number of distinct normalized words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Number of accepted words.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}
}
