use chrono::Utc;

use crate::statistics::StatisticsConfig;
use crate::types::identifiers::StatisticsVersion;
use crate::types::word_stats::{StatisticsReport, StatisticsSnapshot};

pub fn build_report(config: &StatisticsConfig, snapshot: StatisticsSnapshot) -> StatisticsReport {
    let statistics_version = compute_version(config, &snapshot);
    let total_words = snapshot.total();
    let distinct_words = snapshot.len();

    // Note: created_at is strictly informational
    StatisticsReport {
        statistics_version,
        config: config.clone(),
        created_at: Utc::now(),
        total_words,
        distinct_words,
        entries: snapshot,
    }
}

/// "config.version:config.max_word_length\n" followed by one
/// "count:word_byte_len:word\n" line per entry, in snapshot order.
pub fn compute_version(config: &StatisticsConfig, snapshot: &StatisticsSnapshot) -> StatisticsVersion {
    let mut content = format!("{}:{}\n", config.version, config.max_word_length);
    for entry in snapshot {
        content.push_str(&entry.count.to_string());
        content.push(':');
        content.push_str(&entry.word.len().to_string());
        content.push(':');
        content.push_str(&entry.word);
        content.push('\n');
    }

    StatisticsVersion::from_content(content.as_bytes())
}
