//! Deterministic word-frequency statistics.
//!
//! `words-statistics` accumulates occurrence counts for individual word
//! tokens. Every word is lower-cased and truncated to a bounded length before
//! it is counted, and snapshots are always ordered by `(count, word)`, so
//! identical inputs produce identical outputs byte-for-byte.
//!
//! The crate also carries a small decimal-format checker in [`validation`].

pub mod normalize;
pub mod statistics;
pub mod types;
pub mod validation;

pub use statistics::{StatisticsConfig, WordsStatistics};
pub use types::{StatisticsError, StatisticsSnapshot, WordCount};
