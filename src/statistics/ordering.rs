use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::identifiers::NormalizedWord;
use crate::types::word_stats::WordCount;

/// Materialize the counts into snapshot order: count asc, then word asc
/// (ordinal comparison).
pub fn ordered_entries(counts: &HashMap<NormalizedWord, usize>) -> Vec<WordCount> {
    let mut entries: Vec<WordCount> = counts
        .iter()
        .map(|(word, &count)| WordCount::new(count, word.as_str()))
        .collect();

    // Keys are unique, so an unstable sort is still a total order here.
    entries.sort_unstable_by(compare_entries);

    debug_assert!(
        entries.windows(2).all(|w| {
            let a = &w[0];
            let b = &w[1];
            a.count < b.count || (a.count == b.count && a.word < b.word)
        })
    );

    entries
}

pub fn compare_entries(a: &WordCount, b: &WordCount) -> Ordering {
    // Ascending count
    let count_cmp = a.count.cmp(&b.count);
    if count_cmp != Ordering::Equal {
        count_cmp
    } else {
        // Ascending word, byte-wise
        a.word.as_str().cmp(b.word.as_str())
    }
}
