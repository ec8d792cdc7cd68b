use words_statistics::{StatisticsError, WordCount, WordsStatistics};

fn stats() -> WordsStatistics {
    WordsStatistics::default()
}

fn add(statistics: &mut WordsStatistics, word: &str) {
    statistics.add_word(Some(word)).unwrap();
}

fn entries(statistics: &WordsStatistics) -> Vec<WordCount> {
    statistics.get_statistics().into_iter().collect()
}

#[test]
fn empty_after_creation() {
    let statistics = stats();
    assert!(statistics.get_statistics().is_empty());
}

#[test]
fn contains_item_after_addition() {
    let mut statistics = stats();
    add(&mut statistics, "abc");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "abc")]);
}

#[test]
fn contains_many_items_after_adding_different_words() {
    let mut statistics = stats();
    add(&mut statistics, "abc");
    add(&mut statistics, "def");
    assert_eq!(statistics.get_statistics().len(), 2);
}

#[test]
fn each_read_reflects_additions_since_the_previous_one() {
    let mut statistics = stats();
    add(&mut statistics, "abc");
    add(&mut statistics, "def");
    assert_eq!(statistics.get_statistics().len(), 2);
    add(&mut statistics, "d");
    assert_eq!(statistics.get_statistics().len(), 3);
}

#[test]
fn same_word_twice_yields_single_entry() {
    let mut statistics = stats();
    add(&mut statistics, "abc");
    add(&mut statistics, "abc");
    assert_eq!(entries(&statistics), vec![WordCount::new(2, "abc")]);
}

#[test]
fn long_word_is_truncated() {
    let mut statistics = stats();
    add(&mut statistics, "12345678901");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "1234567890")]);
}

#[test]
fn short_word_is_kept() {
    let mut statistics = stats();
    add(&mut statistics, "123456");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "123456")]);
}

#[test]
fn word_is_lower_cased() {
    let mut statistics = stats();
    add(&mut statistics, "Abc");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "abc")]);
}

#[test]
fn different_case_counts_as_same_word() {
    let mut statistics = stats();
    add(&mut statistics, "Abc");
    add(&mut statistics, "abc");
    assert_eq!(entries(&statistics), vec![WordCount::new(2, "abc")]);
}

#[test]
fn leading_spaces_do_not_split_the_word() {
    let mut statistics = stats();
    add(&mut statistics, "          a");
    assert_eq!(statistics.get_statistics().len(), 1);
}

#[test]
fn cyrillic_hard_sign_is_lower_cased() {
    let mut statistics = stats();
    add(&mut statistics, "Ъ");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "ъ")]);
}

#[test]
fn cyrillic_yo_is_lower_cased() {
    let mut statistics = stats();
    add(&mut statistics, "Ё");
    assert_eq!(entries(&statistics), vec![WordCount::new(1, "ё")]);
}

#[test]
fn equal_counts_are_ordered_by_word() {
    let mut statistics = stats();
    add(&mut statistics, "Abc");
    add(&mut statistics, "Aac");
    assert_eq!(
        entries(&statistics),
        vec![WordCount::new(1, "aac"), WordCount::new(1, "abc")]
    );
}

#[test]
fn entries_are_ordered_by_count_then_word() {
    let mut statistics = stats();
    add(&mut statistics, "Abc");
    add(&mut statistics, "Abc");
    add(&mut statistics, "Aac");

    let pairs: Vec<(usize, String)> = statistics.get_statistics().into_iter().map(Into::into).collect();
    assert_eq!(pairs, vec![(1, "aac".to_string()), (2, "abc".to_string())]);
}

#[test]
fn empty_string_is_ignored() {
    let mut statistics = stats();
    assert_eq!(statistics.add_word(Some("")), Ok(()));
    assert_eq!(statistics.get_statistics().len(), 0);
}

#[test]
fn whitespace_only_is_ignored() {
    let mut statistics = stats();
    assert_eq!(statistics.add_word(Some("   ")), Ok(()));
    assert_eq!(statistics.add_word(Some("\t\n ")), Ok(()));
    assert_eq!(statistics.get_statistics().len(), 0);
}

#[test]
fn null_word_is_rejected() {
    let mut statistics = stats();
    assert_eq!(statistics.add_word(None), Err(StatisticsError::NullWord));
    assert!(statistics.get_statistics().is_empty());
}

#[test]
fn null_word_rejection_is_repeatable_and_leaves_counts_alone() {
    let mut statistics = stats();
    add(&mut statistics, "abc");

    assert_eq!(statistics.add_word(None), Err(StatisticsError::NullWord));
    assert_eq!(statistics.add_word(None), Err(StatisticsError::NullWord));

    assert_eq!(entries(&statistics), vec![WordCount::new(1, "abc")]);
}

#[test]
fn counters_agree_with_snapshot() {
    let mut statistics = stats();
    for word in ["b", "a", "B", "c", "", "A", "a"] {
        add(&mut statistics, word);
    }

    let snapshot = statistics.get_statistics();
    assert_eq!(statistics.len(), snapshot.len());
    assert_eq!(statistics.total(), snapshot.total());
    assert_eq!(statistics.total(), 6);
    assert_eq!(statistics.count("A"), 3);
    assert_eq!(statistics.count("b"), 2);
    assert_eq!(statistics.count("c"), 1);
    assert_eq!(statistics.count("zzz"), 0);
    assert_eq!(statistics.count("  "), 0);
    assert!(!statistics.is_empty());
}
