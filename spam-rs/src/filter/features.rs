//! Feature extraction
//!
//! Turns raw text into the set of distinct words long enough to count.
//! Words are split on whitespace and kept verbatim: no case folding, no
//! punctuation stripping, so `Buy` and `buy!` are different features.

use std::borrow::Cow;
use std::collections::BTreeSet;

use super::store::WordStatistics;
use super::types::TokenStatistic;

/// Splits text into qualifying words
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    min_token_chars: usize,
}

impl FeatureExtractor {
    pub fn new(min_token_chars: usize) -> Self {
        Self { min_token_chars }
    }

    /// Distinct qualifying words, in sorted order
    ///
    /// A word appearing several times contributes once.
    pub fn words<'t>(&self, text: &'t str) -> BTreeSet<&'t str> {
        text.split_whitespace()
            .filter(|word| word.chars().count() >= self.min_token_chars)
            .collect()
    }

    /// Resolve every qualifying word against the store, creating zero-count
    /// entries for words seen for the first time
    pub fn extract<'s>(&self, store: &'s mut WordStatistics, text: &str) -> Vec<&'s TokenStatistic> {
        let words = self.words(text);
        for word in &words {
            store.get_or_insert(word);
        }

        let store: &'s WordStatistics = store;
        words.into_iter().filter_map(|word| store.get(word)).collect()
    }

    /// Resolve qualifying words without touching the store
    ///
    /// Unknown words come back as owned zero-count statistics, which score
    /// exactly like a freshly inserted entry.
    pub fn lookup<'s>(&self, store: &'s WordStatistics, text: &str) -> Vec<Cow<'s, TokenStatistic>> {
        self.words(text)
            .into_iter()
            .map(|word| match store.get(word) {
                Some(stat) => Cow::Borrowed(stat),
                None => Cow::Owned(TokenStatistic::new(word)),
            })
            .collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::types::Label;

    #[test]
    fn test_short_words_are_dropped() {
        let extractor = FeatureExtractor::default();
        let words = extractor.words("a an the buy it now");
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["buy", "now", "the"]);
    }

    #[test]
    fn test_words_are_deduplicated() {
        let extractor = FeatureExtractor::default();
        let words = extractor.words("spam spam spam eggs spam");
        assert_eq!(words.len(), 2);
        assert!(words.contains("spam"));
        assert!(words.contains("eggs"));
    }

    #[test]
    fn test_case_and_punctuation_are_kept() {
        let extractor = FeatureExtractor::default();
        let words = extractor.words("Buy buy buy! BUY");
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_splits_on_any_whitespace() {
        let extractor = FeatureExtractor::default();
        let words = extractor.words("hello\tworld\n\nagain  ");
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["again", "hello", "world"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let extractor = FeatureExtractor::default();
        // Two characters, four bytes
        assert!(extractor.words("éé").is_empty());
        assert_eq!(extractor.words("ééé").len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let extractor = FeatureExtractor::default();
        assert!(extractor.words("").is_empty());
        assert!(extractor.words("   \n ").is_empty());
    }

    #[test]
    fn test_custom_minimum_length() {
        let extractor = FeatureExtractor::new(5);
        let words = extractor.words("hello world bye");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_extract_inserts_without_counting() {
        let mut store = WordStatistics::new();
        let extractor = FeatureExtractor::default();

        let features = extractor.extract(&mut store, "hello world hello");
        assert_eq!(features.len(), 2);
        assert!(features.iter().all(|f| f.data_points() == 0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.totals().total_ham, 0);
    }

    #[test]
    fn test_extract_returns_existing_entries() {
        let mut store = WordStatistics::new();
        store.record("hello", Label::Ham);
        let extractor = FeatureExtractor::default();

        let features = extractor.extract(&mut store, "hello");
        assert_eq!(features[0].ham_count, 1);
    }

    #[test]
    fn test_lookup_leaves_store_untouched() {
        let mut store = WordStatistics::new();
        store.record("hello", Label::Ham);
        let extractor = FeatureExtractor::default();

        let features = extractor.lookup(&store, "hello stranger");
        assert_eq!(features.len(), 2);
        assert_eq!(store.len(), 1);

        let hello = features.iter().find(|f| f.word == "hello").unwrap();
        assert!(matches!(hello, Cow::Borrowed(_)));
        let stranger = features.iter().find(|f| f.word == "stranger").unwrap();
        assert_eq!(stranger.data_points(), 0);
    }
}
