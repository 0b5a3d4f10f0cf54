//! Word statistics store
//!
//! Maps each word ever trained on to its ham/spam document counts and keeps
//! the corpus totals those counts are measured against. Entries are created
//! on first sight and never removed except by [`WordStatistics::reset`].

use std::collections::HashMap;

use super::types::{CorpusTotals, Label, ModelStats, TokenStatistic};

/// Word statistics store
#[derive(Debug, Clone, Default)]
pub struct WordStatistics {
    tokens: HashMap<String, TokenStatistic>,
    totals: CorpusTotals,
    ham_documents: u64,
    spam_documents: u64,
}

impl WordStatistics {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a word, inserting a zero-count entry on first sight
    pub fn get_or_insert(&mut self, word: &str) -> &mut TokenStatistic {
        self.tokens
            .entry(word.to_string())
            .or_insert_with(|| TokenStatistic::new(word))
    }

    /// Look up a word without inserting it
    pub fn get(&self, word: &str) -> Option<&TokenStatistic> {
        self.tokens.get(word)
    }

    /// Count one occurrence of `word` under `label`, bumping the matching
    /// corpus total alongside it
    pub fn record(&mut self, word: &str, label: Label) {
        self.get_or_insert(word).increment(label);
        match label {
            Label::Ham => self.totals.total_ham += 1,
            Label::Spam => self.totals.total_spam += 1,
        }
    }

    /// Note that a whole document was learned
    pub(crate) fn record_document(&mut self, label: Label) {
        match label {
            Label::Ham => self.ham_documents += 1,
            Label::Spam => self.spam_documents += 1,
        }
    }

    pub fn totals(&self) -> CorpusTotals {
        self.totals
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Drop every word and zero all totals
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            total_ham: self.totals.total_ham,
            total_spam: self.totals.total_spam,
            unique_tokens: self.tokens.len(),
            ham_documents: self.ham_documents,
            spam_documents: self.spam_documents,
        }
    }
}
