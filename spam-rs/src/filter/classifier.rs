//! Bayesian filter
//!
//! Owns the word statistics and drives training and classification:
//! extract words, then either count them (train) or score them and apply
//! the ham/spam thresholds (classify).

use std::cmp::Ordering;
use tracing::debug;

use super::features::FeatureExtractor;
use super::fisher::FisherCombiner;
use super::probability::ProbabilityEstimator;
use super::store::WordStatistics;
use super::types::*;
use crate::config::ClassifierConfig;
use crate::error::Result;

/// Bayesian ham/spam filter
#[derive(Debug, Clone)]
pub struct BayesianFilter {
    config: ClassifierConfig,
    store: WordStatistics,
    extractor: FeatureExtractor,
    estimator: ProbabilityEstimator,
    combiner: FisherCombiner,
}

impl BayesianFilter {
    /// Create an untrained filter
    ///
    /// Fails with `SpamError::Config` when `config` does not pass
    /// `ClassifierConfig::validate`.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Build from a config already known to be valid
    fn with_config(config: ClassifierConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config.min_token_chars),
            estimator: ProbabilityEstimator::new(config.assumed_prob, config.weight),
            combiner: FisherCombiner::new(config.probability_floor),
            store: WordStatistics::new(),
            config,
        }
    }

    /// Get current config
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Word statistics learned so far
    pub fn store(&self) -> &WordStatistics {
        &self.store
    }

    /// Resolve the distinct qualifying words of `text` to their statistics,
    /// registering words seen for the first time with zero counts
    pub fn extract_features(&mut self, text: &str) -> Vec<&TokenStatistic> {
        self.extractor.extract(&mut self.store, text)
    }

    /// Learn from a message
    ///
    /// Every distinct qualifying word gets its `label` count and the matching
    /// corpus total bumped by one. Text with no qualifying words is a no-op.
    pub fn train(&mut self, text: &str, label: Label) {
        let words = self.extractor.words(text);
        if words.is_empty() {
            return;
        }

        for word in &words {
            self.store.record(word, label);
        }
        self.store.record_document(label);

        debug!("Learned {} message with {} features", label, words.len());
    }

    /// Learn from a spam message
    pub fn learn_spam(&mut self, text: &str) {
        self.train(text, Label::Spam);
    }

    /// Learn from a ham message
    pub fn learn_ham(&mut self, text: &str) {
        self.train(text, Label::Ham);
    }

    /// Document score in [0, 1]; higher is more spam-like
    ///
    /// Unknown words are scored as zero-count statistics without being
    /// registered, so scoring never grows the store.
    pub fn score(&self, text: &str) -> f64 {
        let probs: Vec<f64> = self
            .extractor
            .lookup(&self.store, text)
            .iter()
            .map(|stat| self.estimator.spam_probability(stat, self.store.totals()))
            .collect();

        self.combiner.combine(&probs).score
    }

    /// Classify a message as ham, spam or unsure
    ///
    /// Words are looked up, not inserted. A word seen only during
    /// classification stays out of `token()` and `stats().unique_tokens`;
    /// call [`extract_features`](Self::extract_features) to register it.
    pub fn classify(&self, text: &str) -> Verdict {
        self.verdict(self.score(text))
    }

    /// Classify a message and report how each word contributed
    pub fn evaluate(&self, text: &str) -> Classification {
        let totals = self.store.totals();
        let mut tokens: Vec<TokenScore> = self
            .extractor
            .lookup(&self.store, text)
            .iter()
            .map(|stat| TokenScore {
                word: stat.word.clone(),
                probability: self.estimator.spam_probability(stat, totals),
            })
            .collect();

        let probs: Vec<f64> = tokens.iter().map(|t| t.probability).collect();
        let combined = self.combiner.combine(&probs);

        tokens.sort_by(|a, b| {
            let da = (a.probability - 0.5).abs();
            let db = (b.probability - 0.5).abs();
            db.partial_cmp(&da)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });

        let verdict = self.verdict(combined.score);
        debug!(
            "Classified message as {} (score {:.4}, {} features)",
            verdict,
            combined.score,
            tokens.len()
        );

        Classification {
            verdict,
            score: combined.score,
            spam_indicator: combined.spam_indicator,
            ham_indicator: combined.ham_indicator,
            tokens,
        }
    }

    /// Apply the configured thresholds to a score
    pub fn verdict(&self, score: f64) -> Verdict {
        Verdict::from_score(score, self.config.max_ham_score, self.config.min_spam_score)
    }

    /// Get a word's statistics
    pub fn token(&self, word: &str) -> Option<&TokenStatistic> {
        self.store.get(word)
    }

    /// Unsmoothed spam probability of a word, 0 when unknown
    pub fn raw_spam_probability(&self, word: &str) -> f64 {
        self.store
            .get(word)
            .map(|stat| ProbabilityEstimator::raw_spam_probability(stat, self.store.totals()))
            .unwrap_or(0.0)
    }

    /// Smoothed spam probability of a word, the prior when unknown
    pub fn spam_probability(&self, word: &str) -> f64 {
        match self.store.get(word) {
            Some(stat) => self.estimator.spam_probability(stat, self.store.totals()),
            None => self
                .estimator
                .spam_probability(&TokenStatistic::new(word), self.store.totals()),
        }
    }

    /// Forget everything learned
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Get training statistics
    pub fn stats(&self) -> ModelStats {
        self.store.stats()
    }
}

impl Default for BayesianFilter {
    fn default() -> Self {
        Self::with_config(ClassifierConfig::default())
    }
}
