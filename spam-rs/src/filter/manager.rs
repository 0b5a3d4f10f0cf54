//! Shared spam filter handle
//!
//! Wraps a [`BayesianFilter`] behind an async read/write lock so training
//! and classification can be driven from several tasks. Training and reset
//! take the write lock; classification only reads.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::classifier::BayesianFilter;
use super::types::*;
use crate::config::ClassifierConfig;
use crate::error::Result;

/// Cloneable, thread-safe spam filter
#[derive(Clone)]
pub struct SpamFilter {
    inner: Arc<RwLock<BayesianFilter>>,
}

impl SpamFilter {
    /// Create a new untrained filter, rejecting an invalid config
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        Ok(Self::from_filter(BayesianFilter::new(config)?))
    }

    /// Wrap an existing filter
    pub fn from_filter(filter: BayesianFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    /// Learn from a message
    pub async fn train(&self, text: &str, label: Label) {
        let mut filter = self.inner.write().await;
        filter.train(text, label);
    }

    /// Learn from spam message
    pub async fn learn_spam(&self, text: &str) {
        self.train(text, Label::Spam).await;
    }

    /// Learn from ham message
    pub async fn learn_ham(&self, text: &str) {
        self.train(text, Label::Ham).await;
    }

    /// Classify a message
    pub async fn classify(&self, text: &str) -> Verdict {
        let filter = self.inner.read().await;
        filter.classify(text)
    }

    /// Score a message
    pub async fn score(&self, text: &str) -> f64 {
        let filter = self.inner.read().await;
        filter.score(text)
    }

    /// Classify a message with per-word detail
    pub async fn evaluate(&self, text: &str) -> Classification {
        let filter = self.inner.read().await;
        filter.evaluate(text)
    }

    /// Forget everything learned
    pub async fn reset(&self) {
        let mut filter = self.inner.write().await;
        filter.reset();
        info!("Spam filter reset");
    }

    /// Get training statistics
    pub async fn stats(&self) -> ModelStats {
        let filter = self.inner.read().await;
        filter.stats()
    }

    /// Copy of the current filter state
    pub async fn snapshot(&self) -> BayesianFilter {
        self.inner.read().await.clone()
    }
}

impl Default for SpamFilter {
    fn default() -> Self {
        Self::from_filter(BayesianFilter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_train_and_classify() {
        let filter = SpamFilter::default();
        filter.learn_ham("hello world").await;
        filter.learn_ham("bye world").await;
        filter.learn_ham("learn new").await;
        filter.learn_spam("buy now").await;
        filter.learn_spam("ad buy").await;

        assert_eq!(filter.classify("hello world").await, Verdict::Ham);
        assert_eq!(filter.classify("buy item now").await, Verdict::Spam);

        let stats = filter.stats().await;
        assert_eq!(stats.total_ham, 6);
        assert_eq!(stats.total_spam, 3);
        assert_eq!(stats.ham_documents, 3);
        assert_eq!(stats.spam_documents, 2);
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_config() {
        let config = ClassifierConfig {
            probability_floor: 0.7,
            ..ClassifierConfig::default()
        };
        assert!(SpamFilter::new(config).is_err());

        let filter = SpamFilter::new(ClassifierConfig::default()).unwrap();
        filter.learn_spam("buy now").await;
        assert_eq!(filter.classify("buy now").await, Verdict::Spam);
    }

    #[tokio::test]
    async fn test_from_filter_keeps_training() {
        let mut trained = BayesianFilter::default();
        trained.learn_ham("hello world");
        trained.learn_spam("buy now");

        let filter = SpamFilter::from_filter(trained);
        assert_eq!(filter.stats().await.unique_tokens, 4);
        assert_eq!(filter.classify("hello").await, Verdict::Ham);
        assert_eq!(filter.classify("buy").await, Verdict::Spam);
    }

    #[tokio::test]
    async fn test_reset() {
        let filter = SpamFilter::default();
        filter.learn_spam("buy now").await;
        filter.reset().await;

        assert_eq!(filter.stats().await, ModelStats::default());
        assert_eq!(filter.score("buy now").await, 0.5);
        assert_eq!(filter.classify("buy now").await, Verdict::Unsure);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let filter = SpamFilter::default();
        let other = filter.clone();
        other.learn_spam("cheap pills").await;

        assert_eq!(filter.stats().await.spam_documents, 1);
    }

    #[tokio::test]
    async fn test_concurrent_training() {
        let filter = SpamFilter::default();

        let mut handles = Vec::new();
        for i in 0..20 {
            let filter = filter.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    filter.learn_ham("meeting tomorrow").await;
                } else {
                    filter.learn_spam("free money").await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stats = filter.stats().await;
        assert_eq!(stats.total_ham, 20);
        assert_eq!(stats.total_spam, 20);

        let snapshot = filter.snapshot().await;
        assert_eq!(snapshot.token("meeting").unwrap().ham_count, 10);
        assert_eq!(snapshot.token("money").unwrap().spam_count, 10);
    }
}
