//! Integration tests for the Bayesian spam filter

use spam_rs::config::{ClassifierConfig, Config};
use spam_rs::filter::{BayesianFilter, Label, ModelStats, SpamFilter, Verdict};
use spam_rs::import::{import_dir, import_messages};
use std::io::Write;

const EPSILON: f64 = 1e-12;

/// Helper to build the filter used throughout these tests
fn trained_filter() -> BayesianFilter {
    let mut filter = BayesianFilter::default();
    import_messages(&mut filter, ["hello world", "bye world", "learn new"], Label::Ham);
    import_messages(&mut filter, ["buy now", "ad buy"], Label::Spam);
    filter
}

#[test]
fn test_sample_corpus_scenario() {
    let filter = trained_filter();

    assert_eq!(filter.classify("hello world"), Verdict::Ham);
    assert_eq!(filter.classify("goodbye world"), Verdict::Ham);
    assert_eq!(filter.classify("buy item now"), Verdict::Spam);

    assert!((filter.score("buy item now") - 0.8148943859415341).abs() < EPSILON);
}

#[test]
fn test_untrained_word_is_neutral() {
    let filter = trained_filter();
    assert_eq!(filter.spam_probability("unseen"), 0.5);
    assert_eq!(filter.classify("unseen"), Verdict::Unsure);
}

#[test]
fn test_spam_evidence_raises_probability() {
    let mut filter = trained_filter();
    let mut previous = filter.spam_probability("world");

    for _ in 0..5 {
        filter.train("world", Label::Spam);
        let current = filter.spam_probability("world");
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_reset_returns_to_neutral() {
    let mut filter = trained_filter();
    filter.reset();

    assert_eq!(filter.stats(), ModelStats::default());
    for text in ["hello world", "buy item now", "anything at all"] {
        assert_eq!(filter.score(text), 0.5);
        assert_eq!(filter.classify(text), Verdict::Unsure);
    }
}

#[test]
fn test_empty_message() {
    let filter = trained_filter();
    assert_eq!(filter.classify(""), Verdict::Unsure);
    assert_eq!(filter.evaluate("").tokens.len(), 0);
}

#[test]
fn test_raw_probability_is_total_normalised() {
    let mut filter = BayesianFilter::default();
    filter.train("offer", Label::Spam);
    filter.train("offer", Label::Ham);
    filter.train("lunch plans today", Label::Ham);

    // spam_freq = 1/1, ham_freq = 1/4, so 0.8 rather than 1/2
    assert!((filter.raw_spam_probability("offer") - 0.8).abs() < EPSILON);
    let token = filter.token("offer").unwrap();
    assert_eq!((token.ham_count, token.spam_count), (1, 1));
}

#[test]
fn test_label_parsing_rejects_unknown() {
    assert!("ham".parse::<Label>().is_ok());
    assert!("junk".parse::<Label>().is_err());
}

#[test]
fn test_config_from_file_drives_filter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[classifier]\nmax_ham_score = 0.1\nmin_spam_score = 0.9").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let mut filter = BayesianFilter::new(config.classifier).unwrap();
    import_messages(&mut filter, ["hello world", "bye world", "learn new"], Label::Ham);
    import_messages(&mut filter, ["buy now", "ad buy"], Label::Spam);

    assert_eq!(filter.classify("hello world"), Verdict::Unsure);
    assert_eq!(filter.classify("buy item now"), Verdict::Unsure);
}

#[test]
fn test_longer_token_minimum() {
    let config = ClassifierConfig {
        min_token_chars: 5,
        ..ClassifierConfig::default()
    };
    let mut filter = BayesianFilter::new(config).unwrap();
    filter.train("buy cheap watches", Label::Spam);

    assert!(filter.token("buy").is_none());
    assert!(filter.token("cheap").is_some());
    assert_eq!(filter.stats().total_spam, 2);
}

#[test]
fn test_invalid_config_is_rejected_before_use() {
    let config = ClassifierConfig {
        probability_floor: 0.7,
        ..ClassifierConfig::default()
    };
    assert!(BayesianFilter::new(config.clone()).is_err());
    assert!(SpamFilter::new(config).is_err());
}

#[tokio::test]
async fn test_directory_training_end_to_end() {
    let ham = tempfile::tempdir().unwrap();
    let spam = tempfile::tempdir().unwrap();
    for (i, text) in ["hello world", "bye world", "learn new"].iter().enumerate() {
        std::fs::write(ham.path().join(format!("{}.txt", i)), text).unwrap();
    }
    for (i, text) in ["buy now", "ad buy"].iter().enumerate() {
        std::fs::write(spam.path().join(format!("{}.txt", i)), text).unwrap();
    }

    let filter = SpamFilter::default();
    import_dir(&filter, ham.path(), Label::Ham).await.unwrap();
    import_dir(&filter, spam.path(), Label::Spam).await.unwrap();

    assert_eq!(filter.classify("hello world").await, Verdict::Ham);
    assert_eq!(filter.classify("buy item now").await, Verdict::Spam);

    let classification = filter.evaluate("buy item now").await;
    assert_eq!(classification.tokens[0].word, "buy");
    assert!(classification.spam_indicator > classification.ham_indicator);

    filter.reset().await;
    assert_eq!(filter.classify("buy item now").await, Verdict::Unsure);
}
