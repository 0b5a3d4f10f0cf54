//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Classifier tuning
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Scores at or below this value are ham
    #[serde(default = "default_max_ham_score")]
    pub max_ham_score: f64,
    /// Scores at or above this value are spam
    #[serde(default = "default_min_spam_score")]
    pub min_spam_score: f64,
    /// Prior probability assumed for a word with no evidence
    #[serde(default = "default_assumed_prob")]
    pub assumed_prob: f64,
    /// Weight given to the prior, in data points
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Shortest word (in characters) kept as a feature
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    /// Per-word probabilities are clamped to [floor, 1 - floor] before combining
    #[serde(default = "default_probability_floor")]
    pub probability_floor: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level filter (overridden by RUST_LOG)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_max_ham_score() -> f64 {
    0.4
}

fn default_min_spam_score() -> f64 {
    0.6
}

fn default_assumed_prob() -> f64 {
    0.5
}

fn default_weight() -> f64 {
    1.0
}

fn default_min_token_chars() -> usize {
    3
}

fn default_probability_floor() -> f64 {
    1e-6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_ham_score: default_max_ham_score(),
            min_spam_score: default_min_spam_score(),
            assumed_prob: default_assumed_prob(),
            weight: default_weight(),
            min_token_chars: default_min_token_chars(),
            probability_floor: default_probability_floor(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SpamError::Config(format!(
                "Unknown log format '{}': expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

impl ClassifierConfig {
    /// Validate classifier settings
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_ham_score", self.max_ham_score),
            ("min_spam_score", self.min_spam_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SpamError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.max_ham_score > self.min_spam_score {
            return Err(SpamError::Config(format!(
                "max_ham_score ({}) must not exceed min_spam_score ({})",
                self.max_ham_score, self.min_spam_score
            )));
        }

        if !(self.assumed_prob > 0.0 && self.assumed_prob < 1.0) {
            return Err(SpamError::Config(format!(
                "assumed_prob must be within (0, 1), got {}",
                self.assumed_prob
            )));
        }

        if !(self.weight > 0.0) {
            return Err(SpamError::Config(format!(
                "weight must be positive, got {}",
                self.weight
            )));
        }

        if self.min_token_chars == 0 {
            return Err(SpamError::Config(
                "min_token_chars must be at least 1".to_string(),
            ));
        }

        if !(self.probability_floor > 0.0 && self.probability_floor < 0.5) {
            return Err(SpamError::Config(format!(
                "probability_floor must be within (0, 0.5), got {}",
                self.probability_floor
            )));
        }

        Ok(())
    }
}
