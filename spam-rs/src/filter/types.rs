//! Filter types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpamError;

/// Label attached to a training message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unwanted message
    Spam,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = SpamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ham" => Ok(Label::Ham),
            "spam" => Ok(Label::Spam),
            _ => Err(SpamError::InvalidLabel(s.to_string())),
        }
    }
}

/// Outcome of classifying a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ham,
    Spam,
    /// Score fell between the ham and spam thresholds
    Unsure,
}

impl Verdict {
    /// Map a document score onto a verdict. Both boundaries are inclusive
    /// to their class, never to `Unsure`.
    pub fn from_score(score: f64, max_ham_score: f64, min_spam_score: f64) -> Self {
        if score <= max_ham_score {
            Verdict::Ham
        } else if score >= min_spam_score {
            Verdict::Spam
        } else {
            Verdict::Unsure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ham => "ham",
            Verdict::Spam => "spam",
            Verdict::Unsure => "unsure",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Ham => Verdict::Ham,
            Label::Spam => Verdict::Spam,
        }
    }
}

/// Per-word training counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatistic {
    /// The word exactly as it appeared in the text
    pub word: String,
    /// Number of ham documents containing the word
    pub ham_count: u64,
    /// Number of spam documents containing the word
    pub spam_count: u64,
}

impl TokenStatistic {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ham_count: 0,
            spam_count: 0,
        }
    }

    /// Record one more document carrying this word
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Ham => self.ham_count += 1,
            Label::Spam => self.spam_count += 1,
        }
    }

    /// Total number of observations behind this word
    pub fn data_points(&self) -> u64 {
        self.ham_count + self.spam_count
    }
}

/// Corpus-wide counters shared by every token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusTotals {
    pub total_ham: u64,
    pub total_spam: u64,
}

/// Probability contributed by a single word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenScore {
    pub word: String,
    /// Smoothed spam probability
    pub probability: f64,
}

/// Full result of classifying a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    /// Document score in [0, 1]; higher is more spam-like
    pub score: f64,
    pub spam_indicator: f64,
    pub ham_indicator: f64,
    /// Word probabilities, most decisive first
    pub tokens: Vec<TokenScore>,
}

/// Model statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    /// Ham corpus total
    pub total_ham: u64,
    /// Spam corpus total
    pub total_spam: u64,
    /// Distinct words in the store
    pub unique_tokens: usize,
    /// Ham messages learned
    pub ham_documents: u64,
    /// Spam messages learned
    pub spam_documents: u64,
}
