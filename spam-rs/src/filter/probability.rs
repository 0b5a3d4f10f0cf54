//! Per-word spam probability
//!
//! The raw estimate compares how often a word shows up in each corpus,
//! normalised by the corpus totals. The smoothed estimate blends that with
//! a neutral prior, weighted by how much evidence the word has.

use super::types::{CorpusTotals, TokenStatistic};

/// Computes smoothed per-word spam probabilities
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEstimator {
    assumed_prob: f64,
    weight: f64,
}

impl ProbabilityEstimator {
    pub fn new(assumed_prob: f64, weight: f64) -> Self {
        Self {
            assumed_prob,
            weight,
        }
    }

    /// Frequency-based spam probability, 0 for a word with no observations
    pub fn raw_spam_probability(stat: &TokenStatistic, totals: CorpusTotals) -> f64 {
        let spam_freq = stat.spam_count as f64 / totals.total_spam.max(1) as f64;
        let ham_freq = stat.ham_count as f64 / totals.total_ham.max(1) as f64;

        let denominator = spam_freq + ham_freq;
        if denominator == 0.0 {
            0.0
        } else {
            spam_freq / denominator
        }
    }

    /// Raw probability pulled toward the prior in proportion to how sparse
    /// the evidence is
    pub fn spam_probability(&self, stat: &TokenStatistic, totals: CorpusTotals) -> f64 {
        let basic_prob = Self::raw_spam_probability(stat, totals);
        let data_points = stat.data_points() as f64;

        (self.weight * self.assumed_prob + data_points * basic_prob) / (self.weight + data_points)
    }
}

impl Default for ProbabilityEstimator {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}
