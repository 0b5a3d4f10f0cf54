//! Bayesian spam filtering
//!
//! Word-frequency model trained incrementally on labeled messages and
//! combined with Fisher's method into a single ham/spam score.

pub mod classifier;
pub mod features;
pub mod fisher;
pub mod manager;
pub mod probability;
pub mod store;
pub mod types;

pub use classifier::BayesianFilter;
pub use features::FeatureExtractor;
pub use fisher::{fisher, inverse_chi_square, DocumentScore, FisherCombiner};
pub use manager::SpamFilter;
pub use probability::ProbabilityEstimator;
pub use store::WordStatistics;
pub use types::*;
