//! spam-rs: Bayesian ham/spam text classifier
//!
//! Learns word statistics from labeled messages and classifies new text as
//! ham, spam or unsure by combining per-word probabilities with Fisher's
//! inverse chi-square method.
//!
//! # Features
//!
//! - **Incremental training**: every message updates per-word ham/spam counts
//! - **Smoothed estimates**: rare words are pulled toward a neutral prior
//! - **Fisher combination**: robust against long messages and extreme words
//! - **Three-way verdict**: ham, spam, or unsure between the thresholds
//!
//! # Example
//!
//! ```
//! use spam_rs::filter::{BayesianFilter, Label, Verdict};
//!
//! let mut filter = BayesianFilter::default();
//! filter.train("hello world", Label::Ham);
//! filter.train("bye world", Label::Ham);
//! filter.train("learn new", Label::Ham);
//! filter.train("buy now", Label::Spam);
//! filter.train("ad buy", Label::Spam);
//!
//! assert_eq!(filter.classify("hello world"), Verdict::Ham);
//! assert_eq!(filter.classify("buy item now"), Verdict::Spam);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`filter`]: Word statistics, scoring and classification
//! - [`import`]: Batch training from message collections

pub mod config;
pub mod error;
pub mod filter;
pub mod import;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use filter::{BayesianFilter, Label, SpamFilter, Verdict};
