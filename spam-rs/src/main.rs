//! Command-line front end for spam-rs
//!
//! # Usage
//!
//! ```bash
//! # Train on two corpora and classify some messages
//! spam-rs classify --ham corpus/ham --spam corpus/spam inbox/*.eml
//!
//! # Show why a message was classified the way it was
//! spam-rs classify --ham corpus/ham --spam corpus/spam --explain message.txt
//!
//! # Print training statistics as JSON
//! spam-rs stats --ham corpus/ham --spam corpus/spam --json
//!
//! # Run the built-in example corpus
//! spam-rs demo
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::filter::{Classification, Label, SpamFilter};
use spam_rs::import::import_dirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify messages as ham, spam or unsure", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Directories to train on before doing anything else
#[derive(Args)]
struct CorpusArgs {
    /// Directory of ham messages, one per file (repeatable)
    #[arg(long)]
    ham: Vec<PathBuf>,
    /// Directory of spam messages, one per file (repeatable)
    #[arg(long)]
    spam: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the given corpora, then classify message files
    Classify {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print per-word probabilities
        #[arg(long)]
        explain: bool,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
        /// Message files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Train on the given corpora and print statistics
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Train the built-in example corpus and classify sample messages
    Demo,
}

#[derive(Serialize)]
struct FileResult {
    file: String,
    #[serde(flatten)]
    classification: Classification,
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spam_rs={}", config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn train_corpus(filter: &SpamFilter, corpus: &CorpusArgs) -> anyhow::Result<()> {
    import_dirs(filter, &corpus.ham, Label::Ham)
        .await
        .context("Failed to import ham corpus")?;
    import_dirs(filter, &corpus.spam, Label::Spam)
        .await
        .context("Failed to import spam corpus")?;
    Ok(())
}

fn print_classification(name: &str, result: &Classification, explain: bool) {
    println!("{}: {} ({:.4})", name, result.verdict, result.score);
    if explain {
        for token in &result.tokens {
            println!("    {:<30} {:.4}", token.word, token.probability);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };

    init_logging(&config.logging);
    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

    let filter = SpamFilter::new(config.classifier.clone()).context("Invalid classifier settings")?;

    match cli.command {
        Commands::Classify {
            corpus,
            explain,
            json,
            files,
        } => {
            train_corpus(&filter, &corpus).await?;

            let mut results = Vec::with_capacity(files.len());
            for path in &files {
                let data = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let text = String::from_utf8_lossy(&data);
                results.push(FileResult {
                    file: path.display().to_string(),
                    classification: filter.evaluate(&text).await,
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    print_classification(&result.file, &result.classification, explain);
                }
            }
        }
        Commands::Stats { corpus, json } => {
            train_corpus(&filter, &corpus).await?;
            let stats = filter.stats().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Ham messages:   {}", stats.ham_documents);
                println!("Spam messages:  {}", stats.spam_documents);
                println!("Ham total:      {}", stats.total_ham);
                println!("Spam total:     {}", stats.total_spam);
                println!("Unique words:   {}", stats.unique_tokens);
            }
        }
        Commands::Demo => {
            for text in ["hello world", "bye world", "learn new"] {
                filter.learn_ham(text).await;
            }
            for text in ["buy now", "ad buy"] {
                filter.learn_spam(text).await;
            }

            for text in ["hello world", "goodbye world", "buy item now"] {
                let result = filter.evaluate(text).await;
                print_classification(text, &result, true);
            }
        }
    }

    Ok(())
}
