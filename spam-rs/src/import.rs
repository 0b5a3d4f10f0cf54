//! Batch training from message collections
//!
//! Feeds labeled messages to a filter, either from memory or from a
//! directory holding one message per file.

use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::error::Result;
use crate::filter::{BayesianFilter, Label, SpamFilter};

/// Outcome of a directory import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Files trained on
    pub imported: usize,
    /// Entries that were not regular files
    pub skipped: usize,
}

impl ImportReport {
    fn merge(&mut self, other: ImportReport) {
        self.imported += other.imported;
        self.skipped += other.skipped;
    }
}

/// Train `filter` on every message under the same label
pub fn import_messages<I, S>(filter: &mut BayesianFilter, messages: I, label: Label) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0;
    for message in messages {
        filter.train(message.as_ref(), label);
        count += 1;
    }
    count
}

/// Messages read from one directory, not yet trained on
struct DirMessages {
    texts: Vec<String>,
    skipped: usize,
}

/// Read every regular file directly inside `dir`, in name order
async fn read_messages(dir: &Path) -> Result<DirMessages> {
    let mut entries = fs::read_dir(dir).await?;

    let mut files = Vec::new();
    let mut skipped = 0;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        } else {
            warn!("Skipping non-file entry {}", entry.path().display());
            skipped += 1;
        }
    }
    files.sort();

    let mut texts = Vec::with_capacity(files.len());
    for path in files {
        let data = fs::read(&path).await?;
        texts.push(String::from_utf8_lossy(&data).into_owned());
    }

    Ok(DirMessages { texts, skipped })
}

async fn train_messages(filter: &SpamFilter, messages: &DirMessages, label: Label) -> ImportReport {
    for text in &messages.texts {
        filter.train(text, label).await;
    }
    ImportReport {
        imported: messages.texts.len(),
        skipped: messages.skipped,
    }
}

/// Train on every regular file directly inside `dir`
///
/// Files are read in name order and decoded as UTF-8, replacing invalid
/// sequences. Sub-directories are not descended into. Every file is read
/// before any is trained on, so an I/O error leaves `filter` untouched.
pub async fn import_dir(filter: &SpamFilter, dir: impl AsRef<Path>, label: Label) -> Result<ImportReport> {
    let dir = dir.as_ref();
    let messages = read_messages(dir).await?;
    let report = train_messages(filter, &messages, label).await;

    info!(
        "Imported {} {} messages from {} ({} skipped)",
        report.imported,
        label,
        dir.display(),
        report.skipped
    );

    Ok(report)
}

/// Import several directories under the same label
///
/// All directories are read first; nothing is trained if any of them fails.
pub async fn import_dirs<P: AsRef<Path>>(filter: &SpamFilter, dirs: &[P], label: Label) -> Result<ImportReport> {
    let mut batches = Vec::with_capacity(dirs.len());
    for dir in dirs {
        batches.push(read_messages(dir.as_ref()).await?);
    }

    let mut total = ImportReport::default();
    for (dir, messages) in dirs.iter().zip(&batches) {
        let report = train_messages(filter, messages, label).await;
        info!(
            "Imported {} {} messages from {} ({} skipped)",
            report.imported,
            label,
            dir.as_ref().display(),
            report.skipped
        );
        total.merge(report);
    }
    Ok(total)
}
