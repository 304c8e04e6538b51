use super::types::{Corpus, Document, SizeThresholds};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Builds the corpus from a directory of extracted plain-text CVs.
///
/// Only `.txt` files are considered; PDF/DOCX extraction happens upstream.
/// A file that cannot be read or is empty is skipped with a warning so one
/// broken document never aborts the whole load. An unreadable directory is
/// fatal to startup.
pub fn load_corpus(dir: &Path, thresholds: SizeThresholds) -> Result<Corpus> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read corpus directory {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable directory entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let filename = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let raw_text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", path.display(), err);
                continue;
            }
        };
        if raw_text.trim().is_empty() {
            tracing::warn!("Skipping empty document {}", filename);
            continue;
        }

        documents.push(Document::new(filename, raw_text, thresholds));
    }

    if documents.is_empty() {
        tracing::warn!("No documents loaded from {}", dir.display());
    }

    Ok(Corpus::new(documents))
}
