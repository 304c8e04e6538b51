//! Corpus Data Types
//!
//! Defines the immutable document model and the size-category bucketing used
//! to break down benchmark results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Length thresholds that assign documents to size buckets.
///
/// Documents shorter than `small_max` are Small, shorter than `medium_max`
/// are Medium, and everything at or above `medium_max` is Large.
#[derive(Debug, Clone, Copy)]
pub struct SizeThresholds {
    pub small_max: usize,
    pub medium_max: usize,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            small_max: 2_000,
            medium_max: 8_000,
        }
    }
}

impl SizeThresholds {
    pub fn categorize(&self, length: usize) -> SizeCategory {
        if length < self.small_max {
            SizeCategory::Small
        } else if length < self.medium_max {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }
}

/// Size bucket assigned to a document by raw text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

/// A single candidate CV, immutable after corpus load.
///
/// `normalized_text` is the lowercased raw text; all matching runs against it
/// so that keyword search is case-insensitive without per-request work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub raw_text: String,
    pub normalized_text: String,
    pub length: usize,
    pub size_category: SizeCategory,
}

impl Document {
    pub fn new(filename: String, raw_text: String, thresholds: SizeThresholds) -> Self {
        let length = raw_text.chars().count();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            normalized_text: raw_text.to_lowercase(),
            length,
            size_category: thresholds.categorize(length),
            filename,
            raw_text,
        }
    }
}

/// Read-only collection of documents shared across requests.
///
/// Documents are kept sorted by filename so that every scan observes the
/// same deterministic order.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    pub fn new(mut documents: Vec<Document>) -> Self {
        documents.sort_by(|a, b| a.filename.cmp(&b.filename));
        let by_id = documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| (doc.id.clone(), idx))
            .collect();
        Self { documents, by_id }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
