use crate::error::SearchError;
use regex::Regex;
use std::collections::HashSet;

/// Stop words stripped from queries before matching.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

/// A cleaned query: the raw input plus its ordered, unique lowercase keywords.
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub tokens: Vec<String>,
}

impl Query {
    /// The cleaned keywords joined with single spaces, echoed back in
    /// responses as `cleaned_query`.
    pub fn cleaned_joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Normalizes a raw query into ordered, deduplicated keywords.
///
/// Lowercases, strips punctuation except intra-word hyphens, collapses
/// whitespace, drops stop words, and keeps the first occurrence of any
/// duplicate. Cleaning an already-cleaned query yields the same sequence.
pub fn clean_query(raw: &str) -> Result<Query, SearchError> {
    let punctuation = Regex::new(r"[^a-z0-9\s-]").unwrap();
    let lowered = raw.to_lowercase();
    let stripped = punctuation.replace_all(&lowered, " ");

    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for word in stripped.split_whitespace() {
        let word = word.trim_matches('-');
        if word.is_empty() || STOP_WORDS.contains(&word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            tokens.push(word.to_string());
        }
    }

    if tokens.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    Ok(Query {
        raw: raw.to_string(),
        tokens,
    })
}
