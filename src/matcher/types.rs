//! Matcher Data Types
//!
//! The closed algorithm selector and the instrumentation counters every
//! implementation reports.

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// The supported string-matching algorithms.
///
/// A closed set: request selectors parse into exactly these three variants
/// and anything else is rejected at the boundary before matching starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BruteForce,
    RabinKarp,
    Kmp,
}

impl Algorithm {
    /// Fixed order used by the benchmark harness.
    pub const ALL: [Algorithm; 3] = [Algorithm::BruteForce, Algorithm::RabinKarp, Algorithm::Kmp];

    /// Human-readable name used in comparison reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Kmp => "KMP",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "bruteForce" => Ok(Algorithm::BruteForce),
            "rabinKarp" => Ok(Algorithm::RabinKarp),
            "kmp" => Ok(Algorithm::Kmp),
            other => Err(SearchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Instrumented result of matching one keyword against one text.
///
/// `collisions` is always 0 for the non-hash-based algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub occurrences: usize,
    pub comparisons: u64,
    pub collisions: u64,
}

/// Aggregated match data for one document across all query keywords.
#[derive(Debug, Clone)]
pub struct DocumentMatch {
    pub document_id: String,
    pub occurrences: usize,
    pub comparisons: u64,
    pub collisions: u64,
    /// Query keywords that occur at least once in this document,
    /// in query order.
    pub matched_keywords: Vec<String>,
}
