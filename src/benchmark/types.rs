//! Benchmark Data Types
//!
//! DTOs for the algorithm-comparison response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub keywords: String,
}

/// Aggregated result of one algorithm's pass over the whole corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmRun {
    pub algorithm: String,
    /// Wall time of the corpus scan in milliseconds, rounded to 3 decimals.
    pub execution_time: f64,
    pub matched_documents: usize,
    pub total_comparisons: u64,
    /// Only ever non-zero for Rabin-Karp.
    pub total_collisions: u64,
    pub small_cv_count: usize,
    pub medium_cv_count: usize,
    pub large_cv_count: usize,
    pub top_results: Vec<TopResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopResult {
    pub filename: String,
    pub score: f64,
    pub matches: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub query: String,
    pub cleaned_query: String,
    pub total_documents: usize,
    pub comparisons: Vec<AlgorithmRun>,
}
