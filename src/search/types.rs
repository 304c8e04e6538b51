//! Search Data Types
//!
//! Request and response DTOs for the single-algorithm search endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keywords: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    "bruteForce".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub cleaned_query: String,
    pub total_documents: usize,
    pub matched_documents: usize,
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub filename: String,
    pub score: f64,
    pub matches: usize,
    pub matched_keywords: Vec<String>,
    pub total_keywords: usize,
    pub text: String,
}

/// Body of every 4xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
