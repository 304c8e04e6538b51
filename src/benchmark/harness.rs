use super::types::{AlgorithmRun, ComparisonReport, TopResult};
use crate::corpus::types::{Corpus, SizeCategory};
use crate::matcher::engine::match_document;
use crate::matcher::types::{Algorithm, DocumentMatch};
use crate::search::scoring::{rank, score_document};
use crate::search::tokenizer::Query;
use std::time::Instant;

/// Number of ranked entries reported per algorithm.
const TOP_RESULTS: usize = 5;

/// Runs every algorithm once over the identical corpus and query.
pub fn run_comparison(corpus: &Corpus, query: &Query) -> ComparisonReport {
    let comparisons = Algorithm::ALL
        .iter()
        .map(|&algorithm| run_algorithm(corpus, query, algorithm))
        .collect();

    ComparisonReport {
        query: query.raw.clone(),
        cleaned_query: query.cleaned_joined(),
        total_documents: corpus.len(),
        comparisons,
    }
}

/// One timed pass of a single algorithm across every document.
fn run_algorithm(corpus: &Corpus, query: &Query, algorithm: Algorithm) -> AlgorithmRun {
    let started = Instant::now();
    let records: Vec<DocumentMatch> = corpus
        .documents()
        .iter()
        .map(|document| match_document(document, &query.tokens, algorithm))
        .collect();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let mut total_comparisons = 0u64;
    let mut total_collisions = 0u64;
    let mut small_cv_count = 0usize;
    let mut medium_cv_count = 0usize;
    let mut large_cv_count = 0usize;
    let mut scored = Vec::new();

    for (document, record) in corpus.documents().iter().zip(&records) {
        total_comparisons += record.comparisons;
        total_collisions += record.collisions;
        if record.occurrences == 0 {
            continue;
        }
        match document.size_category {
            SizeCategory::Small => small_cv_count += 1,
            SizeCategory::Medium => medium_cv_count += 1,
            SizeCategory::Large => large_cv_count += 1,
        }
        scored.push(score_document(document, record, query.tokens.len()));
    }

    rank(&mut scored);

    AlgorithmRun {
        algorithm: algorithm.display_name().to_string(),
        execution_time: (elapsed_ms * 1000.0).round() / 1000.0,
        matched_documents: scored.len(),
        total_comparisons,
        total_collisions,
        small_cv_count,
        medium_cv_count,
        large_cv_count,
        top_results: scored
            .into_iter()
            .take(TOP_RESULTS)
            .map(|doc| TopResult {
                filename: doc.filename,
                score: doc.score,
                matches: doc.matches,
            })
            .collect(),
    }
}
