use super::types::{Algorithm, DocumentMatch, MatchOutcome};
use super::{brute_force, kmp, rabin_karp};
use crate::corpus::types::Document;

/// Runs one keyword against one text with the selected algorithm.
pub fn match_keyword(text: &str, keyword: &str, algorithm: Algorithm) -> MatchOutcome {
    let text = text.as_bytes();
    let keyword = keyword.as_bytes();
    match algorithm {
        Algorithm::BruteForce => brute_force::count(text, keyword),
        Algorithm::RabinKarp => rabin_karp::count(text, keyword),
        Algorithm::Kmp => kmp::count(text, keyword),
    }
}

/// Runs every query keyword independently against one document.
///
/// Occurrence, comparison, and collision counters are summed across
/// keywords; `matched_keywords` keeps the keywords that occurred at least
/// once, in query order.
pub fn match_document(
    document: &Document,
    keywords: &[String],
    algorithm: Algorithm,
) -> DocumentMatch {
    let mut occurrences = 0usize;
    let mut comparisons = 0u64;
    let mut collisions = 0u64;
    let mut matched_keywords = Vec::new();

    for keyword in keywords {
        let outcome = match_keyword(&document.normalized_text, keyword, algorithm);
        occurrences += outcome.occurrences;
        comparisons += outcome.comparisons;
        collisions += outcome.collisions;
        if outcome.occurrences > 0 {
            matched_keywords.push(keyword.clone());
        }
    }

    DocumentMatch {
        document_id: document.id.clone(),
        occurrences,
        comparisons,
        collisions,
        matched_keywords,
    }
}
