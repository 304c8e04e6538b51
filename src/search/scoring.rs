use crate::corpus::types::Document;
use crate::matcher::types::DocumentMatch;

/// A scored document ready for ranking.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub document_id: String,
    pub filename: String,
    pub score: f64,
    pub matches: usize,
    pub matched_keywords: Vec<String>,
    pub total_keywords: usize,
}

/// Keyword coverage as a bounded percentage, rounded to two decimals.
///
/// The occurrence total deliberately stays out of the formula; it is the
/// second key of the ranking below, so more occurrences only ever break
/// ties between documents covering the same share of the query.
pub fn score(matched_keywords: usize, total_keywords: usize) -> f64 {
    if total_keywords == 0 {
        return 0.0;
    }
    let coverage = matched_keywords as f64 / total_keywords as f64;
    (coverage * 10_000.0).round() / 100.0
}

/// Builds a scored entry from one document's match data.
pub fn score_document(
    document: &Document,
    record: &DocumentMatch,
    total_keywords: usize,
) -> ScoredDocument {
    ScoredDocument {
        document_id: document.id.clone(),
        filename: document.filename.clone(),
        score: score(record.matched_keywords.len(), total_keywords),
        matches: record.occurrences,
        matched_keywords: record.matched_keywords.clone(),
        total_keywords,
    }
}

/// Deterministic ranking: score descending, then total occurrences
/// descending, then filename ascending.
pub fn rank(results: &mut [ScoredDocument]) {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.matches.cmp(&a.matches))
            .then_with(|| a.filename.cmp(&b.filename))
    });
}
