use super::scoring::{rank, score_document, ScoredDocument};
use super::tokenizer::Query;
use crate::corpus::types::Corpus;
use crate::matcher::engine::match_document;
use crate::matcher::types::Algorithm;

/// Scans the whole corpus with one algorithm and returns ranked matches.
///
/// Only documents with at least one keyword occurrence appear in the result.
pub fn search_corpus(corpus: &Corpus, query: &Query, algorithm: Algorithm) -> Vec<ScoredDocument> {
    let mut results = Vec::new();
    for document in corpus.documents() {
        let record = match_document(document, &query.tokens, algorithm);
        if record.occurrences == 0 {
            continue;
        }
        results.push(score_document(document, &record, query.tokens.len()));
    }

    rank(&mut results);
    results
}
