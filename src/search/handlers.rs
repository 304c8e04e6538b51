use super::engine::search_corpus;
use super::tokenizer::clean_query;
use super::types::{ErrorResponse, SearchRequest, SearchResponse, SearchResultItem};
use crate::corpus::types::Corpus;
use crate::error::SearchError;
use crate::matcher::types::Algorithm;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Extension(corpus): Extension<Arc<Corpus>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = clean_query(&req.keywords).map_err(bad_request)?;
    let algorithm: Algorithm = req.algorithm.parse().map_err(bad_request)?;

    tracing::debug!(
        "Searching {} keywords with {}",
        query.tokens.len(),
        algorithm.display_name()
    );

    let ranked = search_corpus(&corpus, &query, algorithm);
    let results: Vec<SearchResultItem> = ranked
        .into_iter()
        .map(|doc| SearchResultItem {
            text: corpus
                .get(&doc.document_id)
                .map(|d| d.raw_text.clone())
                .unwrap_or_default(),
            filename: doc.filename,
            score: doc.score,
            matches: doc.matches,
            matched_keywords: doc.matched_keywords,
            total_keywords: doc.total_keywords,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: req.keywords,
        cleaned_query: query.cleaned_joined(),
        total_documents: corpus.len(),
        matched_documents: results.len(),
        results,
    }))
}

pub(crate) fn bad_request(err: SearchError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
