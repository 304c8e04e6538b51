use super::harness::run_comparison;
use super::types::{CompareRequest, ComparisonReport};
use crate::corpus::types::Corpus;
use crate::search::handlers::bad_request;
use crate::search::tokenizer::clean_query;
use crate::search::types::ErrorResponse;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_compare(
    Extension(corpus): Extension<Arc<Corpus>>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, (StatusCode, Json<ErrorResponse>)> {
    let query = clean_query(&req.keywords).map_err(bad_request)?;

    tracing::debug!(
        "Comparing algorithms for {} keywords over {} documents",
        query.tokens.len(),
        corpus.len()
    );

    Ok(Json(run_comparison(&corpus, &query)))
}
