use super::catalog::JobCatalog;
use axum::{Extension, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

pub async fn handle_jobs(
    Extension(catalog): Extension<Arc<JobCatalog>>,
) -> Json<BTreeMap<String, Vec<String>>> {
    Json(catalog.entries().clone())
}
