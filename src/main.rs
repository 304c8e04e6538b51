use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use cv_search_engine::benchmark::handlers::handle_compare;
use cv_search_engine::corpus::loader::load_corpus;
use cv_search_engine::corpus::types::{Corpus, SizeThresholds};
use cv_search_engine::jobs::catalog::JobCatalog;
use cv_search_engine::jobs::handlers::handle_jobs;
use cv_search_engine::search::handlers::handle_search;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:5000".parse()?;
    let mut corpus_dir: Option<String> = None;
    let mut jobs_file: Option<String> = None;
    let mut thresholds = SizeThresholds::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--corpus" => {
                corpus_dir = Some(args[i + 1].clone());
                i += 2;
            }
            "--jobs" => {
                jobs_file = Some(args[i + 1].clone());
                i += 2;
            }
            "--small-max" => {
                thresholds.small_max = args[i + 1].parse()?;
                i += 2;
            }
            "--medium-max" => {
                thresholds.medium_max = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(corpus_dir) = corpus_dir else {
        eprintln!(
            "Usage: {} --corpus <dir> [--bind <addr:port>] [--jobs <file>] [--small-max <chars>] [--medium-max <chars>]",
            args[0]
        );
        eprintln!("Example: {} --corpus ./cvs --bind 127.0.0.1:5000", args[0]);
        std::process::exit(1);
    };

    // 1. Corpus: loaded once, shared read-only with every request.
    let corpus = Arc::new(load_corpus(Path::new(&corpus_dir), thresholds)?);
    tracing::info!("Corpus loaded: {} documents", corpus.len());

    // 2. Job catalog: built-in roles unless a file overrides them.
    let catalog = Arc::new(match jobs_file {
        Some(path) => JobCatalog::from_file(Path::new(&path))?,
        None => JobCatalog::builtin(),
    });
    tracing::info!("Job catalog ready: {} titles", catalog.len());

    // 3. HTTP Router:
    let app = Router::new()
        .route("/search", post(handle_search))
        .route("/compare", post(handle_compare))
        .route("/jobs", get(handle_jobs))
        .route("/health", get(handle_health))
        .layer(Extension(corpus))
        .layer(Extension(catalog));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    documents_loaded: usize,
}

async fn handle_health(Extension(corpus): Extension<Arc<Corpus>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        documents_loaded: corpus.len(),
    })
}
