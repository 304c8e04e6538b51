//! Search Service Module
//!
//! Executes single-algorithm keyword searches against the CV corpus.
//!
//! ## Pipeline
//! A raw query is cleaned into keywords, every document is scanned with the
//! selected matching algorithm, and matching documents are scored and ranked
//! before being shaped into the HTTP response.
//!
//! ## Submodules
//! - **`tokenizer`**: Query cleaning (normalization, stop words, deduplication).
//! - **`engine`**: Corpus scan for one algorithm, producing ranked matches.
//! - **`scoring`**: The bounded score formula and the deterministic ranking rule.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod scoring;
pub mod tokenizer;
pub mod types;
