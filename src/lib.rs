//! CV Search Engine Library
//!
//! This library crate defines the core modules of the CV keyword-search and
//! algorithm-comparison service. It serves as the foundation for the binary
//! executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`corpus`**: The in-memory document store. Loads extracted CV text files
//!   once at startup and serves them read-only to every request.
//! - **`matcher`**: The multi-algorithm matching engine. Three interchangeable
//!   implementations (Brute Force, Rabin-Karp, KMP) that count keyword
//!   occurrences with per-algorithm instrumentation.
//! - **`search`**: The query pipeline. Cleans raw queries, scans the corpus
//!   with one selected algorithm, and scores and ranks the matches.
//! - **`benchmark`**: The comparison harness. Times all three algorithms over
//!   the identical corpus and query and aggregates their counters.
//! - **`jobs`**: The job-description catalog consumed by clients to prefill
//!   queries.

pub mod benchmark;
pub mod corpus;
pub mod error;
pub mod jobs;
pub mod matcher;
pub mod search;
