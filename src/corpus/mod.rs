//! Corpus Module
//!
//! Holds the in-memory collection of candidate CV documents that every
//! request searches against.
//!
//! ## Lifecycle
//! The corpus is built once at process startup from a directory of extracted
//! plain-text files and is never mutated afterwards. Requests share it behind
//! an `Arc` and only ever read from it.
//!
//! ## Submodules
//! - **`loader`**: Directory scan that builds the corpus, skipping unreadable files.
//! - **`types`**: `Document`, `SizeCategory`, and the read-only `Corpus` container.

pub mod loader;
pub mod types;
