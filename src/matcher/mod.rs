//! Matcher Module
//!
//! The multi-algorithm string-matching engine at the core of the system.
//!
//! ## Contract
//! Three interchangeable implementations count keyword occurrences in a
//! document's normalized text and report how expensive the search was:
//!
//! - **`brute_force`**: position-by-position comparison, the baseline.
//! - **`rabin_karp`**: rolling polynomial hash with full verification on hash hits.
//! - **`kmp`**: failure-function scan that never re-examines matched text.
//!
//! Algorithm choice must never change *what* matches, only *how* it is found:
//! all three produce identical occurrence counts for the same (text, keyword)
//! pair. Only the `comparisons` and `collisions` counters may differ.
//!
//! ## Submodules
//! - **`engine`**: Multi-keyword per-document scan over a chosen algorithm.
//! - **`types`**: The `Algorithm` selector and instrumentation counters.

pub mod brute_force;
pub mod engine;
pub mod kmp;
pub mod rabin_karp;
pub mod types;
