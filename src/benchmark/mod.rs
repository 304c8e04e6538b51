//! Benchmark Module
//!
//! Runs all three matching algorithms over the identical corpus and query
//! and produces a comparable performance report.
//!
//! ## Measurement
//! Each algorithm gets one timed pass across every document. The stopwatch
//! starts only after the corpus is resident in memory, so the measurement
//! reflects matching cost alone, never I/O. All three passes observe the
//! same document order, and the aggregation is a pure fold over per-document
//! records, so it does not depend on execution order.
//!
//! ## Submodules
//! - **`harness`**: The timed per-algorithm corpus scan and aggregation.
//! - **`handlers`**: HTTP request handler for the comparison endpoint.
//! - **`types`**: Report DTOs (`AlgorithmRun`, `ComparisonReport`).

pub mod handlers;
pub mod harness;
pub mod types;

#[cfg(test)]
mod tests;
