//! Error types for the matching core.

use thiserror::Error;

/// Errors raised by query preprocessing and algorithm selection.
///
/// Both variants are rejected at the HTTP boundary before any matching work
/// starts. The matcher itself is pure computation and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query contained no usable keywords after cleaning.
    #[error("no valid keywords after cleaning the query")]
    InvalidQuery,

    /// The requested algorithm is outside the supported set.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
