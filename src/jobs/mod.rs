//! Job Catalog Module
//!
//! Serves the job-title → keywords mapping used by clients to prefill a
//! search query. The catalog is external data consumed by this service, not
//! owned by it: a built-in set of common roles ships as the default, and a
//! JSON file can replace it at startup.

pub mod catalog;
pub mod handlers;

#[cfg(test)]
mod tests;
