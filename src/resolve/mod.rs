// src/resolve/mod.rs
// =============================================================================
// This module resolves a map URL to a coordinate.
//
// Submodules:
// - fetch: The HTTP side (ContentFetcher trait + reqwest implementation)
// - location: The two-stage path-then-content lookup
// =============================================================================

mod fetch;
mod location;

pub use fetch::{ContentFetcher, FetchConfig, FetchError, HttpFetcher, DEFAULT_FETCH_TIMEOUT};
pub use location::{resolve, ResolveError, SourceLocation};
