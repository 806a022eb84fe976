// src/resolve/location.rs
// =============================================================================
// This module turns a map URL into a location.
//
// Strategy (one pass, no retries):
// 1. Look for "lat,lng" in the URL path. Place links carry it there, and this
//    costs no network call.
// 2. Otherwise fetch the page (shortened links redirect to it).
// 3. Look for the "@lat,lng" map-center marker in the fetched content.
//
// A fetch failure ends the attempt; there is no fallback after step 2.
// =============================================================================

use thiserror::Error;
use url::Url;

use super::fetch::{ContentFetcher, FetchError};
use crate::extract::{find_coordinate, Coordinate, MatchError, PositionalPattern};

/// A place as described by the source map service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLocation {
    coordinate: Coordinate,
}

impl SourceLocation {
    #[cfg(test)]
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not fetch link content")]
    ContentFetchFailed(#[from] FetchError),

    #[error("no coordinate found for url: {url}")]
    CoordinateNotFound { url: String },

    #[error("coordinate in {url} could not be read")]
    InvalidNumber {
        url: String,
        #[source]
        source: MatchError,
    },
}

/// Resolves `url` to a location, fetching its content only when the path
/// has no coordinate.
pub async fn resolve<F>(url: &Url, fetcher: &F) -> Result<SourceLocation, ResolveError>
where
    F: ContentFetcher + ?Sized,
{
    match find_coordinate(url.path(), PositionalPattern::Path) {
        Ok(coordinate) => {
            tracing::debug!(url = %url, "coordinate found in url path");
            return Ok(SourceLocation { coordinate });
        }
        Err(MatchError::NoCoordinateFound) => {}
        Err(source) => {
            return Err(ResolveError::InvalidNumber {
                url: url.to_string(),
                source,
            })
        }
    }

    tracing::debug!(url = %url, "no coordinate in path, fetching content");
    let content = fetcher.fetch(url).await?;

    match find_coordinate(&content, PositionalPattern::Content) {
        Ok(coordinate) => {
            tracing::debug!(url = %url, "coordinate found in page content");
            Ok(SourceLocation { coordinate })
        }
        Err(MatchError::NoCoordinateFound) => Err(ResolveError::CoordinateNotFound {
            url: url.to_string(),
        }),
        Err(source) => Err(ResolveError::InvalidNumber {
            url: url.to_string(),
            source,
        }),
    }
}
