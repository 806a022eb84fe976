// src/resolve/fetch.rs
// =============================================================================
// This module downloads the page behind a map link.
//
// Shortened links (maps.app.goo.gl/..., goo.gl/maps/...) carry no coordinate
// themselves. They redirect to a Google Maps page whose payload embeds the
// map center. We fetch that payload and hand it back as a plain String.
//
// Key behavior:
// - One GET request per call, no retries
// - Redirects are followed by reqwest's default policy (up to 10 hops)
// - Bounded total timeout (15 seconds unless configured otherwise)
// - No cookie store, so nothing leaks between calls
// - Only a final "200 OK" counts as success
//
// The resolver never talks to reqwest directly. It goes through the
// ContentFetcher trait so tests can swap in a canned fetcher.
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default total timeout for one fetch, redirects included.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed ({reason}): {source}")]
    Network {
        url: String,
        reason: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Anything that can turn a URL into page content.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// ContentFetcher backed by a reqwest Client.
///
/// Cloning is cheap (the client is reference counted), so one fetcher can be
/// shared by every request handler.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "fetching page content");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        // response.url() is where the redirect chain ended
        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %url, final_url = %response.url(), status = status.as_u16(), "unexpected status");
            return Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(url = %url, final_url = %response.url(), "reading page content");

        response.text().await.map_err(|source| FetchError::BodyRead {
            url: url.to_string(),
            source,
        })
    }
}

// Sorts a reqwest failure into a short, human-readable reason
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - Redirect loop / too many redirects
// - DNS or connection failure
// - TLS certificate issues
fn categorize_error(url: &Url, error: reqwest::Error) -> FetchError {
    let error_string = error.to_string().to_lowercase();

    let reason = if error.is_timeout() {
        "timed out"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname"
        } else {
            "connection failed"
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "TLS error"
    } else {
        "request error"
    };

    FetchError::Network {
        url: url.to_string(),
        reason,
        source: error,
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why #[async_trait]?
//    - The server stores the fetcher as Arc<dyn ContentFetcher>
//    - Plain `async fn` in a trait cannot be called through `dyn`
//    - async_trait boxes the returned future so it can
//
// 2. Where does the connection go on errors?
//    - Dropping a reqwest::Response closes (or returns to the pool) its
//      connection, so the early return on a bad status leaks nothing
//    - .text() reads the body to the end on success
//
// 3. Why is only 200 accepted?
//    - A 204 or 206 has no usable page; a 3xx that survives here means the
//      redirect chain did not finish
// -----------------------------------------------------------------------------
