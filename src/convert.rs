// src/convert.rs
// =============================================================================
// The public entry point: text (or a bare URL) in, Waze link out.
//
// Pipeline:
//   text -> first URL -> location (path, else fetch + content) -> Waze link
//
// Every failure comes back as a ConvertError. Callers that talk to end users
// (chat replies, the HTTP API) use ErrorKind to decide how much to say:
// - UserInput: the message had no usable map link
// - Infrastructure: the link could not be fetched right now
// - Internal: something that should never happen did
// =============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::encode::{encode, DestinationLink, EncodeError};
use crate::extract::{extract_first_url, ExtractError};
use crate::resolve::{resolve, ContentFetcher, ResolveError};

/// Welcome text for the `/start` command.
pub const WELCOME_MESSAGE: &str = "
Welcome to Google Maps to Waze bot!
Send me a Google Maps link and I will send you a Waze link.

Examples:
- Shortened: https://goo.gl/maps/1JZ8Zq4J1Z8Zq4
- Full: https://www.google.com/maps/dir/?api=1&destination=51.107885,17.038538
- Any text with a link: foo bar https://www.google.com/maps/dir/?api=1&destination=51.107885,17.038538
";

const START_COMMAND: &str = "/start";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UserInput,
    Infrastructure,
    Internal,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Extract(_) => ErrorKind::UserInput,
            ConvertError::Resolve(ResolveError::CoordinateNotFound { .. }) => ErrorKind::UserInput,
            ConvertError::Resolve(ResolveError::ContentFetchFailed(_)) => {
                ErrorKind::Infrastructure
            }
            ConvertError::Resolve(ResolveError::InvalidNumber { .. }) => ErrorKind::Internal,
            ConvertError::Encode(_) => ErrorKind::Internal,
        }
    }

    /// Text safe to show an end user; carries no internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConvertError::Extract(_) => {
                "I could not find a link in your message. Send me a Google Maps link."
            }
            ConvertError::Resolve(ResolveError::CoordinateNotFound { .. }) => {
                "I could not find a location in that link. Is it a Google Maps link?"
            }
            ConvertError::Resolve(ResolveError::ContentFetchFailed(_)) => {
                "I could not resolve that link right now. Try again."
            }
            _ => "Something went wrong. Try again.",
        }
    }
}

/// Converts the first map link found in `text` into a Waze link.
pub async fn convert<F>(text: &str, fetcher: &F) -> Result<DestinationLink, ConvertError>
where
    F: ContentFetcher + ?Sized,
{
    let url = extract_first_url(text)?;
    let location = resolve(&url, fetcher).await?;
    let link = encode(location)?;

    tracing::info!(source = %url, link = %link, "converted link");
    Ok(link)
}

/// An outbound chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// Whether `text` is Markdown.
    pub styled: bool,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styled: false,
        }
    }
}

// Decides what to answer to an inbound chat message
//
// - "/start"          -> the welcome message
// - text with a link  -> the Waze link
// - anything else     -> a short explanation of what went wrong
pub async fn reply<F>(text: &str, fetcher: &F) -> Reply
where
    F: ContentFetcher + ?Sized,
{
    if text.trim() == START_COMMAND {
        return Reply {
            text: WELCOME_MESSAGE.to_string(),
            styled: true,
        };
    }

    match convert(text, fetcher).await {
        Ok(link) => Reply::plain(link.to_string()),
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), error = %e, "failed to convert message");
            Reply::plain(e.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::FetchError;
    use async_trait::async_trait;
    use url::Url;

    struct PageFetcher(Result<&'static str, u16>);

    #[async_trait]
    impl ContentFetcher for PageFetcher {
        async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
            match self.0 {
                Ok(body) => Ok(body.to_string()),
                Err(status) => Err(FetchError::UnexpectedStatus {
                    url: url.to_string(),
                    status,
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_convert_text_with_place_link() {
        let text = "Dinner here: https://www.google.com/maps/place/51.107885,17.038538 at 8";
        let link = convert(text, &PageFetcher(Ok(""))).await.unwrap();

        assert_eq!(
            link.as_str(),
            "https://www.waze.com/ul?ll=51.1078850,17.0385380&navigate=yes&zoom=5"
        );
    }

    #[tokio::test]
    async fn test_convert_shortened_link() {
        let fetcher = PageFetcher(Ok("[\"/maps/preview/place/X/@53.1344674,20.3160387,2394a\"]"));
        let link = convert("https://goo.gl/maps/1JZ8Zq4J1Z8Zq4", &fetcher).await.unwrap();

        assert_eq!(
            link.as_str(),
            "https://www.waze.com/ul?ll=53.1344674,20.3160387&navigate=yes&zoom=5"
        );
    }

    #[tokio::test]
    async fn test_error_kinds() {
        let no_url = convert("hello there", &PageFetcher(Ok(""))).await.unwrap_err();
        assert_eq!(no_url.kind(), ErrorKind::UserInput);

        let not_found = convert("https://www.example.com/x", &PageFetcher(Ok("nothing")))
            .await
            .unwrap_err();
        assert_eq!(not_found.kind(), ErrorKind::UserInput);

        let fetch_failed = convert("https://goo.gl/maps/abc", &PageFetcher(Err(404)))
            .await
            .unwrap_err();
        assert_eq!(fetch_failed.kind(), ErrorKind::Infrastructure);
    }

    #[tokio::test]
    async fn test_reply_start_command() {
        let reply = reply(" /start ", &PageFetcher(Ok(""))).await;
        assert!(reply.styled);
        assert_eq!(reply.text, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_reply_with_link() {
        let reply = reply(
            "https://www.google.com/maps/place/37.4219999,122.0840575",
            &PageFetcher(Ok("")),
        )
        .await;

        assert!(!reply.styled);
        assert_eq!(
            reply.text,
            "https://www.waze.com/ul?ll=37.4219999,122.0840575&navigate=yes&zoom=5"
        );
    }

    #[tokio::test]
    async fn test_reply_hides_internal_detail() {
        let reply = reply("https://goo.gl/maps/abc", &PageFetcher(Err(503))).await;

        assert_eq!(reply.text, "I could not resolve that link right now. Try again.");
        assert!(!reply.text.contains("503"));
    }
}
