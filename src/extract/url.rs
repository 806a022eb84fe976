// src/extract/url.rs
// =============================================================================
// This module finds the first absolute URL in a piece of free text.
//
// Users paste all kinds of things into a chat: "meet here
// https://maps.app.goo.gl/abc123, see you!" We want exactly the link, without
// the trailing comma or the prose around it.
//
// The pattern:
// - scheme: http, https or ftp
// - host: ASCII letter/digit/underscore/hyphen segments joined by dots
//   (at least one dot)
// - optional tail: path, query and fragment characters, where the LAST
//   character cannot be '.', ',' or ':' (those usually end a sentence)
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?|ftp)://[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+(?:[A-Za-z0-9_.,@?^=%&:/~+#-]*[A-Za-z0-9_@?^=%&/~+#-])?",
    )
    .unwrap()
});

/// Errors from looking for a URL in text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no link found in text")]
    NoUrlFound,

    #[error("malformed link '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Returns the first URL-shaped substring of `text`, exactly as written.
pub fn find_first_url(text: &str) -> Option<&str> {
    RE_URL.find(text).map(|m| m.as_str())
}

// Extracts and parses the first URL in the text
//
// Example:
//   "Visit our website at https://www.example.com." -> https://www.example.com/
//
// Only the first match is considered; later links are ignored.
pub fn extract_first_url(text: &str) -> Result<Url, ExtractError> {
    let raw = find_first_url(text).ok_or(ExtractError::NoUrlFound)?;

    Url::parse(raw).map_err(|source| ExtractError::MalformedUrl {
        url: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_url_from_sentence() {
        let url = extract_first_url("Visit our website at https://www.example.com").unwrap();
        assert_eq!(url, Url::parse("https://www.example.com").unwrap());
    }

    #[test]
    fn test_no_url_in_text() {
        let result = extract_first_url("no links here, just www dot example dot com");
        assert!(matches!(result, Err(ExtractError::NoUrlFound)));
    }

    #[test]
    fn test_scheme_without_dotted_host_is_not_a_url() {
        assert_eq!(find_first_url("see http://localhost/path"), None);
    }

    #[test]
    fn test_prose_is_not_absorbed() {
        let cases = [
            ("meet here https://maps.app.goo.gl/abc123, see you", "https://maps.app.goo.gl/abc123"),
            ("link: https://goo.gl/maps/1JZ8Zq4J1Z8Zq4.", "https://goo.gl/maps/1JZ8Zq4J1Z8Zq4"),
            ("(https://www.google.com/maps/place/Foo) ok", "https://www.google.com/maps/place/Foo"),
            ("https://example.com: that one", "https://example.com"),
        ];

        for (text, expected) in cases {
            assert_eq!(find_first_url(text), Some(expected), "input: {text}");
        }
    }

    #[test]
    fn test_stops_at_non_ascii_letters() {
        assert_eq!(
            find_first_url("see https://example.com/caféⅠ ok"),
            Some("https://example.com/caf")
        );
    }

    #[test]
    fn test_keeps_query_and_coordinates() {
        let text = "foo bar https://www.google.com/maps/dir/?api=1&destination=51.107885,17.038538 baz";
        assert_eq!(
            find_first_url(text),
            Some("https://www.google.com/maps/dir/?api=1&destination=51.107885,17.038538")
        );
    }

    #[test]
    fn test_only_first_url_is_returned() {
        let text = "first https://a.example.com/1 then https://b.example.com/2";
        let url = extract_first_url(text).unwrap();
        assert_eq!(url.host_str(), Some("a.example.com"));
    }

    #[test]
    fn test_host_with_port() {
        let url = extract_first_url("try http://127.0.0.1:8080/short/abc").unwrap();
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.path(), "/short/abc");
    }
}
