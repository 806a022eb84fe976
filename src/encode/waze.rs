// src/encode/waze.rs
// =============================================================================
// Builds Waze navigation links.
//
// Format:
//   https://www.waze.com/ul?ll=<lat>,<lng>&navigate=yes&zoom=5
//
// Both numbers are printed with exactly 7 decimal places (about 1 cm of
// precision), zero-padded: 51.107885 -> "51.1078850".
// =============================================================================

use std::fmt;
use thiserror::Error;
use url::Url;

use crate::resolve::SourceLocation;

const WAZE_BASE_URL: &str = "https://www.waze.com/ul";
const WAZE_ZOOM: u8 = 5;

/// A ready-to-send Waze navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLink(Url);

impl DestinationLink {
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DestinationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Error)]
#[error("failed to build destination link '{link}': {source}")]
pub struct EncodeError {
    link: String,
    #[source]
    source: url::ParseError,
}

/// Encodes a location as a Waze link in navigate mode.
pub fn encode(location: SourceLocation) -> Result<DestinationLink, EncodeError> {
    let coordinate = location.coordinate();
    let ll = format!("{:.7},{:.7}", coordinate.latitude, coordinate.longitude);
    let raw = format!("{WAZE_BASE_URL}?ll={ll}&navigate=yes&zoom={WAZE_ZOOM}");

    Url::parse(&raw)
        .map(DestinationLink)
        .map_err(|source| EncodeError { link: raw, source })
}
