// src/extract/coordinate.rs
// =============================================================================
// This module finds a latitude/longitude pair inside a string.
//
// Google Maps hides coordinates in two places:
// - In the URL path of "place" links:
//     https://www.google.com/maps/place/37.4219999,122.0840575
// - Inside the page payload of shortened links, as the map center marker:
//     .../@53.1344674,20.3160387,2394a,13.1y/data...
//
// Digits are ASCII only; other scripts' digits are not coordinates.
//
// Each location has its own PositionalPattern. Which pattern to try, and in
// which order, is decided by the resolver (src/resolve/location.rs).
//
// Axis order:
// Some inputs carry (longitude, latitude) instead of (latitude, longitude).
// When the first number cannot be a latitude (outside -90..=90) the pair is
// swapped. Pairs where both numbers fit in -90..=90 are taken as written, so
// a swapped pair near the equator and prime meridian goes undetected.
// =============================================================================

use regex::Regex;
use std::num::ParseFloatError;
use std::sync::LazyLock;
use thiserror::Error;

static RE_PATH_LAT_LNG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").unwrap());
static RE_CONTENT_LAT_LNG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").unwrap());

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    // Builds a coordinate from two numbers in the order they appeared,
    // swapping them when the first one is not a valid latitude.
    fn from_positional(first: f64, second: f64) -> Self {
        if (-90.0..=90.0).contains(&first) {
            Self::new(first, second)
        } else {
            Self::new(second, first)
        }
    }
}

/// Where a coordinate is expected to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalPattern {
    /// `lat,lng` anywhere in the string; the last occurrence wins.
    Path,
    /// `@lat,lng`; the first occurrence wins.
    Content,
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no coordinate found")]
    NoCoordinateFound,

    #[error("invalid number '{value}': {source}")]
    NumberParseError {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

// Finds the coordinate for the given pattern
//
// Examples:
//   ("/maps/place/37.4219999,122.0840575", Path)  -> (37.4219999, 122.0840575)
//   ("/maps/place/107.2161305,-2.4033934", Path)  -> (-2.4033934, 107.2161305)
//   ("...@-8.643427,115.1495802,15z/...", Content) -> (-8.643427, 115.1495802)
pub fn find_coordinate(
    content: &str,
    pattern: PositionalPattern,
) -> Result<Coordinate, MatchError> {
    let captures = match pattern {
        PositionalPattern::Path => RE_PATH_LAT_LNG.captures_iter(content).last(),
        PositionalPattern::Content => RE_CONTENT_LAT_LNG.captures(content),
    }
    .ok_or(MatchError::NoCoordinateFound)?;

    let first = parse_number(&captures[1])?;
    let second = parse_number(&captures[2])?;

    Ok(Coordinate::from_positional(first, second))
}

fn parse_number(value: &str) -> Result<f64, MatchError> {
    value
        .parse::<f64>()
        .map_err(|source| MatchError::NumberParseError {
            value: value.to_string(),
            source,
        })
}
