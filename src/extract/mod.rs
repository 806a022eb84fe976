// src/extract/mod.rs
// =============================================================================
// This module pulls structured data out of unstructured strings.
//
// Submodules:
// - url: Finds the first absolute URL inside a chat message / free text
// - coordinate: Finds a latitude/longitude pair inside a URL path or a page
//
// Neither submodule touches the network. Everything here is a pure function
// of its input string.
// =============================================================================

mod coordinate;
mod url;

pub use self::coordinate::{find_coordinate, Coordinate, MatchError, PositionalPattern};
pub use self::url::{extract_first_url, find_first_url, ExtractError};
