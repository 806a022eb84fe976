// src/lib.rs
// =============================================================================
// maps2waze turns Google Maps links into Waze navigation links.
//
// Modules, leaf first:
// - extract: find a URL in text, find a coordinate in a string
// - resolve: URL -> location, fetching the page when the path has no coordinate
// - encode: location -> Waze link
// - convert: the whole pipeline plus the chat reply policy
// - server: HTTP front end (health, convert, reply)
// - logging: tracing subscriber setup for the binary
// =============================================================================

pub mod convert;
pub mod encode;
pub mod extract;
pub mod logging;
pub mod resolve;
pub mod server;

pub use convert::{convert, reply, ConvertError, ErrorKind, Reply};
pub use encode::DestinationLink;
pub use extract::Coordinate;
pub use resolve::{ContentFetcher, FetchConfig, HttpFetcher};
