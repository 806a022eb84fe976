// src/encode/mod.rs
// =============================================================================
// This module formats a resolved location as a link for the destination app.
//
// Only one destination exists today: Waze "ul" deep links.
// =============================================================================

mod waze;

pub use waze::{encode, DestinationLink, EncodeError};
