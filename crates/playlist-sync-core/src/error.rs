//! Error types for the playlist scraper and renderer
//!
//! Scraping problems (bad status, missing or malformed page data) are absorbed
//! by the fetcher and reported as diagnostics. Only the variants below escape
//! to callers.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all playlist-sync operations
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse page data or markup
    #[error("Failed to parse page data: {0}")]
    ParseError(String),

    /// Reading or writing the target document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid playlist ID provided
    #[error("Invalid playlist ID: {0}")]
    InvalidId(String),
}

impl Serialize for PlaylistError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for playlist-sync operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
