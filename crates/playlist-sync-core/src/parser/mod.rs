//! HTML parsers for YouTube playlist pages
//!
//! Embedded page data is tried first; rendered markup is the fallback.

pub mod initial_data;
pub mod markup;

pub use initial_data::{extract_initial_data, parse_initial_data};
pub use markup::parse_playlist_markup;

use tracing::{debug, info, warn};

use crate::types::VideoRecord;

/// Parses a playlist page into video records
///
/// Uses the embedded `ytInitialData` when it yields any videos, otherwise
/// falls back to the rendered markup. Parse problems are logged and never
/// returned.
///
/// # Returns
/// Records in playlist order, empty if neither source yields any
pub fn parse_playlist_page(html: &str) -> Vec<VideoRecord> {
    match parse_initial_data(html) {
        Ok(videos) if !videos.is_empty() => return videos,
        Ok(_) => debug!("no playlist entries in embedded page data"),
        Err(e) => warn!(error = %e, "failed to parse embedded page data"),
    }

    info!("falling back to HTML parsing");
    match parse_playlist_markup(html) {
        Ok(videos) => videos,
        Err(e) => {
            warn!(error = %e, "failed to parse playlist markup");
            Vec::new()
        }
    }
}
