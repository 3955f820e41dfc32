//! Rendered markup parser for playlist pages
//!
//! Used when the page carries no usable embedded data. Reads video links
//! straight from the playlist renderer anchors.

use scraper::{ElementRef, Html, Selector};

use crate::error::{PlaylistError, Result};
use crate::types::{UNTITLED_VIDEO, VideoRecord};
use crate::url::extract_video_id;

const VIDEO_LINK_SELECTOR: &str = "a.yt-simple-endpoint.style-scope.ytd-playlist-video-renderer";

/// Parses playlist entries from rendered playlist markup
///
/// # Arguments
/// * `html` - Raw HTML string from the playlist page
///
/// # Returns
/// Records in document order, empty if no video links were found
///
/// # Errors
/// Returns `ParseError` if the link selector is invalid
pub fn parse_playlist_markup(html: &str) -> Result<Vec<VideoRecord>> {
    let document = Html::parse_document(html);

    let link_selector = Selector::parse(VIDEO_LINK_SELECTOR)
        .map_err(|e| PlaylistError::ParseError(format!("Invalid selector: {:?}", e)))?;

    Ok(document
        .select(&link_selector)
        .filter_map(|element| parse_video_link(&element))
        .collect())
}

/// Parses a single playlist video anchor
///
/// # Returns
/// `Some(VideoRecord)` if the anchor points at a watch page, `None` otherwise
fn parse_video_link(element: &ElementRef) -> Option<VideoRecord> {
    let href = element.value().attr("href")?;
    let id = extract_video_id(href)?;

    let h3_selector = Selector::parse("h3").ok()?;
    let title = element
        .select(&h3_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED_VIDEO.to_string());

    Some(VideoRecord::new(id, title))
}
