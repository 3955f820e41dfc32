//! Embedded page data parser
//!
//! Playlist pages ship their state as a `var ytInitialData = {...};` script
//! assignment. This module pulls that blob out of the raw HTML and walks it
//! down to the playlist entries.
//!
//! The walk never indexes directly: every step is an optional lookup, and a
//! missing key anywhere along the path yields an empty item list.

use regex::Regex;
use serde_json::Value;

use crate::error::{PlaylistError, Result};
use crate::types::{UNTITLED_VIDEO, VideoRecord};

const INITIAL_DATA_PATTERN: &str = r"var ytInitialData = (.+?);</script>";

/// Finds the embedded `ytInitialData` JSON in a playlist page
///
/// # Returns
/// The raw JSON text, or `None` if the page carries no such assignment
pub fn extract_initial_data(html: &str) -> Option<&str> {
    let re = Regex::new(INITIAL_DATA_PATTERN).ok()?;
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses playlist entries from the embedded page data
///
/// # Arguments
/// * `html` - Raw HTML string from the playlist page
///
/// # Returns
/// Records in playlist order. Empty if the page has no embedded data or the
/// data does not contain a playlist.
///
/// # Errors
/// Returns `ParseError` if the embedded data is not valid JSON
pub fn parse_initial_data(html: &str) -> Result<Vec<VideoRecord>> {
    let Some(json) = extract_initial_data(html) else {
        return Ok(Vec::new());
    };

    let data: Value = serde_json::from_str(json)
        .map_err(|e| PlaylistError::ParseError(format!("Invalid ytInitialData: {}", e)))?;

    Ok(playlist_items(&data)
        .iter()
        .filter_map(parse_playlist_item)
        .collect())
}

/// Walks the page data down to the playlist entry list
fn playlist_items(data: &Value) -> &[Value] {
    Some(data)
        .and_then(|v| v.get("contents"))
        .and_then(|v| v.get("twoColumnBrowseResultsRenderer"))
        .and_then(|v| first(v, "tabs"))
        .and_then(|v| v.get("tabRenderer"))
        .and_then(|v| v.get("content"))
        .and_then(|v| v.get("sectionListRenderer"))
        .and_then(|v| first(v, "contents"))
        .and_then(|v| v.get("itemSectionRenderer"))
        .and_then(|v| first(v, "contents"))
        .and_then(|v| v.get("playlistVideoListRenderer"))
        .and_then(|v| v.get("contents"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// First element of the array stored under `key`
fn first<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).and_then(Value::as_array).and_then(|a| a.first())
}

/// Turns one playlist entry into a record
///
/// Entries that are not videos (e.g. continuation tokens) are skipped, as
/// are videos with an empty ID or an empty title.
fn parse_playlist_item(item: &Value) -> Option<VideoRecord> {
    let renderer = item
        .get("playlistVideoRenderer")
        .filter(|r| r.as_object().is_some_and(|o| !o.is_empty()))?;

    let id = renderer
        .get("videoId")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let title = renderer
        .get("title")
        .and_then(|t| first(t, "runs"))
        .and_then(|run| run.get("text"))
        .and_then(Value::as_str)
        .unwrap_or(UNTITLED_VIDEO);

    if id.is_empty() || title.is_empty() {
        return None;
    }

    Some(VideoRecord::new(id, title))
}
