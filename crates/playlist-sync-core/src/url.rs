//! URL helper functions for YouTube playlists
//!
//! Provides functions for building playlist and embed URLs and for pulling
//! video IDs out of watch links.

/// Default site the playlist page is fetched from
pub const BASE_URL: &str = "https://www.youtube.com";

const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";
const WATCH_MARKER: &str = "/watch?v=";

/// Builds the playlist page URL for a playlist ID
///
/// The ID is URL encoded before being placed in the `list` parameter.
///
/// # Arguments
/// * `base_url` - Site root without trailing slash (e.g., "https://www.youtube.com")
/// * `playlist_id` - Playlist ID (e.g., "PL4-IK0AVhVjOJs_UjdQeyEZ_cmEV3uJvx")
///
/// # Example
/// ```
/// use playlist_sync_core::url::build_playlist_url;
/// let url = build_playlist_url("https://www.youtube.com", "PLabc");
/// assert_eq!(url, "https://www.youtube.com/playlist?list=PLabc");
/// ```
pub fn build_playlist_url(base_url: &str, playlist_id: &str) -> String {
    let encoded = urlencoding::encode(playlist_id);
    format!("{}/playlist?list={}", base_url.trim_end_matches('/'), encoded)
}

/// Builds the player embed URL for a video ID
///
/// # Example
/// ```
/// use playlist_sync_core::url::build_embed_url;
/// assert_eq!(build_embed_url("abc123"), "https://www.youtube.com/embed/abc123");
/// ```
pub fn build_embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_URL_PREFIX, video_id)
}

/// Extracts the video ID from a watch link
///
/// Takes everything after `/watch?v=` up to the next `&`, or the whole
/// remainder when there are no further parameters.
///
/// # Returns
/// `Some(id)` for a watch link with a non-empty ID, `None` otherwise
///
/// # Example
/// ```
/// use playlist_sync_core::url::extract_video_id;
/// assert_eq!(extract_video_id("/watch?v=abc123&list=PLx"), Some("abc123".to_string()));
/// assert_eq!(extract_video_id("/channel/xyz"), None);
/// ```
pub fn extract_video_id(href: &str) -> Option<String> {
    let start = href.find(WATCH_MARKER)? + WATCH_MARKER.len();
    let rest = &href[start..];
    let id = rest.split('&').next().unwrap_or(rest);

    if id.is_empty() {
        return None;
    }

    Some(id.to_string())
}
