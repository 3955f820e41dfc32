//! Playlist fetcher
//!
//! Combines the HTTP client with the page parsers.

use tracing::{info, warn};

use crate::client::{ClientConfig, PlaylistClient};
use crate::error::{PlaylistError, Result};
use crate::parser::parse_playlist_page;
use crate::types::VideoRecord;
use crate::url::build_playlist_url;

/// Fetches playlist pages and extracts their videos
pub struct PlaylistFetcher {
    client: PlaylistClient,
}

impl PlaylistFetcher {
    /// Create a new fetcher with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = PlaylistClient::new()?;
        Ok(Self { client })
    }

    /// Create a new fetcher with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = PlaylistClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Fetch the videos of a playlist
    ///
    /// Makes exactly one request. A non-200 answer, missing page data and
    /// unparseable page data all end in a logged diagnostic and an empty
    /// (or markup-derived) list rather than an error.
    ///
    /// # Arguments
    /// * `playlist_id` - Playlist ID (e.g., "PL4-IK0AVhVjOJs_UjdQeyEZ_cmEV3uJvx")
    ///
    /// # Returns
    /// Videos in playlist order, possibly empty
    ///
    /// # Errors
    /// - `InvalidId` if the playlist ID is empty or whitespace only
    /// - `HttpError` if the request could not be completed
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> playlist_sync_core::Result<()> {
    /// use playlist_sync_core::PlaylistFetcher;
    /// let fetcher = PlaylistFetcher::new()?;
    /// let videos = fetcher.fetch_playlist("PL4-IK0AVhVjOJs_UjdQeyEZ_cmEV3uJvx").await?;
    /// for video in videos {
    ///     println!("{} - {}", video.title, video.embed_url());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_playlist(&self, playlist_id: &str) -> Result<Vec<VideoRecord>> {
        let trimmed = playlist_id.trim();
        if trimmed.is_empty() {
            return Err(PlaylistError::InvalidId(
                "Playlist ID cannot be empty".to_string(),
            ));
        }

        let playlist_url = build_playlist_url(self.client.base_url(), trimmed);
        let path = playlist_url
            .strip_prefix(self.client.base_url())
            .unwrap_or(&playlist_url);

        let page = self.client.fetch_page(path).await?;
        if !page.is_ok() {
            warn!(
                playlist_id = trimmed,
                status = page.status.as_u16(),
                "failed to fetch playlist"
            );
            return Ok(Vec::new());
        }

        let videos = parse_playlist_page(&page.body);
        info!(playlist_id = trimmed, count = videos.len(), "parsed playlist");
        Ok(videos)
    }
}
