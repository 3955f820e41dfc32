//! Playlist Sync Core Library
//!
//! Fetches a YouTube playlist page, extracts its videos and writes them into
//! a static course page as one embedded player per topic.
//!
//! # Overview
//!
//! - HTTP client that fetches the playlist page with a browser User-Agent
//! - Parsers for the embedded `ytInitialData` blob, with a rendered-markup
//!   fallback
//! - Renderer that rewrites the sidebar and content regions of a page
//!
//! # Example
//!
//! ```no_run
//! use playlist_sync_core::{PlaylistFetcher, Result, update_document};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = PlaylistFetcher::new()?;
//!     let videos = fetcher.fetch_playlist("PL4-IK0AVhVjOJs_UjdQeyEZ_cmEV3uJvx").await?;
//!
//!     for (i, video) in videos.iter().enumerate() {
//!         println!("{}. {} - {}", i + 1, video.title, video.embed_url());
//!     }
//!
//!     update_document("courses/frontend-learning.html", &videos).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Failure handling
//!
//! Scraping problems never surface as errors: a non-200 answer or a page
//! without usable data yields an empty list and a logged diagnostic. Only
//! transport failures and file I/O failures are returned as [`PlaylistError`].

mod client;
mod error;
mod fetcher;
pub mod parser;
pub mod render;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, Page, PlaylistClient};

// Re-export error types
pub use error::{PlaylistError, Result};

// Re-export parser functions
pub use parser::{parse_initial_data, parse_playlist_markup, parse_playlist_page};

// Re-export main fetcher API
pub use fetcher::PlaylistFetcher;

// Re-export renderer functions
pub use render::{RenderOutcome, apply_regions, update_document};

// Re-export data types
pub use types::{UNTITLED_VIDEO, VideoRecord};

// Re-export URL helper functions for convenience
pub use url::{build_embed_url, build_playlist_url, extract_video_id};
