//! Core data types for the playlist scraper
//!
//! Contains the video record produced by the parsers and consumed by the
//! renderer.

use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::url::build_embed_url;

/// Title used when a playlist entry carries no title
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// One entry of a playlist
///
/// The embed URL is not stored: it is always derived from `id`
/// (see [`VideoRecord::embed_url`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoRecord {
    /// Platform video ID (e.g., "dQw4w9WgXcQ")
    pub id: String,

    /// Human-readable title
    pub title: String,
}

impl VideoRecord {
    /// Create a record from an ID and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Player embed URL for this video
    pub fn embed_url(&self) -> String {
        build_embed_url(&self.id)
    }
}

impl Serialize for VideoRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VideoRecord", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("embed_url", &self.embed_url())?;
        state.end()
    }
}
