//! HTTP client for YouTube playlist pages
//!
//! A thin wrapper over `reqwest` that sends a desktop browser User-Agent.
//! There is no retry and no rate limiting: one call, one request.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::{PlaylistError, Result};
use crate::url::BASE_URL;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root requests are sent to (default: "https://www.youtube.com")
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// A fetched page: status code plus body text
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    /// Whether the server answered 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// HTTP client wrapper for playlist pages
pub struct PlaylistClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlaylistClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(PlaylistError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root this client sends requests to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page by path, whatever its status
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g., "/playlist?list=PLabc")
    ///
    /// # Returns
    /// The status code and body; non-success statuses are not errors here
    ///
    /// # Errors
    /// - `HttpError` - Connection failure or unreadable body
    pub async fn fetch_page(&self, path: &str) -> Result<Page> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PlaylistError::HttpError)?;

        let status = response.status();
        let body = response.text().await.map_err(PlaylistError::HttpError)?;

        Ok(Page { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.youtube.com");
        assert!(config.user_agent.starts_with("Mozilla/5.0 (Windows NT 10.0"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_client_creation() {
        let client = PlaylistClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9999/".to_string(),
            user_agent: "test-agent".to_string(),
            timeout_secs: Some(5),
        };
        let client = PlaylistClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_page_is_ok() {
        let page = Page {
            status: StatusCode::OK,
            body: String::new(),
        };
        assert!(page.is_ok());

        let page = Page {
            status: StatusCode::NO_CONTENT,
            body: String::new(),
        };
        assert!(!page.is_ok());
    }
}
