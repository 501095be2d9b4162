use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::media::{RawSeason, RawShow, SearchHit, ShowId};
use crate::settings::AppSettings;

pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    result
}

/// The three read-only TVMaze endpoints the pipeline consumes. Kept as a
/// trait so the orchestrator can run against a stand-in during tests.
#[async_trait]
pub trait ShowApi: Send + Sync {
    /// `GET /shows?page={page}` - one page of the show catalog.
    async fn fetch_catalog_page(&self, page: u32) -> Result<Vec<RawShow>, ApiError>;

    /// `GET /search/shows?q={query}` - fuzzy search by show name.
    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ApiError>;

    /// `GET /shows/{id}/seasons` - season list for one show.
    async fn fetch_seasons(&self, show_id: ShowId) -> Result<Vec<RawSeason>, ApiError>;
}

#[derive(Clone)]
pub struct TvMazeClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl TvMazeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        let base_url = if settings.base_url.is_empty() {
            String::from(TVMAZE_BASE_URL)
        } else {
            settings.base_url.trim_end_matches('/').to_string()
        };
        Self::new(base_url)
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn fetch_response(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status().as_u16() {
            s if s >= 400 => Err(ApiError::Status(s)),
            _ => Ok(response),
        }
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ApiError> {
        self.fetch_response(url)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new(String::from(TVMAZE_BASE_URL))
    }
}

#[async_trait]
impl ShowApi for TvMazeClient {
    async fn fetch_catalog_page(&self, page: u32) -> Result<Vec<RawShow>, ApiError> {
        self.fetch_json(&self.build_url(&format!("/shows?page={}", page)))
            .await
    }

    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
        self.fetch_json(&self.build_url(&format!("/search/shows?q={}", url_encode(query))))
            .await
    }

    async fn fetch_seasons(&self, show_id: ShowId) -> Result<Vec<RawSeason>, ApiError> {
        self.fetch_json(&self.build_url(&format!("/shows/{}/seasons", show_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encode_passes_unreserved_characters() {
        assert_eq!(url_encode("the-avengers_2.0~x"), "the-avengers_2.0~x");
    }

    #[test]
    fn url_encode_escapes_spaces_and_symbols() {
        assert_eq!(url_encode("agents of shield"), "agents%20of%20shield");
        assert_eq!(url_encode("a&b"), "a%26b");
    }

    #[test]
    fn from_settings_strips_trailing_slash() {
        let settings = AppSettings {
            base_url: String::from("http://localhost:8080/"),
            ..AppSettings::default()
        };
        let client = TvMazeClient::from_settings(&settings);
        assert_eq!(client.build_url("/shows?page=1"), "http://localhost:8080/shows?page=1");
    }
}
