//! YouTube Data API v3 client
//!
//! Covers the two read-only calls the aggregator needs: a topic search and a
//! per-video statistics lookup.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::models::{CandidateItem, Region};
use crate::errors::BriefError;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Search and statistics lookups against a video platform.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Returns up to `max_results` videos for `topic`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    async fn search(
        &self,
        topic: &str,
        region: Region,
        max_results: usize,
    ) -> Result<Vec<CandidateItem>, BriefError>;

    /// # Errors
    ///
    /// Returns an error if the request fails or the count is absent.
    async fn view_count(&self, video_id: &str) -> Result<u64, BriefError>;
}

pub struct YouTubeClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, BriefError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            BriefError::HttpError(format!("Failed to build YouTube HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            api_key,
            base_url: YOUTUBE_API_BASE.to_string(),
        })
    }

    /// Points the client at another Data API host, e.g. a regional proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str, BriefError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| BriefError::ConfigError("YOUTUBE_API_KEY is missing".to_string()))
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, BriefError> {
        let response = self
            .http
            .get(format!("{}/{endpoint}", self.base_url))
            .query(params)
            .send()
            .await
            .map_err(|e| {
                BriefError::HttpError(format!(
                    "YouTube {endpoint} request failed: {}",
                    e.without_url()
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BriefError::YouTubeError(format!(
                "{endpoint} returned status {status}: {}",
                api_error_message(&body)
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| {
                BriefError::ParseError(format!("YouTube {endpoint} response: {}", e.without_url()))
            })
    }
}

#[async_trait]
impl VideoCatalog for YouTubeClient {
    async fn search(
        &self,
        topic: &str,
        region: Region,
        max_results: usize,
    ) -> Result<Vec<CandidateItem>, BriefError> {
        let key = self.api_key()?;
        let max = max_results.to_string();
        let data = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", topic),
                    ("maxResults", max.as_str()),
                    ("type", "video"),
                    ("regionCode", region.code()),
                    ("key", key),
                ],
            )
            .await?;

        let mut videos = parse_search_response(&data);
        videos.truncate(max_results);
        info!(topic = %topic, region = %region, found = videos.len(), "YouTube search complete");
        Ok(videos)
    }

    async fn view_count(&self, video_id: &str) -> Result<u64, BriefError> {
        let key = self.api_key()?;
        let data = self
            .get_json(
                "videos",
                &[("part", "statistics"), ("id", video_id), ("key", key)],
            )
            .await?;
        let count = parse_view_count(&data)?;
        debug!(video_id = %video_id, views = count, "Fetched view count");
        Ok(count)
    }
}

/// Converts a `search.list` payload into candidates, dropping entries that
/// carry no video id (channels, playlists).
#[must_use]
pub fn parse_search_response(data: &Value) -> Vec<CandidateItem> {
    let Some(items) = data.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let video_id = item
                .get("id")
                .and_then(|id| id.get("videoId"))
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())?;
            let snippet = item.get("snippet");
            let title = snippet
                .and_then(|s| s.get("title"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            let description = snippet
                .and_then(|s| s.get("description"))
                .and_then(Value::as_str)
                .map(ToString::to_string);
            Some(CandidateItem::new(
                title.to_string(),
                video_id.to_string(),
                description,
            ))
        })
        .collect()
}

/// Reads `items[0].statistics.viewCount`, which the API encodes as a string.
///
/// # Errors
///
/// Returns an error if the count is missing or not a number.
pub fn parse_view_count(data: &Value) -> Result<u64, BriefError> {
    let raw = data
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("statistics"))
        .and_then(|stats| stats.get("viewCount"))
        .ok_or_else(|| BriefError::ParseError("viewCount missing from statistics".to_string()))?;

    match raw {
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|e| BriefError::ParseError(format!("viewCount '{s}': {e}"))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| BriefError::ParseError(format!("viewCount {n} is not a count"))),
        other => Err(BriefError::ParseError(format!(
            "unexpected viewCount value: {other}"
        ))),
    }
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}
