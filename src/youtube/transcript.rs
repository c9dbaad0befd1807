use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::errors::BriefError;

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Result of a caption lookup.
///
/// `Unavailable` means the video has no usable captions. `Failed` means the
/// lookup itself broke (network, malformed payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    Available(String),
    Unavailable,
    Failed(String),
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> TranscriptOutcome;
}

/// Reads captions from the public timedtext endpoint.
pub struct TimedTextClient {
    http: Client,
    language: String,
    base_url: String,
}

impl TimedTextClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(language: impl Into<String>, timeout: Duration) -> Result<Self, BriefError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            BriefError::HttpError(format!("Failed to build transcript HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            language: language.into(),
            base_url: TIMEDTEXT_URL.to_string(),
        })
    }

    /// Full URL of the timedtext endpoint to query instead of YouTube's.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `Ok(None)` when the track does not exist or is empty.
    async fn fetch_track(
        &self,
        video_id: &str,
        kind: Option<&str>,
    ) -> Result<Option<String>, BriefError> {
        let mut params = vec![
            ("v", video_id),
            ("lang", self.language.as_str()),
            ("fmt", "json3"),
        ];
        if let Some(kind) = kind {
            params.push(("kind", kind));
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| BriefError::HttpError(format!("timedtext request failed: {e}")))?;

        if !response.status().is_success() {
            debug!(video_id = %video_id, status = %response.status(), "No caption track");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BriefError::HttpError(format!("timedtext body: {e}")))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let data: Value = serde_json::from_str(&body)?;
        let text = parse_json3_transcript(&data);
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

#[async_trait]
impl TranscriptSource for TimedTextClient {
    async fn fetch_transcript(&self, video_id: &str) -> TranscriptOutcome {
        // Manual captions first, then auto-generated ones.
        for kind in [None, Some("asr")] {
            match self.fetch_track(video_id, kind).await {
                Ok(Some(text)) => return TranscriptOutcome::Available(text),
                Ok(None) => {}
                Err(e) => return TranscriptOutcome::Failed(e.to_string()),
            }
        }
        TranscriptOutcome::Unavailable
    }
}

/// Joins the spoken segments of a json3 caption payload with spaces.
#[must_use]
pub fn parse_json3_transcript(data: &Value) -> String {
    data.get("events")
        .and_then(Value::as_array)
        .map(|events| {
            events
                .iter()
                .filter_map(|event| {
                    event.get("segs").and_then(Value::as_array).map(|segs| {
                        segs.iter()
                            .filter_map(|seg| seg.get("utf8").and_then(Value::as_str))
                            .collect::<String>()
                    })
                })
                .map(|line| WHITESPACE_RE.replace_all(line.trim(), " ").into_owned())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
