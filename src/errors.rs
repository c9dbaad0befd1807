use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access YouTube API: {0}")]
    YouTubeError(String),

    #[error("Failed to access LLM API: {0}")]
    LlmError(String),

    #[error("Session authority error: {0}")]
    SessionError(String),
}

impl From<reqwest::Error> for BriefError {
    fn from(error: reqwest::Error) -> Self {
        BriefError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for BriefError {
    fn from(error: serde_json::Error) -> Self {
        BriefError::ParseError(error.to_string())
    }
}
