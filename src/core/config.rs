use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_LLM_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_SESSION_AUTHORITY_URL: &str =
    "https://login-sub-id.onrender.com/valid-token.php";
pub const DEFAULT_LOGIN_REDIRECT_URL: &str = "https://youtubetrend.com";
pub const DEFAULT_TRANSCRIPT_LANG: &str = "en";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_base_url: String,
    /// Absent key is tolerated; discovery then yields no results.
    pub youtube_api_key: Option<String>,
    pub transcript_lang: String,
    pub session_authority_url: String,
    pub login_redirect_url: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let llm_api_key = env::var("LLM_API_KEY")
            .or_else(|_| env::var("GROQ_API_KEY"))
            .map_err(|e| format!("LLM_API_KEY: {}", e))?;

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("REQUEST_TIMEOUT_SECS: {}", e))?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let config = Self {
            llm_api_key,
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            transcript_lang: env::var("TRANSCRIPT_LANG")
                .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_LANG.to_string()),
            session_authority_url: env::var("SESSION_AUTHORITY_URL")
                .unwrap_or_else(|_| DEFAULT_SESSION_AUTHORITY_URL.to_string()),
            login_redirect_url: env::var("LOGIN_REDIRECT_URL")
                .unwrap_or_else(|_| DEFAULT_LOGIN_REDIRECT_URL.to_string()),
            request_timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the loaded values once at startup.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.llm_api_key.trim().is_empty() {
            return Err("LLM_API_KEY: must not be empty".to_string());
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(format!(
                "REQUEST_TIMEOUT_SECS: must be between 1 and {}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            ));
        }
        if url::Url::parse(&self.session_authority_url).is_err() {
            return Err(format!(
                "SESSION_AUTHORITY_URL: not a valid URL: {}",
                self.session_authority_url
            ));
        }
        if self.youtube_api_key.is_none() {
            warn!("YOUTUBE_API_KEY is missing; trending searches will return no results");
        }
        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
