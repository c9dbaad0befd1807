/// trendbrief - backend for a YouTube trend research dashboard.
///
/// For a topic and region, the dashboard finds trending videos, ranks them
/// by views, gathers their transcripts (or descriptions), and asks an LLM to
/// summarize them. It also answers free-form research questions.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (HTTP API events) for serverless execution
/// - the YouTube Data API v3 and the public timedtext endpoint for videos
/// - an OpenAI-compatible chat completions endpoint (Groq by default)
/// - a remote session authority that gates every dashboard route
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use trendbrief::core::config::AppConfig;
/// use trendbrief::core::models::Region;
/// use trendbrief::dashboard::Dashboard;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     trendbrief::setup_logging();
///
///     let config = AppConfig {
///         llm_api_key: "dummy_llm_key".to_string(),
///         llm_model: "gemma2-9b-it".to_string(),
///         llm_base_url: "https://api.groq.com/openai/v1".to_string(),
///         youtube_api_key: Some("dummy_youtube_key".to_string()),
///         transcript_lang: "en".to_string(),
///         session_authority_url: "https://auth.example.com/valid-token.php".to_string(),
///         login_redirect_url: "https://example.com/login".to_string(),
///         request_timeout_secs: 10,
///     };
///     config.validate()?;
///
///     let dashboard = Dashboard::from_config(&config)?;
///     let result = dashboard.aggregator().aggregate("rust async", Region::Us).await;
///     if !result.is_empty() {
///         let summary = dashboard
///             .generator()
///             .summarize(&result.joined_text, &result.title_list)
///             .await;
///         println!("{}", trendbrief::views::render_report(&result, &summary));
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod dashboard;
pub mod errors;
pub mod session;
pub mod trending;
pub mod views;
pub mod youtube;

pub use ai::estimate_tokens;
pub use errors::BriefError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Call it once at process start; later calls
/// leave the first subscriber in place.
///
/// # Example
///
/// ```
/// trendbrief::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
