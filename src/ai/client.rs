//! LLM (OpenAI-compatible chat completions) API client module
//!
//! Encapsulates the single text-completion call used for summaries and
//! research answers.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::errors::BriefError;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// A text-completion service: one instruction in, one completion out.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the provider call fails or the response has no text.
    async fn complete(&self, instruction: &str) -> Result<String, BriefError>;
}

/// LLM API client for generating summaries and answers
pub struct LlmClient {
    http: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, BriefError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BriefError::HttpError(format!("Failed to build LLM HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn build_prompt(&self, instruction: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(instruction.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed into the expected shape.
    pub async fn generate(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, BriefError> {
        #[cfg(feature = "debug-logs")]
        info!("Using LLM prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating completion with {} messages in prompt",
            prompt.len()
        );

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();
        info!("Estimated input tokens: {}", estimated_input_tokens);

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages_from_prompt(&prompt),
        });

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| BriefError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| BriefError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BriefError::HttpError(format!("LLM API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BriefError::LlmError(format!(
                "LLM API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| BriefError::LlmError(format!("Failed to parse LLM response: {e}")))?;

        extract_completion_text(&response_json)
            .ok_or_else(|| BriefError::LlmError("No text in response".to_string()))
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    async fn complete(&self, instruction: &str) -> Result<String, BriefError> {
        self.generate(self.build_prompt(instruction)).await
    }
}

/// Pulls `choices[0].message.content` out of a chat completions response.
#[must_use]
pub fn extract_completion_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Build the chat completions `messages` payload from a prompt.
/// Image parts are not supported by this service and are skipped.
pub(crate) fn build_chat_messages_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };
            match &m.content {
                Content::Text(t) => Some(json!({ "role": role_str, "content": t })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}
