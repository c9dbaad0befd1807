use tracing::{error, info, warn};

use super::client::CompletionModel;
use super::prompt_builder::{research_prompt, summary_prompt};

/// Shown when a summary cannot be produced.
pub const SUMMARY_FAILURE_MESSAGE: &str = "AI content generation failed. Please try again.";

/// Shown when the model answers a research question with nothing.
pub const EMPTY_ANSWER_MESSAGE: &str =
    "Sorry, I couldn't come up with an answer to that. Please try rephrasing the question.";

/// Turns aggregated text or questions into model completions.
///
/// Both operations are single-shot and always return displayable text.
pub struct Generator {
    model: Box<dyn CompletionModel>,
}

impl Generator {
    #[must_use]
    pub fn new(model: Box<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, joined_text: &str, title_list: &str) -> String {
        if joined_text.trim().is_empty() {
            warn!("No transcripts found; using only titles for generation");
        }
        let instruction = summary_prompt(joined_text, title_list);

        match self.model.complete(&instruction).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(chars = text.chars().count(), "Summary generated");
                text
            }
            Ok(_) => {
                warn!("Model returned an empty summary");
                SUMMARY_FAILURE_MESSAGE.to_string()
            }
            Err(e) => {
                error!("AI model call failed: {}", e);
                SUMMARY_FAILURE_MESSAGE.to_string()
            }
        }
    }

    pub async fn answer(&self, query: &str) -> String {
        let instruction = research_prompt(query);

        match self.model.complete(&instruction).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("Model returned an empty answer");
                EMPTY_ANSWER_MESSAGE.to_string()
            }
            Err(e) => {
                error!("Research chat call failed: {}", e);
                format!("Failed to generate chatbot response - {e}")
            }
        }
    }
}
