//! All AI/LLM functionality

pub mod client;
pub mod generator;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{CompletionModel, LlmClient, estimate_tokens};
pub use generator::Generator;
