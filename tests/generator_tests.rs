mod common;

use common::{CallLog, FakeModel};
use trendbrief::ai::Generator;
use trendbrief::ai::generator::{EMPTY_ANSWER_MESSAGE, SUMMARY_FAILURE_MESSAGE};

#[tokio::test]
async fn summarize_returns_completion_verbatim() {
    let prompts = CallLog::default();
    let generator = Generator::new(Box::new(FakeModel::replying(
        "  A tidy summary.\n",
        prompts.clone(),
    )));

    let summary = generator
        .summarize("### Alpha (1 views)\nbody\n\n", "Alpha, ")
        .await;

    assert_eq!(summary, "  A tidy summary.\n");
    let sent = prompts.entries();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("Write a high-quality summary for these videos: Alpha, ."));
    assert!(sent[0].contains("### Alpha (1 views)\nbody"));
}

#[tokio::test]
async fn summarize_blank_text_uses_titles_only() {
    let prompts = CallLog::default();
    let generator = Generator::new(Box::new(FakeModel::replying("Article", prompts.clone())));

    generator.summarize("   \n\t", "One, Two, ").await;

    assert_eq!(
        prompts.entries(),
        vec!["Generate an engaging article using these video titles: One, Two, ."]
    );
}

#[tokio::test]
async fn summarize_failure_returns_fixed_message() {
    let generator = Generator::new(Box::new(FakeModel::failing(
        "503 upstream",
        CallLog::default(),
    )));

    let summary = generator.summarize("text", "T, ").await;

    assert_eq!(summary, SUMMARY_FAILURE_MESSAGE);
}

#[tokio::test]
async fn summarize_empty_completion_returns_fixed_message() {
    let generator = Generator::new(Box::new(FakeModel::replying("  ", CallLog::default())));

    assert_eq!(generator.summarize("text", "T, ").await, SUMMARY_FAILURE_MESSAGE);
}

#[tokio::test]
async fn answer_builds_research_instruction() {
    let prompts = CallLog::default();
    let generator = Generator::new(Box::new(FakeModel::replying("42", prompts.clone())));

    let answer = generator.answer("What is\u{0007} the answer?").await;

    assert_eq!(answer, "42");
    assert_eq!(
        prompts.entries(),
        vec!["Answer this question and suggest related questions: What is the answer?"]
    );
}

#[tokio::test]
async fn answer_failure_describes_the_error() {
    let generator = Generator::new(Box::new(FakeModel::failing(
        "rate limited",
        CallLog::default(),
    )));

    let answer = generator.answer("why?").await;

    assert!(!answer.is_empty());
    assert!(answer.starts_with("Failed to generate chatbot response"));
    assert!(answer.contains("rate limited"));
}

#[tokio::test]
async fn answer_empty_completion_returns_fixed_message() {
    let generator = Generator::new(Box::new(FakeModel::replying("", CallLog::default())));

    assert_eq!(generator.answer("why?").await, EMPTY_ANSWER_MESSAGE);
}
