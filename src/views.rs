use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Write;

use crate::core::models::{AggregationResult, CandidateItem};

pub const NO_VIDEOS_MESSAGE: &str = "No trending videos found.";

/// Render the dashboard page body as markdown.
///
/// Layout:
/// - "Top Trending Videos" with one numbered entry per ranked item
/// - link, description and transcript under each entry
/// - "Summary of the Above Videos" with the generated text
#[must_use]
pub fn render_report(result: &AggregationResult, summary: &str) -> String {
    if result.is_empty() {
        return NO_VIDEOS_MESSAGE.to_string();
    }

    let mut out = String::from("## Top Trending Videos\n\n");
    for (i, item) in result.items.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({} views)", i + 1, item.title, item.view_count);
        let _ = writeln!(out, "Video URL: [Link]({})", item.url);
        let _ = writeln!(out, "Description: {}", item.description);
        let _ = writeln!(out, "\n```text\n{}\n```\n", item.content);
    }

    out.push_str("## Summary of the Above Videos\n\n");
    out.push_str(summary);
    out.push('\n');
    out
}

#[derive(Serialize)]
struct RankedItem<'a> {
    rank: usize,
    #[serde(flatten)]
    item: &'a CandidateItem,
}

#[must_use]
pub fn item_json(rank: usize, item: &CandidateItem) -> Value {
    let ranked = RankedItem { rank, item };
    json!(ranked)
}

/// JSON body for the trending route.
#[must_use]
pub fn trending_json(result: &AggregationResult, summary: Option<&str>) -> Value {
    if result.is_empty() {
        return json!({ "items": [], "message": NO_VIDEOS_MESSAGE });
    }

    let items: Vec<Value> = result
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| item_json(i + 1, item))
        .collect();

    let summary = summary.unwrap_or_default();
    json!({
        "items": items,
        "titles": result.title_list,
        "summary": summary,
        "report": render_report(result, summary),
        "generated_at": Utc::now().to_rfc3339(),
    })
}
