use tracing::{info, warn};

use crate::core::models::{AggregationResult, CandidateItem, Region};
use crate::errors::BriefError;
use crate::youtube::{TranscriptOutcome, TranscriptSource, VideoCatalog};

/// Candidates requested from the search provider.
pub const MAX_DISCOVERED: usize = 10;
/// Candidates enriched and returned.
pub const MAX_ENRICHED: usize = 5;
/// Character budget for the text handed to the summarizer.
pub const MAX_JOINED_CHARS: usize = 20_000;

/// Search, enrich, rank and bound trending videos for a topic.
pub struct Aggregator {
    catalog: Box<dyn VideoCatalog>,
    transcripts: Box<dyn TranscriptSource>,
}

impl Aggregator {
    #[must_use]
    pub fn new(catalog: Box<dyn VideoCatalog>, transcripts: Box<dyn TranscriptSource>) -> Self {
        Self {
            catalog,
            transcripts,
        }
    }

    /// Builds the aggregation for `topic` in `region`.
    ///
    /// Never fails: a missing key or failed search yields an empty result,
    /// a failed view lookup counts as 0 views, and a missing transcript is
    /// replaced by the video description.
    pub async fn aggregate(&self, topic: &str, region: Region) -> AggregationResult {
        let discovered = match self.catalog.search(topic, region, MAX_DISCOVERED).await {
            Ok(videos) => videos,
            Err(BriefError::ConfigError(msg)) => {
                warn!("Search skipped, configuration problem: {}", msg);
                return AggregationResult::empty();
            }
            Err(e) => {
                warn!("YouTube search failed: {}", e);
                return AggregationResult::empty();
            }
        };

        if discovered.is_empty() {
            info!(topic = %topic, region = %region, "No videos found");
            return AggregationResult::empty();
        }

        let mut items: Vec<CandidateItem> = Vec::with_capacity(MAX_ENRICHED);
        let mut joined_text = String::new();
        let mut title_list = String::new();

        for mut video in discovered.into_iter().take(MAX_ENRICHED) {
            video.view_count = match self.catalog.view_count(&video.external_id).await {
                Ok(count) => count,
                Err(e) => {
                    warn!(video_id = %video.external_id, "View count unavailable: {}", e);
                    0
                }
            };

            video.content = match self.transcripts.fetch_transcript(&video.external_id).await {
                TranscriptOutcome::Available(text) => text,
                TranscriptOutcome::Unavailable => video.description.clone(),
                TranscriptOutcome::Failed(reason) => {
                    warn!(video_id = %video.external_id, "Transcript fetch failed: {}", reason);
                    video.description.clone()
                }
            };

            joined_text.push_str(&format_block(&video));
            title_list.push_str(&video.title);
            title_list.push_str(", ");
            items.push(video);
        }

        rank_by_views(&mut items);

        info!(
            enriched = items.len(),
            joined_chars = joined_text.chars().count(),
            "Aggregation complete"
        );

        AggregationResult {
            items,
            joined_text: truncate_chars(&joined_text, MAX_JOINED_CHARS),
            title_list,
        }
    }
}

#[must_use]
pub fn format_block(item: &CandidateItem) -> String {
    format!(
        "### {} ({} views)\n{}\n\n",
        item.title, item.view_count, item.content
    )
}

/// Sorts by view count descending. The sort is stable, so ties keep
/// discovery order.
pub fn rank_by_views(items: &mut [CandidateItem]) {
    items.sort_by(|a, b| b.view_count.cmp(&a.view_count));
}

/// Returns the first `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
