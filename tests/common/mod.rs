#![allow(dead_code)]

pub mod http_stub;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use trendbrief::BriefError;
use trendbrief::ai::CompletionModel;
use trendbrief::core::models::{CandidateItem, Region};
use trendbrief::session::{SessionAuthority, SessionVerdict};
use trendbrief::youtube::{TranscriptOutcome, TranscriptSource, VideoCatalog};

/// Shared record of collaborator calls, inspectable after the fakes are boxed.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

pub fn video(id: &str, title: &str, description: &str) -> CandidateItem {
    CandidateItem::new(title.to_string(), id.to_string(), Some(description.to_string()))
}

pub struct FakeCatalog {
    pub videos: Vec<CandidateItem>,
    pub views: HashMap<String, u64>,
    pub search_error: Option<fn() -> BriefError>,
    pub log: CallLog,
}

impl FakeCatalog {
    pub fn new(videos: Vec<CandidateItem>, log: CallLog) -> Self {
        Self {
            videos,
            views: HashMap::new(),
            search_error: None,
            log,
        }
    }

    pub fn with_views(mut self, views: &[(&str, u64)]) -> Self {
        for (id, count) in views {
            self.views.insert((*id).to_string(), *count);
        }
        self
    }
}

#[async_trait]
impl VideoCatalog for FakeCatalog {
    async fn search(
        &self,
        topic: &str,
        region: Region,
        max_results: usize,
    ) -> Result<Vec<CandidateItem>, BriefError> {
        self.log.push(format!("search:{topic}:{region}:{max_results}"));
        if let Some(make_err) = self.search_error {
            return Err(make_err());
        }
        Ok(self.videos.iter().take(max_results).cloned().collect())
    }

    async fn view_count(&self, video_id: &str) -> Result<u64, BriefError> {
        self.log.push(format!("views:{video_id}"));
        self.views
            .get(video_id)
            .copied()
            .ok_or_else(|| BriefError::YouTubeError(format!("no statistics for {video_id}")))
    }
}

pub struct FakeTranscripts {
    pub transcripts: HashMap<String, TranscriptOutcome>,
    pub log: CallLog,
}

impl FakeTranscripts {
    pub fn new(log: CallLog) -> Self {
        Self {
            transcripts: HashMap::new(),
            log,
        }
    }

    pub fn with(mut self, id: &str, outcome: TranscriptOutcome) -> Self {
        self.transcripts.insert(id.to_string(), outcome);
        self
    }
}

#[async_trait]
impl TranscriptSource for FakeTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> TranscriptOutcome {
        self.log.push(format!("transcript:{video_id}"));
        self.transcripts
            .get(video_id)
            .cloned()
            .unwrap_or(TranscriptOutcome::Unavailable)
    }
}

#[derive(Clone)]
pub enum FakeReply {
    Text(String),
    Fail(String),
}

pub struct FakeModel {
    pub reply: FakeReply,
    pub prompts: CallLog,
}

impl FakeModel {
    pub fn replying(text: &str, prompts: CallLog) -> Self {
        Self {
            reply: FakeReply::Text(text.to_string()),
            prompts,
        }
    }

    pub fn failing(reason: &str, prompts: CallLog) -> Self {
        Self {
            reply: FakeReply::Fail(reason.to_string()),
            prompts,
        }
    }
}

#[async_trait]
impl CompletionModel for FakeModel {
    async fn complete(&self, instruction: &str) -> Result<String, BriefError> {
        self.prompts.push(instruction);
        match &self.reply {
            FakeReply::Text(t) => Ok(t.clone()),
            FakeReply::Fail(reason) => Err(BriefError::LlmError(reason.clone())),
        }
    }
}

pub struct FakeAuthority {
    pub verdicts: HashMap<String, SessionVerdict>,
    pub log: CallLog,
}

impl FakeAuthority {
    pub fn new(log: CallLog) -> Self {
        Self {
            verdicts: HashMap::new(),
            log,
        }
    }

    pub fn with(mut self, credential: &str, verdict: SessionVerdict) -> Self {
        self.verdicts.insert(credential.to_string(), verdict);
        self
    }
}

#[async_trait]
impl SessionAuthority for FakeAuthority {
    async fn validate(&self, credential: &str) -> SessionVerdict {
        self.log.push(format!("validate:{credential}"));
        self.verdicts
            .get(credential)
            .copied()
            .unwrap_or(SessionVerdict::Invalid)
    }

    async fn revoke(&self, credential: &str) -> Result<(), BriefError> {
        self.log.push(format!("revoke:{credential}"));
        Ok(())
    }
}
