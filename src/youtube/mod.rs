//! Video platform collaborators: search, statistics and captions

pub mod client;
pub mod transcript;

pub use client::{VideoCatalog, YouTubeClient};
pub use transcript::{TimedTextClient, TranscriptOutcome, TranscriptSource};
