use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Substituted when the search provider omits a snippet description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// One discovered video. `view_count` and `content` are filled during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    pub title: String,
    #[serde(rename = "video_id")]
    pub external_id: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "views")]
    pub view_count: u64,
    pub content: String,
}

impl CandidateItem {
    #[must_use]
    pub fn new(title: String, external_id: String, description: Option<String>) -> Self {
        let url = watch_url(&external_id);
        Self {
            title,
            external_id,
            url,
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            view_count: 0,
            content: String::new(),
        }
    }
}

#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    pub items: Vec<CandidateItem>,
    pub joined_text: String,
    pub title_list: String,
}

impl AggregationResult {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    In,
    Us,
    Gb,
    Ca,
    Au,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::In, Region::Us, Region::Gb, Region::Ca, Region::Au];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Region::In => "IN",
            Region::Us => "US",
            Region::Gb => "GB",
            Region::Ca => "CA",
            Region::Au => "AU",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Unsupported region '{}'; expected one of IN, US, GB, CA, AU",
                    wanted
                )
            })
    }
}
