use serde::{Deserialize, Serialize};

use crate::timestamp::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    #[default]
    General,
    Technical,
    Educational,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

/// One summarization job, built once by the caller and never mutated.
#[derive(Debug, Clone)]
pub struct SummarizationRequest {
    pub content: String,
    pub length: SummaryLength,
    pub focus: FocusArea,
    pub language: Language,
    pub include_chapters: bool,
    pub extract_quotes: bool,
    pub generate_tags: bool,
    /// Known video duration as "M:SS" or "H:MM:SS"; `None` means unknown.
    pub video_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub timestamp: String,
    pub summary: String,
}

impl Chapter {
    /// Start offset in seconds; `0` when the timestamp string is malformed.
    pub fn timestamp_seconds(&self) -> u64 {
        parse_timestamp(&self.timestamp)
    }
}

/// A chapter as the model proposed it, before repair. Every field is
/// optional because the model cannot be trusted to fill any of them.
#[derive(Debug, Clone, Default)]
pub struct RawChapter {
    pub title: Option<String>,
    pub timestamp: Option<String>,
    pub summary: Option<String>,
}

/// The engine's final output, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedSummary {
    pub summary: String,
    pub key_points: Vec<String>,
    pub tags: Vec<String>,
    pub chapters: Vec<Chapter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<String>>,
    pub word_count: usize,
    pub reading_time: u32,
}
