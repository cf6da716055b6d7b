pub mod chapters;
pub mod error;
pub mod extract;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod reading;
pub mod timestamp;
pub mod types;
pub mod youtube;

pub use chapters::repair_chapters;
pub use error::{Result, SummarizeError};
pub use extract::extract_payload;
pub use format::format_summary_readable;
pub use normalize::{NoopSink, Stage, StageSink, normalize_response};
pub use parse::{RawParsed, fallback_parse, try_parse};
pub use pipeline::{PromptSender, summarize};
pub use prompt::{build_prompt, max_output_tokens};
pub use provider::{Provider, ProviderConfig};
pub use reading::{reading_time_minutes, word_count};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use types::{
    Chapter, FocusArea, Language, NormalizedSummary, RawChapter, SummarizationRequest,
    SummaryLength,
};
pub use youtube::{
    VideoInfo, extract_video_id, fetch_video_content, fetch_video_info, format_view_count,
    parse_iso8601_duration,
};
