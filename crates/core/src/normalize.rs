use crate::chapters::repair_chapters;
use crate::error::{Result, SummarizeError};
use crate::extract::extract_payload;
use crate::parse::{fallback_parse, try_parse};
use crate::reading::{reading_time_minutes, word_count};
use crate::timestamp::parse_timestamp;
use crate::types::{NormalizedSummary, SummarizationRequest};

const MAX_KEY_POINTS: usize = 7;

/// Pipeline stages reported through a [`StageSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extracted,
    StructuredParsed,
    FallbackParsed,
    ChaptersRepaired,
}

/// Injectable observability hook for the normalization pipeline.
pub trait StageSink {
    fn on_stage(&self, _stage: Stage, _detail: &str) {}
}

/// Sink that drops every stage event.
pub struct NoopSink;

impl StageSink for NoopSink {}

/// Turn a raw model response into a validated summary.
///
/// Extraction and strict parsing run first; when strict parsing fails the
/// heuristic fallback takes over, so malformed output is silently normalized
/// into a best-effort result. The only failure that crosses this boundary is
/// [`SummarizeError::EmptyContent`], raised when neither path yields any
/// summary text.
pub fn normalize_response(
    raw: &str,
    request: &SummarizationRequest,
    sink: &dyn StageSink,
) -> Result<NormalizedSummary> {
    let extracted = extract_payload(raw);
    sink.on_stage(Stage::Extracted, &format!("{} chars", extracted.len()));

    let parsed = match try_parse(&extracted) {
        Ok(parsed) => {
            sink.on_stage(
                Stage::StructuredParsed,
                &format!("{} key points, {} chapters", parsed.key_points.len(), parsed.chapters.len()),
            );
            parsed
        }
        Err(err) => {
            sink.on_stage(Stage::FallbackParsed, &err.to_string());
            fallback_parse(&extracted)
        }
    };

    if parsed.summary.trim().is_empty() {
        return Err(SummarizeError::EmptyContent);
    }

    let duration_seconds = request
        .video_duration
        .as_deref()
        .map(parse_timestamp)
        .unwrap_or(0);
    let chapters = repair_chapters(&parsed.chapters, duration_seconds);
    sink.on_stage(Stage::ChaptersRepaired, &format!("{} chapters", chapters.len()));

    let quotes = if request.extract_quotes {
        parsed.quotes
    } else {
        None
    };

    let mut key_points = parsed.key_points;
    key_points.truncate(MAX_KEY_POINTS);

    let words = word_count(&parsed.summary);
    Ok(NormalizedSummary {
        key_points,
        tags: parsed.tags,
        chapters,
        quotes,
        word_count: words,
        reading_time: reading_time_minutes(words),
        summary: parsed.summary,
    })
}
