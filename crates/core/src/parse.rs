use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::RawChapter;

/// Key points used when the model response carried none.
pub const DEFAULT_KEY_POINTS: [&str; 2] = [
    "Key points extraction failed",
    "Please try again with a different video",
];

/// Tags used when the structured response carried none.
pub const DEFAULT_TAGS: [&str; 2] = ["video", "content"];

/// Tags used by the heuristic fallback path.
pub const FALLBACK_TAGS: [&str; 3] = ["video", "content", "summary"];

const MAX_KEY_POINTS: usize = 7;

/// Output of either parse path, before chapter repair and the reading-time
/// estimate turn it into a [`crate::types::NormalizedSummary`].
#[derive(Debug, Clone)]
pub struct RawParsed {
    pub summary: String,
    pub key_points: Vec<String>,
    pub tags: Vec<String>,
    pub chapters: Vec<RawChapter>,
    pub quotes: Option<Vec<String>>,
}

/// Strict decode of the extracted payload.
///
/// Only invalid JSON syntax fails. Each field is harvested independently
/// with its own default, so one malformed field cannot sink an otherwise
/// usable response.
pub fn try_parse(extracted: &str) -> Result<RawParsed, serde_json::Error> {
    let value: Value = serde_json::from_str(extracted)?;

    let summary = match value.get("summary").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => "Summary not available".to_string(),
    };

    Ok(RawParsed {
        summary,
        key_points: string_array(&value, "keyPoints")
            .unwrap_or_else(|| owned_strings(&DEFAULT_KEY_POINTS)),
        tags: string_array(&value, "tags").unwrap_or_else(|| owned_strings(&DEFAULT_TAGS)),
        chapters: chapter_array(&value),
        quotes: string_array(&value, "quotes"),
    })
}

/// Terminal recovery path for responses that are not JSON at all.
///
/// Total by construction: the whole text becomes the summary, key points come
/// from list-pattern heuristics with sentence splitting as a backstop, and
/// the result always carries at least one key point for non-empty input.
pub fn fallback_parse(extracted: &str) -> RawParsed {
    let mut key_points: Vec<String> = extracted
        .lines()
        .filter_map(|line| clean_key_point(line.trim()))
        .collect();

    if key_points.is_empty() {
        key_points = extracted
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() > 20)
            .take(5)
            .map(str::to_string)
            .collect();
    }

    if key_points.is_empty() && !extracted.trim().is_empty() {
        // short free text with no lists and no long sentences
        key_points.push(extracted.trim().chars().take(200).collect());
    }

    key_points.truncate(MAX_KEY_POINTS);

    RawParsed {
        summary: extracted.to_string(),
        key_points,
        tags: owned_strings(&FALLBACK_TAGS),
        chapters: Vec::new(),
        quotes: None,
    }
}

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•*]\s+").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(key|main|important)").unwrap());
static KEYWORD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(key|main|important)\s*(point|idea|concept)?:?\s*").unwrap());

fn clean_key_point(line: &str) -> Option<String> {
    if !BULLET.is_match(line) && !NUMBERED.is_match(line) && !KEYWORD.is_match(line) {
        return None;
    }

    let clean = BULLET.replace(line, "");
    let clean = NUMBERED.replace(&clean, "");
    let clean = KEYWORD_PREFIX.replace(&clean, "");
    let clean = clean.trim();

    // guards against noise on the short end and whole paragraphs on the long
    let chars = clean.chars().count();
    (chars > 10 && chars < 200).then(|| clean.to_string())
}

fn string_array(value: &Value, key: &str) -> Option<Vec<String>> {
    let items = value.get(key)?.as_array()?;
    let strings: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if strings.is_empty() { None } else { Some(strings) }
}

fn chapter_array(value: &Value) -> Vec<RawChapter> {
    let Some(items) = value.get("chapters").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|chapter| RawChapter {
            title: field_string(chapter.get("title")),
            timestamp: field_string(chapter.get("timestamp")),
            summary: field_string(chapter.get("summary")),
        })
        .collect()
}

fn field_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn owned_strings(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| s.to_string()).collect()
}
