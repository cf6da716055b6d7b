use crate::timestamp::format_timestamp;
use crate::types::{Chapter, RawChapter};

const SYNTHETIC_TITLES: [&str; 4] = ["Introduction", "Main Content", "Key Points", "Conclusion"];
const MISSING_SUMMARY: &str = "Chapter summary not available";
const SYNTHETIC_SUMMARY: &str = "Chapter content based on video analysis";
const UNKNOWN_DURATION_SUMMARY: &str = "Full content analysis available in summary section";

/// Seconds above which a synthesized outline gets a fourth chapter.
const LONG_VIDEO_SECONDS: u64 = 600;

/// Rebuild chapters so their timestamps are evenly spread across the known
/// duration.
///
/// A language model cannot know true timestamps from descriptive text alone,
/// so model-proposed offsets are recomputed wholesale; only titles and
/// summaries are kept. With an unknown duration (`0`) the model's original
/// timestamp strings are left as-is, since nothing better is known. An empty
/// input produces a synthesized outline instead.
pub fn repair_chapters(model_chapters: &[RawChapter], duration_seconds: u64) -> Vec<Chapter> {
    if model_chapters.is_empty() {
        return synthesize_chapters(duration_seconds);
    }

    let count = model_chapters.len();
    model_chapters
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let timestamp = if duration_seconds > 0 {
                format_timestamp(spaced_offset(index, count, duration_seconds))
            } else {
                raw.timestamp.clone().unwrap_or_else(|| "0:00".to_string())
            };

            Chapter {
                title: raw
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Section {}", index + 1)),
                timestamp,
                summary: raw.summary.clone().unwrap_or_else(|| MISSING_SUMMARY.to_string()),
            }
        })
        .collect()
}

fn synthesize_chapters(duration_seconds: u64) -> Vec<Chapter> {
    if duration_seconds == 0 {
        return vec![Chapter {
            title: "Main Content".to_string(),
            timestamp: "0:00".to_string(),
            summary: UNKNOWN_DURATION_SUMMARY.to_string(),
        }];
    }

    let count = if duration_seconds > LONG_VIDEO_SECONDS { 4 } else { 3 };
    (0..count)
        .map(|index| Chapter {
            title: SYNTHETIC_TITLES
                .get(index)
                .map(|title| title.to_string())
                .unwrap_or_else(|| format!("Section {}", index + 1)),
            timestamp: format_timestamp(spaced_offset(index, count, duration_seconds)),
            summary: SYNTHETIC_SUMMARY.to_string(),
        })
        .collect()
}

fn spaced_offset(index: usize, count: usize, duration_seconds: u64) -> i64 {
    (index as f64 / count as f64 * duration_seconds as f64).floor() as i64
}
