use crate::types::NormalizedSummary;
use crate::youtube::VideoInfo;

/// Format a normalized summary as human-readable markdown.
pub fn format_summary_readable(summary: &NormalizedSummary, video: Option<&VideoInfo>) -> String {
    let mut output = String::new();

    if let Some(video) = video {
        output.push_str(&format!("# {}\n\n", video.title));
        output.push_str(&format!(
            "**Channel:** {} | **Duration:** {} | **Views:** {}\n\n",
            video.channel_name, video.duration, video.view_count
        ));
    }

    output.push_str("## Summary\n\n");
    output.push_str(&summary.summary);
    output.push_str("\n\n");

    output.push_str("## Key Points\n\n");
    for (i, point) in summary.key_points.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, point));
    }
    output.push('\n');

    output.push_str("## Chapters\n\n");
    for chapter in &summary.chapters {
        output.push_str(&format!("### [{}] {}\n\n", chapter.timestamp, chapter.title));
        output.push_str(&format!("{}\n\n", chapter.summary));
    }

    if let Some(quotes) = &summary.quotes {
        output.push_str("## Quotes\n\n");
        for quote in quotes {
            output.push_str(&format!("> {}\n", quote));
        }
        output.push('\n');
    }

    output.push_str("## Tags\n\n");
    output.push_str(&summary.tags.join(", "));
    output.push('\n');

    output.push_str(&format!(
        "\n_{} words · {} min read_\n",
        summary.word_count, summary.reading_time
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chapter;

    fn summary() -> NormalizedSummary {
        NormalizedSummary {
            summary: "A short recap.".to_string(),
            key_points: vec!["First".to_string(), "Second".to_string()],
            tags: vec!["video".to_string(), "content".to_string()],
            chapters: vec![Chapter {
                title: "Intro".to_string(),
                timestamp: "0:00".to_string(),
                summary: "Opening".to_string(),
            }],
            quotes: None,
            word_count: 3,
            reading_time: 1,
        }
    }

    #[test]
    fn test_format_readable_sections() {
        let text = format_summary_readable(&summary(), None);
        assert!(text.contains("## Summary"));
        assert!(text.contains("1. First\n2. Second"));
        assert!(text.contains("### [0:00] Intro"));
        assert!(text.contains("video, content"));
        assert!(text.contains("_3 words · 1 min read_"));
        assert!(!text.contains("## Quotes"));
    }

    #[test]
    fn test_format_readable_includes_quotes_when_present() {
        let mut s = summary();
        s.quotes = Some(vec!["Ship it".to_string()]);
        let text = format_summary_readable(&s, None);
        assert!(text.contains("## Quotes\n\n> Ship it"));
    }
}
