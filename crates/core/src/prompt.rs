use crate::types::{FocusArea, Language, SummarizationRequest, SummaryLength};

/// Upper bound on content characters embedded in a prompt, kept conservative
/// to respect the model's context window.
const MAX_CONTENT_CHARS: usize = 8000;
const TRUNCATION_MARKER: &str = "...[content truncated]";

/// Output token budget per summary length.
pub fn max_output_tokens(length: SummaryLength) -> u32 {
    match length {
        SummaryLength::Short => 800,
        SummaryLength::Medium => 1200,
        SummaryLength::Detailed => 1800,
    }
}

fn length_instruction(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => "Create a concise summary in about 100-150 words.",
        SummaryLength::Medium => "Create a comprehensive summary in about 300-400 words.",
        SummaryLength::Detailed => "Create a detailed summary in about 500-700 words.",
    }
}

fn focus_instruction(focus: FocusArea) -> &'static str {
    match focus {
        FocusArea::General => "Focus on the main topics and general insights.",
        FocusArea::Technical => {
            "Emphasize technical details, methodologies, and implementation aspects."
        }
        FocusArea::Educational => {
            "Highlight learning objectives, key concepts, and educational value."
        }
        FocusArea::Business => {
            "Focus on business implications, strategies, and actionable insights."
        }
    }
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => "Respond in English.",
        Language::Spanish => "Respond in Spanish.",
        Language::French => "Respond in French.",
        Language::German => "Respond in German.",
    }
}

/// Build the instruction text sent to the model.
///
/// Pure and deterministic: the same request always yields the same prompt,
/// so tests can assert on exact content. The known video duration is embedded
/// so the model has a chance to self-report sensible timestamps, even though
/// chapter repair will not trust them.
pub fn build_prompt(request: &SummarizationRequest) -> String {
    let duration = request.video_duration.as_deref().unwrap_or("Unknown");
    let content = truncate_content(&request.content);

    let mut steps = vec![
        length_instruction(request.length).to_string(),
        focus_instruction(request.focus).to_string(),
        language_instruction(request.language).to_string(),
        "Extract 5-7 key points as bullet points".to_string(),
    ];

    if request.generate_tags {
        steps.push("Generate 3-5 relevant tags based on the content".to_string());
    }

    if request.include_chapters {
        steps.push(format!(
            "Create realistic chapters with timestamps based on the video duration ({duration}).\n\
             - Distribute timestamps evenly across the video duration\n\
             - Use format like \"0:00\", \"2:15\", \"5:30\", etc.\n\
             - Create 3-5 logical chapters that would make sense for this content\n\
             - Each chapter should represent a distinct topic or section"
        ));
    }

    if request.extract_quotes {
        steps.push(
            "Extract 2-3 key quotes or important statements directly from the content provided.\n\
             - Only use actual text from the video description/content\n\
             - Do not create fictional quotes\n\
             - If no clear quotes are available, indicate \"No direct quotes available from content\""
                .to_string(),
        );
    }

    let instructions = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    let quotes_field = if request.extract_quotes {
        ",\n  \"quotes\": [\"actual quote from content\", \"another real quote\"]"
    } else {
        ""
    };

    format!(
        r#"You are an expert content summarizer analyzing YouTube video content. Please provide a structured response based on the video description and content.

Video Duration: {duration}

Instructions:
{instructions}

Video Content to Analyze:
{content}

Please format your response as valid JSON with the following structure:
{{
  "summary": "your detailed summary here (formatted with proper paragraphs)",
  "keyPoints": ["point 1", "point 2", "point 3", "point 4", "point 5"],
  "tags": ["tag1", "tag2", "tag3", "tag4"],
  "chapters": [
    {{"title": "Introduction", "timestamp": "0:00", "summary": "Brief chapter summary"}},
    {{"title": "Main Topic", "timestamp": "2:30", "summary": "Brief chapter summary"}}
  ]{quotes_field}
}}

CRITICAL REQUIREMENTS:
- Timestamps must be realistic and distributed across the actual video duration
- Quotes must be actual text from the provided content, not generated
- Return ONLY the JSON object, no additional text or formatting
- Format the summary with proper paragraph breaks using \n\n
- Make sure all JSON is properly escaped
- Base all analysis on the actual content provided"#
    )
}

fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_CONTENT_CHARS {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(MAX_CONTENT_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SummarizationRequest {
        SummarizationRequest {
            content: "A walkthrough of the build system.".to_string(),
            length: SummaryLength::Medium,
            focus: FocusArea::Technical,
            language: Language::English,
            include_chapters: true,
            extract_quotes: false,
            generate_tags: true,
            video_duration: Some("12:34".to_string()),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request();
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn test_prompt_embeds_duration_and_content() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Video Duration: 12:34"));
        assert!(prompt.contains("A walkthrough of the build system."));
        assert!(prompt.contains("Distribute timestamps evenly"));
    }

    #[test]
    fn test_prompt_marks_unknown_duration() {
        let mut req = request();
        req.video_duration = None;
        assert!(build_prompt(&req).contains("Video Duration: Unknown"));
    }

    #[test]
    fn test_prompt_quotes_block_only_when_requested() {
        let mut req = request();
        let without = build_prompt(&req);
        assert!(!without.contains("\"quotes\""));
        assert!(!without.contains("fictional quotes"));

        req.extract_quotes = true;
        let with = build_prompt(&req);
        assert!(with.contains("\"quotes\": [\"actual quote from content\""));
        assert!(with.contains("Do not create fictional quotes"));
    }

    #[test]
    fn test_prompt_truncates_long_content() {
        let mut req = request();
        req.content = "word ".repeat(4000);
        let prompt = build_prompt(&req);
        assert!(prompt.contains("...[content truncated]"));

        req.content = "short".to_string();
        assert!(!build_prompt(&req).contains("...[content truncated]"));
    }

    #[test]
    fn test_max_output_tokens() {
        assert_eq!(max_output_tokens(SummaryLength::Short), 800);
        assert_eq!(max_output_tokens(SummaryLength::Medium), 1200);
        assert_eq!(max_output_tokens(SummaryLength::Detailed), 1800);
    }
}
