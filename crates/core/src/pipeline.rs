use crate::error::Result;
use crate::normalize::{StageSink, normalize_response};
use crate::prompt::{build_prompt, max_output_tokens};
use crate::types::{NormalizedSummary, SummarizationRequest};

/// Boundary to the language model: prompt in, raw text out.
///
/// Failures carry the upstream message verbatim; everything after the raw
/// text is deterministic and handled by [`normalize_response`].
#[async_trait::async_trait]
pub trait PromptSender: Send + Sync {
    async fn send_prompt(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Full request path: compose the prompt, call the model, normalize whatever
/// comes back.
pub async fn summarize<S: PromptSender + ?Sized>(
    sender: &S,
    request: &SummarizationRequest,
    sink: &dyn StageSink,
) -> Result<NormalizedSummary> {
    let prompt = build_prompt(request);
    let raw = sender
        .send_prompt(&prompt, max_output_tokens(request.length))
        .await?;
    normalize_response(&raw, request, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizeError;
    use crate::normalize::NoopSink;
    use crate::types::{FocusArea, Language, SummaryLength};

    struct CannedSender(String);

    #[async_trait::async_trait]
    impl PromptSender for CannedSender {
        async fn send_prompt(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingSender;

    #[async_trait::async_trait]
    impl PromptSender for FailingSender {
        async fn send_prompt(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            Err(SummarizeError::Upstream {
                reason: "rate limited".to_string(),
            })
        }
    }

    fn request() -> SummarizationRequest {
        SummarizationRequest {
            content: "Video description".to_string(),
            length: SummaryLength::Short,
            focus: FocusArea::General,
            language: Language::English,
            include_chapters: true,
            extract_quotes: false,
            generate_tags: true,
            video_duration: Some("10:00".to_string()),
        }
    }

    #[tokio::test]
    async fn test_summarize_normalizes_model_output() {
        let sender = CannedSender("```json\n{\"summary\":\"All about builds.\"}\n```".to_string());
        let summary = summarize(&sender, &request(), &NoopSink).await.unwrap();

        assert_eq!(summary.summary, "All about builds.");
        assert_eq!(summary.chapters.len(), 3);
        assert_eq!(summary.word_count, 3);
    }

    #[tokio::test]
    async fn test_summarize_propagates_upstream_failure() {
        let err = summarize(&FailingSender, &request(), &NoopSink)
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::Upstream { .. }));
    }
}
