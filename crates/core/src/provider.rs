use serde_json::Value;

use crate::error::{Result, SummarizeError};
use crate::pipeline::PromptSender;

#[derive(Clone, Debug, Default)]
pub enum Provider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-3-pro",
                env_var: "GEMINI_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-5.1",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Openai => "OpenAI",
            Provider::Grok => "Grok",
        }
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String> {
        let config = self.config();
        std::env::var(config.env_var).map_err(|_| SummarizeError::MissingApiKey {
            env_var: config.env_var.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl PromptSender for Provider {
    async fn send_prompt(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let config = self.config();
        let api_key = self.validate_api_key()?;
        send_chat_request(config.api_url, &api_key, config.model, prompt, max_tokens).await
    }
}

async fn send_chat_request(
    api_url: &str,
    api_key: &str,
    model: &str,
    prompt: &str,
    max_tokens: u32,
) -> Result<String> {
    let response = reqwest::Client::new()
        .post(api_url)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&serde_json::json!({
            "model": model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                },
            ],
            "temperature": 0.3,
            "max_tokens": max_tokens,
        }))
        .send()
        .await?
        .json::<Value>()
        .await?;

    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| SummarizeError::Upstream {
            reason: format!("Invalid API response structure: {:?}", response),
        })?;

    if content.trim().is_empty() {
        return Err(SummarizeError::Upstream {
            reason: "Model returned an empty response".to_string(),
        });
    }

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_chat_request_extracts_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"{\"summary\":\"ok\"}"}}]}"#)
            .create_async()
            .await;

        let url = format!("{}/chat", server.url());
        let content = send_chat_request(&url, "test-key", "test-model", "prompt", 800)
            .await
            .unwrap();

        assert_eq!(content, r#"{"summary":"ok"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_chat_request_rejects_bad_envelope() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"quota exceeded"}}"#)
            .create_async()
            .await;

        let url = format!("{}/chat", server.url());
        let err = send_chat_request(&url, "k", "m", "p", 800).await.unwrap_err();
        assert!(matches!(err, SummarizeError::Upstream { .. }));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_send_chat_request_rejects_empty_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"   "}}]}"#)
            .create_async()
            .await;

        let url = format!("{}/chat", server.url());
        let err = send_chat_request(&url, "k", "m", "p", 800).await.unwrap_err();
        assert!(matches!(err, SummarizeError::Upstream { .. }));
    }
}
