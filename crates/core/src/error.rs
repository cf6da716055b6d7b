use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("Model request failed: {reason}")]
    Upstream { reason: String },

    #[error("Video metadata request failed: {reason}")]
    MetadataFailed { reason: String },

    #[error("Video does not have sufficient description content for summarization")]
    InsufficientContent,

    #[error("Model produced no usable summary text")]
    EmptyContent,

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
