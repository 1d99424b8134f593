//! Narrative generation error types.

use thiserror::Error;

pub type DirectorResult<T> = Result<T, DirectorError>;

#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("Missing API key: set ANTHROPIC_API_KEY to enable director insights")]
    MissingApiKey,

    #[error("Generation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl DirectorError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DirectorError::ServiceUnavailable(_)
                | DirectorError::RateLimited(_)
                | DirectorError::Timeout(_)
                | DirectorError::Network(_)
        )
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DirectorError::MissingApiKey => "missing_api_key",
            DirectorError::ServiceUnavailable(_) => "service_unavailable",
            DirectorError::RateLimited(_) => "rate_limited",
            DirectorError::RequestFailed(_) => "request_failed",
            DirectorError::InvalidResponse(_) => "invalid_response",
            DirectorError::Timeout(_) => "timeout",
            DirectorError::Network(_) => "network",
        }
    }
}
