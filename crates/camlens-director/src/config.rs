//! Narrative generation configuration.

use std::time::Duration;

/// Default Messages API endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
/// Messages API version header value.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Configuration for the director client.
#[derive(Debug, Clone)]
pub struct DirectorConfig {
    /// API key; generation is disabled when absent
    pub api_key: Option<String>,
    /// Base URL of the Messages API
    pub base_url: String,
    /// Value sent in the `anthropic-version` header
    pub api_version: String,
    /// Model name
    pub model: String,
    /// Output token limit per request
    pub max_tokens: u32,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Overall budget for producing insights, retries included
    pub generation_timeout: Duration,
    /// Max retries on retryable failures
    pub max_retries: u32,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4096,
            request_timeout: Duration::from_secs(60),
            generation_timeout: Duration::from_secs(90),
            max_retries: 2,
        }
    }
}

impl DirectorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("CAMLENS_DIRECTOR_BASE_URL").unwrap_or(defaults.base_url),
            api_version: std::env::var("CAMLENS_DIRECTOR_API_VERSION")
                .unwrap_or(defaults.api_version),
            model: std::env::var("CAMLENS_DIRECTOR_MODEL").unwrap_or(defaults.model),
            max_tokens: std::env::var("CAMLENS_DIRECTOR_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_tokens),
            request_timeout: Duration::from_secs(
                std::env::var("CAMLENS_DIRECTOR_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            generation_timeout: Duration::from_secs(
                std::env::var("CAMLENS_DIRECTOR_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(90),
            ),
            max_retries: std::env::var("CAMLENS_DIRECTOR_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_retries),
        }
    }

    /// Whether an API key is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
