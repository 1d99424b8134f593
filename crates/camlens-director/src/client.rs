//! Messages API client for director insights.

use std::time::Duration;

use async_trait::async_trait;
use camlens_models::{DirectorInsight, ShotAnalysis};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DirectorConfig;
use crate::error::{DirectorError, DirectorResult};
use crate::narrator::NarrativeGenerator;
use crate::prompt::{build_director_prompt, parse_insights};

/// Messages API request.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client generating director insights through the Messages API.
pub struct DirectorClient {
    http: Client,
    config: DirectorConfig,
    api_key: String,
}

impl DirectorClient {
    /// Create a new client. Fails when no API key is configured.
    pub fn new(config: DirectorConfig) -> DirectorResult<Self> {
        let api_key = config.api_key.clone().ok_or(DirectorError::MissingApiKey)?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(DirectorError::Network)?;

        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    /// Send a prompt and return the concatenated text of the reply.
    pub async fn complete(&self, prompt: &str) -> DirectorResult<String> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending director request to {} (model {})", url, self.config.model);

        let response = self
            .with_retry(|| async {
                let response = self
                    .http
                    .post(&url)
                    .header("x-api-key", &self.api_key)
                    .header("anthropic-version", &self.config.api_version)
                    .json(&request)
                    .send()
                    .await
                    .map_err(|e| {
                        if e.is_timeout() {
                            DirectorError::Timeout(self.config.request_timeout.as_secs())
                        } else {
                            DirectorError::Network(e)
                        }
                    })?;
                check_status(response).await
            })
            .await?;

        let body: MessagesResponse = response.json().await?;
        let text: String = body
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(DirectorError::invalid_response(
                "no text content in director response",
            ));
        }
        Ok(text)
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> DirectorResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = DirectorResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Director request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| DirectorError::RequestFailed("Unknown error".to_string())))
    }
}

/// Map non-success statuses onto errors, keeping the body for context.
async fn check_status(response: reqwest::Response) -> DirectorResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = format!("Director service returned {}: {}", status, body);
    Err(match status {
        StatusCode::TOO_MANY_REQUESTS => DirectorError::RateLimited(message),
        s if s.is_server_error() => DirectorError::ServiceUnavailable(message),
        _ => DirectorError::RequestFailed(message),
    })
}

#[async_trait]
impl NarrativeGenerator for DirectorClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate(&self, shots: &[ShotAnalysis]) -> DirectorResult<Vec<DirectorInsight>> {
        let prompt = build_director_prompt(shots);
        let text = self.complete(&prompt).await?;
        parse_insights(&text, shots.len())
    }
}
