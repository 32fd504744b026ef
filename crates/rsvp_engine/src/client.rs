use std::time::Duration;

use reqwest::StatusCode;
use rsvp_logging::{rsvp_debug, rsvp_warn};

use crate::types::{CompletionError, CompletionErrorKind, CompletionParams};
use crate::wire::{CompletionRequest, CompletionResponse};

/// Fixed production endpoint for chat completions.
pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Retry schedule for completion calls: `max_retries` additional attempts
/// after the first, delays doubling from `initial_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate_completion(
        &self,
        params: CompletionParams,
    ) -> Result<String, CompletionError>;
}

/// HTTP client for the OpenRouter chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    retry: RetryPolicy,
}

impl OpenRouterClient {
    /// Creates a client against the production endpoint. Fails with
    /// [`CompletionErrorKind::Unauthorized`] before any network activity
    /// when the key is empty or whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        Self::with_endpoint(api_key, OPENROUTER_ENDPOINT, RetryPolicy::default())
    }

    /// Creates a client against an explicit endpoint with an explicit retry
    /// schedule.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        retry: RetryPolicy,
    ) -> Result<Self, CompletionError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CompletionError::new(
                CompletionErrorKind::Unauthorized,
                "API key is required",
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: endpoint.into(),
            retry,
        })
    }

    async fn call_once(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| CompletionError::new(CompletionErrorKind::Transport, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            rsvp_warn!("completion API error {}: {}", status, body);
            return Err(map_status(status, body));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|err| {
            CompletionError::new(CompletionErrorKind::MalformedResponse, err.to_string())
        })?;

        let message = parsed
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .ok_or_else(|| {
                CompletionError::new(
                    CompletionErrorKind::MalformedResponse,
                    "response is missing choices[0].message",
                )
            })?;

        Ok(message.content.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenRouterClient {
    async fn generate_completion(
        &self,
        params: CompletionParams,
    ) -> Result<String, CompletionError> {
        let request = CompletionRequest::from_params(params);

        let mut attempt = 0;
        loop {
            match self.call_once(&request).await {
                Ok(content) => return Ok(content),
                Err(err) if !err.kind.is_retryable() => return Err(err),
                Err(err) if attempt >= self.retry.max_retries => return Err(err),
                Err(err) => {
                    let delay = self.retry.initial_delay * 2u32.saturating_pow(attempt);
                    rsvp_debug!(
                        "completion attempt {} failed ({}), retrying in {:?}",
                        attempt + 1,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

fn map_status(status: StatusCode, body: String) -> CompletionError {
    match status.as_u16() {
        401 => CompletionError::new(CompletionErrorKind::Unauthorized, "invalid API key"),
        402 => CompletionError::new(
            CompletionErrorKind::QuotaExceeded,
            "OpenRouter credits exhausted",
        ),
        429 => CompletionError::new(CompletionErrorKind::RateLimited, "rate limit exceeded"),
        500 => CompletionError::new(
            CompletionErrorKind::ServerError,
            "OpenRouter server error",
        ),
        code => {
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            CompletionError::new(CompletionErrorKind::HttpStatus(code), message)
        }
    }
}
