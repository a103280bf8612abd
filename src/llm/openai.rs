//! OpenAI Chat Completions client
//!
//! The rendered prompt is sent as a single user message.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, TokenUsage};
use crate::config::LlmConfig;

/// Retry-After fallback when a 429 carries no header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// OpenAI API client
pub struct OpenAiClient {
    base_url: String,
    http: Client,
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(base_url = %config.base_url, "from_config: called");
        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn build_request_body(request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "model": request.model,
            "temperature": request.temperature,
            "messages": [
                { "role": "user", "content": request.prompt },
            ],
        })
    }

    fn parse_response(api_response: OpenAiResponse) -> Result<CompletionResponse, LlmError> {
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content,
            finish_reason: choice.finish_reason,
            usage,
        })
    }

    /// Pull the human readable message out of an error body, if it has one
    fn error_message(body: &str) -> String {
        serde_json::from_str::<OpenAiErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(model = %request.model, temperature = request.temperature, prompt_len = request.prompt.len(), "complete: called");
        let url = format!("{}/chat/completions", self.base_url);
        let body = Self::build_request_body(&request);
        let start_time = Instant::now();

        let response = self
            .http
            .post(&url)
            .bearer_auth(request.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            warn!(retry_after, "complete: rate limited");
            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = Self::error_message(&text);
            warn!(status = status.as_u16(), %message, "complete: API error");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let api_response: OpenAiResponse = serde_json::from_str(&text)?;
        let completion = Self::parse_response(api_response)?;

        info!(
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "Completion received in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(completion)
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}
