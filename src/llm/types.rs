//! Request and response types for completion calls

use secrecy::SecretString;

/// A single-prompt completion request.
///
/// The credential travels with the request; clients never hold on to it.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g. `gpt-4o-mini`)
    pub model: String,
    /// Fully rendered prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    pub api_key: SecretString,
}

/// Completion result
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content, if the model returned any
    pub content: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: TokenUsage,
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}
