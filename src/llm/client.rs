//! LLM client trait

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// A hosted completion capability
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one rendered prompt and wait for the full completion
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
