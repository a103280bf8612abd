//! Report synthesis
//!
//! Render the prompt, make one completion call, hand back the raw text.

use crate::config::LlmConfig;
use crate::llm::{CompletionRequest, LlmClient};
use crate::models::{TripReport, TripRequest};
use crate::prompt::{PromptParams, PromptRenderer};
use crate::{Result, ViajeroError};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Writes the trip report with a hosted language model
pub struct ReportSynthesizer {
    llm: Arc<dyn LlmClient>,
    prompts: PromptRenderer,
    model: String,
    temperature: f32,
}

impl ReportSynthesizer {
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>, temperature: f32) -> Result<Self> {
        Ok(Self {
            llm,
            prompts: PromptRenderer::new()?,
            model: model.into(),
            temperature,
        })
    }

    pub fn from_config(llm: Arc<dyn LlmClient>, config: &LlmConfig) -> Result<Self> {
        Self::new(llm, config.model.clone(), config.temperature)
    }

    /// Produce the report for a request and its evidence text.
    ///
    /// The evidence may be the failure line from the search step; the prompt
    /// tells the model to estimate in that case.
    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn synthesize(
        &self,
        request: &TripRequest,
        evidence: &str,
        credential: &SecretString,
    ) -> Result<TripReport> {
        let prompt = self.prompts.render(&PromptParams::new(request, evidence))?;

        let completion = self
            .llm
            .complete(CompletionRequest {
                model: self.model.clone(),
                prompt,
                temperature: self.temperature,
                api_key: credential.clone(),
            })
            .await
            .map_err(|e| {
                warn!("Completion failed: {}", e);
                let hint = if e.is_auth_failure() {
                    " (revisa tu API Key)".to_string()
                } else if let Some(wait) = e.retry_after() {
                    format!(" (vuelve a intentarlo en {} s)", wait.as_secs())
                } else {
                    String::new()
                };
                ViajeroError::synthesis(format!("{e}{hint}"))
            })?;

        info!(
            total_tokens = completion.usage.total(),
            finish_reason = completion.finish_reason.as_deref().unwrap_or("unknown"),
            "Report synthesized"
        );

        match completion.content {
            Some(text) if !text.trim().is_empty() => Ok(TripReport::new(text)),
            _ => Err(ViajeroError::synthesis(
                "el modelo devolvió una respuesta vacía",
            )),
        }
    }
}
