//! Tailoring Model — the seam between the handler and the remote model.
//!
//! `AppState` holds an `Arc<dyn TailoringModel>`. Production uses
//! `LlmClient`; tests swap in fakes without touching the handler.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::tailoring::prompts::tailor_system_prompt;
use crate::tailoring::request::TailoringPrompt;

/// Structured answer of the tailoring model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoringResult {
    pub tailored_resume: String,
}

#[async_trait]
pub trait TailoringModel: Send + Sync {
    async fn tailor(&self, prompt: &str) -> Result<TailoringResult, LlmError>;
}

#[async_trait]
impl TailoringModel for LlmClient {
    async fn tailor(&self, prompt: &str) -> Result<TailoringResult, LlmError> {
        self.call_json::<TailoringResult>(prompt, &tailor_system_prompt())
            .await
    }
}

/// What the analysis step produced. Both variants are answered with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailoringOutcome {
    Success(TailoringResult),
    /// The model call failed; extraction itself succeeded.
    Degraded { reason: String },
}

impl TailoringOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, TailoringOutcome::Degraded { .. })
    }

    /// Text returned to the client as `analysis`.
    pub fn into_analysis(self) -> String {
        match self {
            TailoringOutcome::Success(result) => result.tailored_resume,
            TailoringOutcome::Degraded { reason } => format!(
                "Agent analysis failed: {reason}. Document was successfully extracted but analysis is unavailable."
            ),
        }
    }
}

/// Runs the model on `prompt`, converting any model failure into `Degraded`.
pub async fn run_tailoring(model: &dyn TailoringModel, prompt: &TailoringPrompt) -> TailoringOutcome {
    match model.tailor(&prompt.render()).await {
        Ok(result) => TailoringOutcome::Success(result),
        Err(e) => {
            warn!("Tailoring model failed, returning degraded analysis: {e}");
            TailoringOutcome::Degraded {
                reason: e.to_string(),
            }
        }
    }
}
