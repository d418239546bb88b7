//! Completion calls with event logging and structured output parsing

use async_trait::async_trait;
use niche_research_sdk::{log_call_complete, log_call_failed, log_call_start};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while talking to the completion service
///
/// None of these are retried; every variant ends the current run.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The service could not be reached or the response body could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credential missing or rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The service answered with an error (rate limit, server error, refusal)
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The response envelope was not in the expected shape
    #[error("malformed completion response: {0}")]
    Decode(String),

    /// The payload does not match the declared structured output
    #[error("response does not match the declared schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

pub type CompletionResult<T> = Result<T, CompletionError>;

/// Named structured-output contract passed to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

/// A single prompt sent to the completion service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system message sent before the user prompt
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    /// When set, the provider is asked for output conforming to this schema
    pub response_schema: Option<ResponseSchema>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The completion capability: prompt in, text out
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion and return the raw message content
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String>;
}

/// One logged completion call
pub struct CompletionCall {
    /// Step this call belongs to
    pub step_id: String,
    /// Who is calling (for logging)
    pub caller: String,
    /// What the call is for
    pub description: String,
    pub request: CompletionRequest,
}

impl CompletionCall {
    pub fn new(
        step_id: impl Into<String>,
        caller: impl Into<String>,
        description: impl Into<String>,
        request: CompletionRequest,
    ) -> Self {
        Self {
            step_id: step_id.into(),
            caller: caller.into(),
            description: description.into(),
            request,
        }
    }
}

/// Execute a completion call with start/complete/failed events
///
/// Errors are returned exactly as the client produced them.
pub async fn execute_completion(
    client: &dyn CompletionClient,
    call: CompletionCall,
) -> CompletionResult<String> {
    log_call_start!(&call.step_id, &call.caller, &call.description);

    tracing::debug!(
        step_id = %call.step_id,
        model = %call.request.model,
        prompt_chars = call.request.user_prompt.len(),
        structured = call.request.response_schema.is_some(),
        "Issuing completion"
    );

    match client.complete(&call.request).await {
        Ok(text) => {
            log_call_complete!(&call.step_id, &call.caller, text.len());
            Ok(text)
        }
        Err(e) => {
            log_call_failed!(&call.step_id, &call.caller, e);
            Err(e)
        }
    }
}

/// Parse a schema-constrained payload into its typed form
pub fn parse_structured<T: DeserializeOwned>(payload: &str) -> CompletionResult<T> {
    serde_json::from_str(payload).map_err(CompletionError::SchemaViolation)
}
