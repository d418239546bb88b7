//! Single-call structured research
//!
//! Builds the user prompt, asks the model for a report conforming to
//! [`business_research_schema`], and parses the answer. One completion call,
//! no retries, no partial results.

use niche_research_sdk::{log_stage_complete, log_stage_failed, log_stage_start};

use crate::config::Settings;
use crate::research::prompts::{user_prompt_for, SYSTEM_PROMPT};
use crate::research::schema::business_research_schema;
use crate::research::types::{ResearchReport, ResearchRequest};
use crate::workflow_utils::{
    execute_completion, parse_structured, CompletionCall, CompletionClient, CompletionRequest,
    CompletionResult,
};

/// Sampling temperature for the structured report
pub const REPORT_TEMPERATURE: f32 = 0.3;

const STAGE_NAME: &str = "Structured Report";

/// Build the completion request for a structured report
pub fn report_request(settings: &Settings, request: &ResearchRequest) -> CompletionRequest {
    CompletionRequest {
        system_prompt: Some(SYSTEM_PROMPT.to_string()),
        user_prompt: user_prompt_for(request),
        response_schema: Some(business_research_schema()),
        model: settings.model.clone(),
        max_tokens: settings.max_output_tokens,
        temperature: REPORT_TEMPERATURE,
    }
}

/// Run the structured research workflow
///
/// Errors from the client come back unchanged; a payload that does not fit
/// [`ResearchReport`] is a [`SchemaViolation`].
///
/// [`SchemaViolation`]: crate::workflow_utils::CompletionError::SchemaViolation
pub async fn run_business_research(
    client: &dyn CompletionClient,
    settings: &Settings,
    request: &ResearchRequest,
) -> CompletionResult<ResearchReport> {
    log_stage_start!(1, STAGE_NAME, 1);

    let call = CompletionCall::new(
        "report",
        "Business Research Agent",
        format!("Researching niche: {}", request.niche()),
        report_request(settings, request),
    );

    let result = execute_completion(client, call)
        .await
        .and_then(|payload| parse_structured::<ResearchReport>(&payload));

    match &result {
        Ok(report) => {
            tracing::info!(
                problems = report.top_problems.len(),
                offers = report.offer_ideas.len(),
                "Structured report received"
            );
            log_stage_complete!(1, STAGE_NAME);
        }
        Err(e) => {
            log_stage_failed!(1, STAGE_NAME, e);
        }
    }

    result
}
