//! Stage 3: Report synthesis
//!
//! Joins all findings and asks the model for the final five-section report.

use crate::config::Settings;
use crate::research::phase1_plan::staged_request;
use crate::research::prompts::build_summary_prompt;
use crate::research::types::Finding;
use crate::workflow_utils::{execute_completion, CompletionCall, CompletionClient, CompletionResult};

/// Findings separated by a blank line
pub fn join_findings(findings: &[Finding]) -> String {
    findings.join("\n\n")
}

/// Produce the final report text
pub async fn summarize_findings(
    client: &dyn CompletionClient,
    settings: &Settings,
    niche: &str,
    findings: &[Finding],
) -> CompletionResult<String> {
    let research = join_findings(findings);

    let call = CompletionCall::new(
        "summarize",
        "Summarizer",
        format!("Summarizing {} findings", findings.len()),
        staged_request(settings, build_summary_prompt(niche, &research)),
    );

    execute_completion(client, call).await
}
