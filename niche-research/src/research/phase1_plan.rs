//! Stage 1: Research planning
//!
//! Asks the model for a short numbered plan and splits the answer into
//! [`PlanStep`]s, one per non-blank line.

use niche_research_sdk::{log_info, log_warning};

use crate::config::Settings;
use crate::research::prompts::build_plan_prompt;
use crate::research::types::PlanStep;
use crate::workflow_utils::{
    execute_completion, CompletionCall, CompletionClient, CompletionRequest, CompletionResult,
};

/// Sampling temperature for every staged call
pub const STAGED_TEMPERATURE: f32 = 0.0;

/// Free-text request shared by all three stages
pub(crate) fn staged_request(settings: &Settings, prompt: String) -> CompletionRequest {
    CompletionRequest {
        system_prompt: None,
        user_prompt: prompt,
        response_schema: None,
        model: settings.model.clone(),
        max_tokens: settings.max_output_tokens,
        temperature: STAGED_TEMPERATURE,
    }
}

/// Split planner output into steps
///
/// Each line is trimmed and blank lines are dropped. List markers such as
/// `1.` are kept as part of the step text.
pub fn parse_plan(text: &str) -> Vec<PlanStep> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Generate the research plan for a niche
pub async fn plan_research(
    client: &dyn CompletionClient,
    settings: &Settings,
    niche: &str,
) -> CompletionResult<Vec<PlanStep>> {
    let call = CompletionCall::new(
        "plan",
        "Planner",
        "Breaking the research into steps",
        staged_request(settings, build_plan_prompt(niche)),
    );

    let text = execute_completion(client, call).await?;
    let plan = parse_plan(&text);

    if plan.is_empty() {
        log_warning!("Planner returned no steps; summarizing without findings");
    } else {
        log_info!("Planned {} research steps", plan.len());
        for step in &plan {
            println!("  {}", step);
        }
    }

    Ok(plan)
}
