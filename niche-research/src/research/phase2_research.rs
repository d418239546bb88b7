//! Stage 2: Step research
//!
//! Researches each plan step in plan order, one completion at a time. The
//! first failing call aborts the stage and no findings are returned.

use niche_research_sdk::log_info;

use crate::config::Settings;
use crate::research::phase1_plan::staged_request;
use crate::research::prompts::build_step_prompt;
use crate::research::types::{Finding, PlanStep};
use crate::workflow_utils::{
    execute_completion, execute_step, CompletionCall, CompletionClient, CompletionError,
    CompletionResult, StepContext,
};

/// Format one researched step
pub fn format_finding(step: &str, answer: &str) -> Finding {
    format!("STEP: {}\n\n{}\n", step, answer)
}

/// Research every step sequentially
pub async fn research_steps(
    client: &dyn CompletionClient,
    settings: &Settings,
    niche: &str,
    plan: &[PlanStep],
) -> CompletionResult<Vec<Finding>> {
    let mut findings = Vec::with_capacity(plan.len());

    for (i, step) in plan.iter().enumerate() {
        let ctx = StepContext {
            stage: 2,
            step_number: i + 1,
            total_steps: plan.len(),
        };
        let step_id = format!("research_{}", ctx.step_number);

        log_info!("[{}/{}] {}", ctx.step_number, ctx.total_steps, step);

        let finding = execute_step(step_id.clone(), step.clone(), ctx, || async {
            let call = CompletionCall::new(
                step_id.clone(),
                format!("Researcher {}", ctx.step_number),
                step.clone(),
                staged_request(settings, build_step_prompt(niche, step)),
            );
            let answer = execute_completion(client, call).await?;
            let summary = format!("{} chars", answer.len());
            Ok::<_, CompletionError>((format_finding(step, &answer), summary))
        })
        .await?;

        findings.push(finding);
    }

    Ok(findings)
}
