//! Step execution utilities with automatic logging

use niche_research_sdk::{log_step_complete, log_step_failed, log_step_start};
use std::fmt::Display;
use std::future::Future;

/// Position of a step within its stage
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    /// Stage number
    pub stage: usize,
    /// Step number within the stage (1-based)
    pub step_number: usize,
    /// Total steps in the stage
    pub total_steps: usize,
}

/// Execute a single step with automatic logging
///
/// Wraps step execution with:
/// - `log_step_start` before execution
/// - `log_step_complete` on success
/// - `log_step_failed` on error
///
/// The executor returns `(result, summary_message)`; the summary goes into the
/// completion event.
///
/// # Example
/// ```ignore
/// let finding = execute_step("research_1", "Market overview", ctx, || async {
///     let answer = research(step).await?;
///     Ok((answer, "Step researched".to_string()))
/// })
/// .await?;
/// ```
pub async fn execute_step<F, Fut, R, E>(
    step_id: impl Into<String>,
    description: impl Into<String>,
    ctx: StepContext,
    executor: F,
) -> Result<R, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(R, String), E>>,
    E: Display,
{
    let step_id = step_id.into();
    let description = description.into();

    log_step_start!(ctx.stage, &step_id, &description, ctx.total_steps);

    match executor().await {
        Ok((result, summary)) => {
            log_step_complete!(&step_id, summary);
            Ok(result)
        }
        Err(e) => {
            log_step_failed!(&step_id, e);
            Err(e)
        }
    }
}
