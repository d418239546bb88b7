//! Staged research: plan → research → summarize
//!
//! The pipeline is a linear state machine. Each [`Stage`] has exactly one
//! successor and [`Stage::advance`] performs the single completion work needed
//! to reach it. Any error ends the run; nothing is retried.
//!
//! ```text
//!   Planning ──► Researching{plan} ──► Summarizing{plan, findings} ──► Done(report)
//! ```

use niche_research_sdk::{log_stage_complete, log_stage_failed, log_stage_start};

use crate::config::Settings;
use crate::research::phase1_plan::plan_research;
use crate::research::phase2_research::research_steps;
use crate::research::phase3_summarize::summarize_findings;
use crate::research::types::{Finding, PlanStep, StagedReport};
use crate::workflow_utils::{CompletionClient, CompletionResult};

const TOTAL_STAGES: usize = 3;

/// Current position in the staged pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Planning,
    Researching {
        plan: Vec<PlanStep>,
    },
    Summarizing {
        plan: Vec<PlanStep>,
        findings: Vec<Finding>,
    },
    Done(StagedReport),
}

impl Stage {
    /// Stage number used in events (Done has none)
    pub fn number(&self) -> Option<usize> {
        match self {
            Stage::Planning => Some(1),
            Stage::Researching { .. } => Some(2),
            Stage::Summarizing { .. } => Some(3),
            Stage::Done(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Planning => "Plan Research",
            Stage::Researching { .. } => "Research Steps",
            Stage::Summarizing { .. } => "Summarize Findings",
            Stage::Done(_) => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Stage::Done(_))
    }

    /// Perform this stage's work and return the next stage
    ///
    /// `Done` advances to itself without any call.
    pub async fn advance(
        self,
        client: &dyn CompletionClient,
        settings: &Settings,
        niche: &str,
    ) -> CompletionResult<Stage> {
        let Some(number) = self.number() else {
            return Ok(self);
        };
        let name = self.name();

        log_stage_start!(number, name, TOTAL_STAGES);
        print_banner(number, name);

        let next = self.run(client, settings, niche).await;

        match &next {
            Ok(_) => {
                log_stage_complete!(number, name);
            }
            Err(e) => {
                log_stage_failed!(number, name, e);
            }
        }

        next
    }

    async fn run(
        self,
        client: &dyn CompletionClient,
        settings: &Settings,
        niche: &str,
    ) -> CompletionResult<Stage> {
        match self {
            Stage::Planning => {
                let plan = plan_research(client, settings, niche).await?;
                Ok(Stage::Researching { plan })
            }
            Stage::Researching { plan } => {
                let findings = research_steps(client, settings, niche, &plan).await?;
                Ok(Stage::Summarizing { plan, findings })
            }
            Stage::Summarizing { plan, findings } => {
                let final_report = summarize_findings(client, settings, niche, &findings).await?;
                Ok(Stage::Done(StagedReport {
                    niche: niche.to_string(),
                    plan,
                    findings,
                    final_report,
                }))
            }
            Stage::Done(report) => Ok(Stage::Done(report)),
        }
    }
}

fn print_banner(number: usize, name: &str) {
    println!("\n{}", "=".repeat(80));
    println!("STAGE {}/{}: {}", number, TOTAL_STAGES, name);
    println!("{}", "=".repeat(80));
}

/// Run all stages to completion
pub async fn run_staged_research(
    client: &dyn CompletionClient,
    settings: &Settings,
    niche: &str,
) -> CompletionResult<StagedReport> {
    let mut stage = Stage::Planning;
    loop {
        stage = match stage {
            Stage::Done(report) => return Ok(report),
            other => other.advance(client, settings, niche).await?,
        };
    }
}
