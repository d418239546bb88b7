//! Research workflow module
//!
//! Two workflows turn a niche into a report:
//! - **Structured** ([`analyze`]): one schema-constrained completion returning a
//!   [`ResearchReport`].
//! - **Staged** ([`pipeline`]): plan, research each step, then summarize into
//!   free text.

pub mod analyze;
pub mod cli;
pub mod phase1_plan;
pub mod phase2_research;
pub mod phase3_summarize;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod schema;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use analyze::run_business_research;
pub use pipeline::{run_staged_research, Stage};
pub use prompts::{build_user_prompt, SYSTEM_PROMPT};
pub use schema::business_research_schema;
pub use types::{
    Finding, OfferIdea, PlanStep, ProblemInsight, RequestError, ResearchReport, ResearchRequest,
    StagedReport,
};
pub use workflow::{
    run_research_workflow, staged_ignored_flags, ResearchMode, ResearchOutput, WorkflowConfig,
};
