//! CLI argument parsing for the research workflow

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::research::types::{RequestError, ResearchRequest};
use crate::research::workflow::{ResearchMode, WorkflowConfig};

/// Niche Research Agent CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "niche-research",
    version,
    about = "Calm Engineer business research agent: turns a niche into a research report"
)]
pub struct Args {
    /// Niche or business idea, e.g. 'AI for dentists'
    pub niche: String,

    /// Target audience, e.g. 'solo dentists in North America'
    #[arg(long)]
    pub audience: Option<String>,

    /// Primary geography, e.g. 'US', 'Canada', or 'Global'
    #[arg(long = "geo")]
    pub geography: Option<String>,

    /// Constraints like budget/time/skills
    #[arg(long)]
    pub constraints: Option<String>,

    /// Path to save the report (JSON for `report`, text for `staged`)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Which workflow to run
    #[arg(long, value_enum, default_value_t = ModeArg::Report)]
    pub mode: ModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Single call returning a schema-validated JSON report
    Report,
    /// Plan, research each step, then summarize (free text)
    Staged,
}

impl From<ModeArg> for ResearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Report => ResearchMode::Structured,
            ModeArg::Staged => ResearchMode::Staged,
        }
    }
}

impl TryFrom<Args> for WorkflowConfig {
    type Error = RequestError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let request = ResearchRequest::new(args.niche)?
            .with_audience(args.audience)
            .with_geography(args.geography)
            .with_constraints(args.constraints);

        Ok(WorkflowConfig {
            request,
            mode: args.mode.into(),
            output: args.out,
        })
    }
}
