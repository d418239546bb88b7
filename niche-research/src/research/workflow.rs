//! Workflow orchestration for the research agent
//!
//! [`run_research_workflow`] runs the selected workflow, prints the report to
//! the console and, when an output path is configured, writes it to disk.
//!
//! # Examples
//!
//! ```no_run
//! use niche_research::config::Settings;
//! use niche_research::research::{run_research_workflow, ResearchMode, ResearchRequest, WorkflowConfig};
//! use niche_research::workflow_utils::{OpenAiClient, OpenAiConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::from_env()?;
//! let client = OpenAiClient::new(OpenAiConfig::from_env(settings.base_url.clone()))?;
//! let config = WorkflowConfig {
//!     request: ResearchRequest::new("AI for dentists")?,
//!     mode: ResearchMode::Structured,
//!     output: Some("report.json".into()),
//! };
//!
//! run_research_workflow(&config, &settings, &client).await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use niche_research_sdk::{log_file_saved, log_report_saved, log_warning};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::Settings;
use crate::research::analyze::run_business_research;
use crate::research::pipeline::run_staged_research;
use crate::research::render::{render_report, render_staged_report};
use crate::research::types::{ResearchReport, ResearchRequest, StagedReport};
use crate::workflow_utils::CompletionClient;

/// Which research workflow to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResearchMode {
    /// One schema-constrained call
    #[default]
    Structured,
    /// Plan, research each step, summarize
    Staged,
}

/// Configuration for one research run
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Validated user input
    pub request: ResearchRequest,
    pub mode: ResearchMode,
    /// Where to save the report, if anywhere
    pub output: Option<PathBuf>,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchOutput {
    Structured(ResearchReport),
    Staged(StagedReport),
}

/// Optional request fields the staged workflow does not use, as CLI flags
pub fn staged_ignored_flags(request: &ResearchRequest) -> Vec<&'static str> {
    [
        ("--audience", request.audience()),
        ("--geo", request.geography()),
        ("--constraints", request.constraints()),
    ]
    .into_iter()
    .filter_map(|(flag, value)| value.map(|_| flag))
    .collect()
}

/// Write a structured report as pretty-printed JSON
pub async fn save_report(report: &ResearchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    write_output(path, &json).await?;
    log_report_saved!(path.display(), "json");
    Ok(())
}

/// Write the staged report's final text
pub async fn save_staged_report(report: &StagedReport, path: &Path) -> Result<()> {
    write_output(path, &report.final_report).await?;
    log_report_saved!(path.display(), "text");
    Ok(())
}

async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    log_file_saved!(path.display());
    Ok(())
}

/// Run the configured research workflow
///
/// # Errors
///
/// Returns an error if the completion service fails (transport, auth,
/// provider, or schema violation) or the report cannot be written. No partial
/// report is printed or saved on failure.
pub async fn run_research_workflow(
    config: &WorkflowConfig,
    settings: &Settings,
    client: &dyn CompletionClient,
) -> Result<ResearchOutput> {
    tracing::info!(
        niche = %config.request.niche(),
        mode = ?config.mode,
        model = %settings.model,
        "Starting research run"
    );

    match config.mode {
        ResearchMode::Structured => {
            let report = run_business_research(client, settings, &config.request).await?;

            print!("{}", render_report(&report));

            if let Some(path) = &config.output {
                save_report(&report, path).await?;
                println!("\nSaved full JSON report to {}", path.display());
            }

            Ok(ResearchOutput::Structured(report))
        }
        ResearchMode::Staged => {
            let ignored = staged_ignored_flags(&config.request);
            if !ignored.is_empty() {
                log_warning!(
                    "Staged mode researches the niche only; ignoring {}",
                    ignored.join(", ")
                );
            }

            let report = run_staged_research(client, settings, config.request.niche()).await?;

            print!("{}", render_staged_report(&report));

            if let Some(path) = &config.output {
                save_staged_report(&report, path).await?;
                println!("\nSaved report to {}", path.display());
            }

            Ok(ResearchOutput::Staged(report))
        }
    }
}
