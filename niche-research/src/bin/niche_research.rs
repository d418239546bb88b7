/*
┌─────────────────────────────────────────────────────────────────────────────┐
│                        NICHE RESEARCH AGENT                                  │
└─────────────────────────────────────────────────────────────────────────────┘

  --mode report (default)
    │
    ├─> Build user prompt (niche, audience, geography, constraints)
    ├─> One completion with the business_research_report JSON schema
    ├─> Parse into the closed ResearchReport shape
    └─> Print summary; --out writes pretty JSON

  --mode staged
    │
    ├─> Stage 1: PLAN       one call, numbered list → plan steps
    ├─> Stage 2: RESEARCH   one call per step, in order
    ├─> Stage 3: SUMMARIZE  one call over all findings
    └─> Print final report; --out writes the report text

ENVIRONMENT:
  OPENAI_API_KEY     required
  OPENAI_MODEL       default gpt-4.1-mini
  MAX_OUTPUT_TOKENS  default 2000
  OPENAI_BASE_URL    default https://api.openai.com/v1
  RUST_LOG           e.g. niche_research::events=info to see workflow events

EXAMPLE COMMANDS:

  niche-research "AI for dentists" \
    --audience "solo dentists in North America" \
    --geo US \
    --out reports/dentists.json

  niche-research "local real estate agent in Toronto" --mode staged
*/

use clap::Parser;
use niche_research::config::Settings;
use niche_research::research::{cli::Args, run_research_workflow, WorkflowConfig};
use niche_research::workflow_utils::{OpenAiClient, OpenAiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Reject bad input before touching configuration or the network
    let config = WorkflowConfig::try_from(args)?;

    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env()?;
    let client = OpenAiClient::new(OpenAiConfig::from_env(settings.base_url.clone()))?;

    run_research_workflow(&config, &settings, &client).await?;
    Ok(())
}
