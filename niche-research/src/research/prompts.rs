//! Prompt text for both research workflows
//!
//! Everything here is a constant or a pure function of its arguments.

use crate::research::types::ResearchRequest;

/// Persona and task framing for the structured report
pub const SYSTEM_PROMPT: &str = "You are the Calm Engineer Business Research Agent.

Your job:
- Take a niche or business idea.
- Analyze the target audience, their pain points, and demand signals.
- Identify at least 5–10 concrete problems worth solving.
- Suggest possible offers / services / products that a solo operator could deliver within 1–2 weeks.
- Focus on practical, no-fluff insights that can be acted on immediately.

Be concise, evidence-oriented, and structured.";

/// Final line of every structured-report user prompt
pub const SCHEMA_INSTRUCTION: &str =
    "Return a structured analysis following the JSON schema I provided.";

/// Build the user prompt for the structured report
///
/// One line per present field in the order niche, audience, geography,
/// constraints, then [`SCHEMA_INSTRUCTION`]. Absent or empty fields produce no
/// line at all.
pub fn build_user_prompt(
    niche: &str,
    audience: Option<&str>,
    geography: Option<&str>,
    constraints: Option<&str>,
) -> String {
    let mut lines = vec![format!("Niche or business idea: {}", niche)];

    let optional = [
        ("Target audience", audience),
        ("Primary geography", geography),
        ("Constraints", constraints),
    ];
    for (label, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            lines.push(format!("{}: {}", label, value));
        }
    }

    lines.push(SCHEMA_INSTRUCTION.to_string());
    lines.join("\n")
}

/// [`build_user_prompt`] for an already validated request
pub fn user_prompt_for(request: &ResearchRequest) -> String {
    build_user_prompt(
        request.niche(),
        request.audience(),
        request.geography(),
        request.constraints(),
    )
}

// ============================================================================
// Staged Workflow Prompts
// ============================================================================

/// Stage 1: ask for a short numbered research plan
pub fn build_plan_prompt(niche: &str) -> String {
    format!(
        r#"You are a research planner for AI & automation consulting.

Given this target niche or business type:
"{niche}"

Break the research into exactly 3-4 clear steps.
Focus on:
1) Market overview
2) Pain points and bottlenecks
3) Current tools and processes
4) Opportunities for AI / automation or data workflows

Return ONLY a numbered list of steps."#
    )
}

/// Stage 2: research one plan step
pub fn build_step_prompt(niche: &str, step: &str) -> String {
    format!(
        r#"You are a research agent helping an AI/automation consultant.

Execute this research step for the niche:
"{niche}"

Step: {step}

Give a concise but detailed answer (10-15 bullet points max),
focusing on specific pains, workflows, and tool usage."#
    )
}

/// Stage 3: turn the collected findings into the final report
pub fn build_summary_prompt(niche: &str, research: &str) -> String {
    format!(
        r#"You are an AI & automation consultant.

Using the research below, create a structured, actionable report.

Niche: {niche}

Research:
{research}

The report MUST be in this structure:

1. Market Overview
- 3-5 bullets

2. Top 5 Pain Points / Bottlenecks
- Bullet list

3. Current Tools & Processes
- Bullet list (what they use now, how they operate)

4. Opportunities for AI / Automation
- 5-7 concrete opportunities
- Focus on what can be automated or improved with LLMs, agents, or data workflows

5. 3 Service Ideas
- Describe 3 specific services you could offer (what, how, outcome)"#
    )
}
