//! Tests for prompt building

use niche_research::research::prompts::{
    build_plan_prompt, build_step_prompt, build_summary_prompt, build_user_prompt,
    user_prompt_for, SCHEMA_INSTRUCTION, SYSTEM_PROMPT,
};
use niche_research::research::ResearchRequest;

#[test]
fn test_user_prompt_niche_only() {
    let prompt = build_user_prompt("AI for dentists", None, None, None);
    let lines: Vec<&str> = prompt.lines().collect();

    assert_eq!(
        lines,
        vec!["Niche or business idea: AI for dentists", SCHEMA_INSTRUCTION]
    );
    assert!(!prompt.contains("Target audience"));
    assert!(!prompt.contains("Primary geography"));
    assert!(!prompt.contains("Constraints"));
}

#[test]
fn test_user_prompt_all_fields_in_order() {
    let prompt = build_user_prompt(
        "AI for dentists",
        Some("solo dentists in North America"),
        Some("US"),
        Some("$500 budget"),
    );
    let lines: Vec<&str> = prompt.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Niche or business idea: AI for dentists");
    assert_eq!(lines[1], "Target audience: solo dentists in North America");
    assert_eq!(lines[2], "Primary geography: US");
    assert_eq!(lines[3], "Constraints: $500 budget");
    assert_eq!(lines[4], SCHEMA_INSTRUCTION);
}

#[test]
fn test_user_prompt_partial_fields_keep_order() {
    let prompt = build_user_prompt("bakeries", None, Some("Canada"), Some("weekends only"));
    let lines: Vec<&str> = prompt.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Niche or business idea: bakeries",
            "Primary geography: Canada",
            "Constraints: weekends only",
            SCHEMA_INSTRUCTION,
        ]
    );
}

#[test]
fn test_user_prompt_is_pure() {
    let a = build_user_prompt("gyms", Some("owners"), Some("Global"), None);
    let b = build_user_prompt("gyms", Some("owners"), Some("Global"), None);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_user_prompt_for_request_skips_blank_fields() {
    let request = ResearchRequest::new("gyms")
        .unwrap()
        .with_audience(Some("   ".to_string()))
        .with_geography(Some("UK".to_string()));

    assert_eq!(
        user_prompt_for(&request),
        format!(
            "Niche or business idea: gyms\nPrimary geography: UK\n{}",
            SCHEMA_INSTRUCTION
        )
    );
}

#[test]
fn test_system_prompt_is_static_framing() {
    assert!(SYSTEM_PROMPT.starts_with("You are the Calm Engineer Business Research Agent."));
    assert!(SYSTEM_PROMPT.contains("target audience"));
    assert!(SYSTEM_PROMPT.contains("solo operator"));
}

#[test]
fn test_staged_prompts_include_inputs() {
    let plan = build_plan_prompt("dentists");
    assert!(plan.contains("\"dentists\""));
    assert!(plan.contains("Return ONLY a numbered list of steps."));

    let step = build_step_prompt("dentists", "2. Pain points");
    assert!(step.contains("\"dentists\""));
    assert!(step.contains("Step: 2. Pain points"));

    let summary = build_summary_prompt("dentists", "STEP: a\n\nanswer\n");
    assert!(summary.contains("Niche: dentists"));
    assert!(summary.contains("STEP: a\n\nanswer\n"));
    for section in [
        "1. Market Overview",
        "2. Top 5 Pain Points",
        "3. Current Tools & Processes",
        "4. Opportunities for AI / Automation",
        "5. 3 Service Ideas",
    ] {
        assert!(summary.contains(section), "missing section: {}", section);
    }
}
