//! Tests for the staged plan → research → summarize workflow

use niche_research::research::phase1_plan::{plan_research, STAGED_TEMPERATURE};
use niche_research::research::prompts::{build_plan_prompt, build_step_prompt};
use niche_research::research::{run_staged_research, Stage};
use niche_research::workflow_utils::CompletionError;

use super::common::{test_settings, StubClient};

#[tokio::test]
async fn test_full_pipeline_happy_path() {
    let client = StubClient::with_texts(&[
        "1. Step A\n\n2. Step B",
        "answer A",
        "answer B",
        "FINAL REPORT",
    ]);

    let report = run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap();

    assert_eq!(report.niche, "dentists");
    assert_eq!(report.plan, vec!["1. Step A".to_string(), "2. Step B".to_string()]);
    assert_eq!(
        report.findings,
        vec![
            "STEP: 1. Step A\n\nanswer A\n".to_string(),
            "STEP: 2. Step B\n\nanswer B\n".to_string(),
        ]
    );
    assert_eq!(report.final_report, "FINAL REPORT");
    assert_eq!(client.call_count(), 4);
}

#[tokio::test]
async fn test_researcher_issues_one_call_per_step_in_order() {
    let client = StubClient::with_texts(&["1. Step A\n\n2. Step B", "a", "b", "done"]);

    run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap();

    let requests = client.requests();
    assert_eq!(requests[0].user_prompt, build_plan_prompt("dentists"));
    assert_eq!(requests[1].user_prompt, build_step_prompt("dentists", "1. Step A"));
    assert_eq!(requests[2].user_prompt, build_step_prompt("dentists", "2. Step B"));

    for request in &requests {
        assert!(request.system_prompt.is_none());
        assert!(request.response_schema.is_none());
        assert_eq!(request.temperature, STAGED_TEMPERATURE);
        assert_eq!(request.model, "test-model");
        assert_eq!(request.max_tokens, 1234);
    }
}

#[tokio::test]
async fn test_summary_receives_joined_findings() {
    let client = StubClient::with_texts(&["1. Step A\n2. Step B", "a", "b", "done"]);

    run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap();

    let summary_prompt = &client.requests()[3].user_prompt;
    assert!(summary_prompt.contains("STEP: 1. Step A\n\na\n\n\nSTEP: 2. Step B\n\nb\n"));
}

#[tokio::test]
async fn test_stage_transitions() {
    let client = StubClient::with_texts(&["1. Only step", "answer", "report"]);
    let settings = test_settings();

    let stage = Stage::Planning;
    assert_eq!(stage.number(), Some(1));

    let stage = stage.advance(&client, &settings, "gyms").await.unwrap();
    assert_eq!(
        stage,
        Stage::Researching {
            plan: vec!["1. Only step".to_string()]
        }
    );

    let stage = stage.advance(&client, &settings, "gyms").await.unwrap();
    match &stage {
        Stage::Summarizing { plan, findings } => {
            assert_eq!(plan.len(), 1);
            assert_eq!(findings, &vec!["STEP: 1. Only step\n\nanswer\n".to_string()]);
        }
        other => panic!("unexpected stage: {other:?}"),
    }

    let stage = stage.advance(&client, &settings, "gyms").await.unwrap();
    assert!(stage.is_done());
    assert_eq!(stage.number(), None);

    // Done is terminal and makes no further calls
    let stage = stage.advance(&client, &settings, "gyms").await.unwrap();
    assert!(stage.is_done());
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn test_research_failure_aborts_run() {
    let client = StubClient::new(vec![
        Ok("1. Step A\n2. Step B\n3. Step C".to_string()),
        Ok("a".to_string()),
        Err(CompletionError::Provider {
            status: 503,
            message: "overloaded".to_string(),
        }),
    ]);

    let err = run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::Provider { status: 503, .. }));
    // Step C and the summary were never attempted
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn test_planner_failure_aborts_run() {
    let client = StubClient::new(vec![Err(CompletionError::Auth("no key".to_string()))]);

    let err = run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::Auth(_)));
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_empty_plan_warns_and_goes_straight_to_summary() {
    let client = StubClient::with_texts(&["\n\n", "nothing to report"]);

    let report = run_staged_research(&client, &test_settings(), "dentists")
        .await
        .unwrap();

    assert!(report.plan.is_empty());
    assert!(report.findings.is_empty());
    assert_eq!(report.final_report, "nothing to report");
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_planner_blank_answer_yields_empty_plan() {
    let client = StubClient::with_texts(&["  \n\t\n"]);

    let plan = plan_research(&client, &test_settings(), "dentists")
        .await
        .unwrap();

    assert!(plan.is_empty());
    assert_eq!(client.call_count(), 1);
}
