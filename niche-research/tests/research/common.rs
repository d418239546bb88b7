//! Common utilities for research module tests

use async_trait::async_trait;
use niche_research::config::Settings;
use niche_research::workflow_utils::{
    CompletionClient, CompletionError, CompletionRequest, CompletionResult,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Completion client that replays queued responses and records every request
pub struct StubClient {
    responses: Mutex<VecDeque<CompletionResult<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubClient {
    pub fn new(responses: Vec<CompletionResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Stub that answers every call with the given texts, in order
    pub fn with_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.as_ref().to_string())).collect())
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CompletionError::Provider {
                    status: 500,
                    message: "stub has no more responses".to_string(),
                })
            })
    }
}

pub fn test_settings() -> Settings {
    Settings {
        model: "test-model".to_string(),
        max_output_tokens: 1234,
        base_url: "http://localhost".to_string(),
    }
}

/// A report payload that satisfies the schema
pub fn sample_report_json() -> Value {
    json!({
        "niche": "dentists",
        "audience_summary": "...",
        "top_problems": [
            {"problem": "p", "why_it_matters": "w", "current_solutions": "c"}
        ],
        "market_signals": ["s"],
        "offer_ideas": [
            {
                "offer_name": "o",
                "offer_type": "t",
                "deliverables": "d",
                "who_it_helps": "w",
                "difficulty": "easy",
                "time_to_build_days": 3
            }
        ],
        "execution_notes": "n"
    })
}
