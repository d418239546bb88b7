//! Data structures for research workflows

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid user input, rejected before any completion call
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("niche must not be empty")]
    EmptyNiche,
}

/// What to research: the niche plus optional context
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchRequest {
    niche: String,
    audience: Option<String>,
    geography: Option<String>,
    constraints: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ResearchRequest {
    /// Build a request; the niche must contain something other than whitespace
    pub fn new(niche: impl Into<String>) -> Result<Self, RequestError> {
        let niche = niche.into();
        if niche.trim().is_empty() {
            return Err(RequestError::EmptyNiche);
        }
        Ok(Self {
            niche: niche.trim().to_string(),
            audience: None,
            geography: None,
            constraints: None,
        })
    }

    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = non_blank(audience);
        self
    }

    pub fn with_geography(mut self, geography: Option<String>) -> Self {
        self.geography = non_blank(geography);
        self
    }

    pub fn with_constraints(mut self, constraints: Option<String>) -> Self {
        self.constraints = non_blank(constraints);
        self
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }

    pub fn geography(&self) -> Option<&str> {
        self.geography.as_deref()
    }

    pub fn constraints(&self) -> Option<&str> {
        self.constraints.as_deref()
    }
}

// ============================================================================
// Structured Report Types
// ============================================================================
// Closed shapes: unknown fields are rejected at every level, every field is
// required.
// ============================================================================

/// Structured research report returned by the single-call workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchReport {
    pub niche: String,
    pub audience_summary: String,
    pub top_problems: Vec<ProblemInsight>,
    pub market_signals: Vec<String>,
    pub offer_ideas: Vec<OfferIdea>,
    pub execution_notes: String,
}

/// One problem worth solving in the niche
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemInsight {
    pub problem: String,
    pub why_it_matters: String,
    pub current_solutions: String,
}

/// One offer a solo operator could build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferIdea {
    pub offer_name: String,
    pub offer_type: String,
    pub deliverables: String,
    pub who_it_helps: String,
    pub difficulty: String,
    #[serde(deserialize_with = "whole_days")]
    pub time_to_build_days: i64,
}

/// Accept `3` and `3.0`, reject `3.5`
///
/// JSON Schema's `integer` admits numbers with a zero fractional part, so a
/// schema-conforming response may carry them.
fn whole_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(days) = number.as_i64() {
        return Ok(days);
    }
    match number.as_f64() {
        Some(days) if days.fract() == 0.0 && days >= i64::MIN as f64 && days < i64::MAX as f64 => {
            Ok(days as i64)
        }
        _ => Err(de::Error::custom(format!(
            "expected a whole number of days, got {}",
            number
        ))),
    }
}

// ============================================================================
// Staged Report Types
// ============================================================================

/// One research step produced by the planner, in plan order
pub type PlanStep = String;

/// A researched step, formatted as `STEP: <step>\n\n<answer>\n`
pub type Finding = String;

/// Output of the staged (plan → research → summarize) workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedReport {
    pub niche: String,
    pub plan: Vec<PlanStep>,
    pub findings: Vec<Finding>,
    pub final_report: String,
}
