//! Structured event logging for niche-research workflows.
//!
//! Workflows report their progress as [`ResearchEvent`]s. Each event is
//! serialized to JSON and emitted through `tracing` on the [`EVENT_TARGET`]
//! target, so a host process can filter them with `RUST_LOG` and parse them
//! line by line. The console macros at the bottom of this file are for
//! human-readable output on stdout.

use serde::{Deserialize, Serialize};

/// `tracing` target used for every structured event.
pub const EVENT_TARGET: &str = "niche_research::events";

/// Structured logging events emitted by research workflows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResearchEvent {
    /// Stage started
    StageStarted {
        stage: usize,
        name: String,
        total_stages: usize,
    },
    /// Stage completed
    StageCompleted { stage: usize, name: String },
    /// Stage failed
    StageFailed {
        stage: usize,
        name: String,
        error: String,
    },
    /// Step started (one unit of work inside a stage)
    StepStarted {
        stage: usize,
        step_id: String,
        description: String,
        total_steps: Option<usize>,
    },
    /// Step completed
    StepCompleted {
        step_id: String,
        result: Option<String>,
    },
    /// Step failed
    StepFailed { step_id: String, error: String },
    /// Completion call issued to the model
    CallStarted {
        step_id: String,
        caller: String,
        description: String,
    },
    /// Completion call returned
    CallCompleted {
        step_id: String,
        caller: String,
        response_chars: usize,
    },
    /// Completion call failed
    CallFailed {
        step_id: String,
        caller: String,
        error: String,
    },
    /// Report written to disk
    ReportSaved { file_path: String, format: String },
}

impl ResearchEvent {
    /// Emit this event as a single JSON line on the event target
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            tracing::info!(target: EVENT_TARGET, kind = self.kind(), "{}", json);
        }
    }

    /// Event type tag, also attached as the `kind` field when emitted
    pub fn kind(&self) -> &'static str {
        match self {
            ResearchEvent::StageStarted { .. } => "stage_started",
            ResearchEvent::StageCompleted { .. } => "stage_completed",
            ResearchEvent::StageFailed { .. } => "stage_failed",
            ResearchEvent::StepStarted { .. } => "step_started",
            ResearchEvent::StepCompleted { .. } => "step_completed",
            ResearchEvent::StepFailed { .. } => "step_failed",
            ResearchEvent::CallStarted { .. } => "call_started",
            ResearchEvent::CallCompleted { .. } => "call_completed",
            ResearchEvent::CallFailed { .. } => "call_failed",
            ResearchEvent::ReportSaved { .. } => "report_saved",
        }
    }
}

#[macro_export]
macro_rules! log_stage_start {
    ($stage:expr, $name:expr, $total:expr) => {
        $crate::ResearchEvent::StageStarted {
            stage: $stage,
            name: $name.to_string(),
            total_stages: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_stage_complete {
    ($stage:expr, $name:expr) => {
        $crate::ResearchEvent::StageCompleted {
            stage: $stage,
            name: $name.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_stage_failed {
    ($stage:expr, $name:expr, $error:expr) => {
        $crate::ResearchEvent::StageFailed {
            stage: $stage,
            name: $name.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_step_start {
    ($stage:expr, $step_id:expr, $desc:expr) => {
        $crate::ResearchEvent::StepStarted {
            stage: $stage,
            step_id: $step_id.to_string(),
            description: $desc.to_string(),
            total_steps: None,
        }
        .emit();
    };
    ($stage:expr, $step_id:expr, $desc:expr, $total:expr) => {
        $crate::ResearchEvent::StepStarted {
            stage: $stage,
            step_id: $step_id.to_string(),
            description: $desc.to_string(),
            total_steps: Some($total),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_step_complete {
    ($step_id:expr) => {
        $crate::ResearchEvent::StepCompleted {
            step_id: $step_id.to_string(),
            result: None,
        }
        .emit();
    };
    ($step_id:expr, $result:expr) => {
        $crate::ResearchEvent::StepCompleted {
            step_id: $step_id.to_string(),
            result: Some($result.to_string()),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_step_failed {
    ($step_id:expr, $error:expr) => {
        $crate::ResearchEvent::StepFailed {
            step_id: $step_id.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_call_start {
    ($step_id:expr, $caller:expr, $desc:expr) => {
        $crate::ResearchEvent::CallStarted {
            step_id: $step_id.to_string(),
            caller: $caller.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_call_complete {
    ($step_id:expr, $caller:expr, $chars:expr) => {
        $crate::ResearchEvent::CallCompleted {
            step_id: $step_id.to_string(),
            caller: $caller.to_string(),
            response_chars: $chars,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_call_failed {
    ($step_id:expr, $caller:expr, $error:expr) => {
        $crate::ResearchEvent::CallFailed {
            step_id: $step_id.to_string(),
            caller: $caller.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_report_saved {
    ($path:expr, $format:expr) => {
        $crate::ResearchEvent::ReportSaved {
            file_path: $path.to_string(),
            format: $format.to_string(),
        }
        .emit();
    };
}

// ============================================================================
// Console Logging Macros
// ============================================================================
// Human-readable output on stdout, complementing the structured events above.
// ============================================================================

/// Logs an informational message.
///
/// # Example
/// ```
/// use niche_research_sdk::log_info;
/// log_info!("Planning research steps...");
/// ```
///
/// Outputs:
/// ```text
/// ℹ Planning research steps...
/// ```
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        println!("\x1b[36mℹ {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("\x1b[36mℹ {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs a warning message.
///
/// # Example
/// ```
/// use niche_research_sdk::log_warning;
/// log_warning!("Planner returned no steps");
/// ```
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        println!("\x1b[33m⚠ Warning: {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("\x1b[33m⚠ Warning: {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs that a file has been saved.
///
/// # Example
/// ```
/// use niche_research_sdk::log_file_saved;
/// log_file_saved!("./report.json");
/// ```
///
/// Outputs:
/// ```text
/// ✓ Saved: ./report.json
/// ```
#[macro_export]
macro_rules! log_file_saved {
    ($path:expr) => {
        println!("\x1b[32m✓ Saved: {}\x1b[0m", $path);
    };
}
