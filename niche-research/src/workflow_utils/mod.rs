//! Workflow utilities shared by the research pipelines
//!
//! - **completion**: the completion client seam, logged calls, structured parsing
//! - **openai**: OpenAI-compatible HTTP implementation of the client
//! - **task**: step-level logging and execution

pub mod completion;
pub mod openai;
pub mod task;

// Re-export commonly used types and functions
pub use completion::{
    execute_completion, parse_structured, CompletionCall, CompletionClient, CompletionError,
    CompletionRequest, CompletionResult, ResponseSchema,
};
pub use openai::{OpenAiClient, OpenAiConfig, OPENAI_API_BASE};
pub use task::{execute_step, StepContext};
