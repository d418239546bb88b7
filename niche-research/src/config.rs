//! Process-wide settings read once at startup

use thiserror::Error;

use crate::workflow_utils::OPENAI_API_BASE;

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("MAX_OUTPUT_TOKENS must be a positive integer, got '{0}'")]
    InvalidMaxOutputTokens(String),
}

/// Settings for the completion calls made by a run
///
/// Built once and passed by reference into the workflows; never mutated during
/// a run. The API key is not part of this struct: the client reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Model identifier (`OPENAI_MODEL`)
    pub model: String,
    /// Upper bound on output tokens per call (`MAX_OUTPUT_TOKENS`)
    pub max_output_tokens: u32,
    /// API base URL (`OPENAI_BASE_URL`)
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            base_url: OPENAI_API_BASE.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    ///
    /// Unset or blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_output_tokens = match get("MAX_OUTPUT_TOKENS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxOutputTokens(raw)),
            },
            None => defaults.max_output_tokens,
        };

        Ok(Self {
            model: get("OPENAI_MODEL").unwrap_or(defaults.model),
            max_output_tokens,
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
        })
    }
}
