// Process configuration
pub mod config;

// Completion client and execution utilities
pub mod workflow_utils;

// Research workflow module
pub mod research;
