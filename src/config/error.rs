//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid AI request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid AI base URL (must start with http:// or https://)")]
    InvalidBaseUrl,

    #[error("AI model name cannot be empty")]
    EmptyModel,

    #[error("Max output tokens must be greater than zero")]
    InvalidMaxOutputTokens,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
