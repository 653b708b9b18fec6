//! Error types for CLI operations.

use thiserror::Error;

/// Main error type for the Statuswatch CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command execution error.
    #[error("Command error: {0}")]
    Command(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core Statuswatch error.
    #[error("Core error: {0}")]
    Core(#[from] statuswatch_core::Error),

    /// API server error.
    #[error("API error: {0}")]
    Api(#[from] statuswatch_api::ApiError),

    /// Slack delivery error.
    #[error("Slack error: {0}")]
    Slack(#[from] statuswatch_slack::SlackError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
