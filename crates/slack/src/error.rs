//! Error types for Slack delivery.

use thiserror::Error;

/// Delivery error for the Slack client.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("Slack transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Slack accepted the request but refused the message, or answered
    /// with a non-200 status. Carries the upstream error text when
    /// present, else "unknown error".
    #[error("Slack API error: {0}")]
    Api(String),

    /// Response body was not the expected JSON shape.
    #[error("Invalid Slack response: {0}")]
    Decode(String),
}
