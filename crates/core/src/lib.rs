//! Core types, errors, and configuration for Statuswatch
//!
//! This crate provides the decision-making half of the webhook receiver:
//! the event model for status-page payloads, the keyword matcher, the
//! relevance classifier, and the notification formatter. All of it is pure
//! and side-effect free; delivery and HTTP plumbing live in the sibling
//! crates.

pub mod audit;
pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod matcher;

// Re-exports for convenience
pub use classify::{classify, Classification, Relevance};
pub use config::{HttpConfig, KeywordConfig, SlackConfig, StatuswatchConfig};
pub use error::{Error, Result};
pub use event::{Event, WebhookPayload};
pub use format::{format_event, Field, Message, Section};
