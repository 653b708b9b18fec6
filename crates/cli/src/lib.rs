//! Command-line interface for Statuswatch.
//!
//! This crate provides the `statuswatch` binary: run the webhook server,
//! dry-run a payload through the classifier offline, or post a test
//! notification to verify Slack credentials.

#![deny(missing_docs, unsafe_code)]

/// CLI command definitions and parsing.
pub mod commands;

/// CLI application entry point and configuration.
pub mod app;

/// Error types for CLI operations.
pub mod error;
