//! Shared request state for the webhook handler.

use statuswatch_core::audit::AuditSink;
use statuswatch_core::StatuswatchConfig;
use statuswatch_slack::Notify;
use std::sync::Arc;

/// Immutable state shared across requests.
///
/// Everything request-specific (parsed event, classification, formatted
/// message) stays request-local; this struct is only configuration and
/// injected capabilities.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, constructed once at startup.
    pub config: Arc<StatuswatchConfig>,
    /// Outbound delivery client.
    pub notifier: Arc<dyn Notify>,
    /// Append-only operational log.
    pub audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Bundle configuration and capabilities into handler state.
    pub fn new(
        config: Arc<StatuswatchConfig>,
        notifier: Arc<dyn Notify>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            config,
            notifier,
            audit,
        }
    }
}
