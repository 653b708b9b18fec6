//! Webhook orchestration: allow-list, parse, classify, format, deliver.

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::Json;
use std::net::SocketAddr;
use tracing::{info, warn};

use statuswatch_core::{classify, format_event, Event, WebhookPayload};

use crate::error::ApiError;
use crate::state::AppState;

/// Handle one inbound webhook delivery.
///
/// Every processed request answers 200 `{"status":"received"}` whether or
/// not an alert fired; the caller cannot distinguish sent from suppressed.
/// Delivery failures are logged and swallowed.
pub async fn receive_webhook(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let client_ip = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let source = client_ip.as_deref().unwrap_or("unknown");

    // Allow-list check runs before the body is touched.
    if !source_allowed(&state.config.allowed_ips, client_ip.as_deref()) {
        state
            .audit
            .append(&format!("request from unauthorized IP: {}", source));
        return Err(ApiError::Forbidden);
    }

    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|_| {
        state.audit.append("invalid JSON body, rejecting");
        ApiError::InvalidJson
    })?;

    state
        .audit
        .append(&format!("received webhook from {}", source));

    // Syntactically valid JSON that doesn't fit the payload shape is
    // inert, not a server error.
    let payload: WebhookPayload = serde_json::from_value(value).unwrap_or_else(|err| {
        warn!("unrecognized payload shape, treating as inert: {}", err);
        WebhookPayload::default()
    });

    process_event(&state, payload.into_event()).await;

    Ok(Json(serde_json::json!({ "status": "received" })))
}

/// Classify, format, and deliver one event. Never fails the request.
async fn process_event(state: &AppState, event: Option<Event>) {
    let Some(event) = event else {
        state.audit.append("no recognized event in payload, ignoring");
        return;
    };

    let classification = classify(&event, &state.config.keywords);
    if !classification.alert {
        info!("suppressed: {}", classification.reason);
        state
            .audit
            .append(&format!("not relevant, ignoring: {}", classification.reason));
        return;
    }

    info!("alerting: {}", classification.reason);
    state.audit.append(&classification.reason);

    let message = format_event(
        &event,
        classification.relevance,
        &state.config.keywords.region_name,
    );

    match state.notifier.deliver(&message).await {
        Ok(_) => {
            state.audit.append("Slack notification sent successfully");
        }
        Err(err) => {
            warn!("slack delivery failed: {}", err);
            state
                .audit
                .append(&format!("Slack notification failed: {}", err));
        }
    }
}

/// Empty allow-list admits everyone; otherwise the client IP must be
/// present and listed.
fn source_allowed(allow_list: &[String], client_ip: Option<&str>) -> bool {
    if allow_list.is_empty() {
        return true;
    }
    match client_ip {
        Some(ip) => allow_list.iter().any(|allowed| allowed == ip),
        None => false,
    }
}
