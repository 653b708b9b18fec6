//! Axum router for the Statuswatch webhook receiver.

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::webhook;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook::receive_webhook))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
