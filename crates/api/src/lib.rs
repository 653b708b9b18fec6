//! HTTP webhook receiver for Statuswatch.
//!
//! One inbound endpoint accepts status-page webhook deliveries, runs the
//! core classification and formatting pipeline, and hands relevant events
//! to the Slack delivery client. All failures are handled here at the
//! orchestration boundary; the core components below never produce a
//! caller-visible error.

#![deny(unsafe_code)]

pub mod error;
pub mod router;
pub mod server;
pub mod state;
pub mod webhook;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::{start_server, ApiServer};
pub use state::AppState;
