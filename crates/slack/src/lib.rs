//! Slack delivery for Statuswatch notifications.
//!
//! Renders formatted messages into Slack Block Kit JSON and posts them to
//! `chat.postMessage` with a bearer token and a bounded timeout. Delivery
//! is fire-and-forget from the webhook handler's perspective: failures are
//! logged, never retried.

pub mod blocks;
pub mod client;
pub mod error;

pub use blocks::render_blocks;
pub use client::{DeliveryAck, Notify, SlackClient};
pub use error::SlackError;
