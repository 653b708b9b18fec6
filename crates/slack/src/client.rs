//! Slack chat.postMessage client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use statuswatch_core::{Message, SlackConfig};

use crate::blocks::render_blocks;
use crate::error::SlackError;

/// Slack message-post endpoint.
pub const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Acknowledgement returned by Slack for an accepted message.
#[derive(Debug, Clone)]
pub struct DeliveryAck {
    /// Message timestamp assigned by Slack.
    pub ts: Option<String>,
    /// Resolved channel identifier.
    pub channel: Option<String>,
}

/// Seam for delivering formatted messages, mockable in handler tests.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver one formatted message.
    async fn deliver(&self, message: &Message) -> Result<DeliveryAck, SlackError>;
}

/// Slack Web API client.
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    channel: String,
    api_url: String,
}

impl SlackClient {
    /// Build a client from Slack configuration. The request timeout bounds
    /// every delivery attempt.
    pub fn new(config: &SlackConfig) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout.max(1)))
            .build()?;

        Ok(Self {
            http,
            token: config.bot_token.clone(),
            channel: config.channel.clone(),
            api_url: SLACK_POST_MESSAGE_URL.to_string(),
        })
    }

    /// Override the API endpoint, for tests against a local stand-in.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[async_trait]
impl Notify for SlackClient {
    async fn deliver(&self, message: &Message) -> Result<DeliveryAck, SlackError> {
        let body = json!({
            "channel": self.channel,
            "blocks": render_blocks(message),
            // The accent color rides on an attachment; blocks have no
            // border color of their own.
            "attachments": [{ "color": message.accent_color, "text": "" }],
        });

        debug!("posting message to {} (channel {})", self.api_url, self.channel);
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response
            .json::<PostMessageResponse>()
            .await
            .map_err(|e| SlackError::Decode(e.to_string()))?;

        ack_from_response(status, payload)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
    ts: Option<String>,
    channel: Option<String>,
}

/// Success requires HTTP 200 and `ok == true`; anything else is an API
/// error carrying the upstream text when available.
fn ack_from_response(
    status: StatusCode,
    payload: PostMessageResponse,
) -> Result<DeliveryAck, SlackError> {
    if status == StatusCode::OK && payload.ok {
        return Ok(DeliveryAck {
            ts: payload.ts,
            channel: payload.channel,
        });
    }

    Err(SlackError::Api(
        payload.error.unwrap_or_else(|| "unknown error".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_yields_ack() {
        let payload = PostMessageResponse {
            ok: true,
            error: None,
            ts: Some("1700000000.000100".to_string()),
            channel: Some("C012AB3CD".to_string()),
        };
        let ack = ack_from_response(StatusCode::OK, payload).unwrap();
        assert_eq!(ack.ts.as_deref(), Some("1700000000.000100"));
        assert_eq!(ack.channel.as_deref(), Some("C012AB3CD"));
    }

    #[test]
    fn ok_false_carries_upstream_error_text() {
        let payload = PostMessageResponse {
            ok: false,
            error: Some("invalid_auth".to_string()),
            ts: None,
            channel: None,
        };
        let err = ack_from_response(StatusCode::OK, payload).unwrap_err();
        assert!(matches!(err, SlackError::Api(ref text) if text == "invalid_auth"));
    }

    #[test]
    fn ok_false_without_error_text_is_unknown() {
        let err = ack_from_response(StatusCode::OK, PostMessageResponse::default()).unwrap_err();
        assert!(matches!(err, SlackError::Api(ref text) if text == "unknown error"));
    }

    #[test]
    fn non_200_is_an_error_even_with_ok_true() {
        let payload = PostMessageResponse {
            ok: true,
            error: None,
            ts: None,
            channel: None,
        };
        let err = ack_from_response(StatusCode::TOO_MANY_REQUESTS, payload).unwrap_err();
        assert!(matches!(err, SlackError::Api(_)));
    }
}
