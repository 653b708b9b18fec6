use crate::Error;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default inbound HTTP port.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default timeout for the outbound Slack call, in seconds.
pub const DEFAULT_SLACK_TIMEOUT_SECS: u64 = 10;

/// Main configuration for Statuswatch.
///
/// Constructed once at process start and shared immutably; there are no
/// ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatuswatchConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,

    /// Slack delivery configuration.
    pub slack: SlackConfig,

    /// Keyword sets driving relevance classification.
    pub keywords: KeywordConfig,

    /// Optional source-IP allow-list. Empty means no restriction.
    pub allowed_ips: Vec<String>,

    /// Optional path to the append-only operational log file.
    pub audit_log: Option<PathBuf>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Request timeout in seconds.
    pub request_timeout: u64,

    /// Enable request logging.
    pub enable_request_logging: bool,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

/// Slack delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Slack bot token (xoxb-...).
    pub bot_token: String,

    /// Target channel identifier.
    pub channel: String,

    /// Per-request timeout for chat.postMessage, in seconds.
    pub request_timeout: u64,
}

/// Keyword sets for relevance classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Display name of the tracked region, used in message headers.
    pub region_name: String,

    /// Aliases for the tracked region. Matching is case-insensitive
    /// substring containment.
    pub region: Vec<String>,

    /// Terms that escalate an incident to service-wide scope.
    pub service_wide: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_HTTP_PORT,
            request_timeout: 30,
            enable_request_logging: true,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            channel: "#alerts".to_string(),
            request_timeout: DEFAULT_SLACK_TIMEOUT_SECS,
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            region_name: "New York".to_string(),
            region: default_region_keywords(),
            service_wide: default_service_wide_keywords(),
        }
    }
}

/// Aliases under which the upstream status page refers to the New York
/// datacenter: spelling variants, numbered server names, directional names.
fn default_region_keywords() -> Vec<String> {
    [
        "new york",
        "newyork",
        "new-york",
        "new_york",
        "nyc",
        "ny server",
        "ny-server",
        "ny-1",
        "ny-2",
        "ny-3",
        "ny-4",
        "ny-5",
        "ny1",
        "ny2",
        "ny3",
        "ny4",
        "ny5",
        "newyork1",
        "newyork2",
        "newyork3",
        "us-east",
        "us east",
        "east-us",
        "east coast",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Terms indicating an incident affects the whole platform or core
/// infrastructure (billing, portal, authentication, DNS), regardless of
/// region.
fn default_service_wide_keywords() -> Vec<String> {
    [
        "all server",
        "all service",
        "platform wide",
        "platform-wide",
        "service wide",
        "service-wide",
        "global outage",
        "major outage",
        "complete outage",
        "total outage",
        "network wide",
        "network-wide",
        "all customer",
        "all user",
        "everyone",
        "entire network",
        "all location",
        "all datacenter",
        "all data center",
        "ddos",
        "dos attack",
        "security incident",
        "billing",
        "payment",
        "portal",
        "control panel",
        "customer portal",
        "api outage",
        "api down",
        "authentication",
        "login issue",
        "sip registration",
        "registration issue",
        "dns issue",
        "dns outage",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl StatuswatchConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::FileSystem(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content).map_err(|e| Error::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .map_err(|e| Error::FileSystem(format!("Failed to write config file: {}", e)))
    }

    /// Render configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Apply environment variable overrides for secrets and the allow-list.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var("STATUSWATCH_SLACK_TOKEN") {
            self.slack.bot_token = token;
        }
        if let Ok(channel) = std::env::var("STATUSWATCH_SLACK_CHANNEL") {
            self.slack.channel = channel;
        }
        if let Ok(ips) = std::env::var("STATUSWATCH_ALLOWED_IPS") {
            self.allowed_ips = ips
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_region_and_service_wide_keywords() {
        let config = StatuswatchConfig::default();
        assert_eq!(config.keywords.region_name, "New York");
        assert!(config.keywords.region.contains(&"new york".to_string()));
        assert!(config.keywords.region.contains(&"ny-2".to_string()));
        assert!(config
            .keywords
            .service_wide
            .contains(&"platform-wide".to_string()));
        assert!(config.allowed_ips.is_empty());
        assert_eq!(config.slack.request_timeout, 10);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = StatuswatchConfig::default();
        config.slack.channel = "#status".to_string();
        config.allowed_ips = vec!["203.0.113.5".to_string()];
        config.save(&path).unwrap();

        let loaded = StatuswatchConfig::load(&path).unwrap();
        assert_eq!(loaded.slack.channel, "#status");
        assert_eq!(loaded.allowed_ips, vec!["203.0.113.5".to_string()]);
        assert_eq!(loaded.keywords.region, config.keywords.region);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let partial = r##"
            [slack]
            channel = "#ops"
        "##;
        let config: StatuswatchConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.slack.channel, "#ops");
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert!(!config.keywords.region.is_empty());
    }
}
