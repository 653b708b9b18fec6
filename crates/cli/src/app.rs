//! CLI application entry point and configuration.
//!
//! Parses arguments, loads configuration with environment overrides, and
//! dispatches to the selected command.

use clap::Parser;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use statuswatch_core::audit::{AuditSink, FileAuditLog, NullAuditLog};
use statuswatch_core::{classify, format_event, Message, Section, StatuswatchConfig, WebhookPayload};
use statuswatch_slack::{Notify, SlackClient};

use crate::commands::{Cli, ClassifyArgs, Commands, ConfigArgs, OutputFormat, SendTestArgs, ServeArgs};
use crate::error::{CliError, Result};

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Serve(args) => run_serve(config, args),
        Commands::Classify(args) => run_classify(&config, args),
        Commands::SendTest(args) => run_send_test(&config, args),
        Commands::Config(args) => run_config(&config, args),
    }
}

/// Set up tracing based on verbosity level, deferring to RUST_LOG.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok(); // Ignore errors if a subscriber is already installed
}

/// Load configuration from the given path, the default location, or
/// defaults, then apply environment overrides.
fn load_config(path: Option<&Path>) -> Result<StatuswatchConfig> {
    let config = match path {
        Some(path) if path.exists() => StatuswatchConfig::load(path)?,
        Some(path) => {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => StatuswatchConfig::load(&path)?,
            None => StatuswatchConfig::default(),
        },
    };

    Ok(config.with_env_overrides())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("statuswatch").join("config.toml"))
}

fn run_serve(mut config: StatuswatchConfig, args: &ServeArgs) -> Result<()> {
    if let Some(bind) = &args.bind {
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| CliError::Config(format!("Invalid bind address {}: {}", bind, e)))?;
        config.http.host = addr.ip().to_string();
        config.http.port = addr.port();
    }

    if config.slack.bot_token.is_empty() {
        return Err(CliError::Config(
            "Slack bot token is not configured (set slack.bot_token or STATUSWATCH_SLACK_TOKEN)"
                .to_string(),
        ));
    }

    let audit: Arc<dyn AuditSink> = match &config.audit_log {
        Some(path) => Arc::new(FileAuditLog::new(path.clone())),
        None => Arc::new(NullAuditLog),
    };
    let notifier: Arc<dyn Notify> = Arc::new(SlackClient::new(&config.slack)?);
    let state = statuswatch_api::AppState::new(Arc::new(config), notifier, audit);

    runtime()?.block_on(async move { statuswatch_api::start_server(state).await })?;
    Ok(())
}

fn run_classify(config: &StatuswatchConfig, args: &ClassifyArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.payload)?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| CliError::Command(format!("Invalid JSON payload: {}", e)))?;
    let payload: WebhookPayload = serde_json::from_value(value).unwrap_or_default();

    let Some(event) = payload.into_event() else {
        match args.format {
            OutputFormat::Text => println!("no recognized event in payload"),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "event": null, "classification": null })
            ),
        }
        return Ok(());
    };

    let classification = classify(&event, &config.keywords);
    let message = classification
        .alert
        .then(|| format_event(&event, classification.relevance, &config.keywords.region_name));

    match args.format {
        OutputFormat::Text => {
            println!("alert:     {}", classification.alert);
            println!("relevance: {:?}", classification.relevance);
            println!("reason:    {}", classification.reason);
            if let Some(message) = &message {
                println!("color:     {}", message.accent_color);
                for section in &message.sections {
                    match section {
                        Section::Header(text) => println!("== {}", text),
                        Section::Fields(fields) => {
                            for field in fields {
                                println!("   {}: {}", field.label, field.value);
                            }
                        }
                        Section::Text(text) => println!("   {}", text.replace('\n', " ")),
                    }
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "classification": classification,
                "message": message,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::Command(e.to_string()))?
            );
        }
    }

    Ok(())
}

fn run_send_test(config: &StatuswatchConfig, args: &SendTestArgs) -> Result<()> {
    if config.slack.bot_token.is_empty() {
        return Err(CliError::Config(
            "Slack bot token is not configured (set slack.bot_token or STATUSWATCH_SLACK_TOKEN)"
                .to_string(),
        ));
    }

    let message = Message {
        sections: vec![
            Section::Header("🔵 Statuswatch Test".to_string()),
            Section::Text(args.text.clone()),
        ],
        accent_color: "#0984e3".to_string(),
    };

    let client = SlackClient::new(&config.slack)?;
    let ack = runtime()?.block_on(async move { client.deliver(&message).await })?;
    println!(
        "test notification delivered (channel {}, ts {})",
        ack.channel.as_deref().unwrap_or("unknown"),
        ack.ts.as_deref().unwrap_or("unknown"),
    );
    Ok(())
}

fn run_config(config: &StatuswatchConfig, args: &ConfigArgs) -> Result<()> {
    match &args.write {
        Some(path) => {
            config.save(path)?;
            println!("configuration written to {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Io)
}
