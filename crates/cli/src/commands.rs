//! CLI command definitions for Statuswatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "STATUSWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the webhook receiver server
    Serve(ServeArgs),

    /// Dry-run a payload file through the classifier, no network
    Classify(ClassifyArgs),

    /// Post a test notification to the configured Slack channel
    SendTest(SendTestArgs),

    /// Print or write the default configuration
    Config(ConfigArgs),
}

/// Server arguments.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address override (host:port)
    #[arg(short, long)]
    pub bind: Option<String>,
}

/// Offline classification arguments.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to a JSON webhook payload file
    pub payload: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Test notification arguments.
#[derive(Args, Debug)]
pub struct SendTestArgs {
    /// Message text to send
    #[arg(long, default_value = "Statuswatch test notification")]
    pub text: String,
}

/// Configuration helper arguments.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the default configuration to this path instead of stdout
    #[arg(long)]
    pub write: Option<PathBuf>,
}

/// Output format for classification results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
