//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// MathAgent - add, subtract, multiply and check primality of two numbers
///
/// Evaluates two whole numbers once and prints the results, or serves an
/// interactive web form that does the same.
///
/// Examples:
///   mathagent --a 7 --b 10
///   mathagent --a -5 --b 4 --format json
///   mathagent --a 97 --b 91 --format markdown -o report.md
///   mathagent --serve --port 8080
///   mathagent --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// First number (defaults to the configured value, 7)
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    pub a: Option<i64>,

    /// Second number (defaults to the configured value, 10)
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    pub b: Option<i64>,

    /// Output format (text, markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Serve the interactive web form instead of evaluating once
    #[arg(long)]
    pub serve: bool,

    /// Interface for the web form to bind
    #[arg(long, value_name = "HOST", env = "MATHAGENT_HOST")]
    pub host: Option<String>,

    /// Port for the web form
    #[arg(long, value_name = "PORT", env = "MATHAGENT_PORT")]
    pub port: Option<u16>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .mathagent.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .mathagent.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for one-shot evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.port == Some(0) {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if let Some(ref host) = self.host {
            if host.trim().is_empty() {
                return Err("Host must not be empty".to_string());
            }
        }

        if self.serve && self.output.is_some() {
            return Err("--output cannot be used with --serve".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Builds the log filter: `RUST_LOG` directives on top of the
    /// verbosity flags' level.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.log_level()).into())
            .parse_lossy(rust_log.unwrap_or_default())
    }
}
