//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.mathagent.toml` files.

use crate::cli::{Args, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mathagent.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Default input values.
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Web form settings.
    #[serde(default)]
    pub web: WebConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output format for one-shot evaluation.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Values used when an input is not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_a")]
    pub a: i64,

    #[serde(default = "default_b")]
    pub b: i64,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
        }
    }
}

fn default_a() -> i64 {
    7
}

fn default_b() -> i64 {
    10
}

/// Web form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Title shown in the browser tab and page header.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            page_title: default_page_title(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_page_title() -> String {
    "AI Math Agent Demo".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load configuration from `.mathagent.toml` inside `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// Only values the user actually passed override the file.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(a) = args.a {
            self.inputs.a = a;
        }
        if let Some(b) = args.b {
            self.inputs.b = b;
        }

        if let Some(format) = args.format {
            self.general.format = format;
        }

        if let Some(ref host) = args.host {
            self.web.host = host.clone();
        }
        if let Some(port) = args.port {
            self.web.port = port;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
