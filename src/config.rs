//! Configuration management for dailyrings
//!
//! Reads `config.json` from the working directory. The only required key
//! is `API_KEY`; everything else falls back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{DailyError, Result};

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Base URL of the daily usercollection endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.ouraring.com/v2/usercollection";

/// Default chart output file
pub const DEFAULT_OUTPUT_FILE: &str = "daily_scores.png";

/// Run configuration loaded from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Personal access token sent as a bearer credential
    #[serde(rename = "API_KEY")]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Config {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            output: default_output(),
        }
    }

    /// Load configuration from the given file, or `config.json` if none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DailyError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a JSON string
    ///
    /// Only the API key is checked here; the remaining fields may still be
    /// overridden from the command line, so `validate` runs after that.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(contents)
            .map_err(|e| DailyError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.check_api_key()?;
        Ok(config)
    }

    fn check_api_key(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(DailyError::ConfigError("API_KEY must not be empty".to_string()));
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.check_api_key()?;

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DailyError::ConfigError(format!(
                "base_url must be an http(s) URL: {}",
                self.base_url
            )));
        }

        if self.output.as_os_str().is_empty() {
            return Err(DailyError::ConfigError("output path must not be empty".to_string()));
        }

        Ok(())
    }

    /// API key with all but the last four characters hidden
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
