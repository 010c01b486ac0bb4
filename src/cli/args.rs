//! Command-line argument parsing for dailyrings
//!
//! Flags given here take precedence over values in `config.json`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::Result;

/// dailyrings - today's Readiness, Sleep and Activity at a glance
#[derive(Parser, Debug)]
#[command(name = "dailyrings")]
#[command(version)]
#[command(about = "Fetch daily wellness scores, draw them as rings and print a summary", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ./config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chart output path (default: ./daily_scores.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Terminal width to lay the summary out for, instead of querying the terminal
    #[arg(long)]
    pub width: Option<u16>,

    /// Skip writing the chart image
    #[arg(long)]
    pub no_chart: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only the summary and fatal errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Display the effective configuration (API key masked)
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config
    }

    /// Load `config.json` (or `--config`), apply overrides, then validate
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        let config = self.apply_overrides(config);
        config.validate()?;
        Ok(config)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing level for this verbosity
    pub fn log_level(&self) -> tracing::Level {
        match self {
            Verbosity::Quiet => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::INFO,
            Verbosity::VeryVerbose => tracing::Level::DEBUG,
        }
    }

    /// Check if should show the fetch spinner
    pub fn show_progress(&self) -> bool {
        matches!(self, Verbosity::Normal)
    }
}
