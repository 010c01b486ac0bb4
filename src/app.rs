//! The single fetch -> chart -> summary pass
//!
//! Kept out of `main.rs` so the whole run can be driven from tests with a
//! mock API, a temporary output path and a fixed width.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

use crate::chart::RingChart;
use crate::cli::Args;
use crate::config::Config;
use crate::errors::{DailyError, Result};
use crate::metrics::{DailyScores, ScoreClient};
use crate::report;

/// Per-run switches that do not live in `config.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Summary width; `None` queries the terminal
    pub width: Option<u16>,
    pub draw_chart: bool,
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            width: None,
            draw_chart: true,
            show_progress: false,
        }
    }
}

impl RunOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            width: args.width,
            draw_chart: !args.no_chart,
            show_progress: args.verbosity().show_progress(),
        }
    }
}

/// Fetch scores, write the chart, then print the summary to `out`
///
/// Fetch problems only produce absent scores. A failed chart write or
/// terminal width query ends the run with an error; the width is queried
/// after the chart is written.
pub async fn run<W: Write>(config: &Config, options: &RunOptions, out: &mut W) -> Result<DailyScores> {
    let scores = fetch_scores(config, options.show_progress).await?;

    if options.draw_chart {
        RingChart::new(scores.scores())
            .save(&config.output)
            .map_err(|e| {
                DailyError::RenderError(format!(
                    "Failed to write chart to {}: {}",
                    config.output.display(),
                    e
                ))
            })?;
    } else {
        info!("chart output skipped");
    }

    let width = match options.width {
        Some(width) => width,
        None => report::terminal_width()?,
    };
    report::write_summary(out, scores.names(), scores.scores(), usize::from(width))?;

    Ok(scores)
}

async fn fetch_scores(config: &Config, show_progress: bool) -> Result<DailyScores> {
    let client = ScoreClient::from_config(config)?;

    let spinner = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let scores = client
        .fetch_all_with(|metric| {
            if let Some(pb) = &spinner {
                pb.set_message(format!("Fetching {} score...", metric));
            }
        })
        .await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if scores.present_count() < scores.len() {
        warn!(
            missing = scores.len() - scores.present_count(),
            "some scores were unavailable"
        );
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_options_from_args() {
        let args = Args::try_parse_from(["dailyrings", "--width", "90", "--no-chart", "-v"]).unwrap();
        let options = RunOptions::from_args(&args);
        assert_eq!(options.width, Some(90));
        assert!(!options.draw_chart);
        assert!(!options.show_progress);
    }

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.width, None);
        assert!(options.draw_chart);
    }
}
