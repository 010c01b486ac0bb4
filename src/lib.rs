//! dailyrings - daily wellness scores at a glance
//!
//! Fetches the Readiness, Sleep and Activity scores for the day, draws
//! them as ring charts into a PNG and prints a centered two-row summary.
//!
//! # Architecture
//!
//! - **metrics**: authenticated fetch with a today/yesterday fallback
//! - **chart**: grid layout, ring rasterization, PNG output
//! - **report**: terminal-width summary rows
//! - **app**: the fetch -> chart -> summary pass

pub mod errors;
pub mod config;
pub mod cli;
pub mod logging;
pub mod metrics;
pub mod chart;
pub mod report;
pub mod app;

// Re-export commonly used types
pub use errors::{DailyError, Result};
pub use config::Config;
pub use metrics::{DailyScores, Metric, Score, ScoreClient};
pub use chart::RingChart;
