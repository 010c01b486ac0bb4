//! Daily score retrieval
//!
//! This module provides the fixed metric set and the client that
//! fetches one score per metric:
//! - Metric names and endpoints
//! - Typed score extraction with a today/yesterday fallback
//! - Ordered, parallel name/score results

pub mod client;
pub mod types;

// Re-export key types for convenience
pub use client::{extract_score, score_at, ScoreClient};
pub use types::{DailyScores, Metric, MissingReason, Score, ScoreLookup};
