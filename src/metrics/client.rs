//! HTTP client for the daily score collections
//!
//! One authenticated GET per metric. Nothing here returns an error to the
//! caller once the client is built: transport failures, bad statuses and
//! unusable bodies all end as an absent score.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::Result;
use crate::metrics::types::{DailyScores, Metric, MissingReason, Score, ScoreLookup};

/// Index of today's entry in the `data` array
const TODAY: usize = 1;

/// Index of yesterday's entry in the `data` array
const YESTERDAY: usize = 0;

/// Client for the daily usercollection endpoints
pub struct ScoreClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ScoreClient {
    /// Create a new score client
    ///
    /// # Arguments
    /// * `token` - Personal access token, sent as `Authorization: Bearer <token>`
    /// * `base_url` - Base URL the metric endpoints hang off
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("dailyrings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every metric in fixed order
    pub async fn fetch_all(&self) -> DailyScores {
        self.fetch_all_with(|_| {}).await
    }

    /// Fetch every metric in fixed order, calling `on_metric` before each request
    ///
    /// Requests are issued one at a time; each completes before the next starts.
    pub async fn fetch_all_with<F>(&self, mut on_metric: F) -> DailyScores
    where
        F: FnMut(Metric),
    {
        let mut pairs = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            on_metric(metric);
            let score = self.fetch_score(metric).await;
            pairs.push((metric, score));
        }

        let scores = DailyScores::from_pairs(pairs);
        info!(
            present = scores.present_count(),
            total = scores.len(),
            "daily scores fetched"
        );
        scores
    }

    /// Fetch a single metric's score
    ///
    /// Calls GET `<base_url>/<endpoint>` and extracts today's score,
    /// falling back to yesterday's.
    pub async fn fetch_score(&self, metric: Metric) -> Score {
        let url = metric.url(&self.base_url);
        debug!(%metric, %url, "requesting");

        let body = match self.fetch_body(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%metric, "no score: {}", e);
                return None;
            }
        };

        let score = extract_score(&body);
        match score {
            Some(value) => info!(%metric, score = value, "score retrieved"),
            None => warn!(%metric, "no score for today or yesterday"),
        }
        score
    }

    async fn fetch_body(&self, url: &str) -> std::result::Result<String, String> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API returned status: {}", response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| format!("failed to read response: {}", e))
    }
}

/// Extract a score from a response body: today's entry, else yesterday's
///
/// Yesterday is only consulted when today's lookup fails structurally. A
/// null score for today means "not computed yet" and ends the search.
pub fn extract_score(body: &str) -> Score {
    let doc: Value = match serde_json::from_str(body) {
        Ok(doc) => doc,
        Err(_) => {
            debug!("{}", MissingReason::NotJson);
            return None;
        }
    };

    for index in [TODAY, YESTERDAY] {
        match score_at(&doc, index) {
            ScoreLookup::Found(score) => return Some(score),
            ScoreLookup::Null => {
                debug!("data[{}].score is null", index);
                return None;
            }
            ScoreLookup::Missing(reason) => debug!("{}", reason),
        }
    }
    None
}

/// Read `data[index].score` from a parsed response
pub fn score_at(doc: &Value, index: usize) -> ScoreLookup {
    let data = match doc.get("data").and_then(Value::as_array) {
        Some(data) => data,
        None => return ScoreLookup::Missing(MissingReason::NoDataArray),
    };

    let entry = match data.get(index) {
        Some(entry) => entry,
        None => {
            return ScoreLookup::Missing(MissingReason::IndexOutOfRange {
                index,
                len: data.len(),
            })
        }
    };

    match entry.get("score") {
        None => ScoreLookup::Missing(MissingReason::NoScoreField { index }),
        Some(Value::Null) => ScoreLookup::Null,
        Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(score) => ScoreLookup::Found(score),
            None => ScoreLookup::Missing(MissingReason::InvalidScore { index }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_today_score_preferred() {
        let body = r#"{"data": [{"score": 54}, {"score": 87}]}"#;
        assert_eq!(extract_score(body), Some(87));
    }

    #[test]
    fn test_falls_back_to_yesterday() {
        let body = r#"{"data": [{"score": 54}]}"#;
        assert_eq!(extract_score(body), Some(54));
    }

    #[test]
    fn test_falls_back_when_today_scoreless() {
        let body = r#"{"data": [{"score": 54}, {"day": "2024-01-02"}]}"#;
        assert_eq!(extract_score(body), Some(54));
    }

    #[test]
    fn test_null_today_does_not_fall_back() {
        let body = r#"{"data": [{"score": 54}, {"score": null}]}"#;
        assert_eq!(extract_score(body), None);
    }

    #[test]
    fn test_null_yesterday_is_absent() {
        assert_eq!(extract_score(r#"{"data": [{"score": null}]}"#), None);
    }

    #[test]
    fn test_absent_when_both_missing() {
        assert_eq!(extract_score(r#"{"data": []}"#), None);
        assert_eq!(extract_score(r#"{"data": [{"day": "a"}, {"day": "b"}]}"#), None);
        assert_eq!(extract_score(r#"{"detail": "unauthorized"}"#), None);
    }

    #[test]
    fn test_absent_on_non_json() {
        assert_eq!(extract_score("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_score(""), None);
    }

    #[test]
    fn test_score_at_reasons() {
        let doc = json!({"data": [{"score": "high"}, {"score": null}]});
        assert_eq!(
            score_at(&doc, 0),
            ScoreLookup::Missing(MissingReason::InvalidScore { index: 0 })
        );
        assert_eq!(score_at(&doc, 1), ScoreLookup::Null);
        assert_eq!(
            score_at(&json!({"data": [{"day": "2024-01-01"}]}), 0),
            ScoreLookup::Missing(MissingReason::NoScoreField { index: 0 })
        );
        assert_eq!(
            score_at(&doc, 2),
            ScoreLookup::Missing(MissingReason::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            score_at(&json!({"data": {"1": {"score": 3}}}), 1),
            ScoreLookup::Missing(MissingReason::NoDataArray)
        );
    }

    #[test]
    fn test_negative_and_fractional_scores_rejected() {
        assert_eq!(extract_score(r#"{"data": [{"score": -3}, {"score": 71.5}]}"#), None);
    }

    #[test]
    fn test_client_creation() {
        let client = ScoreClient::new("token", "http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_from_config() {
        let client = ScoreClient::from_config(&Config::new("token")).unwrap();
        assert_eq!(client.base_url(), crate::config::DEFAULT_BASE_URL);
    }
}
