//! Integration tests for dailyrings
//!
//! Exercises config loading, chart output and the summary rows together,
//! without network access.

use dailyrings::{
    chart::{GridLayout, RingChart},
    config::{Config, DEFAULT_BASE_URL},
    metrics::{DailyScores, Metric},
    report, DailyError,
};
use std::fs;
use tempfile::TempDir;

fn sample_scores() -> DailyScores {
    DailyScores::from_pairs(vec![
        (Metric::Readiness, Some(87)),
        (Metric::Sleep, None),
        (Metric::Activity, Some(54)),
    ])
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"API_KEY": "secret-token"}"#).unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.api_key, "secret-token");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(Some(dir.path().join("config.json").as_path()));
    assert!(matches!(result, Err(DailyError::ConfigError(_))));
}

#[test]
fn test_config_without_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"api_key": "lowercase is not accepted"}"#).unwrap();

    assert!(Config::load(Some(path.as_path())).is_err());
}

#[test]
fn test_chart_written_as_transparent_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("daily_scores.png");
    let scores = sample_scores();

    let chart = RingChart::new(scores.scores());
    assert_eq!(chart.fractions(), &[0.87, 0.0, 0.54]);
    assert_eq!(*chart.layout(), GridLayout::for_count(3));
    chart.save(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    let full = chart.render();
    assert!(image.width() < full.width());
    assert!(image.height() < full.height());

    // Bounding-box corners fall outside the rings
    let (w, h) = image.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(image.get_pixel(x, y).0[3], 0);
    }
}

#[test]
fn test_chart_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("daily_scores.png");
    fs::write(&path, b"stale").unwrap();

    RingChart::new(&[Some(50), Some(60), Some(70)]).save(&path).unwrap();
    assert!(image::open(&path).is_ok());
}

#[test]
fn test_all_absent_chart_still_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.png");
    let chart = RingChart::new(&[None, None, None]);

    chart.save(&path).unwrap();
    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), chart.render().dimensions());
    assert!(image.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_four_scores_leave_two_cells_unused() {
    let chart = RingChart::new(&[Some(10), Some(20), Some(30), Some(40)]);
    assert_eq!(chart.layout().rows(), 2);
    assert_eq!(chart.layout().cols(), 3);
    assert_eq!(chart.layout().unused_cells(), 2);
}

#[test]
fn test_summary_rows_from_fetched_scores() {
    let scores = sample_scores();
    let mut out = Vec::new();
    report::write_summary(&mut out, scores.names(), scores.scores(), 90).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], report::format_summary(scores.names(), scores.scores(), 90)[0]);
    assert_eq!(
        lines[2],
        format!(
            "{}{}{}",
            report::center("87", 30),
            report::center(report::ABSENT_MARKER, 30),
            report::center("54", 30)
        )
    );
}
