//! Error types for dailyrings
//!
//! Only the fatal paths surface here. Per-metric fetch failures never
//! become errors; they degrade to an absent score inside the client.

use thiserror::Error;

/// Main error type for a dailyrings run
#[derive(Error, Debug)]
pub enum DailyError {
    /// Configuration errors (missing file, bad JSON, missing API key)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Chart layout or rendering errors
    #[error("Render error: {0}")]
    RenderError(String),

    /// Image encoding errors
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Terminal size query errors
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for dailyrings operations
pub type Result<T> = std::result::Result<T, DailyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DailyError::ConfigError("API_KEY missing".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
        let err: DailyError = io.into();
        assert!(matches!(err, DailyError::IoError(_)));
        assert!(err.to_string().contains("config.json"));
    }
}
