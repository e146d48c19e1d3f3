use thiserror::Error;

/// Main error type for the analyzer service
#[derive(Error, Debug)]
pub enum DugoutError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Input validation errors (missing or malformed request parameters)
    #[error("{0}")]
    Validation(String),

    // Explicit not-found signal for player lookups. Absence is not an
    // upstream failure; it gets its own variant so the API boundary can
    // map it to 404 instead of 500.
    #[error("Player not found")]
    PlayerNotFound,

    // Statistics provider or text-generation service failures
    #[error("Upstream error: {0}")]
    Upstream(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for DugoutError
pub type Result<T> = std::result::Result<T, DugoutError>;
