//! Error types for the sentiment pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    /// Provider unreachable, rate-limited, or returned nothing usable.
    /// Recovered inside the fetcher via mock fallback; callers only see
    /// this when asking a provider directly.
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    Feed(String),

    /// The bundled lexicon is missing or corrupt. Fatal to scoring,
    /// distinct from any fetch failure.
    #[error("Lexicon load error: {0}")]
    LexiconLoad(String),

    /// Rejected before the pipeline runs (empty query, zero limit).
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PulseError>;
