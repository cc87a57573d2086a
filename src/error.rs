use thiserror::Error;

/// Main error type for the word game engine
#[derive(Error, Debug)]
pub enum WordGameError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text generation service errors
    #[error("Text generation error: {0}")]
    Generator(String),

    /// No words match the requested filter
    #[error("No words available for difficulty: {0}")]
    EmptyWordSet(String),

    /// Word id not present in the dataset
    #[error("Unknown word id: {0}")]
    UnknownWord(u32),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for WordGameError {
    fn from(s: String) -> Self {
        WordGameError::Other(s)
    }
}

impl From<&str> for WordGameError {
    fn from(s: &str) -> Self {
        WordGameError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WordGameError>;
