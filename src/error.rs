// Error types for jlpt-notes.
// Covers HTTP failures, argument validation, and export I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Refusing to visit {0}: domain not allowed")]
    DisallowedDomain(String),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid JLPT level: {0}")]
    InvalidLevel(String),

    #[error("Invalid file type: {0}. Only 'csv' or 'json' are supported.")]
    InvalidFormat(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl NotesError {
    /// Wrap a URL parse failure together with the offending input.
    pub fn invalid_url(url: &str, err: url::ParseError) -> Self {
        NotesError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
