use crate::fixture::Difference;
use std::fmt::Write as _;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Fixture document could not be read or navigated
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// HTTP middleware errors (retry layer)
    #[error("HTTP middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request signing errors
    #[error("Signature error: {0}")]
    Signature(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response did not match its expected fixture. Carries every
    /// difference found, not just the first.
    #[error("Assertion failed. Differences found in response:\n{}", format_differences(.0))]
    AssertionFailed(Vec<Difference>),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_differences(differences: &[Difference]) -> String {
    let mut out = String::new();
    for difference in differences {
        let _ = writeln!(out, "{difference}");
    }
    out
}

// Helper functions for common error scenarios
impl Error {
    pub fn fixture(msg: impl Into<String>) -> Self {
        Error::Fixture(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        Error::Signature(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Differences carried by an `AssertionFailed`, if that is what this is.
    pub fn differences(&self) -> Option<&[Difference]> {
        match self {
            Error::AssertionFailed(differences) => Some(differences),
            _ => None,
        }
    }
}
