// src/error.rs
use thiserror::Error;

use crate::config::consts::REQUEST_FAILED_MSG;

/// Anything that stops a scrape request from producing records.
/// Every variant maps to the same user-facing text; detail is for the log.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("worker stopped before replying")]
    Disconnected,
}

impl ScrapeError {
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MSG
    }
}

/// Form input that is not submitted at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is empty")]
    EmptyUrl,

    #[error("page count must be at least 1 (got {0})")]
    InvalidPages(u32),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
