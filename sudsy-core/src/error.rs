//! Error types for sudsy-core

use thiserror::Error;

/// Main error type for the sudsy-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote thought list could not be fetched
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Thought list was fetched but has the wrong shape
    #[error("content error: {0}")]
    Content(String),

    /// A picker needs at least one thought
    #[error("cannot pick from an empty thought list")]
    EmptyContent,
}

/// Result type alias for sudsy-core
pub type Result<T> = std::result::Result<T, Error>;
