//! Thought list loading.
//!
//! A configured external list (URL or file) is preferred. Anything that goes
//! wrong while fetching or validating it falls back to the embedded list, so
//! callers always receive at least one thought.

mod fallback;

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::config::ContentConfig;
use crate::error::{Error, Result};
use crate::types::Thought;

pub use fallback::embedded_thoughts;

/// Where an external thought list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Url(String),
    Path(PathBuf),
}

impl ContentSource {
    /// Interpret a configured source string.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ContentSource::Url(trimmed.to_string())
        } else {
            ContentSource::Path(PathBuf::from(trimmed))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ContentSource::Url(url) => url.clone(),
            ContentSource::Path(path) => path.display().to_string(),
        }
    }
}

/// Which list the loader ended up using.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Loaded from the configured source
    External(String),
    /// Built-in list
    Embedded,
}

/// Result of loading thoughts.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    /// Never empty
    pub thoughts: Vec<Thought>,
    pub origin: ContentOrigin,
}

impl LoadedContent {
    fn embedded() -> Self {
        Self {
            thoughts: embedded_thoughts(),
            origin: ContentOrigin::Embedded,
        }
    }
}

/// Load thoughts, blocking on the fetch when the source is a URL.
pub fn load_thoughts(config: &ContentConfig) -> LoadedContent {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build runtime for content fetch, using embedded thoughts");
            return LoadedContent::embedded();
        }
    };

    runtime.block_on(load_thoughts_async(config))
}

/// Load thoughts from the configured source, falling back to the embedded list.
pub async fn load_thoughts_async(config: &ContentConfig) -> LoadedContent {
    let Some(raw) = config.source.as_deref() else {
        tracing::debug!("No content source configured, using embedded thoughts");
        return LoadedContent::embedded();
    };

    let source = ContentSource::parse(raw);
    match fetch_source(&source, Duration::from_secs(config.timeout_secs)).await {
        Ok(thoughts) => {
            tracing::info!(
                source = %source.describe(),
                count = thoughts.len(),
                "Loaded external thoughts"
            );
            LoadedContent {
                thoughts,
                origin: ContentOrigin::External(source.describe()),
            }
        }
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "Falling back to embedded thoughts"
            );
            LoadedContent::embedded()
        }
    }
}

async fn fetch_source(source: &ContentSource, timeout: Duration) -> Result<Vec<Thought>> {
    let body = match source {
        ContentSource::Url(url) => fetch_url(url, timeout).await?,
        ContentSource::Path(path) => std::fs::read_to_string(path)?,
    };
    parse_thoughts(&body)
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Fetch(format!("failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|e| Error::Fetch(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!("unexpected status {}", status)));
    }

    response
        .text()
        .await
        .map_err(|e| Error::Fetch(format!("failed to read response body: {}", e)))
}

/// Validate a JSON document as a thought list.
///
/// The document must be a non-empty array of thought records. Later records
/// reusing an earlier id are dropped.
pub fn parse_thoughts(body: &str) -> Result<Vec<Thought>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(Error::Content("expected a JSON array of thoughts".to_string()));
    }

    let thoughts: Vec<Thought> = serde_json::from_value(value)?;

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(thoughts.len());
    for thought in thoughts {
        if seen.insert(thought.id.clone()) {
            unique.push(thought);
        } else {
            tracing::warn!(id = %thought.id, "Skipping thought with duplicate id");
        }
    }

    if unique.is_empty() {
        return Err(Error::Content("thought list is empty".to_string()));
    }
    Ok(unique)
}
