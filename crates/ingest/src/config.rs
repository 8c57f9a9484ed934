//! Ingestion configuration.

use std::env;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:8000/test.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: None,
        }
    }
}

impl IngestConfig {
    /// Create from environment variables.
    ///
    /// - `PARCEL_GRID_URL`: endpoint (default `http://localhost:8000/test.json`)
    /// - `PARCEL_GRID_TIMEOUT_MS`: optional request timeout; unset, empty,
    ///   zero or unparsable means none
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("PARCEL_GRID_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let timeout = lookup("PARCEL_GRID_TIMEOUT_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self { url, timeout }
    }
}
