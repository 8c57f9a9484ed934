//! Ingestion error types.

use thiserror::Error;

/// Why a single parcel record could not be decoded.
///
/// A malformed record only costs that record; the rest of the batch is still
/// ingested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not an integer")]
    NotAnInteger { field: &'static str },

    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },
}

/// Why a response body could not be read as a parcel payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("body is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("body is not JSON: {0}")]
    NotJson(serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("missing `parcels` collection")]
    MissingParcels,

    #[error("`parcels` is not an array")]
    ParcelsNotArray,
}

/// Failure reported by a [`crate::Fetcher`] before any response was available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),
}

/// Terminal outcome of a failed ingestion. The grid is left untouched.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Connection error, timeout, or non-success HTTP status.
    #[error("downloading {url} failed: {}", describe_transport(.status, .reason))]
    TransportFailure {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The body arrived but is not a parcel payload.
    #[error("invalid payload from {url}: {source}")]
    InvalidPayload {
        url: String,
        #[source]
        source: PayloadError,
    },
}

impl IngestError {
    pub fn url(&self) -> &str {
        match self {
            IngestError::TransportFailure { url, .. } | IngestError::InvalidPayload { url, .. } => {
                url
            }
        }
    }

    /// HTTP status, when the failure came with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            IngestError::TransportFailure { status, .. } => *status,
            IngestError::InvalidPayload { .. } => None,
        }
    }
}

fn describe_transport(status: &Option<u16>, reason: &str) -> String {
    match *status {
        Some(code) => format!("HTTP failure status code: {code}"),
        None => reason.to_string(),
    }
}
