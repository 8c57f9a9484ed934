//! Ingestion module - one-shot parcel download into the grid
//!
//! At startup a single GET is issued to the configured endpoint. The body is
//! expected to be a JSON object carrying a `parcels` array:
//!
//! ```text
//! {"parcels":[{"id":1,"x1":0,"y1":0,"z1":0,"x2":10,"y2":5,"z2":20}, ...]}
//! ```
//!
//! Every element that decodes cleanly is published to the
//! [`Grid`](parcel_grid_core::Grid) as one batch, in payload order. Elements
//! that fail to decode are skipped and counted. Transport failures and
//! unusable payloads leave the grid untouched. Nothing is retried.
//!
//! # Failure Taxonomy
//!
//! | Condition | Type | Effect |
//! |-----------|------|--------|
//! | connection error, timeout, non-2xx | [`IngestError::TransportFailure`] | grid untouched |
//! | body not UTF-8/JSON, no `parcels` array | [`IngestError::InvalidPayload`] | grid untouched |
//! | element missing or mistyped fields | [`RecordError`] | element skipped |
//!
//! # Environment Variables
//!
//! - `PARCEL_GRID_URL`: endpoint (default: `http://localhost:8000/test.json`)
//! - `PARCEL_GRID_TIMEOUT_MS`: optional request timeout (default: none)
//!
//! # Implementation
//!
//! - [`pipeline::ingest`] is the async fetch/parse/publish routine
//! - [`runtime::Ingestor`] runs it on a private tokio runtime and hands the
//!   outcome to the frame loop through a channel

pub mod config;
pub mod error;
pub mod fetch;
pub mod payload;
pub mod pipeline;
pub mod record;
pub mod runtime;

pub use parcel_grid_core as core;
pub use parcel_grid_types as types;

pub use config::IngestConfig;
pub use error::{FetchError, IngestError, PayloadError, RecordError};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use payload::{parse_body, parse_payload, ParcelBatch, SkippedRecord};
pub use pipeline::{ingest, IngestReport};
pub use record::decode_parcel;
pub use runtime::{IngestEvent, Ingestor};
