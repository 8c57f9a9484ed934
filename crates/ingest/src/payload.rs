//! Parsing a response body into a batch of parcels.

use serde_json::Value;
use tracing::debug;

use crate::error::{PayloadError, RecordError};
use crate::record::decode_parcel;
use crate::types::Parcel;

/// A record from the payload that was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position within the `parcels` array.
    pub index: usize,
    pub error: RecordError,
}

/// Decoded payload: the parcels in payload order plus the records skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelBatch {
    pub parcels: Vec<Parcel>,
    pub skipped: Vec<SkippedRecord>,
}

/// Parse a raw body. The body must be UTF-8.
pub fn parse_body(body: &[u8]) -> Result<ParcelBatch, PayloadError> {
    parse_payload(std::str::from_utf8(body)?)
}

/// Parse `{"parcels": [ ... ]}`.
///
/// Structural problems with the envelope fail the whole payload; a malformed
/// element is skipped and recorded in [`ParcelBatch::skipped`].
pub fn parse_payload(text: &str) -> Result<ParcelBatch, PayloadError> {
    let root: Value = serde_json::from_str(text).map_err(PayloadError::NotJson)?;
    let obj = root.as_object().ok_or(PayloadError::NotAnObject)?;
    let elements = obj
        .get("parcels")
        .ok_or(PayloadError::MissingParcels)?
        .as_array()
        .ok_or(PayloadError::ParcelsNotArray)?;

    let mut batch = ParcelBatch {
        parcels: Vec::with_capacity(elements.len()),
        skipped: Vec::new(),
    };
    for (index, element) in elements.iter().enumerate() {
        match decode_parcel(element) {
            Ok(parcel) => batch.parcels.push(parcel),
            Err(error) => {
                debug!(index, %error, "skipping malformed parcel record");
                batch.skipped.push(SkippedRecord { index, error });
            }
        }
    }
    Ok(batch)
}
