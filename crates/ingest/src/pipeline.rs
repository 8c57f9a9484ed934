//! One-shot fetch, parse and publish.

use tracing::{info, warn};

use crate::core::Grid;
use crate::error::IngestError;
use crate::fetch::Fetcher;
use crate::payload::{parse_body, SkippedRecord};

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub url: String,
    /// Size of the response body.
    pub bytes: usize,
    /// Parcels published to the grid.
    pub appended: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl IngestReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Fetch `url` once, decode the payload and publish the decoded parcels to
/// `grid` as a single batch.
///
/// On any error the grid is not touched and no parcel has been built. There
/// is no retry.
pub async fn ingest<F>(fetcher: &F, url: &str, grid: &Grid) -> Result<IngestReport, IngestError>
where
    F: Fetcher + ?Sized,
{
    info!(url, "fetching parcels");

    let response = fetcher
        .get(url)
        .await
        .map_err(|err| IngestError::TransportFailure {
            url: url.to_string(),
            status: None,
            reason: err.to_string(),
        })?;

    if !response.is_success() {
        return Err(IngestError::TransportFailure {
            url: url.to_string(),
            status: Some(response.status),
            reason: format!("unexpected status {}", response.status),
        });
    }

    let bytes = response.body.len();
    info!(bytes, url, "finished downloading");

    let batch = parse_body(&response.body).map_err(|source| IngestError::InvalidPayload {
        url: url.to_string(),
        source,
    })?;

    let appended = grid.append_batch(batch.parcels);
    if !batch.skipped.is_empty() {
        warn!(skipped = batch.skipped.len(), url, "skipped malformed parcel records");
    }
    info!(appended, grid = %grid, "parcels published");

    Ok(IngestReport {
        url: url.to_string(),
        bytes,
        appended,
        skipped: batch.skipped,
    })
}
