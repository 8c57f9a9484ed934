//! Ingestion runtime integration.
//!
//! Bridges the synchronous frame loop with the async pipeline: the request
//! runs on a private tokio runtime, and its outcome is delivered through a
//! channel the frame loop drains without blocking.

use std::io;

use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tracing::error;

use crate::config::IngestConfig;
use crate::core::Grid;
use crate::error::IngestError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::pipeline::{ingest, IngestReport};

/// Outcome delivered to the frame loop, exactly once per started ingestion.
#[derive(Debug)]
pub enum IngestEvent {
    Completed(IngestReport),
    Failed(IngestError),
}

/// Running ingestion instance.
///
/// Dropping it shuts the runtime down and abandons a request still in flight.
pub struct Ingestor {
    _rt: Runtime,
    event_rx: mpsc::Receiver<IngestEvent>,
    finished: bool,
}

impl Ingestor {
    /// Start the single HTTP ingestion described by `config`.
    pub fn start(config: IngestConfig, grid: Grid) -> io::Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout).map_err(io::Error::other)?;
        Self::start_with(fetcher, config.url, grid)
    }

    /// Start an ingestion of `url` through an arbitrary fetcher.
    pub fn start_with<F: Fetcher>(fetcher: F, url: String, grid: Grid) -> io::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("parcel-ingest")
            .enable_all()
            .build()?;
        let (event_tx, event_rx) = mpsc::channel::<IngestEvent>(1);

        rt.spawn(async move {
            let event = match ingest(&fetcher, &url, &grid).await {
                Ok(report) => IngestEvent::Completed(report),
                Err(err) => {
                    error!(url = err.url(), status = ?err.status(), "{err}");
                    IngestEvent::Failed(err)
                }
            };
            let _ = event_tx.send(event).await;
        });

        Ok(Self {
            _rt: rt,
            event_rx,
            finished: false,
        })
    }

    /// Non-blocking poll for the outcome. Yields `Some` at most once.
    pub fn try_recv(&mut self) -> Option<IngestEvent> {
        if self.finished {
            return None;
        }
        let event = self.event_rx.try_recv().ok()?;
        self.finished = true;
        Some(event)
    }

    /// Whether the outcome has already been handed out.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
