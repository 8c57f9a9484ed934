//! Terminal parcel viewer (default binary).
//!
//! Starts the one-shot parcel download, then renders the animated top-down
//! view every frame until the user quits. Frames keep coming whether the
//! download is still running, finished, or failed.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parcel_grid::core::{Grid, RenderLoop};
use parcel_grid::ingest::{IngestConfig, IngestEvent, Ingestor};
use parcel_grid::input::{map_key, ViewerCommand};
use parcel_grid::term::{DisplayConfig, IngestStatusView, TerminalSurface, Viewport};

fn main() -> Result<()> {
    init_logging()?;

    let display = DisplayConfig::from_env();
    let ingest = IngestConfig::from_env();
    info!(url = %ingest.url, timeout = ?ingest.timeout, "starting parcel viewer");

    let grid = Grid::new();
    let (mut ingestor, status) = launched(Ingestor::start(ingest, grid.clone()));

    let mut surface = TerminalSurface::new(&display);
    surface.set_status(status);
    let result = surface
        .enter()
        .and_then(|()| run(&mut surface, &grid, ingestor.as_mut(), &display));

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn run(
    surface: &mut TerminalSurface,
    grid: &Grid,
    mut ingestor: Option<&mut Ingestor>,
    display: &DisplayConfig,
) -> Result<()> {
    let mut render_loop = RenderLoop::new();

    loop {
        let frame_start = Instant::now();

        if let Some(event) = ingestor.as_mut().and_then(|i| i.try_recv()) {
            surface.set_status(status_of(&event));
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        surface.set_viewport(Viewport::new(w, h));

        let snapshot = grid.snapshot();
        render_loop.frame(surface, &snapshot)?;

        // Input with timeout until the next frame is due.
        let timeout = display.frame_period.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                    Some(ViewerCommand::Quit) => {
                        info!(frames = render_loop.iteration(), "quit requested");
                        return Ok(());
                    }
                    Some(ViewerCommand::Redraw) => surface.invalidate(),
                    None => {}
                },
                Event::Resize(..) => surface.invalidate(),
                _ => {}
            }
        }
    }
}

/// Ingestion that could not even start leaves an empty grid and a failure on
/// the status line; the viewer keeps running either way.
fn launched(started: io::Result<Ingestor>) -> (Option<Ingestor>, IngestStatusView) {
    match started {
        Ok(ingestor) => (Some(ingestor), IngestStatusView::Pending),
        Err(err) => {
            error!(error = %err, "could not start ingestion");
            let status = IngestStatusView::Failed {
                message: format!("could not start ingestion: {err}"),
            };
            (None, status)
        }
    }
}

fn status_of(event: &IngestEvent) -> IngestStatusView {
    match event {
        IngestEvent::Completed(report) => IngestStatusView::Loaded {
            parcels: report.appended,
            skipped: report.skipped_count(),
        },
        IngestEvent::Failed(err) => IngestStatusView::Failed {
            message: err.to_string(),
        },
    }
}

/// Install the log subscriber.
///
/// The terminal is taken over by the viewer, so logs go to
/// `PARCEL_GRID_LOG_PATH` when set, otherwise to stderr only when stderr is
/// redirected away from the terminal.
fn init_logging() -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = env::var("PARCEL_GRID_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {path}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !io::stderr().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}
