//! Core module - parcel store and per-frame rendering, no I/O
//!
//! This crate holds the two halves that race against each other at runtime:
//! the [`Grid`] that ingestion publishes into, and the [`RenderLoop`] that
//! reads it every frame. Neither touches the network or the terminal, which
//! keeps both deterministic and testable.
//!
//! # Module Structure
//!
//! - [`grid`]: append-only parcel store published as immutable snapshots
//! - [`camera`]: time-based camera offset and parcel-to-screen projection
//! - [`surface`]: the drawing capability a frame is rendered onto
//! - [`render_loop`]: the frame driver state (`iteration`) and the frame routine
//!
//! # Example
//!
//! ```
//! use parcel_grid_core::{Grid, RecordingSurface, RenderLoop};
//! use parcel_grid_types::Parcel;
//!
//! let grid = Grid::new();
//! grid.append_batch(vec![Parcel::new(Some(1), [0, 0, 0], [10, 5, 20])]);
//!
//! let mut surface = RecordingSurface::default();
//! let mut render_loop = RenderLoop::new();
//! let stats = render_loop.frame(&mut surface, &grid.snapshot()).unwrap();
//!
//! assert_eq!(stats.drawn, 1);
//! assert_eq!(render_loop.iteration(), 1);
//! ```

pub mod camera;
pub mod grid;
pub mod render_loop;
pub mod surface;

pub use parcel_grid_types as types;

pub use camera::{camera_offset, project, CameraOffset, ScreenRect};
pub use grid::{Grid, GridSnapshot};
pub use render_loop::{FrameStats, RenderLoop};
pub use surface::{DrawCommand, RecordingSurface, Surface};
