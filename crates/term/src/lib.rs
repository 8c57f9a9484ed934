//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal output. Frames are
//! composited into a pixel [`Canvas`], scaled into a framebuffer of half-block
//! character cells by [`MapView`], and flushed by [`TerminalRenderer`] which
//! only rewrites cells that changed since the previous frame.
//!
//! Goals:
//! - Keep the pixel-level drawing pure and testable
//! - Present a fixed-size logical canvas on any terminal size
//! - Keep per-frame terminal output proportional to what changed

pub mod canvas;
pub mod config;
pub mod fb;
pub mod map_view;
pub mod renderer;
pub mod surface;

pub use parcel_grid_core as core;
pub use parcel_grid_types as types;

pub use canvas::Canvas;
pub use config::DisplayConfig;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use map_view::{IngestStatusView, MapView, Viewport};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
pub use surface::TerminalSurface;
